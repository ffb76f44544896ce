//! Menu catalog: the fixed presets products are composed from.
//!
//! Tables are `const` data, built once at compile time and never mutated.

pub mod catalog;

pub use catalog::{Catalog, Category, Preset};
