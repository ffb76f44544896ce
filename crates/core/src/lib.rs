//! `calcorder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog,
//! products and sales crates (no IO, no presentation).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod notice;
pub mod properties;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use notice::{Notice, WeightSource};
pub use properties::{PRECISION_DIGITS, PropertySet};
pub use value_object::ValueObject;
