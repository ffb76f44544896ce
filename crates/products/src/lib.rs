//! Products sold at the counter.
//!
//! Every product composes one or more catalog presets into its own
//! [`PropertySet`](calcorder_core::PropertySet) at construction time.

pub mod burger;
pub mod drink;
pub mod product;
pub mod salad;

pub use burger::Burger;
pub use drink::Drink;
pub use product::{MenuItem, Product};
pub use salad::{DEFAULT_SALAD_WEIGHT, Salad};
