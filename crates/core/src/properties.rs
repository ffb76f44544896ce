//! Numeric properties of an order, a product, or a component of a product.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Number of fractional digits kept after every arithmetic operation.
pub const PRECISION_DIGITS: i32 = 8;

fn round(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION_DIGITS);
    (value * factor).round() / factor
}

/// Energy and price of something sold, plus an optional identity tag.
///
/// Arithmetic is in place and chainable. Every result is rounded to
/// [`PRECISION_DIGITS`] fractional digits so repeated add/subtract cycles do
/// not drift. The `id` tag is never touched by arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Energy, in calories.
    #[serde(default)]
    energy: f64,
    /// Price, in tugriks.
    #[serde(default)]
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl ValueObject for PropertySet {}

impl PropertySet {
    pub fn new(energy: f64, price: f64) -> Self {
        Self {
            energy,
            price,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Independent snapshot of this set.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn add(&mut self, other: &PropertySet) -> &mut Self {
        self.energy = round(self.energy + other.energy);
        self.price = round(self.price + other.price);
        self
    }

    pub fn subtract(&mut self, other: &PropertySet) -> &mut Self {
        self.energy = round(self.energy - other.energy);
        self.price = round(self.price - other.price);
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.energy = round(self.energy * factor);
        self.price = round(self.price * factor);
        self
    }

    /// Field-wise comparison of the numeric values within `tolerance`.
    /// The `id` tag is ignored.
    pub fn approx_eq(&self, other: &PropertySet, tolerance: f64) -> bool {
        (self.energy - other.energy).abs() <= tolerance
            && (self.price - other.price).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn add_sums_fields_and_keeps_id() {
        let mut a = PropertySet::new(40.0, 100.0).with_id("big");
        a.add(&PropertySet::new(20.0, 10.0).with_id("cheese"));

        assert_eq!(a.energy(), 60.0);
        assert_eq!(a.price(), 110.0);
        assert_eq!(a.id(), Some("big"));
    }

    #[test]
    fn operations_chain() {
        let mut a = PropertySet::new(10.0, 20.0);
        a.add(&PropertySet::new(5.0, 5.0))
            .scale(2.0)
            .subtract(&PropertySet::new(10.0, 10.0));

        assert_eq!(a, PropertySet::new(20.0, 40.0));
    }

    #[test]
    fn rounding_bounds_float_drift() {
        let mut a = PropertySet::new(0.1, 0.2);
        a.add(&PropertySet::new(0.2, 0.1));

        assert_eq!(a.energy(), 0.3);
        assert_eq!(a.price(), 0.3);
    }

    #[test]
    fn scale_leaves_id_untouched() {
        let mut a = PropertySet::new(20.0, 100.0).with_id("caesar");
        a.scale(0.5);

        assert_eq!(a.energy(), 10.0);
        assert_eq!(a.price(), 50.0);
        assert_eq!(a.id(), Some("caesar"));
    }

    #[test]
    fn copy_is_independent() {
        let original = PropertySet::new(1.0, 2.0);
        let mut snapshot = original.copy();
        snapshot.add(&PropertySet::new(1.0, 1.0));

        assert_eq!(original, PropertySet::new(1.0, 2.0));
        assert_eq!(snapshot, PropertySet::new(2.0, 3.0));
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let props: PropertySet = serde_json::from_str(r#"{"price": 50}"#).unwrap();

        assert_eq!(props.energy(), 0.0);
        assert_eq!(props.price(), 50.0);
        assert_eq!(props.id(), None);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn props() -> impl Strategy<Value = PropertySet> {
            // Whole cents, the granularity prices and energies come in.
            (-100_000_000i64..100_000_000, -100_000_000i64..100_000_000)
                .prop_map(|(e, p)| PropertySet::new(e as f64 / 100.0, p as f64 / 100.0))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: adding then subtracting the same set is a no-op (within tolerance).
            #[test]
            fn add_then_subtract_restores(a in props(), b in props(), tag in "[a-z]{1,8}") {
                let a = a.with_id(tag.clone());
                let mut result = a.copy();
                result.add(&b).subtract(&b);

                prop_assert!(result.approx_eq(&a, TOLERANCE));
                prop_assert_eq!(result.id(), Some(tag.as_str()));
            }

            /// Property: scale distributes over add (within tolerance).
            #[test]
            fn scale_distributes_over_add(a in props(), b in props(), k in -10f64..10f64) {
                let mut left = a.copy();
                left.add(&b).scale(k);

                let mut right = a.copy();
                right.scale(k);
                let mut scaled_b = b.copy();
                scaled_b.scale(k);
                right.add(&scaled_b);

                // Each side rounds up to three times; allow for that.
                prop_assert!(left.approx_eq(&right, 4.0 * TOLERANCE));
            }
        }
    }
}
