use calcorder_core::PropertySet;

use crate::{Burger, Drink, Salad};

/// Anything sold at the counter: exposes its composed total.
pub trait MenuItem {
    /// The owned total. Only the product itself may change it.
    fn total(&self) -> &PropertySet;

    /// Short lowercase name of the product kind ("burger", "drink", ...).
    fn kind_name(&self) -> &'static str;

    /// Energy, in calories.
    fn energy(&self) -> f64 {
        self.total().energy()
    }

    /// Price, in tugriks.
    fn price(&self) -> f64 {
        self.total().price()
    }

    /// A detached copy of the total.
    fn props(&self) -> PropertySet {
        self.total().copy()
    }
}

/// One of the products an order can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Burger(Burger),
    Drink(Drink),
    Salad(Salad),
}

impl Product {
    fn item(&self) -> &dyn MenuItem {
        match self {
            Product::Burger(burger) => burger,
            Product::Drink(drink) => drink,
            Product::Salad(salad) => salad,
        }
    }

    pub fn as_burger(&self) -> Option<&Burger> {
        match self {
            Product::Burger(burger) => Some(burger),
            _ => None,
        }
    }

    pub fn as_drink(&self) -> Option<&Drink> {
        match self {
            Product::Drink(drink) => Some(drink),
            _ => None,
        }
    }

    pub fn as_salad(&self) -> Option<&Salad> {
        match self {
            Product::Salad(salad) => Some(salad),
            _ => None,
        }
    }
}

impl MenuItem for Product {
    fn total(&self) -> &PropertySet {
        self.item().total()
    }

    fn kind_name(&self) -> &'static str {
        self.item().kind_name()
    }
}

impl From<Burger> for Product {
    fn from(value: Burger) -> Self {
        Product::Burger(value)
    }
}

impl From<Drink> for Product {
    fn from(value: Drink) -> Self {
        Product::Drink(value)
    }
}

impl From<Salad> for Product {
    fn from(value: Salad) -> Self {
        Product::Salad(value)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Product::Burger(burger) => core::fmt::Display::fmt(burger, f),
            Product::Drink(drink) => core::fmt::Display::fmt(drink, f),
            Product::Salad(salad) => core::fmt::Display::fmt(salad, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_delegates_to_variant() {
        let product = Product::from(Burger::standard("big", "cheese").unwrap());

        assert_eq!(product.kind_name(), "burger");
        assert_eq!(product.energy(), 60.0);
        assert_eq!(product.price(), 110.0);
        assert_eq!(product.to_string(), "big burger with cheese");
        assert!(product.as_burger().is_some());
        assert!(product.as_salad().is_none());
    }

    #[test]
    fn variant_kind_names() {
        let drink = Product::from(Drink::standard("coffee").unwrap());
        let salad = Product::from(Salad::standard("olivier", Some(50.0)).unwrap());

        assert_eq!(drink.kind_name(), "drink");
        assert_eq!(salad.kind_name(), "salad");
        assert_eq!(salad.as_salad().map(Salad::weight), Some(50.0));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: rescaling a salad away and back restores the preset total.
            #[test]
            fn salad_rescale_round_trip(
                kind in prop::sample::select(vec!["caesar", "olivier"]),
                grams in 1u32..2_000
            ) {
                let mut salad = Salad::standard(kind, None).unwrap();
                let original = salad.props();

                salad.rescale(f64::from(grams)).unwrap();
                salad.rescale(100.0).unwrap();

                prop_assert!(salad.total().approx_eq(&original, 1e-8));
            }

            /// Property: salad totals are linear in weight.
            #[test]
            fn salad_total_is_linear_in_weight(grams in 0u32..2_000) {
                let salad = Salad::standard("olivier", Some(f64::from(grams))).unwrap();
                let expected = PropertySet::new(0.8 * f64::from(grams), 0.5 * f64::from(grams));

                prop_assert!(salad.total().approx_eq(&expected, 1e-8));
            }
        }
    }
}
