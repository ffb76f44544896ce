use calcorder_catalog::{Catalog, Category};
use calcorder_core::{DomainResult, PropertySet};

use crate::product::MenuItem;

/// A burger of some size with one filling.
#[derive(Debug, Clone, PartialEq)]
pub struct Burger {
    size: &'static str,
    filling: &'static str,
    total: PropertySet,
}

impl Burger {
    pub fn new(catalog: &Catalog, size: &str, filling: &str) -> DomainResult<Self> {
        let size = catalog.lookup(Category::BurgerSize, size)?;
        let filling = catalog.lookup(Category::BurgerFilling, filling)?;

        let mut total = PropertySet::default();
        total.add(&size.props()).add(&filling.props());

        Ok(Self {
            size: size.key(),
            filling: filling.key(),
            total,
        })
    }

    /// Burger from the standard catalog.
    pub fn standard(size: &str, filling: &str) -> DomainResult<Self> {
        Self::new(Catalog::standard(), size, filling)
    }

    pub fn size(&self) -> &'static str {
        self.size
    }

    pub fn filling(&self) -> &'static str {
        self.filling
    }
}

impl MenuItem for Burger {
    fn total(&self) -> &PropertySet {
        &self.total
    }

    fn kind_name(&self) -> &'static str {
        "burger"
    }
}

impl core::fmt::Display for Burger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} burger with {}", self.size, self.filling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcorder_core::DomainError;

    #[test]
    fn big_cheese_burger_sums_size_and_filling() {
        let burger = Burger::standard("big", "cheese").unwrap();

        assert_eq!(burger.energy(), 60.0);
        assert_eq!(burger.price(), 110.0);
        assert_eq!(burger.size(), "big");
        assert_eq!(burger.filling(), "cheese");
    }

    #[test]
    fn small_salad_burger() {
        let burger = Burger::standard("small", "salad").unwrap();

        assert_eq!(burger.energy(), 25.0);
        assert_eq!(burger.price(), 70.0);
    }

    #[test]
    fn unknown_size_is_rejected() {
        let err = Burger::standard("huge", "cheese").unwrap_err();
        assert_eq!(err, DomainError::unknown_variant("burger size", "huge"));
    }

    #[test]
    fn unknown_filling_is_rejected() {
        let err = Burger::standard("big", "bacon").unwrap_err();
        assert_eq!(err, DomainError::unknown_variant("burger filling", "bacon"));
    }

    #[test]
    fn props_is_a_detached_copy() {
        let burger = Burger::standard("big", "potato").unwrap();
        let mut props = burger.props();
        props.scale(10.0);

        assert_eq!(burger.energy(), 50.0);
        assert_eq!(burger.price(), 115.0);
    }

    #[test]
    fn display_names_size_and_filling() {
        let burger = Burger::standard("small", "potato").unwrap();
        assert_eq!(burger.to_string(), "small burger with potato");
    }
}
