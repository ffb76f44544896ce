use calcorder_catalog::{Catalog, Category};
use calcorder_core::{DomainResult, PropertySet};

use crate::product::MenuItem;

/// A drink, such as a cup of coffee or a glass of cola.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    kind: &'static str,
    total: PropertySet,
}

impl Drink {
    pub fn new(catalog: &Catalog, kind: &str) -> DomainResult<Self> {
        let preset = catalog.lookup(Category::DrinkType, kind)?;

        let mut total = PropertySet::default();
        total.add(&preset.props());

        Ok(Self {
            kind: preset.key(),
            total,
        })
    }

    /// Drink from the standard catalog.
    pub fn standard(kind: &str) -> DomainResult<Self> {
        Self::new(Catalog::standard(), kind)
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl MenuItem for Drink {
    fn total(&self) -> &PropertySet {
        &self.total
    }

    fn kind_name(&self) -> &'static str {
        "drink"
    }
}

impl core::fmt::Display for Drink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind)
    }
}
