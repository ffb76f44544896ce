use serde::{Deserialize, Serialize};

use calcorder_core::{DomainError, DomainResult, PropertySet};

/// Which table of the catalog a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BurgerSize,
    BurgerFilling,
    DrinkType,
    SaladType,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::BurgerSize,
        Category::BurgerFilling,
        Category::DrinkType,
        Category::SaladType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::BurgerSize => "burger size",
            Category::BurgerFilling => "burger filling",
            Category::DrinkType => "drink type",
            Category::SaladType => "salad type",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, immutable catalog choice (e.g. the "big" burger size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    key: &'static str,
    energy: f64,
    price: f64,
}

impl Preset {
    pub const fn new(key: &'static str, energy: f64, price: f64) -> Self {
        Self { key, energy, price }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// A fresh property set for this preset, tagged with the preset key.
    pub fn props(&self) -> PropertySet {
        PropertySet::new(self.energy, self.price).with_id(self.key)
    }
}

const BURGER_SIZES: &[Preset] = &[
    Preset::new("big", 40.0, 100.0),
    Preset::new("small", 20.0, 50.0),
];

const BURGER_FILLINGS: &[Preset] = &[
    Preset::new("cheese", 20.0, 10.0),
    Preset::new("potato", 10.0, 15.0),
    Preset::new("salad", 5.0, 20.0),
];

const DRINK_TYPES: &[Preset] = &[
    Preset::new("coffee", 20.0, 80.0),
    Preset::new("cola", 40.0, 50.0),
];

// Per 100 g.
const SALAD_TYPES: &[Preset] = &[
    Preset::new("caesar", 20.0, 100.0),
    Preset::new("olivier", 80.0, 50.0),
];

static STANDARD: Catalog = Catalog::new(BURGER_SIZES, BURGER_FILLINGS, DRINK_TYPES, SALAD_TYPES);

/// Read-only mapping from category + variant key to a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    burger_sizes: &'static [Preset],
    burger_fillings: &'static [Preset],
    drink_types: &'static [Preset],
    salad_types: &'static [Preset],
}

impl Catalog {
    /// Build a catalog from static tables supplied by the host.
    pub const fn new(
        burger_sizes: &'static [Preset],
        burger_fillings: &'static [Preset],
        drink_types: &'static [Preset],
        salad_types: &'static [Preset],
    ) -> Self {
        Self {
            burger_sizes,
            burger_fillings,
            drink_types,
            salad_types,
        }
    }

    /// The standard menu, fixed for the lifetime of the process.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub fn table(&self, category: Category) -> &'static [Preset] {
        match category {
            Category::BurgerSize => self.burger_sizes,
            Category::BurgerFilling => self.burger_fillings,
            Category::DrinkType => self.drink_types,
            Category::SaladType => self.salad_types,
        }
    }

    pub fn lookup(&self, category: Category, key: &str) -> DomainResult<&'static Preset> {
        self.table(category)
            .iter()
            .find(|preset| preset.key == key)
            .ok_or_else(|| DomainError::unknown_variant(category.as_str(), key))
    }

    /// Variant keys available in a category, in table order.
    pub fn keys(&self, category: Category) -> impl Iterator<Item = &'static str> {
        self.table(category).iter().map(Preset::key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        STANDARD
    }
}
