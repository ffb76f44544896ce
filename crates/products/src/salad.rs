use calcorder_catalog::{Catalog, Category, Preset};
use calcorder_core::{DomainError, DomainResult, Notice, PropertySet, WeightSource};

use crate::product::MenuItem;

/// Weight the salad presets are priced for, in grams.
pub const DEFAULT_SALAD_WEIGHT: f64 = 100.0;

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// A salad, such as a Caesar or an Olivier, sold by weight.
///
/// The total scales linearly with the weight relative to
/// [`DEFAULT_SALAD_WEIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct Salad {
    preset: Preset,
    weight: f64,
    weight_source: WeightSource,
    total: PropertySet,
}

impl Salad {
    /// A missing or invalid weight is not an error: the salad keeps the
    /// default weight and a notice is emitted.
    pub fn new(catalog: &Catalog, kind: &str, weight: Option<f64>) -> DomainResult<Self> {
        let preset = *catalog.lookup(Category::SaladType, kind)?;

        let mut salad = Self {
            preset,
            weight: DEFAULT_SALAD_WEIGHT,
            weight_source: WeightSource::Given,
            total: Self::base_total(&preset),
        };

        match weight {
            Some(weight) if is_valid_weight(weight) => {
                salad.rescale(weight)?;
            }
            Some(given) => {
                Notice::WeightInvalid {
                    given,
                    default_grams: DEFAULT_SALAD_WEIGHT,
                }
                .emit();
                salad.weight_source = WeightSource::Invalid;
            }
            None => {
                Notice::WeightNotChosen {
                    default_grams: DEFAULT_SALAD_WEIGHT,
                }
                .emit();
                salad.weight_source = WeightSource::Missing;
            }
        }

        Ok(salad)
    }

    /// Salad from the standard catalog.
    pub fn standard(kind: &str, weight: Option<f64>) -> DomainResult<Self> {
        Self::new(Catalog::standard(), kind, weight)
    }

    fn base_total(preset: &Preset) -> PropertySet {
        let mut total = PropertySet::default();
        total.add(&preset.props());
        total
    }

    pub fn kind(&self) -> &'static str {
        self.preset.key()
    }

    /// Weight in grams.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn weight_source(&self) -> WeightSource {
        self.weight_source
    }

    /// Change the weight, scaling the total by `new_weight / weight()`.
    ///
    /// The total always equals the preset scaled by
    /// `weight / DEFAULT_SALAD_WEIGHT`, however many rescales came before.
    ///
    /// Returns the previous weight. Negative and non-finite weights are
    /// rejected and leave the salad untouched.
    pub fn rescale(&mut self, new_weight: f64) -> DomainResult<f64> {
        if !is_valid_weight(new_weight) {
            return Err(DomainError::invalid_weight(new_weight));
        }

        // Same multiplier as `new_weight / previous` applied to the current
        // total, but starting from the preset so rounding never compounds.
        let mut total = Self::base_total(&self.preset);
        total.scale(new_weight / DEFAULT_SALAD_WEIGHT);

        let previous = self.weight;
        self.total = total;
        self.weight = new_weight;
        self.weight_source = WeightSource::Given;
        Ok(previous)
    }
}

impl MenuItem for Salad {
    fn total(&self) -> &PropertySet {
        &self.total
    }

    fn kind_name(&self) -> &'static str {
        "salad"
    }
}

impl core::fmt::Display for Salad {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} salad ({} g)", self.kind(), self.weight)
    }
}
