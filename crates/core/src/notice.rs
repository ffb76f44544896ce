//! Recoverable, non-error conditions.
//!
//! These never surface as `Err`; they are reported through `tracing` so a
//! presentation or logging layer can pick them up.

use serde::{Deserialize, Serialize};

/// How a salad ended up with its current weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSource {
    /// The caller supplied a valid weight.
    Given,
    /// No weight was supplied; the default was assumed.
    Missing,
    /// The supplied weight was rejected; the default was assumed.
    Invalid,
}

/// A condition the domain recovered from on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A salad was created without a weight.
    WeightNotChosen { default_grams: f64 },
    /// A salad was created with a negative or non-finite weight.
    WeightInvalid { given: f64, default_grams: f64 },
    /// A delete request matched no line of the order.
    LineNotFound { target: String, len: usize },
}

impl Notice {
    /// Report the notice: `warn` for rejected input, `info` otherwise.
    pub fn emit(&self) {
        match self {
            Notice::WeightNotChosen { default_grams } => {
                tracing::info!(default_grams, "{self}");
            }
            Notice::WeightInvalid {
                given,
                default_grams,
            } => {
                tracing::warn!(given, default_grams, "{self}");
            }
            Notice::LineNotFound { target, len } => {
                tracing::info!(line = %target, len, "{self}");
            }
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::WeightNotChosen { default_grams } => {
                write!(f, "the salad weight is not chosen, assuming {default_grams}g")
            }
            Notice::WeightInvalid { default_grams, .. } => {
                write!(f, "the salad weight is invalid, assuming {default_grams}g")
            }
            Notice::LineNotFound { target, len } => {
                write!(f, "no order line matches {target} (order has {len} lines)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CapturedLogs;

    #[test]
    fn weight_notices_mention_default() {
        let missing = Notice::WeightNotChosen {
            default_grams: 100.0,
        };
        let invalid = Notice::WeightInvalid {
            given: -5.0,
            default_grams: 100.0,
        };
        assert_eq!(
            missing.to_string(),
            "the salad weight is not chosen, assuming 100g"
        );
        assert_eq!(
            invalid.to_string(),
            "the salad weight is invalid, assuming 100g"
        );
    }

    #[test]
    fn emit_without_subscriber_is_harmless() {
        Notice::LineNotFound {
            target: "position 7".to_string(),
            len: 2,
        }
        .emit();
    }

    #[test]
    fn emit_logs_each_notice_at_its_level() {
        let ((), logs) = CapturedLogs::capture(|| {
            Notice::WeightNotChosen {
                default_grams: 100.0,
            }
            .emit();
            Notice::WeightInvalid {
                given: -5.0,
                default_grams: 100.0,
            }
            .emit();
            Notice::LineNotFound {
                target: "position 7".to_string(),
                len: 2,
            }
            .emit();
        });

        assert_eq!(logs.lines().len(), 3);
        assert_eq!(
            logs.matching("INFO", "the salad weight is not chosen, assuming 100g")
                .len(),
            1
        );
        assert_eq!(
            logs.matching("WARN", "the salad weight is invalid, assuming 100g")
                .len(),
            1
        );
        assert_eq!(
            logs.matching("INFO", "no order line matches position 7 (order has 2 lines)")
                .len(),
            1
        );
    }

    #[test]
    fn weight_source_serializes_lowercase() {
        let json = serde_json::to_string(&WeightSource::Missing).unwrap();
        assert_eq!(json, "\"missing\"");
    }
}
