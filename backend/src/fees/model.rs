//! Fee Model Definitions
//!
//! A fee model is authored as a JSON object with a `type` discriminant and
//! the numeric fields relevant to that variant:
//!
//! ```json
//! { "type": "percent_plus_fixed_with_cap", "percent": 0.029, "fixed": 0.30, "cap": 1.80 }
//! ```
//!
//! Percent values are fractions (0.019 = 1.9%), never percentages.
//! Every numeric field may be omitted or `null` and then reads as 0, except
//! `internationalMultiplier`, whose absence means no multiplier is applied.

use serde::{Deserialize, Deserializer, Serialize};

/// Rule set determining what a single transaction costs on a rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeeModel {
    /// `amount * percent + fixed`
    PercentPlusFixed {
        #[serde(default, deserialize_with = "zero_if_null")]
        percent: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        fixed: f64,
    },

    /// `min(amount * percent + fixed, cap)`
    PercentPlusFixedWithCap {
        #[serde(default, deserialize_with = "zero_if_null")]
        percent: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        fixed: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        cap: f64,
    },

    /// Same fee for every transaction
    Flat {
        #[serde(default, deserialize_with = "zero_if_null")]
        flat: f64,
    },

    /// Separate flat fees for domestic and cross-border transfers
    #[serde(rename_all = "camelCase")]
    FlatWithInternational {
        #[serde(default, deserialize_with = "zero_if_null")]
        flat_domestic: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        flat_international: f64,
    },

    /// Flat wire fee, scaled for cross-border wires
    #[serde(rename_all = "camelCase")]
    Wire {
        #[serde(default, deserialize_with = "zero_if_null")]
        flat: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        international_multiplier: Option<f64>,
    },

    /// No fee to the sender
    Free,

    /// Any `type` tag this build does not recognise. Always costs 0.
    #[serde(other)]
    Unknown,
}

/// Numeric fee fields read `null` the same as an omitted key
fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl FeeModel {
    /// The `type` tag as it appears in authored data
    pub fn type_name(&self) -> &'static str {
        match self {
            FeeModel::PercentPlusFixed { .. } => "percent_plus_fixed",
            FeeModel::PercentPlusFixedWithCap { .. } => "percent_plus_fixed_with_cap",
            FeeModel::Flat { .. } => "flat",
            FeeModel::FlatWithInternational { .. } => "flat_with_international",
            FeeModel::Wire { .. } => "wire",
            FeeModel::Free => "free",
            FeeModel::Unknown => "unknown",
        }
    }

    /// Whether the model itself implies a cross-border rail
    pub fn implies_international(&self) -> bool {
        matches!(self, FeeModel::FlatWithInternational { .. })
    }

    /// All numeric parameters carried by this model, by field name
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match self {
            FeeModel::PercentPlusFixed { percent, fixed } => {
                vec![("percent", *percent), ("fixed", *fixed)]
            }
            FeeModel::PercentPlusFixedWithCap { percent, fixed, cap } => {
                vec![("percent", *percent), ("fixed", *fixed), ("cap", *cap)]
            }
            FeeModel::Flat { flat } => vec![("flat", *flat)],
            FeeModel::FlatWithInternational {
                flat_domestic,
                flat_international,
            } => vec![
                ("flatDomestic", *flat_domestic),
                ("flatInternational", *flat_international),
            ],
            FeeModel::Wire {
                flat,
                international_multiplier,
            } => {
                let mut params = vec![("flat", *flat)];
                if let Some(multiplier) = international_multiplier {
                    params.push(("internationalMultiplier", *multiplier));
                }
                params
            }
            FeeModel::Free | FeeModel::Unknown => Vec::new(),
        }
    }
}
