//! Fee Model Schema Documentation
//!
//! Self-documenting description of every fee-model variant, exported by the
//! CLI command `rails fee-schema`. Worked examples are computed with the
//! real engine so the documentation cannot drift from the arithmetic.

use super::engine::compute_fee;
use super::model::FeeModel;
use crate::format::format_currency;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single field of a fee-model variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeField {
    /// Field name as authored in JSON (camelCase)
    pub name: String,
    pub description: String,
    /// Value used when the field is omitted
    pub default_when_missing: String,
}

/// Example calculation for a fee model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeExample {
    pub amount: f64,
    pub international: bool,
    pub model: FeeModel,
    pub result: f64,
    pub result_display: String,
}

/// Documentation for one fee-model variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeModelElement {
    /// `type` tag, e.g. "percent_plus_fixed"
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Plain-text formula, before the non-negative clamp
    pub formula: String,
    pub fields: Vec<FeeField>,
    pub typical_rails: Vec<String>,
    pub example: FeeExample,
}

/// Complete fee schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSchemaDoc {
    pub version: String,
    pub notes: Vec<String>,
    pub fee_models: Vec<FeeModelElement>,
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

fn field(name: &str, description: &str, default_when_missing: &str) -> FeeField {
    FeeField {
        name: name.to_string(),
        description: description.to_string(),
        default_when_missing: default_when_missing.to_string(),
    }
}

fn example(amount: f64, international: bool, model: FeeModel) -> FeeExample {
    let result = compute_fee(amount, &model, international);
    FeeExample {
        amount,
        international,
        model,
        result,
        result_display: format_currency(result, "USD"),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Documentation for every recognised fee-model variant
pub fn fee_model_docs() -> Vec<FeeModelElement> {
    vec![
        FeeModelElement {
            name: "percent_plus_fixed".to_string(),
            display_name: "Percentage plus fixed".to_string(),
            description: "A share of the amount plus a fixed per-transaction charge.".to_string(),
            formula: "amount * percent + fixed".to_string(),
            fields: vec![
                field("percent", "Fraction of the amount (0.019 = 1.9%)", "0"),
                field("fixed", "Fixed charge per transaction", "0"),
            ],
            typical_rails: strings(&["Card network", "Online checkout"]),
            example: example(
                100.0,
                false,
                FeeModel::PercentPlusFixed {
                    percent: 0.029,
                    fixed: 0.30,
                },
            ),
        },
        FeeModelElement {
            name: "percent_plus_fixed_with_cap".to_string(),
            display_name: "Capped percentage plus fixed".to_string(),
            description: "Percentage plus fixed, never exceeding a ceiling.".to_string(),
            formula: "min(amount * percent + fixed, cap)".to_string(),
            fields: vec![
                field("percent", "Fraction of the amount", "0"),
                field("fixed", "Fixed charge per transaction", "0"),
                field("cap", "Maximum fee per transaction", "0"),
            ],
            typical_rails: strings(&["Debit network", "Interac debit"]),
            example: example(
                100.0,
                false,
                FeeModel::PercentPlusFixedWithCap {
                    percent: 0.029,
                    fixed: 0.30,
                    cap: 1.80,
                },
            ),
        },
        FeeModelElement {
            name: "flat".to_string(),
            display_name: "Flat fee".to_string(),
            description: "The same fee regardless of amount.".to_string(),
            formula: "flat".to_string(),
            fields: vec![field("flat", "Fee per transaction", "0")],
            typical_rails: strings(&["E-transfer", "ACH"]),
            example: example(250.0, false, FeeModel::Flat { flat: 1.50 }),
        },
        FeeModelElement {
            name: "flat_with_international".to_string(),
            display_name: "Flat fee, domestic or international".to_string(),
            description: "Separate flat fees for domestic and cross-border payments. \
                A scenario using this model is always treated as international."
                .to_string(),
            formula: "international ? flatInternational : flatDomestic".to_string(),
            fields: vec![
                field("flatDomestic", "Fee for domestic payments", "0"),
                field("flatInternational", "Fee for cross-border payments", "0"),
            ],
            typical_rails: strings(&["Remittance service"]),
            example: example(
                500.0,
                true,
                FeeModel::FlatWithInternational {
                    flat_domestic: 30.0,
                    flat_international: 50.0,
                },
            ),
        },
        FeeModelElement {
            name: "wire".to_string(),
            display_name: "Wire transfer".to_string(),
            description: "Flat wire fee, multiplied for cross-border wires when a \
                multiplier is configured."
                .to_string(),
            formula: "international ? flat * internationalMultiplier : flat".to_string(),
            fields: vec![
                field("flat", "Domestic wire fee", "0"),
                field(
                    "internationalMultiplier",
                    "Scale factor for cross-border wires",
                    "none (no multiplier applied)",
                ),
            ],
            typical_rails: strings(&["Fedwire", "SWIFT"]),
            example: example(
                5000.0,
                true,
                FeeModel::Wire {
                    flat: 30.0,
                    international_multiplier: Some(1.5),
                },
            ),
        },
        FeeModelElement {
            name: "free".to_string(),
            display_name: "Free".to_string(),
            description: "No fee to the sender.".to_string(),
            formula: "0".to_string(),
            fields: Vec::new(),
            typical_rails: strings(&["RTP", "Zelle"]),
            example: example(100.0, false, FeeModel::Free),
        },
    ]
}

/// Complete schema, including the cross-cutting rules
pub fn fee_schema() -> FeeSchemaDoc {
    FeeSchemaDoc {
        version: "1.0".to_string(),
        notes: strings(&[
            "Fees are clamped to be non-negative.",
            "Percent values are fractions, not percentages.",
            "Unrecognised fee model types yield a fee of 0.",
            "Monthly fees = fee per transaction * monthly volume, unrounded.",
        ]),
        fee_models: fee_model_docs(),
    }
}

/// Fee schema as pretty-printed JSON
pub fn get_fee_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&fee_schema())
}
