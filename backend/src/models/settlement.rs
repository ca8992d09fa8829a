//! Settlement timing configuration
//!
//! Authored scenario data describes settlement time either as a number of
//! days (`2`, `0.5`) or as a free-text label (`"T+1"`, `"Seconds"`). Both
//! shapes are carried through to the display layer untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A settlement time as authored: a day count or a label
///
/// No conversion between the two forms is ever performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettlementTime {
    /// Number of days until funds are final
    Days(f64),
    /// Human-authored label, rendered verbatim
    Label(String),
}

impl SettlementTime {
    /// Whether the value counts as set.
    ///
    /// A zero day count or an empty label is treated the same as an absent
    /// field, so `internationalDays: 0` does not mark a scenario international.
    pub fn is_present(&self) -> bool {
        match self {
            SettlementTime::Days(days) => *days != 0.0 && !days.is_nan(),
            SettlementTime::Label(label) => !label.is_empty(),
        }
    }

    /// Day count, if this is a numeric value
    pub fn as_days(&self) -> Option<f64> {
        match self {
            SettlementTime::Days(days) => Some(*days),
            SettlementTime::Label(_) => None,
        }
    }

    /// Label text, if this is a free-text value
    pub fn as_label(&self) -> Option<&str> {
        match self {
            SettlementTime::Days(_) => None,
            SettlementTime::Label(label) => Some(label),
        }
    }
}

impl From<f64> for SettlementTime {
    fn from(days: f64) -> Self {
        SettlementTime::Days(days)
    }
}

impl From<&str> for SettlementTime {
    fn from(label: &str) -> Self {
        SettlementTime::Label(label.to_string())
    }
}

impl From<String> for SettlementTime {
    fn from(label: String) -> Self {
        SettlementTime::Label(label)
    }
}

impl fmt::Display for SettlementTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementTime::Days(days) if *days == 1.0 => write!(f, "1 day"),
            SettlementTime::Days(days) => write!(f, "{} days", days),
            SettlementTime::Label(label) => f.write_str(label),
        }
    }
}

/// Settlement timing for a rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementConfig {
    /// Settlement time for domestic payments
    pub domestic_days: SettlementTime,

    /// Settlement time for cross-border payments
    ///
    /// When set (and non-zero/non-empty), the scenario is treated as
    /// international.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_days: Option<SettlementTime>,

    /// Explicit display label; wins over both day fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_timing_label: Option<String>,
}

impl SettlementConfig {
    /// Domestic-only settlement with no overrides
    pub fn domestic(domestic_days: impl Into<SettlementTime>) -> Self {
        Self {
            domestic_days: domestic_days.into(),
            international_days: None,
            settlement_timing_label: None,
        }
    }

    /// Builder: set the international settlement time
    pub fn with_international(mut self, international_days: impl Into<SettlementTime>) -> Self {
        self.international_days = Some(international_days.into());
        self
    }

    /// Builder: set the explicit timing label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.settlement_timing_label = Some(label.into());
        self
    }

    /// International settlement time, only if it counts as set
    pub fn present_international_days(&self) -> Option<&SettlementTime> {
        self.international_days
            .as_ref()
            .filter(|days| days.is_present())
    }

    /// Timing label, only if non-empty
    pub fn present_timing_label(&self) -> Option<&str> {
        self.settlement_timing_label
            .as_deref()
            .filter(|label| !label.is_empty())
    }
}
