//! Simulator input ranges
//!
//! The amount and volume controls are range-limited. Values arriving from
//! outside those controls (CLI flags, query strings) are pulled into range
//! before they reach the fee engine.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed transaction amounts, in currency units
pub const AMOUNT_RANGE: RangeInclusive<f64> = 5.0..=5000.0;

/// Allowed monthly transaction counts
pub const VOLUME_RANGE: RangeInclusive<u32> = 1..=2000;

pub const DEFAULT_AMOUNT: f64 = 100.0;
pub const DEFAULT_MONTHLY_VOLUME: u32 = 500;

/// Values of the two simulator controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorInputs {
    pub amount: f64,
    pub monthly_volume: u32,
}

impl Default for SimulatorInputs {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            monthly_volume: DEFAULT_MONTHLY_VOLUME,
        }
    }
}

impl SimulatorInputs {
    pub fn new(amount: f64, monthly_volume: u32) -> Self {
        Self {
            amount,
            monthly_volume,
        }
    }

    /// Whether both values already sit inside the control ranges
    pub fn is_in_range(&self) -> bool {
        AMOUNT_RANGE.contains(&self.amount) && VOLUME_RANGE.contains(&self.monthly_volume)
    }

    /// Copy with both values pulled into range
    ///
    /// A NaN amount falls back to the default amount.
    pub fn clamped(&self) -> Self {
        let amount = if self.amount.is_nan() {
            DEFAULT_AMOUNT
        } else {
            self.amount.clamp(*AMOUNT_RANGE.start(), *AMOUNT_RANGE.end())
        };
        Self {
            amount,
            monthly_volume: self
                .monthly_volume
                .clamp(*VOLUME_RANGE.start(), *VOLUME_RANGE.end()),
        }
    }
}
