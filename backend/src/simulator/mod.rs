//! Cost Simulator
//!
//! Binds the fee engine to a scenario: the scenario supplies the economics
//! and the transaction type, the user supplies amount and monthly volume.
//!
//! Every call derives internationality afresh from the scenario it is given.
//! [`CostSimulator`] adds a single-entry memo whose key holds the full
//! economics value, so switching scenarios can never reuse a previous
//! scenario's result.

pub mod inputs;

pub use inputs::{SimulatorInputs, AMOUNT_RANGE, DEFAULT_AMOUNT, DEFAULT_MONTHLY_VOLUME, VOLUME_RANGE};

use crate::fees::{derive, FeeBreakdown};
use crate::models::economics::EconomicsConfig;
use crate::models::scenario::{Scenario, TransactionType};

/// Run the simulator for one scenario
///
/// Returns `None` when the scenario has no economics config, meaning the
/// simulator does not apply. Inputs are used as given; see
/// [`SimulatorInputs::clamped`].
pub fn simulate(scenario: &Scenario, inputs: SimulatorInputs) -> Option<FeeBreakdown> {
    let economics = scenario.economics.as_ref()?;
    Some(derive(
        inputs.amount,
        inputs.monthly_volume,
        economics,
        scenario.transaction_type,
    ))
}

#[derive(Debug, Clone, PartialEq)]
struct MemoKey {
    amount_bits: u64,
    monthly_volume: u32,
    transaction_type: TransactionType,
    economics: EconomicsConfig,
}

/// Simulator with a one-entry memo of the last derivation
#[derive(Debug, Default)]
pub struct CostSimulator {
    last: Option<(MemoKey, FeeBreakdown)>,
    hits: u64,
    misses: u64,
}

impl CostSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same result as [`simulate`], reusing the previous breakdown when the
    /// inputs and the scenario's economics are unchanged
    pub fn simulate(&mut self, scenario: &Scenario, inputs: SimulatorInputs) -> Option<FeeBreakdown> {
        let economics = scenario.economics.as_ref()?;
        let key = MemoKey {
            amount_bits: inputs.amount.to_bits(),
            monthly_volume: inputs.monthly_volume,
            transaction_type: scenario.transaction_type,
            economics: economics.clone(),
        };

        if let Some((last_key, breakdown)) = &self.last {
            if *last_key == key {
                self.hits += 1;
                return Some(breakdown.clone());
            }
        }

        self.misses += 1;
        let breakdown = derive(
            inputs.amount,
            inputs.monthly_volume,
            economics,
            scenario.transaction_type,
        );
        self.last = Some((key, breakdown.clone()));
        Some(breakdown)
    }

    /// Number of calls answered from the memo
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that ran the derivation
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
