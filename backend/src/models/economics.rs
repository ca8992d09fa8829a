//! Economics configuration: one fee model paired with one settlement config

use crate::fees::FeeModel;
use crate::models::settlement::SettlementConfig;
use serde::{Deserialize, Serialize};

/// What a rail costs and how long it takes to settle
///
/// Optional on a scenario; a scenario without one has no cost simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicsConfig {
    pub fee_model: FeeModel,
    pub settlement: SettlementConfig,
}

impl EconomicsConfig {
    pub fn new(fee_model: FeeModel, settlement: SettlementConfig) -> Self {
        Self {
            fee_model,
            settlement,
        }
    }

    /// Names of fee-model parameters that are NaN or infinite
    pub fn non_finite_parameters(&self) -> Vec<&'static str> {
        let mut bad: Vec<&'static str> = self
            .fee_model
            .parameters()
            .into_iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
            .collect();

        let settlement = &self.settlement;
        if matches!(settlement.domestic_days.as_days(), Some(d) if !d.is_finite()) {
            bad.push("domesticDays");
        }
        if let Some(days) = settlement.international_days.as_ref().and_then(|t| t.as_days()) {
            if !days.is_finite() {
                bad.push("internationalDays");
            }
        }
        bad
    }
}
