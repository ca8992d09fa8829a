//! Fee and Settlement Derivation
//!
//! Pure functions turning `(amount, monthly volume, economics)` into the
//! figures shown by the cost simulator.
//!
//! # Derivation Order
//!
//! 1. Decide whether the payment is international ([`is_international`])
//! 2. Compute the per-transaction fee ([`compute_fee`])
//! 3. Multiply out the monthly aggregate ([`monthly_fees`])
//! 4. Pick the settlement time to display ([`select_settlement_time`])
//!
//! # Critical Invariants
//!
//! 1. The fee is never negative
//! 2. No rounding happens here; 2-decimal rounding is display-only
//! 3. Internationality is recomputed on every call, never cached
//!
//! # Example
//!
//! ```rust
//! use payment_rails_core::fees::{derive, FeeModel};
//! use payment_rails_core::models::{EconomicsConfig, SettlementConfig, TransactionType};
//!
//! let economics = EconomicsConfig::new(
//!     FeeModel::PercentPlusFixedWithCap { percent: 0.029, fixed: 0.30, cap: 1.80 },
//!     SettlementConfig::domestic(2.0),
//! );
//!
//! let breakdown = derive(100.0, 10, &economics, TransactionType::Domestic);
//! assert_eq!(breakdown.fee_per_transaction, 1.80);
//! assert_eq!(breakdown.monthly_fees, 18.0);
//! ```

use crate::fees::model::FeeModel;
use crate::models::economics::EconomicsConfig;
use crate::models::scenario::TransactionType;
use crate::models::settlement::{SettlementConfig, SettlementTime};
use serde::{Deserialize, Serialize};

/// Everything the simulator displays for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub fee_per_transaction: f64,
    pub monthly_fees: f64,
    pub settlement_time_display: SettlementTime,
    pub is_international: bool,
}

/// Decide whether a payment counts as international
///
/// First match wins:
/// 1. the settlement config carries an international settlement time
/// 2. the scenario is marked `International`
/// 3. the fee model is `flat_with_international`
pub fn is_international(economics: &EconomicsConfig, transaction_type: TransactionType) -> bool {
    economics.settlement.present_international_days().is_some()
        || transaction_type == TransactionType::International
        || economics.fee_model.implies_international()
}

/// Per-transaction fee for a single payment of `amount`
///
/// Unrecognised fee models cost 0. The result is clamped at 0.
pub fn compute_fee(amount: f64, fee_model: &FeeModel, is_international: bool) -> f64 {
    let fee = match fee_model {
        FeeModel::PercentPlusFixed { percent, fixed } => amount * percent + fixed,
        FeeModel::PercentPlusFixedWithCap {
            percent,
            fixed,
            cap,
        } => (amount * percent + fixed).min(*cap),
        FeeModel::Flat { flat } => *flat,
        FeeModel::FlatWithInternational {
            flat_domestic,
            flat_international,
        } => {
            if is_international {
                *flat_international
            } else {
                *flat_domestic
            }
        }
        FeeModel::Wire {
            flat,
            international_multiplier,
        } => match international_multiplier {
            Some(multiplier) if is_international => flat * multiplier,
            _ => *flat,
        },
        FeeModel::Free => 0.0,
        FeeModel::Unknown => {
            tracing::warn!("unrecognised fee model type, treating fee as 0");
            0.0
        }
    };

    fee.max(0.0)
}

/// Aggregate fees for a month of identical payments
pub fn monthly_fees(fee_per_transaction: f64, monthly_volume: u32) -> f64 {
    fee_per_transaction * f64::from(monthly_volume)
}

/// Settlement time to show the user
///
/// An explicit timing label always wins. Otherwise international payments
/// show the international settlement time if one is set, and everything
/// else falls back to the domestic time.
pub fn select_settlement_time(settlement: &SettlementConfig, is_international: bool) -> SettlementTime {
    if let Some(label) = settlement.present_timing_label() {
        return SettlementTime::Label(label.to_string());
    }

    if is_international {
        if let Some(days) = settlement.present_international_days() {
            return days.clone();
        }
    }

    settlement.domestic_days.clone()
}

/// Run the full derivation for one set of simulator inputs
pub fn derive(
    amount: f64,
    monthly_volume: u32,
    economics: &EconomicsConfig,
    transaction_type: TransactionType,
) -> FeeBreakdown {
    let international = is_international(economics, transaction_type);
    let fee_per_transaction = compute_fee(amount, &economics.fee_model, international);
    let breakdown = FeeBreakdown {
        fee_per_transaction,
        monthly_fees: monthly_fees(fee_per_transaction, monthly_volume),
        settlement_time_display: select_settlement_time(&economics.settlement, international),
        is_international: international,
    };

    tracing::debug!(
        amount,
        monthly_volume,
        fee_model = economics.fee_model.type_name(),
        international,
        fee = breakdown.fee_per_transaction,
        monthly = breakdown.monthly_fees,
        "derived fee breakdown"
    );

    breakdown
}
