//! Payment Rails Explorer Core
//!
//! Scenario data and the fee/settlement derivation engine behind the cost
//! simulator of an educational payment-rails explorer.
//!
//! # Architecture
//!
//! - **models**: Scenario, economics and settlement types
//! - **fees**: Fee models and the pure derivation engine
//! - **catalog**: Loading and validating scenario catalogs
//! - **simulator**: Binding scenarios and user inputs to the engine
//! - **format**: Currency display formatting
//!
//! # Critical Invariants
//!
//! 1. Fees are never negative
//! 2. Internal arithmetic is unrounded f64; rounding is display-only
//! 3. Internationality is derived per call, never stored

// Module declarations
pub mod catalog;
pub mod fees;
pub mod format;
pub mod models;
pub mod simulator;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError};
pub use fees::{derive, FeeBreakdown, FeeModel};
pub use format::format_currency;
pub use models::{
    EconomicsConfig, Scenario, ScenarioError, SettlementConfig, SettlementTime, TransactionType,
};
pub use simulator::{simulate, CostSimulator, SimulatorInputs};
