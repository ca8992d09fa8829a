//! Domain models for the payment rails explorer

pub mod economics;
pub mod scenario;
pub mod settlement;

// Re-exports
pub use economics::EconomicsConfig;
pub use scenario::{
    NodeRole, RoutingEdge, RoutingNode, Scenario, ScenarioError, ScenarioMetrics, TransactionType,
};
pub use settlement::{SettlementConfig, SettlementTime};
