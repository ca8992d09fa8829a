//! Fee Engine
//!
//! - **model**: the `FeeModel` sum type as authored in scenario data
//! - **engine**: pure fee, monthly aggregate and settlement-time derivation
//! - **schema_docs**: self-documenting description of each fee model

pub mod engine;
pub mod model;
pub mod schema_docs;

// Re-exports
pub use engine::{
    compute_fee, derive, is_international, monthly_fees, select_settlement_time, FeeBreakdown,
};
pub use model::FeeModel;
pub use schema_docs::{fee_schema, get_fee_schema, FeeModelElement, FeeSchemaDoc};
