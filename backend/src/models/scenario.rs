//! Scenario records
//!
//! A scenario describes one journey of a payment through a rail: who is
//! involved (routing nodes), the hops between them (routing edges), summary
//! metrics, what can go wrong, and why the rail is shaped that way.
//!
//! Scenarios are authored data. They are constructed once when a catalog
//! loads and never mutated afterwards.
//!
//! A malformed economics block does not reject its scenario: the scenario
//! loads without economics and its cost simulator is simply not applicable.

use crate::models::economics::EconomicsConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Problems found while validating an authored scenario
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("Scenario id must not be empty")]
    EmptyId,

    #[error("Scenario '{scenario}' declares node '{node}' more than once")]
    DuplicateNode { scenario: String, node: String },

    #[error("Scenario '{scenario}' has an edge {from} -> {to} referencing unknown node '{missing}'")]
    DanglingEdge {
        scenario: String,
        from: String,
        to: String,
        missing: String,
    },
}

/// Whether a payment crosses a domestic/foreign boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Domestic,
    International,
}

/// Part a participant plays in the routing diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Payer,
    Payee,
    Processor,
    Network,
    Bank,
    Clearing,
}

/// A participant in the routing diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingNode {
    pub id: String,
    pub label: String,
    pub role: NodeRole,
}

/// A hop between two participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    /// e.g. "~2s", "Overnight batch"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_label: Option<String>,
}

/// Headline numbers shown above the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    pub total_time: String,
    pub typical_fee: String,
    pub reversibility: String,
}

/// One payment journey through a rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    /// Rail display name, e.g. "Card network"
    pub rail: String,
    pub description: String,

    #[serde(default)]
    pub transaction_type: TransactionType,

    pub nodes: Vec<RoutingNode>,
    pub edges: Vec<RoutingEdge>,
    pub metrics: ScenarioMetrics,

    pub failure_points: [String; 3],
    pub rationale: [String; 3],

    /// Absent or malformed means no cost simulator for this scenario
    #[serde(
        default,
        deserialize_with = "lenient_economics",
        skip_serializing_if = "Option::is_none"
    )]
    pub economics: Option<EconomicsConfig>,
}

/// Parse an economics block, degrading anything unparseable to `None`
fn lenient_economics<'de, D>(deserializer: D) -> Result<Option<EconomicsConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match serde_json::from_value::<EconomicsConfig>(raw) {
        Ok(economics) => Ok(Some(economics)),
        Err(e) => {
            tracing::warn!(error = %e, "malformed economics config, simulator not applicable");
            Ok(None)
        }
    }
}

impl Scenario {
    /// Check structural integrity of the authored record
    ///
    /// # Errors
    /// - Empty id
    /// - Node ids that repeat
    /// - Edges whose endpoints are not declared nodes
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.id.trim().is_empty() {
            return Err(ScenarioError::EmptyId);
        }

        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(ScenarioError::DuplicateNode {
                    scenario: self.id.clone(),
                    node: node.id.clone(),
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(ScenarioError::DanglingEdge {
                        scenario: self.id.clone(),
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Drop an economics config holding NaN or infinite numbers
    ///
    /// Returns `true` if the config was dropped. The scenario stays usable;
    /// only its cost simulator becomes not applicable.
    pub fn discard_unusable_economics(&mut self) -> bool {
        let bad = match &self.economics {
            Some(economics) => economics.non_finite_parameters(),
            None => return false,
        };
        if bad.is_empty() {
            return false;
        }

        tracing::warn!(
            scenario = %self.id,
            fields = %bad.join(", "),
            "non-finite economics config, simulator not applicable"
        );
        self.economics = None;
        true
    }

    /// Whether a cost simulator applies to this scenario
    pub fn has_simulator(&self) -> bool {
        self.economics.is_some()
    }

    pub fn node(&self, id: &str) -> Option<&RoutingNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Node ids in the order a payment visits them
    ///
    /// Starts at the first node with no inbound edge and follows the first
    /// outgoing edge of each node. Nodes not reached that way are appended in
    /// declaration order, so every node appears exactly once.
    pub fn routing_path(&self) -> Vec<&str> {
        let inbound: HashSet<&str> = self.edges.iter().map(|e| e.to.as_str()).collect();
        let start = self
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .find(|id| !inbound.contains(id))
            .or_else(|| self.nodes.first().map(|n| n.id.as_str()));

        let mut path = Vec::with_capacity(self.nodes.len());
        let mut visited = HashSet::with_capacity(self.nodes.len());
        let mut current = start;

        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            path.push(id);
            current = self
                .edges
                .iter()
                .find(|e| e.from == id)
                .map(|e| e.to.as_str());
        }

        for node in &self.nodes {
            if visited.insert(node.id.as_str()) {
                path.push(node.id.as_str());
            }
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::FeeModel;
    use crate::models::settlement::SettlementConfig;

    fn node(id: &str, role: NodeRole) -> RoutingNode {
        RoutingNode {
            id: id.to_string(),
            label: id.to_uppercase(),
            role,
        }
    }

    fn edge(from: &str, to: &str) -> RoutingEdge {
        RoutingEdge {
            from: from.to_string(),
            to: to.to_string(),
            label: format!("{from} to {to}"),
            duration_label: None,
        }
    }

    fn three(prefix: &str) -> [String; 3] {
        [
            format!("{prefix} 1"),
            format!("{prefix} 2"),
            format!("{prefix} 3"),
        ]
    }

    fn sample() -> Scenario {
        Scenario {
            id: "card".to_string(),
            title: "Card purchase".to_string(),
            rail: "Card network".to_string(),
            description: "Tap to pay".to_string(),
            transaction_type: TransactionType::Domestic,
            nodes: vec![
                node("network", NodeRole::Network),
                node("payer", NodeRole::Payer),
                node("acquirer", NodeRole::Processor),
                node("payee", NodeRole::Payee),
            ],
            edges: vec![
                edge("payer", "acquirer"),
                edge("acquirer", "network"),
                edge("network", "payee"),
            ],
            metrics: ScenarioMetrics {
                total_time: "2 seconds".to_string(),
                typical_fee: "2.9% + $0.30".to_string(),
                reversibility: "Chargeback".to_string(),
            },
            failure_points: three("failure"),
            rationale: three("reason"),
            economics: Some(EconomicsConfig::new(
                FeeModel::PercentPlusFixed {
                    percent: 0.029,
                    fixed: 0.3,
                },
                SettlementConfig::domestic(2.0),
            )),
        }
    }

    #[test]
    fn test_valid_scenario() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut scenario = sample();
        scenario.id = "  ".to_string();
        assert_eq!(scenario.validate(), Err(ScenarioError::EmptyId));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut scenario = sample();
        scenario.nodes.push(node("payer", NodeRole::Bank));
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::DuplicateNode { node, .. }) if node == "payer"
        ));
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let mut scenario = sample();
        scenario.edges.push(edge("payee", "issuer"));
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::DanglingEdge { missing, .. }) if missing == "issuer"
        ));
    }

    #[test]
    fn test_non_finite_economics_discarded() {
        let mut scenario = sample();
        scenario.economics = Some(EconomicsConfig::new(
            FeeModel::Flat { flat: f64::NAN },
            SettlementConfig::domestic(1.0),
        ));
        assert!(scenario.discard_unusable_economics());
        assert!(!scenario.has_simulator());
        assert_eq!(scenario.validate(), Ok(()));
    }

    #[test]
    fn test_finite_economics_kept() {
        let mut scenario = sample();
        assert!(!scenario.discard_unusable_economics());
        assert!(scenario.has_simulator());
    }

    #[test]
    fn test_malformed_economics_loads_without_simulator() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["economics"] = serde_json::json!({"feeModel": {"type": "flat", "flat": "1.50"}});
        let scenario: Scenario = serde_json::from_value(value).unwrap();
        assert_eq!(scenario.id, "card");
        assert!(scenario.economics.is_none());
    }

    #[test]
    fn test_null_economics_is_absent() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["economics"] = Value::Null;
        let scenario: Scenario = serde_json::from_value(value).unwrap();
        assert!(scenario.economics.is_none());
    }

    #[test]
    fn test_routing_path_follows_edges() {
        assert_eq!(
            sample().routing_path(),
            vec!["payer", "acquirer", "network", "payee"]
        );
    }

    #[test]
    fn test_routing_path_includes_unreached_nodes() {
        let mut scenario = sample();
        scenario.nodes.push(node("auditor", NodeRole::Clearing));
        assert_eq!(
            scenario.routing_path(),
            vec!["payer", "acquirer", "network", "payee", "auditor"]
        );
    }

    #[test]
    fn test_routing_path_survives_cycle() {
        let mut scenario = sample();
        scenario.edges.push(edge("payee", "payer"));
        let path = scenario.routing_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], "network");
    }

    #[test]
    fn test_failure_points_must_have_three_items() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["failurePoints"] = serde_json::json!(["only", "two"]);
        assert!(serde_json::from_value::<Scenario>(value).is_err());
    }

    #[test]
    fn test_transaction_type_defaults_to_domestic() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("transactionType");
        let scenario: Scenario = serde_json::from_value(value).unwrap();
        assert_eq!(scenario.transaction_type, TransactionType::Domestic);
    }
}
