//! Type vocabulary for event-driven campaign flows.
//!
//! Mirrors the node/edge graph the visual builder edits. These are shapes
//! only: flows are stored and executed by the remote campaign service.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignChannel {
    Email,
    Sms,
    Whatsapp,
    Inweb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Draft,
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayUnit {
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerData {
    pub label: String,
    /// Platform event that starts the flow, e.g. `cart.abandoned`.
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionData {
    pub label: String,
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    pub label: String,
    pub channel: CampaignChannel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayData {
    pub label: String,
    pub amount: u32,
    pub unit: DelayUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitData {
    pub label: String,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_minutes: Option<u32>,
}

/// A node on the builder canvas, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlowNode {
    Trigger {
        id: EntityId,
        position: NodePosition,
        data: TriggerData,
    },
    Condition {
        id: EntityId,
        position: NodePosition,
        data: ConditionData,
    },
    Action {
        id: EntityId,
        position: NodePosition,
        data: ActionData,
    },
    Delay {
        id: EntityId,
        position: NodePosition,
        data: DelayData,
    },
    If {
        id: EntityId,
        position: NodePosition,
        data: ConditionData,
    },
    Wait {
        id: EntityId,
        position: NodePosition,
        data: WaitData,
    },
}

impl FlowNode {
    pub fn id(&self) -> &str {
        match self {
            FlowNode::Trigger { id, .. }
            | FlowNode::Condition { id, .. }
            | FlowNode::Action { id, .. }
            | FlowNode::Delay { id, .. }
            | FlowNode::If { id, .. }
            | FlowNode::Wait { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: EntityId,
    pub source: EntityId,
    pub target: EntityId,
    /// Branch handle on `if` nodes (`"true"` / `"false"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDrivenFlow {
    pub id: EntityId,
    pub name: String,
    pub status: FlowStatus,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EventDrivenFlow {
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == node_id)
    }
}
