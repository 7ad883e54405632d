//! Replication messages - per-attribute sync from authority to observers

use crate::types::Attribute;
use crate::vitals::VitalSet;
use serde::{Deserialize, Serialize};

/// One replicated attribute value
///
/// Each attribute is synchronized independently; the receiver applies
/// updates through the same clamp and notification path as a local write.
/// Updates to the same attribute apply in send order (last-write-wins, per
/// the transport's ordering guarantee); no ordering is promised across
/// different attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeUpdate {
    pub attribute: Attribute,
    pub value: f64,
}

impl AttributeUpdate {
    pub fn new(attribute: Attribute, value: f64) -> Self {
        AttributeUpdate { attribute, value }
    }

    /// Encode for the wire
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from the wire
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Full-state sync: one update per attribute, in replication order
pub fn snapshot(set: &VitalSet) -> Vec<AttributeUpdate> {
    Attribute::all()
        .iter()
        .map(|&attribute| AttributeUpdate::new(attribute, set.value(attribute)))
        .collect()
}
