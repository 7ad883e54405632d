//! DamageOutcome - Outcome of resolving one pending damage event

use crate::types::AttributeChange;
use serde::{Deserialize, Serialize};

/// Result of consuming the in-damage mailbox against a vital set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Pending damage consumed from the mailbox (0 for a no-op event)
    pub damage: f64,
    /// Portion absorbed by shield
    pub absorbed_by_shield: f64,
    /// Portion absorbed by health
    pub absorbed_by_health: f64,
    /// Damage beyond current health, discarded
    pub overkill: f64,

    // === State Changes ===
    /// Shield before resolution
    pub shield_before: f64,
    /// Shield after resolution
    pub shield_after: f64,
    /// Health before resolution
    pub health_before: f64,
    /// Health after resolution
    pub health_after: f64,

    /// Whether this event dropped health to zero. Reporting only: death
    /// handling belongs to whoever observes health reaching zero.
    pub is_killing_blow: bool,

    /// Every attribute write committed during resolution, in commit order,
    /// so callers can raise one notification per change.
    pub changes: Vec<AttributeChange>,
}

impl DamageOutcome {
    /// Create a new empty outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Shield delta (negative when shield absorbed damage)
    pub fn shield_change(&self) -> f64 {
        self.shield_after - self.shield_before
    }

    /// Health delta (negative when health absorbed damage)
    pub fn health_change(&self) -> f64 {
        self.health_after - self.health_before
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.absorbed_by_shield > 0.0 {
            parts.push(format!("{:.0} absorbed by shield", self.absorbed_by_shield));
        }

        if self.absorbed_by_health > 0.0 {
            parts.push(format!("{:.0} damage to health", self.absorbed_by_health));
        }

        if self.overkill > 0.0 {
            parts.push(format!("{:.0} overkill", self.overkill));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}
