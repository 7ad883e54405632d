//! Effect descriptors and outgoing effect specifications

use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to build an effect specification from a descriptor
///
/// Invalid descriptors are skipped by callers, not escalated; batch
/// application is best-effort.
#[derive(Error, Debug)]
pub enum EffectError {
    #[error("effect `{0}` has no modifiers")]
    EmptyEffect(String),
    #[error("effect `{effect_id}` has a non-finite magnitude for {attribute:?}")]
    NonFiniteMagnitude {
        effect_id: String,
        attribute: Attribute,
    },
}

/// How a modifier combines with the attribute's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModOp {
    Add,
    Multiply,
    Override,
}

/// One instantaneous modification of a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub attribute: Attribute,
    pub op: ModOp,
    pub magnitude: f64,
}

impl Modifier {
    pub fn new(attribute: Attribute, op: ModOp, magnitude: f64) -> Self {
        Modifier {
            attribute,
            op,
            magnitude,
        }
    }

    /// Value this modifier proposes, given the attribute's current value
    pub fn evaluate(&self, current: f64) -> f64 {
        match self.op {
            ModOp::Add => current + self.magnitude,
            ModOp::Multiply => current * self.magnitude,
            ModOp::Override => self.magnitude,
        }
    }
}

/// Declarative effect definition, typically loaded from config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// Effect identifier
    pub id: String,
    /// Attribute modifications to apply, in order
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl EffectDescriptor {
    pub fn new(id: impl Into<String>, modifiers: Vec<Modifier>) -> Self {
        EffectDescriptor {
            id: id.into(),
            modifiers,
        }
    }
}

/// A validated effect ready to execute, attributed to its source entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectSpec {
    /// Which descriptor this was built from
    pub effect_id: String,
    /// Entity the effect is attributed to
    pub source_id: String,
    /// Validated modifiers
    pub modifiers: Vec<Modifier>,
}

impl EffectSpec {
    /// Build an outgoing spec from a descriptor, attributed to `source_id`
    ///
    /// Fails on descriptors with no modifiers or non-finite magnitudes.
    pub fn outgoing(descriptor: &EffectDescriptor, source_id: &str) -> Result<Self, EffectError> {
        if descriptor.modifiers.is_empty() {
            return Err(EffectError::EmptyEffect(descriptor.id.clone()));
        }
        for modifier in &descriptor.modifiers {
            if !modifier.magnitude.is_finite() {
                return Err(EffectError::NonFiniteMagnitude {
                    effect_id: descriptor.id.clone(),
                    attribute: modifier.attribute,
                });
            }
        }

        Ok(EffectSpec {
            effect_id: descriptor.id.clone(),
            source_id: source_id.to_string(),
            modifiers: descriptor.modifiers.clone(),
        })
    }

    /// Build a plain damage effect feeding the in-damage mailbox
    pub fn damage(amount: f64, source_id: &str) -> Self {
        EffectSpec {
            effect_id: "damage".to_string(),
            source_id: source_id.to_string(),
            modifiers: vec![Modifier::new(Attribute::InDamage, ModOp::Add, amount)],
        }
    }

    /// Whether any modifier targets the given attribute
    pub fn touches(&self, attribute: Attribute) -> bool {
        self.modifiers.iter().any(|m| m.attribute == attribute)
    }
}
