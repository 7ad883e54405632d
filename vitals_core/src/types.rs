//! Core types shared across the vitals runtime

use serde::{Deserialize, Serialize};

/// Identifier for a single attribute in a vital set
///
/// Replaces reflection-style attribute lookup with an explicit enum so the
/// clamp policy and change notifications can dispatch on attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Health,
    MaxHealth,
    Shield,
    MaxShield,
    ShieldRegen,
    ShieldRegenDelay,
    InDamage,
}

impl Attribute {
    /// Get all attributes, in replication order
    ///
    /// Maxima come first so a full-state snapshot applies cleanly through
    /// the clamped write path on a fresh remote copy.
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::MaxHealth,
            Attribute::MaxShield,
            Attribute::Health,
            Attribute::Shield,
            Attribute::ShieldRegen,
            Attribute::ShieldRegenDelay,
            Attribute::InDamage,
        ]
    }

    /// Whether this attribute has a clamp policy attached
    pub fn is_clamped(self) -> bool {
        matches!(self, Attribute::Health | Attribute::Shield)
    }
}

/// Network role of a simulated entity
///
/// Only the authoritative instance may grant/revoke abilities or originate
/// binding state changes; remote instances receive replicated updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetRole {
    Authoritative,
    Remote,
}

impl NetRole {
    pub fn is_authoritative(self) -> bool {
        self == NetRole::Authoritative
    }
}

/// Input binding slot an ability is granted under
///
/// Doubles as the grant's input/priority key when handing the ability to the
/// host, so pressing the bound input can route back to the granted ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityInput {
    None,
    PrimaryAbility,
    SecondaryAbility,
    MovementAbility,
    UtilityAbility,
    WeaponFire,
    WeaponAlt,
}

impl Default for AbilityInput {
    fn default() -> Self {
        AbilityInput::None
    }
}

impl AbilityInput {
    /// Numeric input id used by the host's local-input dispatch
    pub fn input_id(self) -> i32 {
        match self {
            AbilityInput::None => 0,
            AbilityInput::PrimaryAbility => 1,
            AbilityInput::SecondaryAbility => 2,
            AbilityInput::MovementAbility => 3,
            AbilityInput::UtilityAbility => 4,
            AbilityInput::WeaponFire => 5,
            AbilityInput::WeaponAlt => 6,
        }
    }
}

/// A committed change to one attribute's current value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeChange {
    /// Which attribute changed
    pub attribute: Attribute,
    /// Value before the write
    pub old: f64,
    /// Value after the write (post-clamp)
    pub new: f64,
}

impl AttributeChange {
    pub fn new(attribute: Attribute, old: f64, new: f64) -> Self {
        AttributeChange { attribute, old, new }
    }

    /// Signed delta of this change
    pub fn delta(&self) -> f64 {
        self.new - self.old
    }
}
