//! VitalSet - clamped health/shield attribute container

mod value;

pub use value::VitalValue;

use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// The seven vitals tracked per entity
///
/// Health and Shield carry a range invariant enforced on every write:
/// `0 <= health <= max_health` and `0 <= shield <= max_shield`. The maxima,
/// regen rate/delay and the `in_damage` mailbox are unclamped configuration
/// values. `in_damage` is transient: writers set it to a positive amount to
/// signal incoming damage, and resolution zeroes it after consuming it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSet {
    pub health: VitalValue,
    pub max_health: VitalValue,
    pub shield: VitalValue,
    pub max_shield: VitalValue,
    /// Shield points restored per second, driven by an external regen tick
    pub shield_regen: VitalValue,
    /// Seconds after taking damage before regen may resume
    pub shield_regen_delay: VitalValue,
    /// Incoming-damage mailbox, zero except between signal and resolution
    pub in_damage: VitalValue,
}

impl Default for VitalSet {
    fn default() -> Self {
        VitalSet {
            health: VitalValue::new(40.0),
            max_health: VitalValue::new(60.0),
            shield: VitalValue::new(0.0),
            max_shield: VitalValue::new(0.0),
            shield_regen: VitalValue::new(0.0),
            shield_regen_delay: VitalValue::new(1.0),
            in_damage: VitalValue::new(0.0),
        }
    }
}

impl VitalSet {
    /// Create a set with default starting vitals
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, attribute: Attribute) -> &VitalValue {
        match attribute {
            Attribute::Health => &self.health,
            Attribute::MaxHealth => &self.max_health,
            Attribute::Shield => &self.shield,
            Attribute::MaxShield => &self.max_shield,
            Attribute::ShieldRegen => &self.shield_regen,
            Attribute::ShieldRegenDelay => &self.shield_regen_delay,
            Attribute::InDamage => &self.in_damage,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut VitalValue {
        match attribute {
            Attribute::Health => &mut self.health,
            Attribute::MaxHealth => &mut self.max_health,
            Attribute::Shield => &mut self.shield,
            Attribute::MaxShield => &mut self.max_shield,
            Attribute::ShieldRegen => &mut self.shield_regen,
            Attribute::ShieldRegenDelay => &mut self.shield_regen_delay,
            Attribute::InDamage => &mut self.in_damage,
        }
    }

    /// Effective value of an attribute
    pub fn value(&self, attribute: Attribute) -> f64 {
        self.slot(attribute).value()
    }

    /// Permanent (base) value of an attribute
    pub fn base(&self, attribute: Attribute) -> f64 {
        self.slot(attribute).base
    }

    /// Clamp a proposed value per the attribute's policy
    ///
    /// Pure: Health clamps to `[0, max_health]`, Shield to `[0, max_shield]`,
    /// everything else passes through unchanged. Both write pathways call
    /// this, so no mutation can leave an attribute out of range.
    pub fn clamp(&self, attribute: Attribute, proposed: f64) -> f64 {
        // The maxima are unclamped and may go negative; an empty range
        // collapses to zero rather than panicking in f64::clamp.
        match attribute {
            Attribute::Health => proposed.clamp(0.0, self.max_health.value().max(0.0)),
            Attribute::Shield => proposed.clamp(0.0, self.max_shield.value().max(0.0)),
            _ => proposed,
        }
    }

    /// Write the permanent value of an attribute, clamped
    ///
    /// Also refreshes the current value, since this core tracks no standing
    /// modifiers that would make them diverge. Returns the committed
    /// `(old_current, new_current)` pair.
    pub fn write_base(&mut self, attribute: Attribute, proposed: f64) -> (f64, f64) {
        let clamped = self.clamp(attribute, proposed);
        let slot = self.slot_mut(attribute);
        let old = slot.current;
        slot.base = clamped;
        slot.current = clamped;
        (old, clamped)
    }

    /// Write the effective value of an attribute, clamped
    ///
    /// Returns the committed `(old, new)` pair.
    pub fn write_current(&mut self, attribute: Attribute, proposed: f64) -> (f64, f64) {
        let clamped = self.clamp(attribute, proposed);
        let slot = self.slot_mut(attribute);
        let old = slot.current;
        slot.current = clamped;
        (old, clamped)
    }

    /// Whether health has reached zero
    pub fn is_dead(&self) -> bool {
        self.health.value() <= 0.0
    }

    /// Shield headroom left before hitting max
    pub fn missing_shield(&self) -> f64 {
        (self.max_shield.value() - self.shield.value()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_vitals() {
        let set = VitalSet::new();
        assert!((set.value(Attribute::Health) - 40.0).abs() < f64::EPSILON);
        assert!((set.value(Attribute::MaxHealth) - 60.0).abs() < f64::EPSILON);
        assert!((set.value(Attribute::Shield)).abs() < f64::EPSILON);
        assert!((set.value(Attribute::MaxShield)).abs() < f64::EPSILON);
        assert!((set.value(Attribute::ShieldRegen)).abs() < f64::EPSILON);
        assert!((set.value(Attribute::ShieldRegenDelay) - 1.0).abs() < f64::EPSILON);
        assert!((set.value(Attribute::InDamage)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_health_clamps_to_max() {
        let mut set = VitalSet::new();
        set.write_current(Attribute::Health, 500.0);
        assert!((set.value(Attribute::Health) - 60.0).abs() < f64::EPSILON);

        set.write_current(Attribute::Health, -10.0);
        assert!((set.value(Attribute::Health)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shield_clamps_to_max() {
        let mut set = VitalSet::new();
        set.write_current(Attribute::MaxShield, 50.0);
        set.write_current(Attribute::Shield, 80.0);
        assert!((set.value(Attribute::Shield) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unclamped_attributes_pass_through() {
        let mut set = VitalSet::new();
        set.write_current(Attribute::MaxHealth, -5.0);
        assert!((set.value(Attribute::MaxHealth) + 5.0).abs() < f64::EPSILON);

        set.write_current(Attribute::InDamage, -3.0);
        assert!((set.value(Attribute::InDamage) + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_write_refreshes_current() {
        let mut set = VitalSet::new();
        let (old, new) = set.write_base(Attribute::Health, 55.0);
        assert!((old - 40.0).abs() < f64::EPSILON);
        assert!((new - 55.0).abs() < f64::EPSILON);
        assert!((set.base(Attribute::Health) - 55.0).abs() < f64::EPSILON);
        assert!((set.value(Attribute::Health) - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_write_applies_same_clamp() {
        let mut set = VitalSet::new();
        set.write_base(Attribute::Health, 1000.0);
        assert!((set.base(Attribute::Health) - 60.0).abs() < f64::EPSILON);
    }

    proptest! {
        /// Any interleaving of base/current health/shield writes keeps the
        /// clamp invariant for arbitrary non-negative maxima.
        #[test]
        fn prop_clamp_invariant_holds(
            writes in prop::collection::vec(
                (any::<bool>(), any::<bool>(), -1000.0f64..1000.0), 0..64),
            max_health in 0.0f64..500.0,
            max_shield in 0.0f64..500.0,
        ) {
            let mut set = VitalSet::new();
            set.write_current(Attribute::MaxHealth, max_health);
            set.write_current(Attribute::MaxShield, max_shield);
            // Re-assert the starting vitals under the drawn maxima.
            set.write_current(Attribute::Health, set.value(Attribute::Health));
            set.write_current(Attribute::Shield, set.value(Attribute::Shield));

            for (to_shield, base_path, value) in writes {
                let attribute = if to_shield {
                    Attribute::Shield
                } else {
                    Attribute::Health
                };
                if base_path {
                    set.write_base(attribute, value);
                } else {
                    set.write_current(attribute, value);
                }

                let health = set.value(Attribute::Health);
                prop_assert!(health >= 0.0 && health <= max_health);
                let shield = set.value(Attribute::Shield);
                prop_assert!(shield >= 0.0 && shield <= max_shield);
            }
        }
    }
}
