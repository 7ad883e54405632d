//! Starting vitals and loadout configuration

use crate::abilities::AbilityDescriptor;
use crate::effects::EffectDescriptor;
use crate::types::Attribute;
use crate::vitals::{VitalSet, VitalValue};
use serde::{Deserialize, Serialize};

/// Starting values for a fresh vital set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsConfig {
    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_max_health")]
    pub max_health: f64,
    #[serde(default)]
    pub shield: f64,
    #[serde(default)]
    pub max_shield: f64,
    #[serde(default)]
    pub shield_regen: f64,
    #[serde(default = "default_shield_regen_delay")]
    pub shield_regen_delay: f64,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        VitalsConfig {
            health: default_health(),
            max_health: default_max_health(),
            shield: 0.0,
            max_shield: 0.0,
            shield_regen: 0.0,
            shield_regen_delay: default_shield_regen_delay(),
        }
    }
}

fn default_health() -> f64 {
    40.0
}
fn default_max_health() -> f64 {
    60.0
}
fn default_shield_regen_delay() -> f64 {
    1.0
}

impl VitalsConfig {
    /// Build the starting vital set
    ///
    /// Maxima land first so the configured health/shield survive the clamp.
    pub fn to_set(&self) -> VitalSet {
        let mut set = VitalSet {
            max_health: VitalValue::new(self.max_health),
            max_shield: VitalValue::new(self.max_shield),
            shield_regen: VitalValue::new(self.shield_regen),
            shield_regen_delay: VitalValue::new(self.shield_regen_delay),
            ..VitalSet::new()
        };
        set.write_base(Attribute::Health, self.health);
        set.write_base(Attribute::Shield, self.shield);
        set
    }
}

/// Everything an entity starts with: vitals, abilities and startup effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadoutConfig {
    #[serde(default)]
    pub vitals: VitalsConfig,
    #[serde(default)]
    pub abilities: Vec<AbilityDescriptor>,
    #[serde(default)]
    pub effects: Vec<EffectDescriptor>,
}
