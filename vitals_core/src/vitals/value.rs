//! VitalValue - base/current pair backing a single attribute

use serde::{Deserialize, Serialize};

/// Storage for one attribute
///
/// `base` is the permanent stat; `current` is the effective value after
/// instantaneous modifications. The host's two write pathways (permanent
/// vs. instantaneous) land on the matching field, and both re-enforce the
/// same clamp policy on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalValue {
    /// Permanent value
    pub base: f64,
    /// Effective value, read by gameplay
    pub current: f64,
}

impl VitalValue {
    /// Create with base and current both set to `value`
    pub fn new(value: f64) -> Self {
        VitalValue {
            base: value,
            current: value,
        }
    }

    /// The effective value
    pub fn value(&self) -> f64 {
        self.current
    }
}

impl Default for VitalValue {
    fn default() -> Self {
        VitalValue::new(0.0)
    }
}
