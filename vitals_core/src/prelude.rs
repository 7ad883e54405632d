//! Prelude module for convenient imports
//!
//! ```rust
//! use vitals_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AbilityInput, Attribute, AttributeChange, NetRole};
pub use crate::vitals::{VitalSet, VitalValue};

// Damage resolution
pub use crate::combat::{resolve_pending_damage, DamageOutcome};

// Runtime
pub use crate::component::VitalsComponent;
pub use crate::observe::ChangeHub;

// Effects and abilities
pub use crate::abilities::{AbilityDescriptor, AbilityHost, AbilityLedger, GrantHandle};
pub use crate::effects::{EffectDescriptor, EffectSpec, ModOp, Modifier};

// Replication
pub use crate::replication::{snapshot, AttributeUpdate};

// Config
pub use crate::config::{load_loadout, parse_loadout, LoadoutConfig, VitalsConfig};
