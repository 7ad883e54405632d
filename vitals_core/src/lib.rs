//! vitals_core - Health/shield attribute runtime for game entities
//!
//! This library provides:
//! - VitalSet: Clamped health/shield attribute container
//! - Damage Resolution: Shield-then-health absorption of incoming damage
//! - VitalsComponent: Host-facing runtime with per-attribute change events
//! - AbilityLedger: Grant/revoke bookkeeping over a host ability system

pub mod abilities;
pub mod combat;
pub mod component;
pub mod config;
pub mod effects;
pub mod observe;
pub mod prelude;
pub mod replication;
pub mod types;
pub mod vitals;

// Re-export core types for convenience
pub use abilities::{AbilityDescriptor, AbilityHost, AbilityLedger, GrantHandle};
pub use combat::{resolve_pending_damage, DamageOutcome};
pub use component::VitalsComponent;
pub use config::{load_loadout, parse_loadout, ConfigError, LoadoutConfig, VitalsConfig};
pub use effects::{EffectDescriptor, EffectError, EffectSpec, ModOp, Modifier};
pub use observe::ChangeHub;
pub use replication::{snapshot, AttributeUpdate};
pub use types::{AbilityInput, Attribute, AttributeChange, NetRole};
pub use vitals::{VitalSet, VitalValue};
