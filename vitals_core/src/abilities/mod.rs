//! Ability grant/revoke ledger over a host ability system

use crate::effects::{EffectDescriptor, EffectSpec};
use crate::types::{AbilityInput, NetRole};
use serde::{Deserialize, Serialize};

/// Declarative ability definition, typically loaded from config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityDescriptor {
    /// Ability identifier
    pub id: String,
    /// Input binding, passed to the host as the grant's input key
    #[serde(default)]
    pub input: AbilityInput,
}

impl AbilityDescriptor {
    pub fn new(id: impl Into<String>, input: AbilityInput) -> Self {
        AbilityDescriptor {
            id: id.into(),
            input,
        }
    }
}

/// Opaque handle returned by the host for a granted ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantHandle(pub u64);

/// The host ability machinery the ledger books against
///
/// Implemented by whatever owns the actual ability activation/targeting
/// system; this core only tracks grants so they can be revoked symmetrically.
pub trait AbilityHost {
    /// Grant an ability, keyed by the descriptor's input binding
    fn grant(&mut self, descriptor: &AbilityDescriptor) -> GrantHandle;
    /// Revoke a previously granted ability
    fn revoke(&mut self, handle: GrantHandle);
    /// Apply an effect to the owning entity itself
    fn apply_effect_to_self(&mut self, spec: EffectSpec);
}

/// Ordered record of grant handles for one entity
///
/// Appended on grant, drained on revoke. Grant and revoke are authority-only
/// and silently no-ops elsewhere; a non-authoritative caller reaching this
/// path is a usage bug, not a crash.
#[derive(Debug, Default)]
pub struct AbilityLedger {
    granted: Vec<GrantHandle>,
}

impl AbilityLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant every descriptor through the host, recording each handle
    pub fn grant_all(
        &mut self,
        host: &mut dyn AbilityHost,
        role: NetRole,
        abilities: &[AbilityDescriptor],
    ) {
        if !role.is_authoritative() {
            return;
        }
        for descriptor in abilities {
            self.granted.push(host.grant(descriptor));
        }
    }

    /// Revoke every recorded handle, leaving the ledger empty
    pub fn revoke_all(&mut self, host: &mut dyn AbilityHost, role: NetRole) {
        if !role.is_authoritative() {
            return;
        }
        for handle in self.granted.drain(..) {
            host.revoke(handle);
        }
    }

    /// Apply startup effects to the owning entity, best-effort
    ///
    /// Descriptors that fail to build a spec are skipped and the rest still
    /// apply. Runs on both possession and replicated-state-ready paths, so
    /// there is no role gate here.
    pub fn apply_initial_effects(
        &self,
        host: &mut dyn AbilityHost,
        source_id: &str,
        effects: &[EffectDescriptor],
    ) {
        for descriptor in effects {
            if let Ok(spec) = EffectSpec::outgoing(descriptor, source_id) {
                host.apply_effect_to_self(spec);
            }
        }
    }

    /// Number of outstanding grants
    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{ModOp, Modifier};
    use crate::types::Attribute;

    /// Minimal host that records every call
    #[derive(Default)]
    struct RecordingHost {
        next_handle: u64,
        grants: Vec<String>,
        revokes: Vec<GrantHandle>,
        applied: Vec<EffectSpec>,
    }

    impl AbilityHost for RecordingHost {
        fn grant(&mut self, descriptor: &AbilityDescriptor) -> GrantHandle {
            self.next_handle += 1;
            self.grants.push(descriptor.id.clone());
            GrantHandle(self.next_handle)
        }

        fn revoke(&mut self, handle: GrantHandle) {
            self.revokes.push(handle);
        }

        fn apply_effect_to_self(&mut self, spec: EffectSpec) {
            self.applied.push(spec);
        }
    }

    fn loadout() -> Vec<AbilityDescriptor> {
        vec![
            AbilityDescriptor::new("dash", AbilityInput::MovementAbility),
            AbilityDescriptor::new("fire", AbilityInput::WeaponFire),
            AbilityDescriptor::new("overshield", AbilityInput::UtilityAbility),
        ]
    }

    #[test]
    fn test_grant_then_revoke_is_symmetric() {
        let mut host = RecordingHost::default();
        let mut ledger = AbilityLedger::new();

        ledger.grant_all(&mut host, NetRole::Authoritative, &loadout());
        assert_eq!(ledger.len(), 3);
        assert_eq!(host.grants, vec!["dash", "fire", "overshield"]);

        ledger.revoke_all(&mut host, NetRole::Authoritative);
        assert!(ledger.is_empty());
        assert_eq!(host.revokes.len(), 3);
    }

    #[test]
    fn test_non_authoritative_grant_is_noop() {
        let mut host = RecordingHost::default();
        let mut ledger = AbilityLedger::new();

        ledger.grant_all(&mut host, NetRole::Remote, &loadout());
        assert!(ledger.is_empty());
        assert!(host.grants.is_empty());
    }

    #[test]
    fn test_non_authoritative_revoke_keeps_ledger() {
        let mut host = RecordingHost::default();
        let mut ledger = AbilityLedger::new();

        ledger.grant_all(&mut host, NetRole::Authoritative, &loadout());
        ledger.revoke_all(&mut host, NetRole::Remote);

        assert_eq!(ledger.len(), 3);
        assert!(host.revokes.is_empty());
    }

    #[test]
    fn test_invalid_effect_skipped_rest_apply() {
        let mut host = RecordingHost::default();
        let ledger = AbilityLedger::new();

        let effects = vec![
            EffectDescriptor::new(
                "starting_shield",
                vec![Modifier::new(Attribute::MaxShield, ModOp::Override, 50.0)],
            ),
            EffectDescriptor::new("broken", vec![]),
            EffectDescriptor::new(
                "toughness",
                vec![Modifier::new(Attribute::MaxHealth, ModOp::Add, 20.0)],
            ),
        ];
        ledger.apply_initial_effects(&mut host, "player_1", &effects);

        let ids: Vec<_> = host.applied.iter().map(|s| s.effect_id.as_str()).collect();
        assert_eq!(ids, vec!["starting_shield", "toughness"]);
        assert!(host.applied.iter().all(|s| s.source_id == "player_1"));
    }
}
