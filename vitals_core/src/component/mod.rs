//! VitalsComponent - host-facing attribute runtime for one entity

use crate::combat::{resolve_pending_damage, DamageOutcome};
use crate::effects::EffectSpec;
use crate::observe::ChangeHub;
use crate::replication::AttributeUpdate;
use crate::types::{Attribute, AttributeChange, NetRole};
use crate::vitals::VitalSet;

/// Owns one entity's vital set, its observers and its network role
///
/// All writes funnel through the two clamped write paths, every committed
/// change raises exactly one per-attribute notification, and effect
/// executions that touch the in-damage mailbox trigger synchronous damage
/// resolution. Exclusively owned by its entity; single-threaded.
#[derive(Debug)]
pub struct VitalsComponent {
    set: VitalSet,
    hub: ChangeHub,
    role: NetRole,
    /// Guards the consume-then-resolve sequence against reentrant damage
    /// events; a second resolution request while one is in flight is dropped.
    resolving: bool,
}

impl VitalsComponent {
    /// Create with default starting vitals
    pub fn new(role: NetRole) -> Self {
        Self::from_set(VitalSet::new(), role)
    }

    /// Create from a configured starting set
    pub fn from_set(set: VitalSet, role: NetRole) -> Self {
        VitalsComponent {
            set,
            hub: ChangeHub::new(),
            role,
            resolving: false,
        }
    }

    pub fn role(&self) -> NetRole {
        self.role
    }

    pub fn set(&self) -> &VitalSet {
        &self.set
    }

    /// Effective value of an attribute
    pub fn value(&self, attribute: Attribute) -> f64 {
        self.set.value(attribute)
    }

    /// Subscribe to committed changes of one attribute
    pub fn subscribe(&mut self, attribute: Attribute, listener: impl FnMut(f64, f64) + 'static) {
        self.hub.subscribe(attribute, listener);
    }

    fn commit(&mut self, attribute: Attribute, old: f64, new: f64) {
        if old != new {
            self.hub.raise(&AttributeChange::new(attribute, old, new));
        }
    }

    /// Permanent stat change path: clamp, write base, notify
    pub fn apply_base_change(&mut self, attribute: Attribute, proposed: f64) {
        let (old, new) = self.set.write_base(attribute, proposed);
        self.commit(attribute, old, new);
    }

    /// Instantaneous change path: clamp, write current, notify
    pub fn apply_current_change(&mut self, attribute: Attribute, proposed: f64) {
        let (old, new) = self.set.write_current(attribute, proposed);
        self.commit(attribute, old, new);
    }

    /// Execute an effect against this entity's vitals
    ///
    /// Each modifier goes through the instantaneous change path, then the
    /// post-execute hook runs: an effect that touched the in-damage mailbox
    /// resolves immediately. Returns the resolution outcome when damage was
    /// resolved.
    pub fn execute_effect(&mut self, spec: &EffectSpec) -> Option<DamageOutcome> {
        for modifier in &spec.modifiers {
            let proposed = modifier.evaluate(self.set.value(modifier.attribute));
            self.apply_current_change(modifier.attribute, proposed);
        }

        if spec.touches(Attribute::InDamage) {
            self.resolve_in_damage()
        } else {
            None
        }
    }

    /// Convenience damage entry point: signal the mailbox and resolve
    pub fn take_damage(&mut self, amount: f64, source_id: &str) -> Option<DamageOutcome> {
        self.execute_effect(&EffectSpec::damage(amount, source_id))
    }

    fn resolve_in_damage(&mut self) -> Option<DamageOutcome> {
        if self.resolving {
            return None;
        }
        self.resolving = true;

        let (next, outcome) = resolve_pending_damage(&self.set);
        self.set = next;
        for change in &outcome.changes {
            self.hub.raise(change);
        }

        self.resolving = false;
        Some(outcome)
    }

    /// Apply a replicated attribute update from the authoritative instance
    ///
    /// Runs the same clamp and notification path as a local write, so
    /// observers behave identically on remote copies. Per-attribute,
    /// last-write-wins.
    pub fn apply_remote_update(&mut self, update: &AttributeUpdate) {
        self.apply_current_change(update.attribute, update.value);
    }
}
