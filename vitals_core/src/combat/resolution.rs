//! Shield-then-health absorption of a pending damage event

use super::result::DamageOutcome;
use crate::types::{Attribute, AttributeChange};
use crate::vitals::VitalSet;

/// Resolve the pending damage recorded in the in-damage mailbox (immutable API)
///
/// Returns the new set state and the resolution outcome. Deterministic,
/// synchronous, consume-once:
/// 1. Reads the mailbox and immediately zeroes it, so a later event never
///    sees a stale positive value.
/// 2. Zero or negative pending damage is a no-op, not healing.
/// 3. Shield absorbs up to its current value before health is touched.
/// 4. Damage beyond current health is discarded; health never goes negative.
///
/// Every committed write lands in `outcome.changes` so the caller can raise
/// the matching change notifications.
pub fn resolve_pending_damage(set: &VitalSet) -> (VitalSet, DamageOutcome) {
    let mut next = set.clone();
    let mut outcome = DamageOutcome::new();

    outcome.shield_before = next.value(Attribute::Shield);
    outcome.health_before = next.value(Attribute::Health);
    outcome.shield_after = outcome.shield_before;
    outcome.health_after = outcome.health_before;

    // Consume the mailbox before anything else
    let pending = next.value(Attribute::InDamage);
    let (old, new) = next.write_current(Attribute::InDamage, 0.0);
    if old != new {
        outcome
            .changes
            .push(AttributeChange::new(Attribute::InDamage, old, new));
    }

    if pending <= 0.0 {
        return (next, outcome);
    }
    outcome.damage = pending;

    let shield = next.value(Attribute::Shield);
    if shield > 0.0 {
        let absorbed = shield.min(pending);
        let (old, new) = next.write_current(Attribute::Shield, shield - absorbed);
        outcome
            .changes
            .push(AttributeChange::new(Attribute::Shield, old, new));
        outcome.absorbed_by_shield = absorbed;
    }

    let remaining = pending - outcome.absorbed_by_shield;
    if remaining > 0.0 {
        let health = next.value(Attribute::Health);
        let absorbed = health.min(remaining);
        let (old, new) = next.write_current(Attribute::Health, health - absorbed);
        if old != new {
            outcome
                .changes
                .push(AttributeChange::new(Attribute::Health, old, new));
        }
        outcome.absorbed_by_health = absorbed;
        outcome.overkill = remaining - absorbed;
    }

    outcome.shield_after = next.value(Attribute::Shield);
    outcome.health_after = next.value(Attribute::Health);
    outcome.is_killing_blow = outcome.health_before > 0.0 && outcome.health_after <= 0.0;

    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(shield: f64, max_shield: f64, health: f64, max_health: f64) -> VitalSet {
        let mut set = VitalSet::new();
        set.write_current(Attribute::MaxShield, max_shield);
        set.write_current(Attribute::Shield, shield);
        set.write_current(Attribute::MaxHealth, max_health);
        set.write_current(Attribute::Health, health);
        set
    }

    fn with_pending(mut set: VitalSet, damage: f64) -> VitalSet {
        set.write_current(Attribute::InDamage, damage);
        set
    }

    #[test]
    fn test_shield_takes_priority() {
        let set = with_pending(set_with(30.0, 50.0, 40.0, 60.0), 20.0);
        let (next, outcome) = resolve_pending_damage(&set);

        assert!((next.value(Attribute::Shield) - 10.0).abs() < f64::EPSILON);
        assert!((next.value(Attribute::Health) - 40.0).abs() < f64::EPSILON);
        assert!(next.value(Attribute::InDamage).abs() < f64::EPSILON);
        assert!((outcome.absorbed_by_shield - 20.0).abs() < f64::EPSILON);
        assert!(outcome.absorbed_by_health.abs() < f64::EPSILON);
    }

    #[test]
    fn test_overflow_reaches_health() {
        let set = with_pending(set_with(10.0, 50.0, 40.0, 60.0), 25.0);
        let (next, outcome) = resolve_pending_damage(&set);

        assert!(next.value(Attribute::Shield).abs() < f64::EPSILON);
        assert!((next.value(Attribute::Health) - 25.0).abs() < f64::EPSILON);
        assert!(next.value(Attribute::InDamage).abs() < f64::EPSILON);
        assert!((outcome.absorbed_by_shield - 10.0).abs() < f64::EPSILON);
        assert!((outcome.absorbed_by_health - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overkill_discarded() {
        let set = with_pending(set_with(0.0, 0.0, 5.0, 60.0), 100.0);
        let (next, outcome) = resolve_pending_damage(&set);

        assert!(next.value(Attribute::Shield).abs() < f64::EPSILON);
        assert!(next.value(Attribute::Health).abs() < f64::EPSILON);
        assert!(next.value(Attribute::InDamage).abs() < f64::EPSILON);
        assert!((outcome.overkill - 95.0).abs() < f64::EPSILON);
        assert!(outcome.is_killing_blow);
    }

    #[test]
    fn test_zero_damage_is_noop() {
        let set = with_pending(set_with(30.0, 50.0, 40.0, 60.0), 0.0);
        let (next, outcome) = resolve_pending_damage(&set);

        assert!((next.value(Attribute::Shield) - 30.0).abs() < f64::EPSILON);
        assert!((next.value(Attribute::Health) - 40.0).abs() < f64::EPSILON);
        assert!(outcome.damage.abs() < f64::EPSILON);
        assert!(outcome.changes.is_empty());
    }

    #[test]
    fn test_negative_damage_is_not_healing() {
        let set = with_pending(set_with(10.0, 50.0, 20.0, 60.0), -5.0);
        let (next, _) = resolve_pending_damage(&set);

        assert!((next.value(Attribute::Shield) - 10.0).abs() < f64::EPSILON);
        assert!((next.value(Attribute::Health) - 20.0).abs() < f64::EPSILON);
        assert!(next.value(Attribute::InDamage).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mailbox_consumed_exactly_once() {
        let set = with_pending(set_with(30.0, 50.0, 40.0, 60.0), 20.0);
        let (next, _) = resolve_pending_damage(&set);
        assert!(next.value(Attribute::InDamage).abs() < f64::EPSILON);

        // Re-running against the resolved state must not double-apply.
        let (again, outcome) = resolve_pending_damage(&next);
        assert_eq!(again, next);
        assert!(outcome.damage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_changes_record_commit_order() {
        let set = with_pending(set_with(10.0, 50.0, 40.0, 60.0), 25.0);
        let (_, outcome) = resolve_pending_damage(&set);

        let attrs: Vec<_> = outcome.changes.iter().map(|c| c.attribute).collect();
        assert_eq!(
            attrs,
            vec![Attribute::InDamage, Attribute::Shield, Attribute::Health]
        );
        assert!((outcome.changes[1].old - 10.0).abs() < f64::EPSILON);
        assert!(outcome.changes[1].new.abs() < f64::EPSILON);
        assert!((outcome.changes[2].old - 40.0).abs() < f64::EPSILON);
        assert!((outcome.changes[2].new - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_shield_kill_is_not_killing_blow() {
        let set = with_pending(set_with(25.0, 50.0, 40.0, 60.0), 25.0);
        let (next, outcome) = resolve_pending_damage(&set);

        assert!(next.value(Attribute::Shield).abs() < f64::EPSILON);
        assert!((next.value(Attribute::Health) - 40.0).abs() < f64::EPSILON);
        assert!(!outcome.is_killing_blow);
    }
}
