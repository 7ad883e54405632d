//! Damage resolution - consume the in-damage mailbox against shield then health

mod resolution;
mod result;

pub use resolution::resolve_pending_damage;
pub use result::DamageOutcome;
