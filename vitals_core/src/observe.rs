//! ChangeHub - per-attribute change subscriptions

use crate::types::{Attribute, AttributeChange};
use std::collections::HashMap;

/// Callback invoked with `(old, new)` when a subscribed attribute changes
pub type ChangeListener = Box<dyn FnMut(f64, f64)>;

/// Synchronous, in-process observer lists keyed by attribute
///
/// Consumers subscribe per attribute (health and shield, typically) and are
/// invoked once per committed change, in subscription order, on the same
/// logical thread as the write.
#[derive(Default)]
pub struct ChangeHub {
    listeners: HashMap<Attribute, Vec<ChangeListener>>,
}

impl ChangeHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to changes of one attribute
    pub fn subscribe(&mut self, attribute: Attribute, listener: impl FnMut(f64, f64) + 'static) {
        self.listeners
            .entry(attribute)
            .or_default()
            .push(Box::new(listener));
    }

    /// Raise a committed change to that attribute's subscribers
    pub fn raise(&mut self, change: &AttributeChange) {
        if let Some(listeners) = self.listeners.get_mut(&change.attribute) {
            for listener in listeners.iter_mut() {
                listener(change.old, change.new);
            }
        }
    }

    /// Number of subscribers for an attribute
    pub fn listener_count(&self, attribute: Attribute) -> usize {
        self.listeners.get(&attribute).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for ChangeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self.listeners.iter().map(|(a, l)| (a, l.len())).collect();
        f.debug_struct("ChangeHub").field("listeners", &counts).finish()
    }
}
