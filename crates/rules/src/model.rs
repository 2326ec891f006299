use chrono::{DateTime, Utc};
use serde_json::Value;

/// The immutable aggregate of all gathering rules loaded at startup.
///
/// Rule payloads are opaque to this service: each item is an untyped
/// JSON tree passed through to clients unchanged. A rule set is either
/// fully loaded or the load failed; partial sets are never exposed.
/// Once constructed it is never written again, so concurrent reads need
/// no locking.
#[derive(Debug, Clone)]
pub struct RuleSet {
    items: Vec<Value>,
    loaded_at: DateTime<Utc>,
}

impl RuleSet {
    /// Build a rule set from already-parsed rule items.
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            loaded_at: Utc::now(),
        }
    }

    /// The loaded rule definitions, in deterministic on-disk order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// When the load completed.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the load yielded zero rules.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
