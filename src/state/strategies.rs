//! Strategy-list cache and generation-buffer state.
//!
//! DESIGN
//! ======
//! The cache is a replica of server truth, never the source of it: every
//! transition here either copies a server payload in wholesale or applies an
//! optimistic write that a later revalidation is allowed to overwrite. Each
//! mutating operation declares how it reconciles via [`CachePolicy`] so the
//! contract lives in types instead of in function bodies.

#[cfg(test)]
#[path = "strategies_test.rs"]
mod strategies_test;

use crate::net::types::{Strategy, StrategyStatus};

/// Mutating operations against the server-side strategy collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Save,
    Delete,
    Toggle,
}

/// How a mutation reconciles the local cache with the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Refetch the full listing after a successful call; a failed call
    /// leaves the cache untouched. Never guesses server-assigned fields.
    Revalidate,
    /// Rewrite the cache locally before confirmation; a failed call forces
    /// a full resync to restore server truth.
    WriteThrough,
}

impl Mutation {
    /// The single declaration table for cache reconciliation.
    ///
    /// Create and delete are pessimistic: identity and listing correctness
    /// matter more than latency, and refetching avoids inventing a
    /// plausible-but-wrong id. Toggling is optimistic: low-risk and driven
    /// by an interactive switch.
    pub fn cache_policy(self) -> CachePolicy {
        match self {
            Self::Save | Self::Delete => CachePolicy::Revalidate,
            Self::Toggle => CachePolicy::WriteThrough,
        }
    }

    /// Short label used in diagnostic logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Save => "strategy save",
            Self::Delete => "strategy delete",
            Self::Toggle => "status update",
        }
    }
}

/// Per-operation pending flags.
///
/// One flag per logical operation rather than a single shared busy boolean,
/// so overlapping calls cannot clear each other's indicator early.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingOps {
    pub list: bool,
    pub generate: bool,
    pub save: bool,
    pub delete: bool,
    pub toggle: bool,
}

impl PendingOps {
    pub fn begin(&mut self, mutation: Mutation) {
        *self.slot(mutation) = true;
    }

    pub fn finish(&mut self, mutation: Mutation) {
        *self.slot(mutation) = false;
    }

    /// True when any request is in flight.
    pub fn any(self) -> bool {
        self.list || self.generate || self.save || self.delete || self.toggle
    }

    fn slot(&mut self, mutation: Mutation) -> &mut bool {
        match mutation {
            Mutation::Save => &mut self.save,
            Mutation::Delete => &mut self.delete,
            Mutation::Toggle => &mut self.toggle,
        }
    }
}

/// Shared state for the strategy workspace.
#[derive(Clone, Debug, Default)]
pub struct StrategiesState {
    /// Cache of the server's strategy collection. Possibly stale after any
    /// mutating call until a revalidation confirms it.
    pub strategies: Vec<Strategy>,
    /// The generation buffer: the most recent AI output, not yet persisted.
    /// At most one exists; a new generation overwrites an unsaved one.
    pub generated_code: String,
    pub pending: PendingOps,
    /// Bumped on each successful save so the view can close its dialog and
    /// clear transient inputs without polling.
    pub save_seq: u64,
}

impl StrategiesState {
    /// Replace the cache wholesale with a server listing. No merge.
    pub fn replace_strategies(&mut self, items: Vec<Strategy>) {
        self.strategies = items;
    }

    pub fn set_generated_code(&mut self, code: String) {
        self.generated_code = code;
    }

    pub fn clear_generated_code(&mut self) {
        self.generated_code.clear();
    }

    /// Optimistically rewrite one entry's status, returning the prior value.
    ///
    /// Returns `None` (and changes nothing) when the id is not cached.
    pub fn apply_status(&mut self, id: &str, status: StrategyStatus) -> Option<StrategyStatus> {
        let entry = self.strategies.iter_mut().find(|s| s.id == id)?;
        let prior = entry.status;
        entry.status = status;
        Some(prior)
    }

    /// Rollback counterpart of [`apply_status`](Self::apply_status).
    pub fn restore_status(&mut self, id: &str, prior: StrategyStatus) {
        if let Some(entry) = self.strategies.iter_mut().find(|s| s.id == id) {
            entry.status = prior;
        }
    }
}
