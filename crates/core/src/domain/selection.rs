use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::module::ModuleId;

/// The set of modules a prospect has chosen.
///
/// The base module is pinned: it is inserted at construction and `toggle`
/// refuses to remove it. Every mutation returns a new snapshot, so callers
/// can hold selections as plain values and replay any sequence of edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    base: ModuleId,
    chosen: BTreeSet<ModuleId>,
}

impl Selection {
    /// A fresh selection containing only the base module.
    pub fn new(base: ModuleId) -> Self {
        let mut chosen = BTreeSet::new();
        chosen.insert(base.clone());
        Self { base, chosen }
    }

    /// A selection seeded with extra modules on top of the base.
    pub fn with_modules<I>(base: ModuleId, extras: I) -> Self
    where
        I: IntoIterator<Item = ModuleId>,
    {
        let mut selection = Self::new(base);
        selection.chosen.extend(extras);
        selection
    }

    pub fn base(&self) -> &ModuleId {
        &self.base
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.chosen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Only reachable through deserialized data that bypassed the
    /// constructors; guarded by the quote validator.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Add `id` if absent, remove it if present. Toggling the base module
    /// is a no-op.
    pub fn toggle(&self, id: &ModuleId) -> Self {
        if id == &self.base {
            return self.clone();
        }

        let mut next = self.clone();
        if !next.chosen.remove(id) {
            next.chosen.insert(id.clone());
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleId> {
        self.chosen.iter()
    }
}
