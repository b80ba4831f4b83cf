//! Base collection plus a ledger of pending speculative mutations.

use thiserror::Error;

use crate::mvi::Reducer;
use crate::optimistic::item::Item;
use crate::optimistic::mutation::{Mutation, MutationId};
use crate::optimistic::reducer::{Collection, CollectionReducer};

/// Errors returned by store transitions. The store is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The mutation was never applied, or has already been committed or rolled back.
    #[error("Mutation {0} is not pending")]
    UnknownMutation(MutationId),

    /// The base cannot be replaced while speculative mutations are in flight.
    #[error("{count} mutation(s) still pending")]
    PendingMutations { count: usize },

    /// The store changed since the revision the caller based its update on.
    #[error("Store moved from revision {expected} to {actual}")]
    Stale { expected: u64, actual: u64 },
}

/// Result of [`OptimisticStore::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Handle used to commit or roll back the mutation later.
    pub id: MutationId,
    /// Displayed collection with the new mutation folded in.
    pub displayed: Collection,
}

/// Optimistic mutation store.
///
/// The displayed collection is always `base` folded through `pending` in
/// insertion order. It is recomputed after every transition and never
/// edited in place.
#[derive(Debug, Clone, Default)]
pub struct OptimisticStore {
    base: Collection,
    pending: Vec<(MutationId, Mutation)>,
    displayed: Collection,
    next_id: u64,
    revision: u64,
}

impl OptimisticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(items: Vec<Item>) -> Self {
        let base = Collection::new(items);
        Self {
            displayed: base.clone(),
            base,
            pending: Vec::new(),
            next_id: 0,
            revision: 0,
        }
    }

    /// Last committed collection.
    pub fn base(&self) -> &Collection {
        &self.base
    }

    /// Base with every pending mutation folded in.
    pub fn displayed(&self) -> &Collection {
        &self.displayed
    }

    /// Counter bumped by every transition (apply, commit, rollback, reset).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_pending(&self, id: MutationId) -> bool {
        self.position(id).is_some()
    }

    /// Pending mutations in application order.
    pub fn pending(&self) -> impl Iterator<Item = (MutationId, &Mutation)> {
        self.pending.iter().map(|(id, m)| (*id, m))
    }

    /// Record `mutation` as pending and return the new displayed collection.
    pub fn apply(&mut self, mutation: Mutation) -> Applied {
        let id = MutationId(self.next_id);
        self.next_id += 1;

        self.pending.push((id, mutation));
        self.recompute();

        Applied {
            id,
            displayed: self.displayed.clone(),
        }
    }

    /// Fold a pending mutation permanently into the base.
    pub fn commit(&mut self, id: MutationId) -> Result<Mutation, StoreError> {
        let mutation = self.take(id)?;
        let base = std::mem::take(&mut self.base);
        self.base = CollectionReducer::reduce(base, mutation.clone());
        self.recompute();
        Ok(mutation)
    }

    /// Discard a pending mutation as if it had never been applied.
    pub fn rollback(&mut self, id: MutationId) -> Result<Mutation, StoreError> {
        let mutation = self.take(id)?;
        self.recompute();
        Ok(mutation)
    }

    /// Replace the base with a fresh server listing.
    pub fn reset_base(&mut self, items: Vec<Item>) -> Result<(), StoreError> {
        if self.has_pending() {
            return Err(StoreError::PendingMutations {
                count: self.pending.len(),
            });
        }
        self.base = Collection::new(items);
        self.recompute();
        Ok(())
    }

    /// Like [`reset_base`](Self::reset_base), but only if nothing has happened
    /// since `revision`. A listing fetched before a commit would otherwise
    /// erase that commit.
    pub fn reset_base_at(&mut self, revision: u64, items: Vec<Item>) -> Result<(), StoreError> {
        if self.revision != revision {
            return Err(StoreError::Stale {
                expected: revision,
                actual: self.revision,
            });
        }
        self.reset_base(items)
    }

    fn position(&self, id: MutationId) -> Option<usize> {
        self.pending.iter().position(|(pending_id, _)| *pending_id == id)
    }

    fn take(&mut self, id: MutationId) -> Result<Mutation, StoreError> {
        let pos = self.position(id).ok_or(StoreError::UnknownMutation(id))?;
        Ok(self.pending.remove(pos).1)
    }

    fn recompute(&mut self) {
        self.revision += 1;
        self.displayed = CollectionReducer::fold(
            self.base.clone(),
            self.pending.iter().map(|(_, m)| m.clone()),
        );
    }
}
