//! Drives the optimistic store against a remote items endpoint.
//!
//! Every user intent becomes one mutation: apply it, publish the new
//! displayed collection, issue the remote call, then commit or roll back
//! exactly once. The store lock is only held for the synchronous
//! transitions, never across an await point.

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;

use crate::optimistic::item::{Item, ItemId, ItemIdGenerator};
use crate::optimistic::mutation::{Mutation, MutationId};
use crate::optimistic::reducer::Collection;
use crate::optimistic::store::{OptimisticStore, StoreError};
use crate::remote::{ItemsApi, RemoteCallFailed};

/// Errors surfaced by [`OptimisticList`] operations.
///
/// A `Remote` error means the speculative change has already been rolled
/// back; presentation code may ignore it.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Cannot refresh while {pending} mutation(s) are pending")]
    Busy { pending: usize },

    #[error("Collection changed while refreshing, listing discarded")]
    Superseded,

    #[error("Remote call failed, change rolled back: {0}")]
    Remote(#[from] RemoteCallFailed),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of [`OptimisticList::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The item was removed remotely and the removal committed.
    Deleted(Item),
    /// No displayed item had this id; nothing was sent.
    NotFound,
}

/// Optimistic item list bound to an [`ItemsApi`].
pub struct OptimisticList<A> {
    api: A,
    store: Mutex<OptimisticStore>,
    ids: ItemIdGenerator,
    displayed: watch::Sender<Collection>,
}

impl<A: ItemsApi> OptimisticList<A> {
    pub fn new(api: A) -> Self {
        Self::with_items(api, Vec::new())
    }

    pub fn with_items(api: A, items: Vec<Item>) -> Self {
        let store = OptimisticStore::with_base(items);
        let (displayed, _) = watch::channel(store.displayed().clone());
        Self {
            api,
            store: Mutex::new(store),
            ids: ItemIdGenerator::new(),
            displayed,
        }
    }

    /// Receiver that sees every displayed collection as soon as it changes.
    pub fn subscribe(&self) -> watch::Receiver<Collection> {
        self.displayed.subscribe()
    }

    /// Current displayed collection.
    pub fn snapshot(&self) -> Collection {
        self.store.lock().displayed().clone()
    }

    /// Last committed collection.
    pub fn committed(&self) -> Collection {
        self.store.lock().base().clone()
    }

    pub fn pending_len(&self) -> usize {
        self.store.lock().pending_len()
    }

    /// Optimistically add an item named `name`.
    ///
    /// Blank names are refused; any other name is sent as typed.
    pub async fn add(&self, name: &str) -> Result<Item, ListError> {
        if name.trim().is_empty() {
            return Err(ListError::EmptyName);
        }

        let item = Item::new(self.ids.next_id(), name);
        let pending = self.apply(Mutation::Add(item.clone()));

        match self.api.create(&item).await {
            Ok(created) => {
                self.resolve(pending, true)?;
                tracing::info!(item_id = %item.id, remote_id = %created.id, name = %item.name, "Item added");
                Ok(item)
            }
            Err(err) => {
                self.resolve(pending, false)?;
                tracing::warn!(item_id = %item.id, kind = err.kind(), error = %err, "Adding item failed, rolled back");
                Err(err.into())
            }
        }
    }

    /// Optimistically delete the item with `id`.
    ///
    /// An id that is not currently displayed is reported as
    /// [`DeleteOutcome::NotFound`] without touching the store or the remote.
    pub async fn delete(&self, id: ItemId) -> Result<DeleteOutcome, ListError> {
        let Some(item) = self.store.lock().displayed().get(id).cloned() else {
            tracing::debug!(item_id = %id, "Delete ignored, item not displayed");
            return Ok(DeleteOutcome::NotFound);
        };

        let pending = self.apply(Mutation::Delete(id));

        match self.api.delete(id).await {
            Ok(()) => {
                self.resolve(pending, true)?;
                tracing::info!(item_id = %id, "Item deleted");
                Ok(DeleteOutcome::Deleted(item))
            }
            Err(err) => {
                self.resolve(pending, false)?;
                tracing::warn!(item_id = %id, kind = err.kind(), error = %err, "Deleting item failed, rolled back");
                Err(err.into())
            }
        }
    }

    /// Replace the committed collection with the endpoint's listing.
    ///
    /// Refused while mutations are in flight, since their resolution would
    /// be folded onto a base they were not applied against. If anything is
    /// applied or resolved while the listing is in flight, the listing may
    /// predate it and is discarded with [`ListError::Superseded`].
    pub async fn refresh(&self) -> Result<Collection, ListError> {
        let revision = {
            let store = self.store.lock();
            if store.has_pending() {
                return Err(ListError::Busy {
                    pending: store.pending_len(),
                });
            }
            store.revision()
        };

        let items = self.api.list(None).await?;

        let displayed = {
            let mut store = self.store.lock();
            store.reset_base_at(revision, items).map_err(|err| match err {
                StoreError::Stale { .. } => ListError::Superseded,
                StoreError::PendingMutations { count } => ListError::Busy { pending: count },
                other => ListError::Store(other),
            })?;
            store.displayed().clone()
        };

        tracing::debug!(count = displayed.len(), "Collection refreshed");
        self.displayed.send_replace(displayed.clone());
        Ok(displayed)
    }

    fn apply(&self, mutation: Mutation) -> MutationId {
        let item_id = mutation.item_id();
        let applied = {
            let mut store = self.store.lock();
            store.apply(mutation)
        };
        tracing::debug!(mutation = %applied.id, %item_id, shown = applied.displayed.len(), "Mutation applied");
        self.displayed.send_replace(applied.displayed);
        applied.id
    }

    fn resolve(&self, id: MutationId, succeeded: bool) -> Result<(), StoreError> {
        let displayed = {
            let mut store = self.store.lock();
            if succeeded {
                store.commit(id)?;
            } else {
                store.rollback(id)?;
            }
            store.displayed().clone()
        };
        self.displayed.send_replace(displayed);
        Ok(())
    }
}
