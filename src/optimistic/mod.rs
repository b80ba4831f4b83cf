//! Optimistic updates over an item collection.
//!
//! [`OptimisticStore`] is the synchronous core: apply a mutation to render
//! it immediately, then commit or roll it back once the remote call that
//! confirms it resolves. [`OptimisticList`] runs that protocol against an
//! [`ItemsApi`](crate::remote::ItemsApi).

mod item;
mod list;
mod mutation;
mod reducer;
mod store;

pub use item::{Item, ItemId, ItemIdGenerator};
pub use list::{DeleteOutcome, ListError, OptimisticList};
pub use mutation::{Mutation, MutationId};
pub use reducer::{Collection, CollectionReducer};
pub use store::{Applied, OptimisticStore, StoreError};
