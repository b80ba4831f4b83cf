use std::fmt;

use crate::mvi::Intent;
use crate::optimistic::item::{Item, ItemId};

/// A speculative change to the collection, applied before the remote
/// call that confirms it has resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Add(Item),
    Delete(ItemId),
}

impl Mutation {
    /// Id of the item this mutation touches.
    pub fn item_id(&self) -> ItemId {
        match self {
            Mutation::Add(item) => item.id,
            Mutation::Delete(id) => *id,
        }
    }
}

impl Intent for Mutation {}

/// Identity of a pending mutation, assigned by the store on `apply`.
///
/// Resolution goes through this id rather than a position in the pending
/// ledger, so resolving one mutation never disturbs another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationId(pub(crate) u64);

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}
