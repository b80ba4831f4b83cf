//! Remote CRUD collaborator: trait seam, HTTP client, and failure type.

mod client;
mod error;

pub use client::{HttpItemsApi, ItemsApi};
pub use error::RemoteCallFailed;
