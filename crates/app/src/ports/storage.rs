//! Storage port: whole-collection persistence for items.

use std::future::Future;

use itemhub_domain::error::ItemHubError;
use itemhub_domain::item::Item;

/// Repository holding the full item collection.
///
/// The collection is read and written as a unit: every use-case loads it,
/// mutates the in-memory copy, and saves it back. Implementations provide no
/// locking, so two interleaved read-modify-write cycles lose the first write.
pub trait ItemRepository {
    /// Read the whole collection, in stored order.
    ///
    /// An absent store is initialized empty.
    fn load(&self) -> impl Future<Output = Result<Vec<Item>, ItemHubError>> + Send;

    /// Replace the whole collection.
    fn save(&self, items: &[Item]) -> impl Future<Output = Result<(), ItemHubError>> + Send;
}
