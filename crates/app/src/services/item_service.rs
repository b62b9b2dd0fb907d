//! Item service: use-cases for managing the item collection.

use itemhub_domain::error::{ItemHubError, NotFoundError};
use itemhub_domain::id::ItemId;
use itemhub_domain::item::{Item, ItemDraft, next_id};

use crate::ports::ItemRepository;

/// Application service for item CRUD operations.
///
/// Every operation re-reads the whole collection from the repository; nothing
/// is cached between calls.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all items in stored order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<Item>, ItemHubError> {
        self.repo.load().await
    }

    /// Validate the draft, assign the next identifier, and append the item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::Validation`] if a field is missing, or a
    /// storage error from the repository. The store is untouched on
    /// validation failure.
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, ItemHubError> {
        draft.validate()?;

        let mut items = self.repo.load().await?;
        let item = Item::new(next_id(&items)?, draft);
        items.push(item.clone());
        self.repo.save(&items).await?;

        tracing::info!(id = %item.id, "item created");
        Ok(item)
    }

    /// Replace the fields of the item with `id`, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::Validation`] if a field is missing,
    /// [`ItemHubError::NotFound`] when no item has `id`, or a storage error.
    pub async fn update_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemHubError> {
        draft.validate()?;

        let mut items = self.repo.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| not_found(id))?;
        item.apply(draft);
        let updated = item.clone();
        self.repo.save(&items).await?;

        tracing::info!(%id, "item updated");
        Ok(updated)
    }

    /// Remove the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::NotFound`] when no item has `id`, or a
    /// storage error from the repository.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), ItemHubError> {
        let mut items = self.repo.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(not_found(id));
        }
        self.repo.save(&items).await?;

        tracing::info!(%id, "item deleted");
        Ok(())
    }
}

fn not_found(id: ItemId) -> ItemHubError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}
