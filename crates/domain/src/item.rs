//! Item: a scheduling record (who, when, where).

use serde::{Deserialize, Serialize};

use crate::error::{IdExhaustedError, ItemHubError, ValidationError};
use crate::id::ItemId;

/// A scheduling record stored in the collection.
///
/// The legacy field names `nama`, `tanggal` and `alamat` are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(alias = "nama")]
    pub name: String,
    #[serde(alias = "tanggal")]
    pub date: String,
    #[serde(alias = "alamat")]
    pub address: String,
}

impl Item {
    /// Build an item from an identifier and already-validated fields.
    #[must_use]
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            address: draft.address,
        }
    }

    /// Replace every client-supplied field, keeping the identifier.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.date = draft.date;
        self.address = draft.address;
    }
}

/// Compute the identifier for a new item: one past the largest in use.
///
/// # Errors
///
/// Returns [`IdExhaustedError`] when the largest identifier is `u64::MAX`.
pub fn next_id(items: &[Item]) -> Result<ItemId, IdExhaustedError> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.next().ok_or(IdExhaustedError),
        None => Ok(ItemId::FIRST),
    }
}

/// The client-supplied fields of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub date: String,
    pub address: String,
}

impl ItemDraft {
    /// Create a builder for constructing an [`ItemDraft`].
    #[must_use]
    pub fn builder() -> ItemDraftBuilder {
        ItemDraftBuilder::default()
    }

    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ItemHubError> {
        check_fields(&self.name, &self.date, &self.address)
    }
}

fn check_fields(name: &str, date: &str, address: &str) -> Result<(), ItemHubError> {
    for (field, value) in [("name", name), ("date", date), ("address", address)] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field).into());
        }
    }
    Ok(())
}

/// Step-by-step builder for [`ItemDraft`].
///
/// Unset fields build as empty strings and fail validation.
#[derive(Debug, Default)]
pub struct ItemDraftBuilder {
    name: Option<String>,
    date: Option<String>,
    address: Option<String>,
}

impl ItemDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Consume the builder, validate, and return an [`ItemDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`ItemHubError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<ItemDraft, ItemHubError> {
        let draft = ItemDraft {
            name: self.name.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        };
        draft.validate()?;
        Ok(draft)
    }
}
