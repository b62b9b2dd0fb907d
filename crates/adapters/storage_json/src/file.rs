//! Backing-file implementation of [`ItemRepository`].

use std::ffi::{OsStr, OsString};
use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::fs;

use itemhub_app::ports::ItemRepository;
use itemhub_domain::error::ItemHubError;
use itemhub_domain::item::Item;

use crate::error::StorageError;

/// Configuration for the JSON file storage adapter.
pub struct Config {
    /// Location of the backing file (e.g. `data.json` or `/tmp/data.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build a [`JsonFileItemRepository`] from this configuration.
    ///
    /// Creates the backing file, and any missing parent directory, holding an
    /// empty array when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be created.
    pub async fn build(self) -> Result<JsonFileItemRepository, StorageError> {
        JsonFileItemRepository::initialize(self.path).await
    }
}

/// Item repository persisting the whole collection as one JSON array file.
///
/// Nothing is cached: every `load` reads the file again and every `save`
/// replaces it.
pub struct JsonFileItemRepository {
    path: PathBuf,
}

impl JsonFileItemRepository {
    async fn initialize(path: PathBuf) -> Result<Self, StorageError> {
        let repo = Self { path };
        if repo.ensure_exists().await? {
            tracing::info!(path = %repo.path.display(), "created empty backing file");
        }
        Ok(repo)
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Json {
            path: self.path.clone(),
            source,
        }
    }

    /// Write an empty array when the file is absent. Returns whether it was created.
    async fn ensure_exists(&self) -> Result<bool, StorageError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|err| self.io_error(err))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, b"[]")
            .await
            .map_err(|err| self.io_error(err))?;
        Ok(true)
    }

    async fn read(&self) -> Result<Vec<Item>, StorageError> {
        self.ensure_exists().await?;

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|err| self.io_error(err))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|err| self.json_error(err))
    }

    /// Sibling path the new content is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_else(|| OsStr::new("items")));
        name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
        self.path.with_file_name(name)
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, bytes).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.io_error(err));
        }
        if let Err(err) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.io_error(err));
        }
        Ok(())
    }
}

impl ItemRepository for JsonFileItemRepository {
    fn load(&self) -> impl Future<Output = Result<Vec<Item>, ItemHubError>> + Send {
        async move { Ok(self.read().await?) }
    }

    fn save(&self, items: &[Item]) -> impl Future<Output = Result<(), ItemHubError>> + Send {
        let encoded = serde_json::to_vec_pretty(items);
        let count = items.len();
        async move {
            let bytes = encoded.map_err(|err| self.json_error(err))?;
            self.write(&bytes).await?;
            tracing::debug!(path = %self.path.display(), count, "backing file updated");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemhub_domain::id::ItemId;
    use itemhub_domain::item::ItemDraft;

    /// A backing file inside a fresh directory under the system temp dir.
    struct TempStore {
        dir: PathBuf,
    }

    impl TempStore {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("itemhub_store_{}", uuid::Uuid::new_v4()));
            Self { dir }
        }

        fn file(&self) -> PathBuf {
            self.dir.join("data.json")
        }

        async fn repo(&self) -> JsonFileItemRepository {
            Config { path: self.file() }.build().await.unwrap()
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    fn item(id: u64, name: &str) -> Item {
        let draft = ItemDraft::builder()
            .name(name)
            .date("2024-01-01")
            .address("Jl. Melati 3")
            .build()
            .unwrap();
        Item::new(ItemId::new(id), draft)
    }

    #[tokio::test]
    async fn should_create_empty_array_file_when_missing() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;

        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "[]");
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_recreate_file_when_deleted_after_startup() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;
        std::fs::remove_file(repo.path()).unwrap();

        assert!(repo.load().await.unwrap().is_empty());
        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn should_keep_existing_content_on_build() {
        let tmp = TempStore::new();
        std::fs::create_dir_all(&tmp.dir).unwrap();
        std::fs::write(
            tmp.file(),
            r#"[{"id":4,"name":"A","date":"2024-01-01","address":"X"}]"#,
        )
        .unwrap();

        let repo = tmp.repo().await;
        let items = repo.load().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::new(4));
    }

    #[tokio::test]
    async fn should_save_then_load_same_items_in_order() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;
        let items = vec![item(2, "B"), item(1, "A")];

        repo.save(&items).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn should_write_pretty_printed_array() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;

        repo.save(&[item(1, "A")]).await.unwrap();
        let content = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"id\": 1,\n    \"name\": \"A\",\n    \"date\": \"2024-01-01\",\n    \"address\": \"Jl. Melati 3\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn should_not_leave_staging_files_after_save() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;

        repo.save(&[item(1, "A")]).await.unwrap();
        repo.save(&[item(1, "A"), item(2, "B")]).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(&tmp.dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("data.json")]);
    }

    #[tokio::test]
    async fn should_surface_storage_error_and_clean_staging_when_replace_fails() {
        let tmp = TempStore::new();
        std::fs::create_dir_all(tmp.file()).unwrap();
        let repo = tmp.repo().await;

        let result = repo.save(&[item(1, "A")]).await;
        assert!(matches!(result, Err(ItemHubError::Storage(_))));

        let entries: Vec<_> = std::fs::read_dir(&tmp.dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("data.json")]);
    }

    #[tokio::test]
    async fn should_treat_blank_file_as_empty_collection() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;
        std::fs::write(repo.path(), "  \n").unwrap();

        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_surface_storage_error_when_file_malformed() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;
        std::fs::write(repo.path(), "{not json").unwrap();

        let result = repo.load().await;
        assert!(matches!(result, Err(ItemHubError::Storage(_))));
    }

    #[tokio::test]
    async fn should_read_legacy_field_names() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;
        std::fs::write(
            repo.path(),
            r#"[{"id":1,"nama":"A","tanggal":"2024-01-01","alamat":"X"}]"#,
        )
        .unwrap();

        let items = repo.load().await.unwrap();
        assert_eq!(items[0].name, "A");
        assert_eq!(items[0].address, "X");
    }

    /// The store has no concurrency guard: two read-modify-write cycles that
    /// interleave silently drop the first write (last writer wins).
    #[tokio::test]
    async fn should_lose_first_update_when_two_writers_interleave() {
        let tmp = TempStore::new();
        let repo = tmp.repo().await;

        let mut first = repo.load().await.unwrap();
        let mut second = repo.load().await.unwrap();
        first.push(item(1, "from first writer"));
        second.push(item(1, "from second writer"));
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let stored = repo.load().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "from second writer");
    }
}
