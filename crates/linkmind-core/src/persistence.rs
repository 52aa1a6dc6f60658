use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::store::Snapshot;

/// String key-value storage in the shape of the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow};
    use tempfile::NamedTempFile;
    use tracing::{debug, info};

    use super::KeyValueStorage;

    /// One `<key>.json` file per key inside a directory.
    #[derive(Debug)]
    pub struct FileStorage {
        pub dir: PathBuf,
    }

    impl FileStorage {
        #[tracing::instrument(skip(dir))]
        pub fn open(dir: &Path) -> anyhow::Result<Self> {
            let dir = dir.to_path_buf();
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            info!(dir = %dir.display(), "opened file storage");
            Ok(Self { dir })
        }

        fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
                && !key.starts_with('.');
            if !valid {
                return Err(anyhow!("invalid storage key: {key:?}"));
            }
            Ok(self.dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            let path = self.path_for(key)?;
            if !path.exists() {
                debug!(file = %path.display(), "storage key not present");
                return Ok(None);
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            Ok(Some(raw))
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            let path = self.path_for(key)?;
            debug!(file = %path.display(), bytes = value.len(), "writing storage key atomically");
            let mut temp = NamedTempFile::new_in(&self.dir)?;
            temp.write_all(value.as_bytes())?;
            temp.flush()?;
            temp.persist(&path)
                .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;
            Ok(())
        }
    }
}

/// Reads the dashboard document. A missing key yields a fresh snapshot seeded with the
/// configured default categories; malformed JSON is an error.
#[tracing::instrument(skip(storage, config), fields(key = %config.storage.data_key))]
pub fn load_snapshot(
    storage: &impl KeyValueStorage,
    config: &DashboardConfig,
) -> anyhow::Result<Snapshot> {
    let key = &config.storage.data_key;
    let Some(raw) = storage.get(key)? else {
        info!("no saved dashboard; starting with default categories");
        return Ok(Snapshot::with_categories(config.categories.defaults.clone()));
    };

    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing saved dashboard at key {key}"))?;
    debug!(
        tasks = snapshot.tasks.len(),
        links = snapshot.links.len(),
        categories = snapshot.categories.len(),
        "loaded dashboard"
    );
    Ok(snapshot)
}

#[tracing::instrument(skip_all, fields(key = %config.storage.data_key))]
pub fn save_snapshot(
    storage: &impl KeyValueStorage,
    config: &DashboardConfig,
    snapshot: &Snapshot,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(snapshot).context("failed encoding dashboard")?;
    storage
        .set(&config.storage.data_key, &json)
        .context("failed saving dashboard")?;
    debug!(
        tasks = snapshot.tasks.len(),
        links = snapshot.links.len(),
        categories = snapshot.categories.len(),
        "saved dashboard"
    );
    Ok(())
}

/// `None` when no preference has been stored yet.
#[tracing::instrument(skip_all, fields(key = %config.storage.dark_mode_key))]
pub fn load_dark_mode(
    storage: &impl KeyValueStorage,
    config: &DashboardConfig,
) -> anyhow::Result<Option<bool>> {
    let key = &config.storage.dark_mode_key;
    storage
        .get(key)?
        .map(|raw| {
            serde_json::from_str::<bool>(&raw)
                .with_context(|| format!("failed parsing dark mode flag at key {key}"))
        })
        .transpose()
}

#[tracing::instrument(skip(storage, config))]
pub fn save_dark_mode(
    storage: &impl KeyValueStorage,
    config: &DashboardConfig,
    enabled: bool,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(&enabled)?;
    storage
        .set(&config.storage.dark_mode_key, &json)
        .context("failed saving dark mode flag")
}
