use anyhow::anyhow;
use linkmind_core::{
  DashboardConfig,
  KeyValueStorage,
  MemoryStorage,
  Snapshot,
  load_dark_mode,
  load_snapshot,
  save_dark_mode,
  save_snapshot
};

use super::types::ThemeMode;

/// `window.localStorage`, or an in-memory
/// map when the browser refuses storage
/// access (private mode, sandboxed
/// iframes).
pub enum DashboardStorage {
  Browser(web_sys::Storage),
  Memory(MemoryStorage)
}

impl DashboardStorage {
  pub fn open() -> Self {
    match web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    ) {
      | Some(storage) => {
        Self::Browser(storage)
      }
      | None => {
        tracing::warn!(
          "local storage unavailable; \
           dashboard will not survive a \
           reload"
        );
        Self::Memory(MemoryStorage::new())
      }
    }
  }
}

impl KeyValueStorage for DashboardStorage {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    match self {
      | Self::Browser(storage) => {
        storage.get_item(key).map_err(
          |error| {
            anyhow!(
              "localStorage read of \
               {key} failed: {error:?}"
            )
          }
        )
      }
      | Self::Memory(storage) => {
        storage.get(key)
      }
    }
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match self {
      | Self::Browser(storage) => {
        storage.set_item(key, value).map_err(
          |error| {
            anyhow!(
              "localStorage write of \
               {key} failed: {error:?}"
            )
          }
        )
      }
      | Self::Memory(storage) => {
        storage.set(key, value)
      }
    }
  }
}

pub fn load_dashboard(
  storage: &DashboardStorage,
  config: &DashboardConfig
) -> Snapshot {
  match load_snapshot(storage, config) {
    | Ok(snapshot) => snapshot,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed loading saved dashboard; \
         starting from defaults"
      );
      Snapshot::with_categories(
        config
          .categories
          .defaults
          .clone()
      )
    }
  }
}

pub fn save_dashboard(
  storage: &DashboardStorage,
  config: &DashboardConfig,
  snapshot: &Snapshot
) {
  if let Err(error) =
    save_snapshot(storage, config, snapshot)
  {
    tracing::error!(
      error = %format!("{error:#}"),
      "failed persisting dashboard"
    );
  }
}

pub fn load_theme_mode(
  storage: &DashboardStorage,
  config: &DashboardConfig
) -> ThemeMode {
  let stored =
    match load_dark_mode(storage, config) {
      | Ok(flag) => flag,
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed reading dark mode flag"
        );
        None
      }
    };

  ThemeMode::from_dark_flag(
    stored.unwrap_or_else(prefers_dark)
  )
}

pub fn save_theme_mode(
  storage: &DashboardStorage,
  config: &DashboardConfig,
  theme: ThemeMode
) {
  if let Err(error) = save_dark_mode(
    storage,
    config,
    theme.is_dark()
  ) {
    tracing::error!(
      error = %format!("{error:#}"),
      "failed persisting dark mode flag"
    );
  }
}

fn prefers_dark() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(
          "(prefers-color-scheme: dark)"
        )
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}
