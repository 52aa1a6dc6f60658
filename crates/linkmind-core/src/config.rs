use std::collections::BTreeSet;

use anyhow::Context;
use serde::Deserialize;

use crate::category::is_hex_color;
use crate::forms::DEFAULT_CATEGORY_COLOR;
use crate::model::Category;

const DASHBOARD_CONFIG_TOML: &str = include_str!("../assets/dashboard.toml");

const MIN_DISMISS_MS: u32 = 500;
const MAX_DISMISS_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub categories: CategoryConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_key")]
    pub data_key: String,

    #[serde(default = "default_dark_mode_key")]
    pub dark_mode_key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryConfig {
    #[serde(default = "default_category_color")]
    pub default_color: String,

    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    #[serde(default)]
    pub defaults: Vec<Category>,
}

fn default_data_key() -> String {
    "linkminderData".to_string()
}

fn default_dark_mode_key() -> String {
    "darkMode".to_string()
}

fn default_dismiss_ms() -> u32 {
    3_000
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

fn default_palette() -> Vec<String> {
    ["#6366f1", "#10b981", "#f59e0b", "#ef4444", "#06b6d4", "#8b5cf6"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_category_set() -> Vec<Category> {
    [
        ("self-help", "Self Help", "#6366f1"),
        ("finance", "Finance", "#10b981"),
        ("tutorial", "Tutorials", "#f59e0b"),
        ("video", "Videos", "#ef4444"),
        ("travel", "Travel", "#06b6d4"),
    ]
    .iter()
    .map(|(id, name, color)| Category {
        id: (*id).to_string(),
        name: (*name).to_string(),
        color: (*color).to_string(),
    })
    .collect()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            storage: StorageConfig::default(),
            notifications: NotificationConfig::default(),
            categories: CategoryConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_key: default_data_key(),
            dark_mode_key: default_dark_mode_key(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            default_color: default_category_color(),
            palette: default_palette(),
            defaults: default_category_set(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let mut config =
            toml::from_str::<Self>(raw).context("failed parsing dashboard config")?;
        config.sanitize();
        Ok(config)
    }

    /// Loads the configuration compiled into the binary, falling back to
    /// built-in defaults if it does not parse.
    pub fn embedded() -> Self {
        match Self::from_toml_str(DASHBOARD_CONFIG_TOML) {
            Ok(config) => {
                tracing::info!(
                    version = config.version,
                    data_key = %config.storage.data_key,
                    default_categories = config.categories.defaults.len(),
                    "loaded dashboard config"
                );
                config
            }
            Err(error) => {
                tracing::error!(
                    error = %format!("{error:#}"),
                    "failed loading dashboard config; using defaults"
                );
                Self::default()
            }
        }
    }

    fn sanitize(&mut self) {
        if self.storage.data_key.trim().is_empty() {
            self.storage.data_key = default_data_key();
        }
        if self.storage.dark_mode_key.trim().is_empty() {
            self.storage.dark_mode_key = default_dark_mode_key();
        }

        self.notifications.dismiss_ms = self
            .notifications
            .dismiss_ms
            .clamp(MIN_DISMISS_MS, MAX_DISMISS_MS);

        if !is_hex_color(&self.categories.default_color) {
            self.categories.default_color = default_category_color();
        }

        self.categories.palette.retain(|color| is_hex_color(color));
        if self.categories.palette.is_empty() {
            self.categories.palette = default_palette();
        }

        // first entry wins for a repeated id or name
        let mut seen_ids = BTreeSet::new();
        let mut seen_names = BTreeSet::new();
        self.categories.defaults.retain(|category| {
            !category.id.trim().is_empty()
                && !category.name.trim().is_empty()
                && is_hex_color(&category.color)
                && seen_ids.insert(category.id.clone())
                && seen_names.insert(category.name.to_lowercase())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardConfig;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = DashboardConfig::embedded();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.storage.data_key, "linkminderData");
        assert_eq!(config.storage.dark_mode_key, "darkMode");
        assert_eq!(config.notifications.dismiss_ms, 3_000);
        assert_eq!(
            config
                .categories
                .defaults
                .iter()
                .map(|c| c.id.as_str())
                .collect::<Vec<_>>(),
            vec!["self-help", "finance", "tutorial", "video", "travel"]
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = DashboardConfig::from_toml_str("version = 2\n").expect("parse");
        assert_eq!(config.version, 2);
        assert_eq!(config.storage, DashboardConfig::default().storage);
        assert_eq!(config.categories.palette.len(), 6);
    }

    #[test]
    fn sanitize_repairs_bad_values() {
        let config = DashboardConfig::from_toml_str(
            r##"
[storage]
data_key = "  "

[notifications]
dismiss_ms = 10

[categories]
default_color = "blue"
palette = ["nope"]

[[categories.defaults]]
id = "ok"
name = "Ok"
color = "#123456"

[[categories.defaults]]
id = "bad"
name = "Bad"
color = "bad"
"##,
        )
        .expect("parse");
        assert_eq!(config.storage.data_key, "linkminderData");
        assert_eq!(config.notifications.dismiss_ms, 500);
        assert_eq!(config.categories.default_color, "#6366f1");
        assert_eq!(config.categories.palette.len(), 6);
        assert_eq!(config.categories.defaults.len(), 1);
    }

    #[test]
    fn repeated_default_ids_and_names_are_dropped() {
        let config = DashboardConfig::from_toml_str(
            r##"
[[categories.defaults]]
id = "tutorial"
name = "Tutorials"
color = "#f59e0b"

[[categories.defaults]]
id = "tutorial"
name = "Tutorial"
color = "#f59e0b"

[[categories.defaults]]
id = "guides"
name = "TUTORIALS"
color = "#f59e0b"
"##,
        )
        .expect("parse");
        let names: Vec<&str> = config
            .categories
            .defaults
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tutorials"]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(DashboardConfig::from_toml_str("version = [").is_err());
    }
}
