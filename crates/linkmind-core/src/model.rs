use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub category_color: Option<String>,

    #[serde(default)]
    pub completed: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,

    pub title: String,

    pub url: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub category_color: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Category name and color copied onto an item when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryRef {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryRef {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            name: Some(category.name.clone()),
            color: Some(category.color.clone()),
        }
    }
}

pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

impl Task {
    pub fn new(title: String, category: CategoryRef, now: DateTime<Utc>) -> Self {
        Self {
            id: new_item_id(),
            title,
            category: category.name,
            category_color: category.color,
            completed: false,
            created_at: now,
        }
    }
}

impl Link {
    pub fn new(title: String, url: String, category: CategoryRef, now: DateTime<Utc>) -> Self {
        Self {
            id: new_item_id(),
            title,
            url,
            category: category.name,
            category_color: category.color,
            created_at: now,
        }
    }
}

impl Category {
    pub fn new(name: String, color: String) -> Self {
        Self {
            id: crate::category::slugify(&name),
            name,
            color,
        }
    }
}
