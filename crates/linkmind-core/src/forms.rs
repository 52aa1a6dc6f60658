//! Submission handling for the task, link and category forms.
//!
//! A draft holds the raw field values the user typed. `submit` either produces
//! the record to hand to the store or the set of per-field errors to show
//! inline.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::category::{find_by_name, is_hex_color, name_taken, normalize_color, unique_slug};
use crate::link_url::parse_link_url;
use crate::model::{Category, CategoryRef, Link, Task};

pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Task title is required")]
    TaskTitleRequired,
    #[error("Link title is required")]
    LinkTitleRequired,
    #[error("URL is required")]
    UrlRequired,
    #[error("Please enter a valid URL")]
    UrlInvalid,
    #[error("Category name is required")]
    CategoryNameRequired,
    #[error("Category already exists")]
    CategoryExists,
    #[error("Color must be a hex value like #6366f1")]
    ColorInvalid,
    #[error("Selected category no longer exists")]
    UnknownCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Url,
    Category,
    Name,
    Color,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    by_field: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.by_field.get(&field)
    }

    /// Message to render next to `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.by_field.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.by_field.remove(&field);
    }

    /// Drops the error on `field` once the user has typed a non-blank value.
    pub fn clear_if_filled(&mut self, field: Field, value: &str) {
        if !value.trim().is_empty() {
            self.clear(field);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            tracing::warn!(errors = ?self.by_field, "rejected form submission");
            Err(self)
        }
    }
}

fn resolve_category(
    categories: &[Category],
    selected: &str,
    errors: &mut FormErrors,
) -> CategoryRef {
    if selected.is_empty() {
        return CategoryRef::none();
    }
    match find_by_name(categories, selected) {
        Some(category) => CategoryRef::from_category(category),
        None => {
            errors.insert(Field::Category, FieldError::UnknownCategory);
            CategoryRef::none()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub category: String,
}

impl TaskDraft {
    pub fn submit(&self, categories: &[Category], now: DateTime<Utc>) -> Result<Task, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(Field::Title, FieldError::TaskTitleRequired);
        }
        let category = resolve_category(categories, &self.category, &mut errors);

        errors.into_result(|| Task::new(title.to_string(), category, now))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl LinkDraft {
    pub fn submit(&self, categories: &[Category], now: DateTime<Utc>) -> Result<Link, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(Field::Title, FieldError::LinkTitleRequired);
        }

        let url = if self.url.trim().is_empty() {
            errors.insert(Field::Url, FieldError::UrlRequired);
            None
        } else {
            let parsed = parse_link_url(&self.url);
            if parsed.is_none() {
                errors.insert(Field::Url, FieldError::UrlInvalid);
            }
            parsed
        };

        let category = resolve_category(categories, &self.category, &mut errors);

        errors.into_result(|| {
            Link::new(
                title.to_string(),
                url.unwrap_or_default(),
                category,
                now,
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self::with_color(DEFAULT_CATEGORY_COLOR)
    }
}

impl CategoryDraft {
    pub fn with_color(color: &str) -> Self {
        Self {
            name: String::new(),
            color: color.to_string(),
        }
    }

    /// The new category's id is its slug, suffixed when another category
    /// already owns that slug.
    pub fn submit(&self, categories: &[Category]) -> Result<Category, FormErrors> {
        let mut errors = FormErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(Field::Name, FieldError::CategoryNameRequired);
        } else if name_taken(categories, name) {
            errors.insert(Field::Name, FieldError::CategoryExists);
        }

        let color = normalize_color(&self.color);
        if !is_hex_color(&color) {
            errors.insert(Field::Color, FieldError::ColorInvalid);
        }

        errors.into_result(|| Category {
            id: unique_slug(categories, name),
            name: name.to_string(),
            color,
        })
    }
}
