use std::sync::LazyLock;

use regex::Regex;

use crate::model::Category;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

/// Lowercases `name` and replaces every whitespace run with a single `-`.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Slug for `name` that no existing category uses as its id. Collisions get a
/// numeric suffix: `tutorial`, `tutorial-2`, `tutorial-3`.
pub fn unique_slug(categories: &[Category], name: &str) -> String {
    let base = slugify(name.trim());
    let mut candidate = base.clone();
    let mut suffix = 2_u32;
    while categories.iter().any(|category| category.id == candidate) {
        candidate = format!("{base}-{suffix}");
        suffix = suffix.saturating_add(1);
    }
    candidate
}

pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.name == name)
}

/// Case-insensitive name lookup used for the uniqueness check.
pub fn name_taken(categories: &[Category], name: &str) -> bool {
    let wanted = name.to_lowercase();
    categories
        .iter()
        .any(|category| category.name.to_lowercase() == wanted)
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

pub fn normalize_color(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{find_by_name, is_hex_color, name_taken, normalize_color, slugify, unique_slug};
    use crate::model::Category;

    fn sample() -> Vec<Category> {
        vec![
            Category::new("Self Help".to_string(), "#6366f1".to_string()),
            Category::new("finance".to_string(), "#10b981".to_string()),
        ]
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("Self Help"), "self-help");
        assert_eq!(slugify("Deep   Work\tBlock"), "deep-work-block");
        assert_eq!(slugify("Travel"), "travel");
    }

    #[test]
    fn colliding_slugs_get_a_suffix() {
        let mut categories = sample();
        assert_eq!(unique_slug(&categories, "Self  Help"), "self-help-2");
        assert_eq!(unique_slug(&categories, "Videos"), "videos");

        categories.push(Category {
            id: "self-help-2".to_string(),
            name: "Self  Help".to_string(),
            color: "#000000".to_string(),
        });
        assert_eq!(unique_slug(&categories, "SELF HELP"), "self-help-3");
    }

    #[test]
    fn name_check_ignores_case() {
        let categories = sample();
        assert!(name_taken(&categories, "Finance"));
        assert!(name_taken(&categories, "SELF HELP"));
        assert!(!name_taken(&categories, "Videos"));
    }

    #[test]
    fn lookup_by_name_is_exact() {
        let categories = sample();
        assert_eq!(
            find_by_name(&categories, "Self Help").map(|c| c.id.as_str()),
            Some("self-help")
        );
        assert!(find_by_name(&categories, "self help").is_none());
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#6366f1"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("6366f1"));
        assert!(!is_hex_color("#6366f"));
        assert!(!is_hex_color("red"));
        assert_eq!(normalize_color(" #ABCDEF "), "#abcdef");
    }
}
