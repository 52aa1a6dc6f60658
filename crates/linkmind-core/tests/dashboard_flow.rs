use chrono::Utc;
use linkmind_core::persistence::FileStorage;
use linkmind_core::{
    CategoryDraft, DashboardConfig, Field, FieldError, ItemKind, KeyValueStorage, LinkDraft,
    TaskDraft, load_snapshot, save_snapshot,
};
use tempfile::tempdir;

#[test]
fn dashboard_flow_persists_through_file_storage() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::open(temp.path()).expect("open storage");
    let config = DashboardConfig::embedded();

    let mut snapshot = load_snapshot(&storage, &config).expect("initial load");
    assert_eq!(snapshot.categories.len(), 5);

    let category = CategoryDraft {
        name: "Reading List".to_string(),
        color: "#8b5cf6".to_string(),
    }
    .submit(&snapshot.categories)
    .expect("new category");
    assert_eq!(category.id, "reading-list");
    snapshot = snapshot.add_category(category);

    for title in ["first", "second", "third"] {
        let task = TaskDraft {
            title: title.to_string(),
            category: "Reading List".to_string(),
        }
        .submit(&snapshot.categories, Utc::now())
        .expect("task");
        snapshot = snapshot.add_item(task);
    }
    let link = LinkDraft {
        title: "Rust".to_string(),
        url: "www.rust-lang.org".to_string(),
        category: "Tutorials".to_string(),
    }
    .submit(&snapshot.categories, Utc::now())
    .expect("link");
    snapshot = snapshot.add_item(link);

    let middle = snapshot.tasks[1].id.clone();
    snapshot = snapshot.toggle_task_completion(&middle);
    let first = snapshot.tasks[0].id.clone();
    snapshot = snapshot.delete_item(ItemKind::Tasks, &first);

    save_snapshot(&storage, &config, &snapshot).expect("save");

    let reopened = FileStorage::open(temp.path()).expect("reopen storage");
    let reloaded = load_snapshot(&reopened, &config).expect("reload");
    assert_eq!(reloaded, snapshot);

    let titles: Vec<&str> = reloaded.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "third"]);
    assert!(reloaded.tasks[0].completed);
    assert!(!reloaded.tasks[1].completed);
    assert_eq!(reloaded.tasks[0].category_color.as_deref(), Some("#8b5cf6"));
    assert_eq!(reloaded.links[0].url, "https://www.rust-lang.org");
    assert_eq!(reloaded.links[0].category_color.as_deref(), Some("#f59e0b"));
}

#[test]
fn rejected_submissions_leave_snapshot_alone() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::open(temp.path()).expect("open storage");
    let config = DashboardConfig::default();
    let snapshot = load_snapshot(&storage, &config).expect("load");

    let errors = LinkDraft {
        title: "x".to_string(),
        url: String::new(),
        category: String::new(),
    }
    .submit(&snapshot.categories, Utc::now())
    .expect_err("url required");
    assert_eq!(errors.get(Field::Url), Some(&FieldError::UrlRequired));
    assert!(snapshot.links.is_empty());

    let errors = CategoryDraft {
        name: "FINANCE".to_string(),
        color: "#000000".to_string(),
    }
    .submit(&snapshot.categories)
    .expect_err("duplicate");
    assert_eq!(errors.get(Field::Name), Some(&FieldError::CategoryExists));
    assert_eq!(snapshot.categories.len(), 5);
}

#[test]
fn legacy_document_loads() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::open(temp.path()).expect("open storage");
    let config = DashboardConfig::default();
    storage
        .set(
            "linkminderData",
            r##"{
  "tasks": [
    {"id": "1718000000000", "title": "Old task", "category": null, "categoryColor": null,
     "completed": true, "createdAt": "2024-06-10T06:13:20.000Z"}
  ],
  "links": [
    {"id": "1718000000001", "title": "Old link", "url": "https://example.com",
     "category": "Finance", "categoryColor": "#10b981", "createdAt": "2024-06-10T06:13:20.001Z"}
  ],
  "categories": [{"id": "finance", "name": "Finance", "color": "#10b981"}]
}"##,
        )
        .expect("seed legacy data");

    let snapshot = load_snapshot(&storage, &config).expect("load legacy");
    assert_eq!(snapshot.tasks[0].id, "1718000000000");
    assert!(snapshot.tasks[0].completed);
    assert_eq!(snapshot.tasks[0].category, None);
    assert_eq!(snapshot.links[0].category.as_deref(), Some("Finance"));
    assert_eq!(snapshot.categories.len(), 1);
}

#[test]
fn storage_rejects_path_like_keys() {
    let temp = tempdir().expect("tempdir");
    let storage = FileStorage::open(temp.path()).expect("open storage");
    assert!(storage.set("../escape", "x").is_err());
    assert!(storage.get("").is_err());
}
