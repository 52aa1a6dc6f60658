use serde::{Deserialize, Serialize};

use crate::model::{Category, Link, Task};

/// The persisted dashboard state. Every mutation borrows the current snapshot
/// and returns a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Tasks,
    Links,
}

impl ItemKind {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Links => "links",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Task(Task),
    Link(Link),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Task(_) => ItemKind::Tasks,
            Self::Link(_) => ItemKind::Links,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Task(task) => &task.id,
            Self::Link(link) => &link.id,
        }
    }
}

impl From<Task> for Item {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}

impl From<Link> for Item {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl Snapshot {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            tasks: Vec::new(),
            links: Vec::new(),
            categories,
        }
    }

    pub fn add_item(&self, item: impl Into<Item>) -> Self {
        let item = item.into();
        tracing::info!(kind = item.kind().as_key(), id = %item.id(), "adding item");
        let mut next = self.clone();
        match item {
            Item::Task(task) => next.tasks.push(task),
            Item::Link(link) => next.links.push(link),
        }
        next
    }

    pub fn delete_item(&self, kind: ItemKind, id: &str) -> Self {
        let mut next = self.clone();
        let before = self.len_of(kind);
        match kind {
            ItemKind::Tasks => next.tasks.retain(|task| task.id != id),
            ItemKind::Links => next.links.retain(|link| link.id != id),
        }
        tracing::info!(
            kind = kind.as_key(),
            id,
            removed = before - next.len_of(kind),
            "deleted item"
        );
        next
    }

    pub fn toggle_task_completion(&self, id: &str) -> Self {
        let mut next = self.clone();
        for task in &mut next.tasks {
            if task.id == id {
                task.completed = !task.completed;
                tracing::info!(id, completed = task.completed, "toggled task completion");
            }
        }
        next
    }

    pub fn add_category(&self, category: Category) -> Self {
        tracing::info!(
            id = %category.id,
            name = %category.name,
            color = %category.color,
            "adding category"
        );
        let mut next = self.clone();
        next.categories.push(category);
        next
    }

    pub fn len_of(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Tasks => self.tasks.len(),
            ItemKind::Links => self.links.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::{ItemKind, Snapshot};
    use crate::model::{Category, CategoryRef, Link, Task};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid now")
    }

    fn task(title: &str) -> Task {
        Task::new(title.to_string(), CategoryRef::none(), fixed_now())
    }

    fn link(title: &str) -> Link {
        Link::new(
            title.to_string(),
            format!("https://{title}.example"),
            CategoryRef::none(),
            fixed_now(),
        )
    }

    fn three_tasks() -> Snapshot {
        Snapshot::default()
            .add_item(task("a"))
            .add_item(task("b"))
            .add_item(task("c"))
    }

    #[test]
    fn add_item_leaves_source_untouched() {
        let empty = Snapshot::default();
        let next = empty.add_item(task("a"));
        assert!(empty.tasks.is_empty());
        assert_eq!(next.tasks.len(), 1);
        assert!(next.links.is_empty());
    }

    #[test]
    fn add_link_goes_to_links() {
        let next = Snapshot::default().add_item(link("docs"));
        assert_eq!(next.links.len(), 1);
        assert!(next.tasks.is_empty());
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let snap = three_tasks();
        let target = snap.tasks[1].id.clone();
        let next = snap.toggle_task_completion(&target);
        let flags: Vec<bool> = next.tasks.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false]);

        let back = next.toggle_task_completion(&target);
        assert_eq!(back, snap);
    }

    #[test]
    fn delete_removes_one_and_keeps_order() {
        let snap = three_tasks();
        let target = snap.tasks[1].id.clone();
        let next = snap.delete_item(ItemKind::Tasks, &target);
        let titles: Vec<&str> = next.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn delete_link_keeps_order_and_tasks() {
        let snap = three_tasks()
            .add_item(link("first"))
            .add_item(link("middle"))
            .add_item(link("last"));
        let target = snap.links[1].id.clone();

        let next = snap.delete_item(ItemKind::Links, &target);
        let titles: Vec<&str> = next.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "last"]);
        assert_eq!(next.links[0], snap.links[0]);
        assert_eq!(next.links[1], snap.links[2]);
        assert_eq!(next.tasks, snap.tasks);
        assert_eq!(snap.links.len(), 3);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let snap = three_tasks();
        assert_eq!(snap.delete_item(ItemKind::Tasks, "missing"), snap);
        assert_eq!(snap.delete_item(ItemKind::Links, &snap.tasks[0].id), snap);
        assert_eq!(snap.toggle_task_completion("missing"), snap);
    }

    #[test]
    fn add_category_appends() {
        let snap = Snapshot::default()
            .add_category(Category::new("Self Help".to_string(), "#6366f1".to_string()));
        assert_eq!(snap.categories[0].id, "self-help");
    }
}
