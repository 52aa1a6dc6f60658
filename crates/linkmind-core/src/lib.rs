pub mod category;
pub mod config;
pub mod forms;
pub mod link_url;
pub mod model;
pub mod notice;
pub mod persistence;
pub mod store;

pub use config::DashboardConfig;
pub use forms::{CategoryDraft, Field, FieldError, FormErrors, LinkDraft, TaskDraft};
pub use model::{Category, Link, Task};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use persistence::{
    KeyValueStorage, MemoryStorage, load_dark_mode, load_snapshot, save_dark_mode, save_snapshot,
};
pub use store::{Item, ItemKind, Snapshot};
