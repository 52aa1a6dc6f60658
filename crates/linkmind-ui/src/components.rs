mod category_badge;
mod category_modal;
mod category_overview;
mod category_picker;
mod dashboard_header;
mod field_error;
mod link_form;
mod link_list;
mod link_list_row;
mod success_toast;
mod tab_button;
mod task_form;
mod task_list;
mod task_list_row;

pub use category_badge::CategoryBadge;
pub use category_modal::CategoryModal;
pub use category_overview::CategoryOverview;
pub use category_picker::CategoryPicker;
pub use dashboard_header::DashboardHeader;
pub use field_error::FieldErrorText;
pub use link_form::LinkForm;
pub use link_list::LinkList;
pub use link_list_row::LinkListRow;
pub use success_toast::SuccessToast;
pub use tab_button::TabButton;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
