//! UI Components
//!
//! Leptos components rendering the core view model.

mod create_form;
mod edit_modal;
mod filter_bar;
mod notice_bar;
mod todo_table;

pub use create_form::CreateForm;
pub use edit_modal::EditModal;
pub use filter_bar::FilterBar;
pub use notice_bar::NoticeBar;
pub use todo_table::TodoTable;
