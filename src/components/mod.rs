//! UI Components
//!
//! Reusable Leptos components.

mod notice_list;
mod results_table;
mod system_fields;

pub use notice_list::{NoticeKind, NoticeList};
pub use results_table::ResultsTable;
pub use system_fields::SystemFields;
