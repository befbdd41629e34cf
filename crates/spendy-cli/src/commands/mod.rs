mod expenses;
mod init;
mod misc;
mod report;

pub use expenses::{handle_add, handle_delete, handle_export, handle_list};
pub use init::handle_init;
pub use misc::{handle_categories, handle_completions};
pub use report::{handle_breakdown, handle_summary};
