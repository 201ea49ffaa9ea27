//! UI Components
//!
//! Leptos components making up the dashboard page.

mod copy_button;
mod dashboard;
mod nav_bar;
mod record_cards;
mod record_table;
mod records_panel;

pub use copy_button::CopyButton;
pub use dashboard::Dashboard;
pub use nav_bar::NavBar;
pub use record_cards::RecordCards;
pub use record_table::RecordTable;
pub use records_panel::RecordsPanel;
