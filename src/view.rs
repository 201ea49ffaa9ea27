//! View Helpers
//!
//! Pure state-to-presentation decisions used by the components.

use crate::store::OpStatus;

/// What the records panel shows below its heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordArea {
    Loading,
    Empty,
    Populated,
}

pub fn record_area(fetch: OpStatus, count: usize) -> RecordArea {
    if fetch.is_in_flight() {
        RecordArea::Loading
    } else if count == 0 {
        RecordArea::Empty
    } else {
        RecordArea::Populated
    }
}

pub fn records_heading(count: usize) -> String {
    format!("Data Records ({})", count)
}

/// Shorten `code` to `max_chars` characters, appending "..." when cut
pub fn truncate_code(code: &str, max_chars: usize) -> String {
    match code.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &code[..cut]),
        None => code.to_string(),
    }
}

pub fn toggle_button_class(enabled: bool) -> &'static str {
    if enabled {
        "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 bg-green-600 hover:bg-green-700 focus:ring-green-500"
    } else {
        "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 bg-red-600 hover:bg-red-700 focus:ring-red-500"
    }
}

pub fn power_glyph(enabled: bool) -> &'static str {
    if enabled { "⏻" } else { "⭘" }
}

pub fn reload_icon_class(loading: bool) -> &'static str {
    if loading {
        "inline-block h-4 w-4 mr-2 animate-spin"
    } else {
        "inline-block h-4 w-4 mr-2"
    }
}

pub fn copy_glyph(copied: bool) -> &'static str {
    if copied { "✓" } else { "⧉" }
}

pub fn copy_title(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy code" }
}
