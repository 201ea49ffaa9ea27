//! Dashboard Configuration
//!
//! Fixed settings provided to the component tree via context.

use std::time::Duration;

/// Records and proxy flag share one resource path
pub const DEFAULT_ENDPOINT: &str = "https://mutaihillary27.pythonanywhere.com/api/pass/proxy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Resource serving `GET` (records) and `PUT` (proxy flag)
    pub endpoint: String,
    /// How long a copy button shows the "copied" glyph
    pub copy_feedback: Duration,
    /// Max code characters shown on narrow-viewport cards
    pub mobile_code_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            copy_feedback: Duration::from_millis(2000),
            mobile_code_limit: 50,
        }
    }
}
