//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All state
//! transitions are plain methods on `DashboardState` so they can be
//! exercised without a browser.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{ApiError, ClipboardError};
use crate::models::{ProxyState, Record};

/// Progress of one kind of asynchronous operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    InFlight,
    /// Last attempt failed; nothing is shown to the user beyond the log
    Failed,
}

impl OpStatus {
    pub fn is_in_flight(self) -> bool {
        self == OpStatus::InFlight
    }
}

/// Transient "recently copied" markers keyed by record id.
///
/// Every copy hands out a fresh ticket; only the expiry carrying the
/// latest ticket for an id clears it, so a re-copy extends the window
/// and other ids are never touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyStatus {
    copied: HashMap<i64, u64>,
    next_ticket: u64,
}

impl CopyStatus {
    pub fn mark(&mut self, id: i64) -> u64 {
        self.next_ticket += 1;
        self.copied.insert(id, self.next_ticket);
        self.next_ticket
    }

    /// Returns true if this expiry cleared the marker
    pub fn expire(&mut self, id: i64, ticket: u64) -> bool {
        if self.copied.get(&id) == Some(&ticket) {
            self.copied.remove(&id);
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self, id: i64) -> bool {
        self.copied.contains_key(&id)
    }
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Last successfully fetched record set, in server order
    pub records: Vec<Record>,
    pub fetch_status: OpStatus,
    pub toggle_status: OpStatus,
    /// Local reflection of the remote proxy flag
    pub proxy: ProxyState,
    pub copied: CopyStatus,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) {
        self.fetch_status = OpStatus::InFlight;
    }

    /// Successful fetches replace the whole set; failures keep it
    pub fn finish_fetch(&mut self, result: Result<Vec<Record>, ApiError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.fetch_status = OpStatus::Idle;
            }
            Err(_) => self.fetch_status = OpStatus::Failed,
        }
    }

    /// Marks the toggle in flight and returns the state to request
    pub fn begin_toggle(&mut self) -> ProxyState {
        self.toggle_status = OpStatus::InFlight;
        self.proxy.toggled()
    }

    /// Adopts `desired` on success. A failed write leaves the cached
    /// state as it was, which may no longer match the server.
    pub fn finish_toggle(&mut self, desired: ProxyState, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.proxy = desired;
                self.toggle_status = OpStatus::Idle;
            }
            Err(_) => self.toggle_status = OpStatus::Failed,
        }
    }

    /// Marks `id` as copied once the clipboard write succeeded and
    /// returns the ticket its expiry must present. A failed write
    /// leaves every marker as it was.
    pub fn finish_copy(&mut self, id: i64, result: Result<(), ClipboardError>) -> Option<u64> {
        match result {
            Ok(()) => Some(self.copied.mark(id)),
            Err(_) => None,
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, code: &str, owner: &str) -> Record {
        Record { id, code: code.to_string(), owner: owner.to_string() }
    }

    fn network_error() -> ApiError {
        ApiError::Transport("TypeError: Failed to fetch".into())
    }

    #[test]
    fn test_fetch_replaces_records() {
        let mut state = DashboardState::new();
        state.records = vec![record(9, "old", "z")];

        state.begin_fetch();
        assert!(state.fetch_status.is_in_flight());

        state.finish_fetch(Ok(vec![record(1, "abc", "x"), record(2, "def", "y")]));
        assert_eq!(state.fetch_status, OpStatus::Idle);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[0], record(1, "abc", "x"));
        assert!(state.records.iter().all(|r| r.id != 9));
    }

    #[test]
    fn test_fetch_failure_keeps_records_and_releases_flag() {
        let mut state = DashboardState::new();
        state.begin_fetch();
        state.finish_fetch(Err(network_error()));

        assert!(state.records.is_empty());
        assert!(!state.fetch_status.is_in_flight());
        assert_eq!(state.fetch_status, OpStatus::Failed);

        state.records = vec![record(1, "abc", "x")];
        state.begin_fetch();
        state.finish_fetch(Err(ApiError::Status { status: 500, status_text: "".into() }));
        assert_eq!(state.records, vec![record(1, "abc", "x")]);
    }

    #[test]
    fn test_repeated_fetch_is_idempotent() {
        let response = vec![record(1, "abc", "x"), record(2, "def", "y")];
        let mut state = DashboardState::new();

        state.begin_fetch();
        state.finish_fetch(Ok(response.clone()));
        let first = state.records.clone();

        state.begin_fetch();
        state.finish_fetch(Ok(response));
        assert_eq!(state.records, first);
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn test_fetch_recovers_after_failure() {
        let mut state = DashboardState::new();
        state.begin_fetch();
        state.finish_fetch(Err(network_error()));
        state.begin_fetch();
        state.finish_fetch(Ok(vec![record(4, "q", "w")]));
        assert_eq!(state.fetch_status, OpStatus::Idle);
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn test_toggle_success_flips_state() {
        let mut state = DashboardState::new();

        let desired = state.begin_toggle();
        assert!(desired.enabled);
        assert!(state.toggle_status.is_in_flight());
        // Cached state is untouched until the write settles
        assert!(!state.proxy.enabled);

        state.finish_toggle(desired, Ok(()));
        assert!(state.proxy.enabled);
        assert_eq!(state.toggle_status, OpStatus::Idle);

        let desired = state.begin_toggle();
        assert!(!desired.enabled);
        state.finish_toggle(desired, Ok(()));
        assert!(!state.proxy.enabled);
    }

    #[test]
    fn test_toggle_failure_keeps_state() {
        let mut state = DashboardState::new();
        state.proxy = ProxyState::new(true);

        let desired = state.begin_toggle();
        state.finish_toggle(desired, Err(network_error()));

        assert!(state.proxy.enabled);
        assert!(!state.toggle_status.is_in_flight());
        assert_eq!(state.toggle_status, OpStatus::Failed);
    }

    #[test]
    fn test_fetch_and_toggle_flags_are_independent() {
        let mut state = DashboardState::new();
        state.begin_fetch();
        let desired = state.begin_toggle();
        state.finish_toggle(desired, Ok(()));

        assert!(state.fetch_status.is_in_flight());
        assert!(!state.toggle_status.is_in_flight());
    }

    #[test]
    fn test_copy_success_marks_record() {
        let mut state = DashboardState::new();
        let ticket = state.finish_copy(7, Ok(()));

        assert!(ticket.is_some());
        assert!(state.copied.is_copied(7));
        assert!(!state.copied.is_copied(8));
    }

    #[test]
    fn test_copy_failure_leaves_status_unchanged() {
        let mut state = DashboardState::new();

        let denied = ClipboardError::Rejected("NotAllowedError: Write permission denied.".into());
        assert_eq!(state.finish_copy(7, Err(denied)), None);
        assert!(!state.copied.is_copied(7));

        // An existing marker is neither cleared nor re-armed
        let ticket = state.finish_copy(8, Ok(())).unwrap();
        assert_eq!(state.finish_copy(8, Err(ClipboardError::Unavailable)), None);
        assert!(state.copied.is_copied(8));
        assert!(state.copied.expire(8, ticket));
    }

    #[test]
    fn test_copy_marks_then_expires() {
        let mut copied = CopyStatus::default();
        let ticket = copied.mark(7);
        assert!(copied.is_copied(7));

        assert!(copied.expire(7, ticket));
        assert!(!copied.is_copied(7));
        // A second expiry of the same ticket is a no-op
        assert!(!copied.expire(7, ticket));
    }

    #[test]
    fn test_copy_of_other_id_is_independent() {
        let mut copied = CopyStatus::default();
        let t7 = copied.mark(7);
        let t8 = copied.mark(8);

        assert!(copied.expire(8, t8));
        assert!(copied.is_copied(7));
        assert!(!copied.is_copied(8));

        assert!(copied.expire(7, t7));
        assert!(!copied.is_copied(7));
    }

    #[test]
    fn test_recopy_extends_window() {
        let mut copied = CopyStatus::default();
        let first = copied.mark(7);
        let second = copied.mark(7);

        assert!(!copied.expire(7, first));
        assert!(copied.is_copied(7));
        assert!(copied.expire(7, second));
        assert!(!copied.is_copied(7));
    }
}
