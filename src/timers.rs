//! Copy Timer Registry
//!
//! Holds the pending expiry timer of each copied record. Handles are
//! cancelled by dropping them (as `gloo_timers::callback::Timeout` is), so
//! replacing or clearing an entry cancels the timer it held.

use std::collections::HashMap;

#[derive(Debug)]
pub struct CopyTimers<H> {
    pending: HashMap<i64, H>,
}

impl<H> Default for CopyTimers<H> {
    fn default() -> Self {
        Self { pending: HashMap::new() }
    }
}

impl<H> CopyTimers<H> {
    /// Store the timer for `id`, returning the one it replaces
    pub fn arm(&mut self, id: i64, handle: H) -> Option<H> {
        self.pending.insert(id, handle)
    }

    /// Drop every handle; returns how many were held
    pub fn clear(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
