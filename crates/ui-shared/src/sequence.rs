//! Request Sequencing
//!
//! Tickets let overlapping requests for the same view resolve in issue
//! order: only the most recently issued ticket may apply its response.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    latest: Arc<AtomicU64>,
    id: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one
    pub fn issue(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            latest: Arc::clone(&self.latest),
            id,
        }
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        assert!(first.is_current());

        let second = seq.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_clones_share_sequence() {
        let seq = RequestSeq::new();
        let other = seq.clone();
        let ticket = seq.issue();
        other.issue();
        assert!(!ticket.is_current());
    }
}
