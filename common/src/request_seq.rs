//! Numbering for repeatable requests where only the latest answer counts.

/// Hands out increasing request numbers and tells whether a response still
/// belongs to the most recent request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Starts a new request. Every earlier number becomes stale.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}
