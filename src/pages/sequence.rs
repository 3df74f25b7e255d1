//! Load sequencing for page controllers.
//!
//! Each list fetch takes a ticket when it starts. A completion is applied
//! only if no newer fetch has already been applied, so a slow response can
//! never overwrite the result of a later one.

/// Issued at the start of a fetch, handed back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadSequence {
    issued: u64,
    applied: u64,
    in_flight: usize,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        self.in_flight += 1;
        LoadTicket(self.issued)
    }

    /// Record a completion. Returns `true` when its result should be applied.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// Any fetch still outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
