/// Identifies one fired request of a view-model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Generation counter deciding which response a view-model may still apply.
///
/// Each re-fire takes a new ticket; only the holder of the latest ticket
/// writes its result, so a slow earlier response cannot overwrite a newer
/// one.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Drop interest in whatever is in flight
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
