//! Tickets for asynchronous page loads. A page starts a load, keeps the
//! ticket, and after every await checks it is still the latest one before
//! touching state; a newer load or a cancel makes older tickets stale.

/// Counts loads started by one page instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration {
    current: u64,
}

/// Identifies one started load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadGeneration {
    /// Starts a new load, making every earlier ticket stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.current = self.current.wrapping_add(1);
        LoadTicket(self.current)
    }

    /// Makes every outstanding ticket stale, e.g. when the page unmounts.
    pub fn cancel(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    /// Whether `ticket` belongs to the latest load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_load_supersedes_older_one() {
        let mut generation = LoadGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn cancel_stales_the_running_load() {
        let mut generation = LoadGeneration::default();
        let ticket = generation.begin();
        generation.cancel();
        assert!(!generation.is_current(ticket));
        let next = generation.begin();
        assert!(generation.is_current(next));
    }
}
