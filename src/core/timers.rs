//! Fire-once timers driven by a run's simulation clock.
//!
//! Timers cannot be cancelled. Payloads that may outlive the state they were
//! scheduled for carry an epoch which the handler compares against the
//! current one, so a stale timer is dropped instead of corrupting newer state.

/// Convert a delay in seconds to whole milliseconds.
pub fn secs_to_ms(secs: f64) -> u64 {
    (secs.max(0.0) * 1000.0).round() as u64
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due_ms: u64,
    seq: u64,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current simulation time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule_ms(&mut self, delay_ms: u64, payload: T) {
        self.pending.push(Pending {
            due_ms: self.now_ms + delay_ms,
            seq: self.next_seq,
            payload,
        });
        self.next_seq += 1;
    }

    pub fn schedule_secs(&mut self, delay_secs: f64, payload: T) {
        self.schedule_ms(secs_to_ms(delay_secs), payload);
    }

    /// Move the clock forward. Due timers are collected with `pop_due`.
    pub fn advance(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
    }

    /// Remove and return the earliest due timer. Ties fire in schedule order.
    pub fn pop_due(&mut self) -> Option<T> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= self.now_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index).payload)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pending.iter().map(|p| &p.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secs_to_ms() {
        assert_eq!(secs_to_ms(7.0), 7000);
        assert_eq!(secs_to_ms(1.2345), 1235);
        assert_eq!(secs_to_ms(-1.0), 0);
    }

    #[test]
    fn test_nothing_due_before_delay() {
        let mut timers = Scheduler::new();
        timers.schedule_ms(100, "a");
        timers.advance(99);
        assert_eq!(timers.pop_due(), None);
        timers.advance(1);
        assert_eq!(timers.pop_due(), Some("a"));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_fires_in_due_order_then_schedule_order() {
        let mut timers = Scheduler::new();
        timers.schedule_ms(50, "late");
        timers.schedule_ms(10, "first");
        timers.schedule_ms(10, "second");
        timers.advance(60);
        assert_eq!(timers.pop_due(), Some("first"));
        assert_eq!(timers.pop_due(), Some("second"));
        assert_eq!(timers.pop_due(), Some("late"));
        assert_eq!(timers.pop_due(), None);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut timers = Scheduler::new();
        timers.advance(1000);
        timers.schedule_secs(2.0, 7u8);
        assert_eq!(timers.len(), 1);
        timers.advance(1999);
        assert_eq!(timers.pop_due(), None);
        timers.advance(1);
        assert_eq!(timers.pop_due(), Some(7));
        assert_eq!(timers.now_ms(), 3000);
    }
}
