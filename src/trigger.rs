//! Debounce for input-event triggers.
//!
//! A burst of clicks or keystrokes should produce one capture, not one
//! per event. The detector that feeds this (mouse/keyboard hooks) is an
//! external collaborator; only the rate gate lives here.

use std::time::{Duration, Instant};

/// Suppresses triggers that arrive within `interval` of the last one
/// that fired. The very first trigger always fires.
pub struct Debouncer {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Debouncer {
            interval,
            last_fired: None,
        }
    }

    /// Report a trigger. Returns whether it should fire, and if so,
    /// restarts the suppression window.
    pub fn should_trigger(&mut self) -> bool {
        let now = Instant::now();
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(crate::config::DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_trigger_always_fires() {
        let mut debouncer = Debouncer::new(Duration::from_secs(60));
        assert!(debouncer.should_trigger());
    }

    #[test]
    fn rapid_triggers_are_suppressed() {
        let mut debouncer = Debouncer::new(Duration::from_secs(60));
        assert!(debouncer.should_trigger());
        assert!(!debouncer.should_trigger());
        assert!(!debouncer.should_trigger());
    }

    #[test]
    fn fires_again_after_interval_elapses() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        assert!(debouncer.should_trigger());
        assert!(!debouncer.should_trigger());
        std::thread::sleep(Duration::from_millis(15));
        assert!(debouncer.should_trigger());
    }
}
