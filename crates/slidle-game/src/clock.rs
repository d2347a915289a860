//! Wall-clock timing for a play session.

use std::time::{Duration, Instant};

/// Accumulates wall-clock time across start/stop segments.
///
/// The clock holds at most one running segment. Starting while a segment is
/// already running first folds that segment into the accumulator, so repeated
/// starts never double-count time. [`elapsed`](Self::elapsed) reads the wall
/// clock on demand; callers that want a live display poll it periodically.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use slidle_game::SessionClock;
///
/// let mut clock = SessionClock::new();
/// assert_eq!(clock.elapsed(), Duration::ZERO);
///
/// clock.start();
/// assert!(clock.is_running());
///
/// clock.stop();
/// let frozen = clock.elapsed();
/// assert_eq!(clock.elapsed(), frozen);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl SessionClock {
    /// Creates a stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a segment is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Begins a new running segment.
    ///
    /// Any segment already running is folded into the accumulator first, so
    /// calling `start` twice is safe and loses no time.
    pub fn start(&mut self) {
        self.stop();
        self.started_at = Some(Instant::now());
    }

    /// Stops the running segment, folding it into the accumulator.
    ///
    /// Stopping an already stopped clock is a no-op.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    /// Resets the clock to zero and stops it.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    /// Returns the total accumulated time, including the running segment.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |started_at| started_at.elapsed());
        self.accumulated + running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_stopped_at_zero() {
        let clock = SessionClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_is_monotonic_while_running() {
        let mut clock = SessionClock::new();
        clock.start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.stop();
        let frozen = clock.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.elapsed(), frozen);

        // Stopping again changes nothing.
        clock.stop();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn test_restart_keeps_accumulated_time() {
        let mut clock = SessionClock::new();
        clock.start();
        std::thread::sleep(Duration::from_millis(2));
        let before = clock.elapsed();
        clock.start();
        assert!(clock.is_running());
        assert!(clock.elapsed() >= before);
    }

    #[test]
    fn test_reset_zeroes_the_clock() {
        let mut clock = SessionClock::new();
        clock.start();
        std::thread::sleep(Duration::from_millis(2));
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
