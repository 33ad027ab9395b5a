//! Placement timer — tracks whether a placement sequence is in flight and
//! holds the Placing state for a short delay after it finishes, so the focus
//! events the sequence itself raised are ignored.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};


/// Default hold after a placement sequence, in milliseconds.
pub const DEFAULT_RELEASE_DELAY_MS: u64 = 500;


/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        ManualClock(Arc::new(AtomicU64::new(start_ms)))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Idle,
    /// `release_at_ms` is `None` while the sequence runs and set once it ends.
    Placing { release_at_ms: Option<u64> },
}


/// Idle/Placing state machine owned by one controller.
#[derive(Debug)]
pub struct PlacementTimer {
    state: PlacementState,
    release_delay_ms: u64,
}


impl PlacementTimer {
    pub fn new(release_delay_ms: u64) -> Self {
        PlacementTimer {
            state: PlacementState::Idle,
            release_delay_ms,
        }
    }

    /// State as of `now_ms`. An elapsed hold reads as Idle.
    pub fn state(&self, now_ms: u64) -> PlacementState {
        match self.state {
            PlacementState::Placing { release_at_ms: Some(at) } if now_ms >= at => {
                PlacementState::Idle
            }
            state => state,
        }
    }

    pub fn is_placing(&self, now_ms: u64) -> bool {
        self.state(now_ms) != PlacementState::Idle
    }

    /// Enter Placing. The hold starts when the guard drops, whichever way
    /// the sequence exits.
    pub fn begin<'a>(&'a mut self, clock: &'a dyn Clock) -> PlacementGuard<'a> {
        self.state = PlacementState::Placing { release_at_ms: None };
        PlacementGuard { timer: self, clock }
    }

    pub fn release_delay_ms(&self) -> u64 {
        self.release_delay_ms
    }
}


/// Schedules the release of a placement sequence on drop.
pub struct PlacementGuard<'a> {
    timer: &'a mut PlacementTimer,
    clock: &'a dyn Clock,
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        let at = self.clock.now_ms().saturating_add(self.timer.release_delay_ms);
        self.timer.state = PlacementState::Placing { release_at_ms: Some(at) };
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let timer = PlacementTimer::new(500);
        assert!(!timer.is_placing(0));
        assert_eq!(timer.release_delay_ms(), 500);
    }

    #[test]
    fn hold_lasts_release_delay() {
        let clock = ManualClock::new(1000);
        let mut timer = PlacementTimer::new(500);
        let guard = timer.begin(&clock);
        drop(guard);
        // Released at 1000 + 500.
        assert!(timer.is_placing(1000));
        assert!(timer.is_placing(1499));
        assert!(!timer.is_placing(1500));
    }

    #[test]
    fn release_time_recorded_on_drop() {
        let clock = ManualClock::new(0);
        let mut timer = PlacementTimer::new(500);
        {
            let _guard = timer.begin(&clock);
        }
        assert_eq!(
            timer.state(10),
            PlacementState::Placing { release_at_ms: Some(500) }
        );
    }

    #[test]
    fn hold_starts_when_sequence_ends() {
        let clock = ManualClock::new(0);
        let mut timer = PlacementTimer::new(500);
        {
            let _guard = timer.begin(&clock);
            // A slow host: the sequence takes 2s.
            clock.advance(2000);
        }
        assert!(timer.is_placing(2400));
        assert!(!timer.is_placing(2500));
    }

    #[test]
    fn guard_releases_on_panic() {
        let clock = ManualClock::new(0);
        let mut timer = PlacementTimer::new(100);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = timer.begin(&clock);
            panic!("host blew up");
        }));
        assert!(result.is_err());
        assert!(!timer.is_placing(100));
    }

    #[test]
    fn zero_delay_releases_immediately() {
        let clock = ManualClock::new(42);
        let mut timer = PlacementTimer::new(0);
        drop(timer.begin(&clock));
        assert!(!timer.is_placing(42));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(5);
        let b = a.clone();
        a.advance(10);
        assert_eq!(b.now_ms(), 15);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_ms() > 0);
    }
}
