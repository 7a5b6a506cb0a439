//! Gravity timer - a cancellable periodic countdown fed with elapsed time.
//!
//! The timer owns no clock. Callers report elapsed milliseconds (wall clock in
//! the frontend, literal numbers in tests) and pull due ticks with [`GravityTimer::fire`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl GravityTimer {
    /// A disarmed timer. `interval_ms` of 0 is treated as 1.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    /// Start (or restart) the countdown from zero.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0;
    }

    /// Stop the countdown. Calling it again has no further effect.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Accumulate elapsed time. Ignored while disarmed.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.armed {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    /// Consume one due interval, if any.
    pub fn fire(&mut self) -> bool {
        if !self.armed || self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms -= self.interval_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut t = GravityTimer::new(500);
        t.arm();
        t.advance(499);
        assert!(!t.fire());
        t.advance(1);
        assert!(t.fire());
        assert!(!t.fire());

        t.advance(1200);
        assert!(t.fire());
        assert!(t.fire());
        assert!(!t.fire());
        assert_eq!(t.elapsed_ms(), 200);
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let mut t = GravityTimer::new(100);
        t.advance(1000);
        assert!(!t.fire());

        t.arm();
        t.advance(150);
        t.disarm();
        t.disarm();
        assert!(!t.is_armed());
        t.advance(1000);
        assert!(!t.fire());
    }

    #[test]
    fn rearm_discards_partial_interval() {
        let mut t = GravityTimer::new(500);
        t.arm();
        t.advance(400);
        t.disarm();
        t.arm();
        t.advance(400);
        assert!(!t.fire());
        t.advance(100);
        assert!(t.fire());
    }
}
