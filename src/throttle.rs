//! Throttle - leading-edge rate limiter for scroll-driven handlers.
//!
//! The first call fires immediately and opens a window of `limit` ms; calls
//! landing inside the window are dropped, not queued. The clock value is
//! passed in by the caller, so tests can step time deterministically and the
//! platform layer can feed `performance.now()`.

/// Leading-edge throttle state.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_fire: Option<f64>,
}

impl Throttle {
    /// Create a throttle with the given window, in ms.
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_fire: None,
        }
    }

    /// Whether a call at time `now_ms` may fire. Firing re-opens the window.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        let open = match self.last_fire {
            None => true,
            Some(last) => now_ms - last >= self.limit_ms,
        };
        if open {
            self.last_fire = Some(now_ms);
        }
        open
    }
}
