//! Flight Module - Eased anchor-scroll animation
//!
//! A flight is one frame-driven scroll from the current position to an
//! anchor target. The machine only turns frame timestamps into scroll
//! positions; the controller applies them through the port and the platform
//! drives frames. The first frame's timestamp anchors the clock, matching
//! frame-callback timing semantics.

use crate::easing::ease_in_out_cubic;

// =============================================================================
// FLIGHT CONSTANTS
// =============================================================================

/// Flight duration for anchor clicks.
pub const NAV_FLIGHT_MS: f64 = 1000.0;

/// Vertical clearance above the target, accounting for the fixed navbar.
pub const NAV_CLEARANCE_PX: f64 = 80.0;

/// Lifetime of the landing effect (`section-landing` class + ripple node).
pub const LANDING_MS: u32 = 1000;

// =============================================================================
// FLIGHT STATE MACHINE
// =============================================================================

/// Outcome of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStep {
    /// Set the scroll position and request another frame.
    Continue { position: f64 },
    /// Set the final position; the flight is over.
    Done { position: f64 },
}

impl FlightStep {
    pub fn position(&self) -> f64 {
        match self {
            Self::Continue { position } | Self::Done { position } => *position,
        }
    }
}

/// One in-progress eased scroll.
#[derive(Debug)]
pub struct Flight {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl Flight {
    /// Flight from `start` to `target` over `duration_ms`.
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            started_at: None,
        }
    }

    /// The destination position.
    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Advance to the frame at `now_ms` and return the position to apply.
    pub fn frame(&mut self, now_ms: f64) -> FlightStep {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;

        if elapsed >= self.duration_ms {
            return FlightStep::Done {
                position: self.start + self.distance,
            };
        }

        let progress = (elapsed / self.duration_ms).clamp(0.0, 1.0);
        FlightStep::Continue {
            position: self.start + self.distance * ease_in_out_cubic(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_anchors_clock() {
        let mut flight = Flight::new(0.0, 1000.0, 1000.0);
        // First frame at an arbitrary timestamp: elapsed 0, position = start.
        assert_eq!(
            flight.frame(5000.0),
            FlightStep::Continue { position: 0.0 }
        );
    }

    #[test]
    fn test_midpoint_is_half_distance() {
        let mut flight = Flight::new(0.0, 1000.0, 1000.0);
        flight.frame(0.0);
        let step = flight.frame(500.0);
        assert!(matches!(step, FlightStep::Continue { .. }));
        assert!((step.position() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_completes_at_duration() {
        let mut flight = Flight::new(100.0, 700.0, 1000.0);
        flight.frame(0.0);
        assert_eq!(
            flight.frame(1000.0),
            FlightStep::Done { position: 700.0 }
        );
        // Late frames stay pinned to the target.
        assert_eq!(
            flight.frame(5000.0),
            FlightStep::Done { position: 700.0 }
        );
    }

    #[test]
    fn test_upward_flight() {
        let mut flight = Flight::new(900.0, 100.0, 1000.0);
        flight.frame(0.0);
        let step = flight.frame(500.0);
        assert!((step.position() - 500.0).abs() < 1e-9);
        assert_eq!(flight.frame(1200.0).position(), 100.0);
    }

    #[test]
    fn test_zero_duration_lands_immediately() {
        let mut flight = Flight::new(0.0, 300.0, 0.0);
        assert_eq!(flight.frame(0.0), FlightStep::Done { position: 300.0 });
    }

    #[test]
    fn test_positions_monotone_downward_flight() {
        let mut flight = Flight::new(0.0, 800.0, 1000.0);
        let mut prev = flight.frame(0.0).position();
        for ms in (16..=1000).step_by(16) {
            let position = flight.frame(ms as f64).position();
            assert!(position >= prev);
            prev = position;
        }
    }
}
