//! Scroll Tracker Module - Scroll-derived visual state
//!
//! Pure math behind the three scroll-driven effects:
//!
//! - navbar shade: `scrolled` class past a fixed offset threshold
//! - active-link selection: which section sits under the probe point
//! - parallax: per-orb vertical translation proportional to scroll
//!
//! The controller samples the scroll offset (throttled per effect) and applies
//! the results through the port.

use crate::types::SectionBounds;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Scroll offset beyond which the navbar carries the `scrolled` class.
pub const NAVBAR_SHADE_THRESHOLD: f64 = 50.0;

/// Lookahead added to the scroll offset when probing for the active section.
pub const ACTIVE_LINK_LOOKAHEAD: f64 = 150.0;

/// Per-orb parallax factor; orb `i` moves at `(i + 1) * PARALLAX_STEP`.
pub const PARALLAX_STEP: f64 = 0.1;

// =============================================================================
// SCROLL MATH
// =============================================================================

/// Whether the navbar should carry the `scrolled` class at this offset.
pub fn navbar_shaded(offset: f64) -> bool {
    offset > NAVBAR_SHADE_THRESHOLD
}

/// Index of the section under the probe point, or `None` if no section
/// contains it (in which case the previously active link stays active).
///
/// When sections overlap the later one wins, matching document order taking
/// precedence bottom-up.
pub fn active_section(sections: &[SectionBounds], offset: f64) -> Option<usize> {
    let probe = offset + ACTIVE_LINK_LOOKAHEAD;
    sections.iter().rposition(|section| section.contains(probe))
}

/// Vertical parallax translation, in px, for the orb at `index`.
pub fn parallax_offset(index: usize, scroll: f64) -> f64 {
    scroll * (index as f64 + 1.0) * PARALLAX_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_shade_boundary() {
        assert!(!navbar_shaded(49.0));
        assert!(!navbar_shaded(50.0));
        assert!(navbar_shaded(51.0));
    }

    #[test]
    fn test_active_section_probe_lookahead() {
        let sections = [
            SectionBounds::new(0.0, 600.0),
            SectionBounds::new(600.0, 600.0),
            SectionBounds::new(1200.0, 600.0),
        ];

        // Probe = offset + 150.
        assert_eq!(active_section(&sections, 0.0), Some(0));
        assert_eq!(active_section(&sections, 449.0), Some(0));
        assert_eq!(active_section(&sections, 450.0), Some(1));
        assert_eq!(active_section(&sections, 1050.0), Some(2));
    }

    #[test]
    fn test_active_section_no_match() {
        let sections = [SectionBounds::new(500.0, 100.0)];

        // Probe (150) before the section, and probe (850) past it.
        assert_eq!(active_section(&sections, 0.0), None);
        assert_eq!(active_section(&sections, 700.0), None);
    }

    #[test]
    fn test_active_section_overlap_later_wins() {
        let sections = [
            SectionBounds::new(0.0, 1000.0),
            SectionBounds::new(400.0, 200.0),
        ];
        assert_eq!(active_section(&sections, 300.0), Some(1));
        assert_eq!(active_section(&sections, 100.0), Some(0));
    }

    #[test]
    fn test_parallax_offsets_scale_with_index() {
        assert!((parallax_offset(0, 100.0) - 10.0).abs() < 1e-9);
        assert!((parallax_offset(1, 100.0) - 20.0).abs() < 1e-9);
        assert!((parallax_offset(4, 100.0) - 50.0).abs() < 1e-9);
        assert_eq!(parallax_offset(3, 0.0), 0.0);
    }
}
