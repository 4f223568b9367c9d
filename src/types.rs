//! Core types for glide.
//!
//! Shared types that flow between the state systems, the controller and the
//! platform layer: the scroll strategy, the enabled-effects bitfield, the
//! controller configuration and the geometry snapshot used by active-link
//! selection.

// =============================================================================
// Scroll strategy
// =============================================================================

/// How anchor clicks move the viewport.
///
/// The two historical builds of the site differed only here (plus the hero
/// typing flag): one delegated to the browser's built-in smooth scroll, the
/// other flew a custom eased animation with a landing effect at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollStrategy {
    /// Built-in smooth scroll (`scroll-behavior: smooth` semantics).
    Native,
    /// Frame-driven flight with a cubic ease and a landing effect.
    #[default]
    Eased,
}

// =============================================================================
// Effects (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Cosmetic effects enabled on a controller instance.
    ///
    /// Combine with bitwise OR: `Effects::PARALLAX | Effects::REVEAL`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Effects: u8 {
        /// Navbar gains `scrolled` past the shade threshold.
        const NAVBAR_SHADE = 1 << 0;
        /// Nav link matching the section under the probe point gains `active`.
        const ACTIVE_LINK = 1 << 1;
        /// Decorative orbs translate with scroll.
        const PARALLAX = 1 << 2;
        /// `.reveal` elements gain `visible` when scrolled into view.
        const REVEAL = 1 << 3;
        /// Typewriter loop over the role list.
        const ROLE_CYCLER = 1 << 4;
        /// One-shot hero subtitle typing effect.
        const HERO_TYPING = 1 << 5;
    }
}

impl Default for Effects {
    /// Everything except hero typing (the eased build's selection).
    fn default() -> Self {
        Self::all() - Self::HERO_TYPING
    }
}

// =============================================================================
// Controller configuration
// =============================================================================

/// Construction-time configuration for a [`PageController`].
///
/// [`PageController`]: crate::controller::PageController
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Anchor-click scroll strategy.
    pub strategy: ScrollStrategy,
    /// Enabled cosmetic effects.
    pub effects: Effects,
    /// Role strings cycled by the typewriter.
    pub roles: Vec<String>,
    /// Duration of one eased flight triggered from a nav link, in ms.
    pub flight_ms: f64,
}

impl ControllerConfig {
    /// The eased build: custom flight scroll, hero typing off.
    pub fn eased() -> Self {
        Self {
            strategy: ScrollStrategy::Eased,
            effects: Effects::default(),
            roles: crate::state::typewriter::default_roles(),
            flight_ms: crate::state::flight::NAV_FLIGHT_MS,
        }
    }

    /// The native build: built-in smooth scroll, hero typing on.
    pub fn native() -> Self {
        Self {
            strategy: ScrollStrategy::Native,
            effects: Effects::all(),
            ..Self::eased()
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::eased()
    }
}

// =============================================================================
// Section geometry
// =============================================================================

/// Vertical bounds of one `section[id]`, measured live at scroll time.
///
/// The covered range is half-open: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether a probe point falls inside this section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}
