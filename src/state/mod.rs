//! State Module - Page interaction state systems
//!
//! The state machines behind the page's interactive behavior:
//!
//! - **Scroll** - Navbar shade threshold, active-link selection, parallax
//! - **Nav** - Mobile navigation open/close with outside-click and Escape
//! - **Flight** - Eased anchor scroll animation and the landing effect
//! - **Typewriter** - Role cycler loop and the one-shot hero typing effect
//! - **Reveal** - Once-only reveal bookkeeping for viewport intersections
//!
//! Everything here is pure state: DOM effects are applied by the controller
//! through the port, and scheduling lives in the platform layer, so every
//! transition is steppable in tests.

pub mod flight;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

pub use flight::{Flight, FlightStep};
pub use nav::{MobileNav, NavChange};
pub use reveal::RevealSet;
pub use scroll::{active_section, navbar_shaded, parallax_offset};
pub use typewriter::{HeroTyping, RoleCycler};
