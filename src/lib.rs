//! # glide
//!
//! Page interaction engine for a static single-page portfolio site: navbar
//! scroll state, mobile navigation, smooth anchor scrolling (native or eased
//! flight with a landing effect), reveal-on-scroll, a role-cycler typewriter
//! and parallax orbs.
//!
//! ## Architecture
//!
//! One [`PageController`] owns all transient page state and drives the
//! document through the narrow [`DomPort`] trait. The state systems under
//! [`state`] are pure machines: each tick or event transition takes a
//! timestamp in and hands effects out, so everything is unit-testable with a
//! fake DOM and a stepped clock. Scheduling (timeouts, animation frames, the
//! intersection observer) lives entirely in [`platform::browser`], which is
//! the only module that touches web-sys.
//!
//! The historical site shipped two near-identical scripts; they survive as
//! two [`ControllerConfig`] presets ([`ControllerConfig::native`] and
//! [`ControllerConfig::eased`]) on a single controller.
//!
//! ## Modules
//!
//! - [`types`] - Strategy, effects bitflags, config, section geometry
//! - [`state`] - Scroll, nav, flight, typewriter and reveal state systems
//! - [`controller`] - The page interaction controller
//! - [`platform`] - Browser binding (listeners, observer, scheduling)

pub mod controller;
pub mod easing;
pub mod platform;
pub mod port;
pub mod state;
pub mod throttle;
pub mod types;

// Re-export commonly used items
pub use controller::{ClickOutcome, FrameOutcome, PageController, PageHandles};
pub use easing::ease_in_out_cubic;
pub use platform::{BootError, WebDom, boot};
pub use port::DomPort;
pub use throttle::Throttle;
pub use types::{ControllerConfig, Effects, ScrollStrategy, SectionBounds};

use wasm_bindgen::prelude::*;

/// Module entry point: boots the default (eased) build against the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();

    boot(ControllerConfig::default()).map_err(|err| JsValue::from_str(&err.to_string()))
}
