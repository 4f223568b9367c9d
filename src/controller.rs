//! Page Interaction Controller
//!
//! Owns every piece of transient page state (scroll bookkeeping, mobile nav,
//! typewriters, the active flight, landings, reveals) and projects it into
//! the document through the [`DomPort`]. The platform layer feeds it events
//! and timestamps and schedules its continuations; nothing here blocks or
//! sleeps, so the whole controller is steppable against a fake DOM.
//!
//! Element handles are resolved once at boot and held for the page lifetime.
//! Absent optional elements degrade their feature silently; nothing halts
//! initialization of unrelated features.

use crate::port::DomPort;
use crate::state::flight::{Flight, FlightStep, NAV_CLEARANCE_PX};
use crate::state::nav::{MobileNav, NavChange};
use crate::state::reveal::RevealSet;
use crate::state::scroll::{active_section, navbar_shaded, parallax_offset};
use crate::state::typewriter::{HeroTyping, RoleCycler};
use crate::throttle::Throttle;
use crate::types::{ControllerConfig, Effects, ScrollStrategy, SectionBounds};

// =============================================================================
// THROTTLE WINDOWS
// =============================================================================

/// Navbar shade sampling window.
pub const NAVBAR_THROTTLE_MS: f64 = 10.0;

/// Active-link sampling window.
pub const ACTIVE_LINK_THROTTLE_MS: f64 = 100.0;

/// Parallax sampling window (roughly one frame).
pub const PARALLAX_THROTTLE_MS: f64 = 16.0;

// =============================================================================
// HANDLES
// =============================================================================

/// The elements the controller drives, resolved once by the platform.
///
/// Every slot is optional or may be empty; a missing element disables only
/// the features that depend on it.
#[derive(Debug)]
pub struct PageHandles<H> {
    pub navbar: Option<H>,
    pub body: Option<H>,
    pub nav_toggle: Option<H>,
    pub nav_menu: Option<H>,
    /// Nav links paired with their `href` values.
    pub nav_links: Vec<(String, H)>,
    /// `section[id]` elements paired with their ids.
    pub sections: Vec<(String, H)>,
    pub orbs: Vec<H>,
    pub reveals: Vec<H>,
    pub role_cycler: Option<H>,
    pub hero_subtitle: Option<H>,
}

impl<H> Default for PageHandles<H> {
    fn default() -> Self {
        Self {
            navbar: None,
            body: None,
            nav_toggle: None,
            nav_menu: None,
            nav_links: Vec::new(),
            sections: Vec::new(),
            orbs: Vec::new(),
            reveals: Vec::new(),
            role_cycler: None,
            hero_subtitle: None,
        }
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// What happened to an anchor click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Not an in-page hash link; default navigation should proceed.
    NotHash,
    /// Hash resolved to nothing: no scroll, no history entry.
    NoTarget,
    /// Native smooth scroll requested; handling is complete.
    Scrolled,
    /// An eased flight started; the platform must drive frames with this
    /// generation and arm the deadline timer at `duration_ms`.
    FlightStarted { generation: u64, duration_ms: f64 },
}

/// Outcome of one driven animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame.
    Continue,
    /// Final position applied; stop the frame loop.
    Done,
    /// The flight this loop was driving has been superseded; stop.
    Stale,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// The page's single interaction controller.
pub struct PageController<P: DomPort> {
    port: P,
    config: ControllerConfig,
    handles: PageHandles<P::Handle>,

    last_scroll_offset: f64,
    navbar_throttle: Throttle,
    links_throttle: Throttle,
    parallax_throttle: Throttle,

    nav: MobileNav,

    cycler: Option<RoleCycler>,
    hero: Option<HeroTyping>,

    // Single flight slot: a new flight supersedes the old one, and the
    // generation lets stale frame loops and deadline timers detect it.
    flight: Option<(u64, Flight, P::Handle)>,
    flight_generation: u64,

    landings: Vec<(u64, P::Handle, Option<P::Handle>)>,
    landing_tokens: u64,

    reveals: RevealSet,
}

impl<P: DomPort> PageController<P> {
    pub fn new(port: P, config: ControllerConfig, handles: PageHandles<P::Handle>) -> Self {
        let cycler = if config.effects.contains(Effects::ROLE_CYCLER)
            && handles.role_cycler.is_some()
        {
            RoleCycler::new(config.roles.clone())
        } else {
            None
        };
        let reveals = RevealSet::new(handles.reveals.len());

        Self {
            port,
            config,
            handles,
            last_scroll_offset: 0.0,
            navbar_throttle: Throttle::new(NAVBAR_THROTTLE_MS),
            links_throttle: Throttle::new(ACTIVE_LINK_THROTTLE_MS),
            parallax_throttle: Throttle::new(PARALLAX_THROTTLE_MS),
            nav: MobileNav::new(),
            cycler,
            hero: None,
            flight: None,
            flight_generation: 0,
            landings: Vec::new(),
            landing_tokens: 0,
            reveals,
        }
    }

    /// One-time startup pass: initial navbar state, hero text capture.
    pub fn init(&mut self) {
        self.apply_navbar_shade(self.port.scroll_y());

        if self.config.effects.contains(Effects::HERO_TYPING) {
            if let Some(hero) = self.handles.hero_subtitle.clone() {
                let text = self.port.text(&hero);
                self.port.set_text(&hero, "");
                self.port.set_style(&hero, "opacity", "1");
                self.hero = Some(HeroTyping::new(&text));
            }
        }

        log::info!(
            "page interaction controller initialized ({:?}, {} sections, {} reveal elements)",
            self.config.strategy,
            self.handles.sections.len(),
            self.handles.reveals.len(),
        );
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Last scroll offset sampled by [`on_scroll`](Self::on_scroll).
    pub fn last_scroll_offset(&self) -> f64 {
        self.last_scroll_offset
    }

    // =========================================================================
    // Scroll-driven state
    // =========================================================================

    /// Handle one scroll event at `now_ms`. Each effect has its own throttle
    /// window, so a single event stream feeds all three at different rates.
    pub fn on_scroll(&mut self, now_ms: f64) {
        let offset = self.port.scroll_y();

        if self.config.effects.contains(Effects::NAVBAR_SHADE)
            && self.navbar_throttle.admit(now_ms)
        {
            self.apply_navbar_shade(offset);
        }
        if self.config.effects.contains(Effects::ACTIVE_LINK)
            && self.links_throttle.admit(now_ms)
        {
            self.highlight_active_link(offset);
        }
        if self.config.effects.contains(Effects::PARALLAX)
            && self.parallax_throttle.admit(now_ms)
        {
            self.apply_parallax(offset);
        }

        self.last_scroll_offset = offset;
    }

    fn apply_navbar_shade(&mut self, offset: f64) {
        let Some(navbar) = &self.handles.navbar else {
            return;
        };
        if navbar_shaded(offset) {
            self.port.add_class(navbar, "scrolled");
        } else {
            self.port.remove_class(navbar, "scrolled");
        }
    }

    fn highlight_active_link(&mut self, offset: f64) {
        let bounds: Vec<SectionBounds> = self
            .handles
            .sections
            .iter()
            .map(|(_, el)| {
                SectionBounds::new(self.port.offset_top(el), self.port.offset_height(el))
            })
            .collect();

        // No match: the previously active link stays.
        let Some(index) = active_section(&bounds, offset) else {
            return;
        };
        let target_href = format!("#{}", self.handles.sections[index].0);

        for (href, link) in &self.handles.nav_links {
            self.port.remove_class(link, "active");
            if *href == target_href {
                self.port.add_class(link, "active");
            }
        }
    }

    fn apply_parallax(&mut self, offset: f64) {
        for (index, orb) in self.handles.orbs.iter().enumerate() {
            let translate = format!("translateY({}px)", parallax_offset(index, offset));
            self.port.set_style(orb, "transform", &translate);
        }
    }

    // =========================================================================
    // Mobile navigation
    // =========================================================================

    pub fn nav_is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn toggle_nav(&mut self) {
        let change = self.nav.toggle();
        self.project_nav(change);
    }

    pub fn close_nav(&mut self) {
        let change = self.nav.close();
        self.project_nav(change);
    }

    /// Document-level click; the platform reports where the target sits.
    pub fn on_document_click(&mut self, in_menu: bool, in_toggle: bool) {
        let change = self.nav.outside_click(in_menu, in_toggle);
        self.project_nav(change);
    }

    pub fn on_escape(&mut self) {
        let change = self.nav.escape();
        self.project_nav(change);
    }

    fn project_nav(&mut self, change: NavChange) {
        let (add, overflow) = match change {
            NavChange::Opened => (true, "hidden"),
            NavChange::Closed => (false, ""),
            NavChange::None => return,
        };

        for el in [&self.handles.nav_toggle, &self.handles.nav_menu]
            .into_iter()
            .flatten()
        {
            if add {
                self.port.add_class(el, "active");
            } else {
                self.port.remove_class(el, "active");
            }
        }
        if let Some(body) = &self.handles.body {
            self.port.set_style(body, "overflow", overflow);
        }
    }

    // =========================================================================
    // Anchor scrolling
    // =========================================================================

    /// Handle a click on an in-page anchor. `target` is the element the hash
    /// resolved to, if any.
    pub fn anchor_click(&mut self, href: &str, target: Option<&P::Handle>) -> ClickOutcome {
        if !href.starts_with('#') {
            return ClickOutcome::NotHash;
        }
        let Some(target) = target else {
            return ClickOutcome::NoTarget;
        };
        let target = target.clone();

        self.close_nav();
        let destination = self.port.offset_top(&target) - NAV_CLEARANCE_PX;

        match self.config.strategy {
            ScrollStrategy::Native => {
                self.port.scroll_to_smooth(destination);
                ClickOutcome::Scrolled
            }
            ScrollStrategy::Eased => {
                // Hash updated up front, without a jump of its own; the
                // flight owns the actual movement.
                self.port.push_hash(href);
                self.flight_generation += 1;
                let generation = self.flight_generation;
                if let Some(body) = &self.handles.body {
                    self.port.add_class(body, "is-scrolling");
                }
                let flight = Flight::new(self.port.scroll_y(), destination, self.config.flight_ms);
                self.flight = Some((generation, flight, target));
                ClickOutcome::FlightStarted {
                    generation,
                    duration_ms: self.config.flight_ms,
                }
            }
        }
    }

    /// Advance the flight of `generation` to the frame at `now_ms`.
    pub fn flight_frame(&mut self, generation: u64, now_ms: f64) -> FrameOutcome {
        let Some((current, flight, _)) = &mut self.flight else {
            return FrameOutcome::Stale;
        };
        if *current != generation {
            return FrameOutcome::Stale;
        }

        match flight.frame(now_ms) {
            FlightStep::Continue { position } => {
                self.port.scroll_to(position);
                FrameOutcome::Continue
            }
            FlightStep::Done { position } => {
                self.port.scroll_to(position);
                FrameOutcome::Done
            }
        }
    }

    /// The deadline timer armed at flight start has elapsed: pin the final
    /// position, drop the `is-scrolling` flag and land on the target. Returns
    /// the landing token the platform must clear after [`LANDING_MS`], or
    /// `None` if this flight was superseded.
    ///
    /// [`LANDING_MS`]: crate::state::flight::LANDING_MS
    pub fn flight_deadline(&mut self, generation: u64) -> Option<u64> {
        let (current, _, _) = self.flight.as_ref()?;
        if *current != generation {
            return None;
        }
        let (_, flight, target) = self.flight.take()?;

        // The deadline can beat the frame loop to the finish line (throttled
        // frames in a background tab), so the destination is applied here
        // rather than trusting the last frame to have reached it.
        self.port.scroll_to(flight.target());

        if let Some(body) = &self.handles.body {
            self.port.remove_class(body, "is-scrolling");
        }

        self.port.add_class(&target, "section-landing");
        let ripple = self.port.inject_ripple(&target);

        self.landing_tokens += 1;
        let token = self.landing_tokens;
        self.landings.push((token, target, ripple));
        Some(token)
    }

    /// Remove a landing's class and ripple node.
    pub fn clear_landing(&mut self, token: u64) {
        let Some(index) = self.landings.iter().position(|(t, _, _)| *t == token) else {
            return;
        };
        let (_, target, ripple) = self.landings.remove(index);
        self.port.remove_class(&target, "section-landing");
        if let Some(ripple) = ripple {
            self.port.remove_node(&ripple);
        }
    }

    // =========================================================================
    // Typewriters
    // =========================================================================

    /// Advance the role cycler one step; returns the delay until the next
    /// tick, or `None` when the feature is absent (stops the chain).
    pub fn typewriter_tick(&mut self) -> Option<u32> {
        let cycler = self.cycler.as_mut()?;
        let el = self.handles.role_cycler.clone()?;
        let (text, delay) = cycler.tick();
        self.port.set_text(&el, &text);
        Some(delay)
    }

    /// Advance the hero typing effect; `None` once complete (or disabled).
    pub fn hero_tick(&mut self) -> Option<u32> {
        let hero = self.hero.as_mut()?;
        let el = self.handles.hero_subtitle.clone()?;
        let (text, delay) = hero.tick()?;
        self.port.set_text(&el, &text);
        Some(delay)
    }

    // =========================================================================
    // Reveals
    // =========================================================================

    /// A reveal element crossed into view. Applies `visible` exactly once.
    pub fn reveal(&mut self, index: usize) {
        if !self.config.effects.contains(Effects::REVEAL) {
            return;
        }
        if self.reveals.mark(index) {
            if let Some(el) = self.handles.reveals.get(index) {
                self.port.add_class(el, "visible");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
