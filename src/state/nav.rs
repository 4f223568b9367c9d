//! Nav Module - Mobile navigation open/close state
//!
//! The open flag is explicit controller state; the `active` classes on the
//! toggle button and the menu panel, and the body `overflow` lock, are
//! projections of it applied by the controller. Closing is unconditional and
//! shared by outside clicks, Escape and anchor clicks.

/// What a nav transition asks the controller to project into the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChange {
    /// Add `active` to toggle + menu, lock body scroll.
    Opened,
    /// Remove `active` from toggle + menu, restore body scroll.
    Closed,
    /// Nothing to do.
    None,
}

/// Mobile navigation state machine.
#[derive(Debug, Default)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tap on the toggle control.
    pub fn toggle(&mut self) -> NavChange {
        self.open = !self.open;
        if self.open {
            NavChange::Opened
        } else {
            NavChange::Closed
        }
    }

    /// Unconditional close (anchor clicks use this).
    pub fn close(&mut self) -> NavChange {
        if self.open {
            self.open = false;
            NavChange::Closed
        } else {
            NavChange::None
        }
    }

    /// Document-level click: closes only if open and the click landed outside
    /// both the menu and the toggle.
    pub fn outside_click(&mut self, in_menu: bool, in_toggle: bool) -> NavChange {
        if self.open && !in_menu && !in_toggle {
            self.close()
        } else {
            NavChange::None
        }
    }

    /// Escape keypress: closes only if open.
    pub fn escape(&mut self) -> NavChange {
        if self.open {
            self.close()
        } else {
            NavChange::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut nav = MobileNav::new();
        assert!(!nav.is_open());

        assert_eq!(nav.toggle(), NavChange::Opened);
        assert!(nav.is_open());

        assert_eq!(nav.toggle(), NavChange::Closed);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut nav = MobileNav::new();
        assert_eq!(nav.close(), NavChange::None);

        nav.toggle();
        assert_eq!(nav.close(), NavChange::Closed);
        assert_eq!(nav.close(), NavChange::None);
    }

    #[test]
    fn test_outside_click_requires_open_and_outside() {
        let mut nav = MobileNav::new();

        // Closed: nothing, regardless of target.
        assert_eq!(nav.outside_click(false, false), NavChange::None);

        nav.toggle();

        // Clicks inside the menu or on the toggle leave it open.
        assert_eq!(nav.outside_click(true, false), NavChange::None);
        assert_eq!(nav.outside_click(false, true), NavChange::None);
        assert!(nav.is_open());

        // Truly outside: closes.
        assert_eq!(nav.outside_click(false, false), NavChange::Closed);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut nav = MobileNav::new();
        assert_eq!(nav.escape(), NavChange::None);

        nav.toggle();
        assert_eq!(nav.escape(), NavChange::Closed);
        assert!(!nav.is_open());
    }
}
