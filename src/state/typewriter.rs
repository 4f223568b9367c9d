//! Typewriter Module - Role cycler and hero typing state machines
//!
//! Two self-rescheduling typing effects:
//!
//! - [`RoleCycler`] - endless loop over a fixed role list: type a word out,
//!   pause, delete it, advance circularly. Each `tick` returns the text to
//!   render and the delay until the next tick, so the scheduling mechanism
//!   stays outside the machine.
//! - [`HeroTyping`] - one-shot reveal of the hero subtitle, one character per
//!   tick until the captured text is fully restored.

// =============================================================================
// TIMING CONSTANTS
// =============================================================================

/// Delay between ticks while typing a word out.
pub const TYPE_DELAY_MS: u32 = 80;

/// Delay between ticks while deleting.
pub const DELETE_DELAY_MS: u32 = 40;

/// Pause after a word is fully typed, before deletion starts.
pub const WORD_PAUSE_MS: u32 = 2000;

/// Pause after a word is fully deleted, before the next word types.
pub const ADVANCE_PAUSE_MS: u32 = 500;

/// Delay between boot and the cycler's first tick.
pub const START_DELAY_MS: u32 = 1500;

/// Per-character delay of the hero typing effect.
pub const HERO_CHAR_DELAY_MS: u32 = 50;

/// Delay between boot and the hero typing effect's first tick, leaving room
/// for the reveal animation.
pub const HERO_START_DELAY_MS: u32 = 800;

/// The portfolio's role list.
pub fn default_roles() -> Vec<String> {
    [
        "Agentic AI Systems",
        "Multi-Agent Workflows",
        "RAG Pipelines",
        "LLM-Powered Automation",
        "Autonomous Decision Engines",
        "AI Orchestration Platforms",
        "Intelligent Chatbots",
        "Enterprise AI Solutions",
        "Real-time Tool Calling",
        "GenAI Applications",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

// =============================================================================
// ROLE CYCLER
// =============================================================================

/// Endless typewriter over a fixed role list.
#[derive(Debug)]
pub struct RoleCycler {
    roles: Vec<String>,
    role: usize,
    cursor: usize,
    deleting: bool,
}

impl RoleCycler {
    /// Build a cycler; `None` if the list has no usable (non-empty) roles.
    pub fn new(roles: Vec<String>) -> Option<Self> {
        let roles: Vec<String> = roles.into_iter().filter(|r| !r.is_empty()).collect();
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            role: 0,
            cursor: 0,
            deleting: false,
        })
    }

    /// Advance one step. Returns the text to render and the delay until the
    /// next tick, in ms.
    pub fn tick(&mut self) -> (String, u32) {
        let current = &self.roles[self.role];
        let len = current.chars().count();

        let mut delay = if self.deleting {
            self.cursor -= 1;
            DELETE_DELAY_MS
        } else {
            self.cursor += 1;
            TYPE_DELAY_MS
        };
        let text: String = current.chars().take(self.cursor).collect();

        if !self.deleting && self.cursor == len {
            // Word complete: hold it, then start deleting.
            delay = WORD_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.cursor == 0 {
            // Word gone: advance circularly, short pause before typing.
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            delay = ADVANCE_PAUSE_MS;
        }

        (text, delay)
    }
}

// =============================================================================
// HERO TYPING
// =============================================================================

/// One-shot typing reveal of captured text.
#[derive(Debug)]
pub struct HeroTyping {
    chars: Vec<char>,
    cursor: usize,
}

impl HeroTyping {
    pub fn new(full_text: &str) -> Self {
        Self {
            chars: full_text.chars().collect(),
            cursor: 0,
        }
    }

    /// Append one character. Returns the text to render and the delay until
    /// the next tick, or `None` once the full text has been rendered.
    pub fn tick(&mut self) -> Option<(String, u32)> {
        if self.cursor >= self.chars.len() {
            return None;
        }
        self.cursor += 1;
        let text: String = self.chars[..self.cursor].iter().collect();
        Some((text, HERO_CHAR_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(roles: &[&str]) -> RoleCycler {
        RoleCycler::new(roles.iter().map(|r| r.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_types_word_then_pauses() {
        let mut roles = cycler(&["Hi"]);
        assert_eq!(roles.tick(), ("H".to_string(), TYPE_DELAY_MS));
        // Word complete: long pause, deletion starts next.
        assert_eq!(roles.tick(), ("Hi".to_string(), WORD_PAUSE_MS));
        assert_eq!(roles.tick(), ("H".to_string(), DELETE_DELAY_MS));
        assert_eq!(roles.tick(), ("".to_string(), ADVANCE_PAUSE_MS));
    }

    #[test]
    fn test_wraparound_over_role_list() {
        // ["A", "BB"] passes through "A", "", "B", "BB" and wraps back
        // to "A".
        let mut roles = cycler(&["A", "BB"]);

        assert_eq!(roles.tick(), ("A".to_string(), WORD_PAUSE_MS));
        assert_eq!(roles.tick(), ("".to_string(), ADVANCE_PAUSE_MS));
        assert_eq!(roles.tick(), ("B".to_string(), TYPE_DELAY_MS));
        assert_eq!(roles.tick(), ("BB".to_string(), WORD_PAUSE_MS));
        assert_eq!(roles.tick(), ("B".to_string(), DELETE_DELAY_MS));
        assert_eq!(roles.tick(), ("".to_string(), ADVANCE_PAUSE_MS));
        // Wrapped: first role again.
        assert_eq!(roles.tick(), ("A".to_string(), WORD_PAUSE_MS));
    }

    #[test]
    fn test_empty_and_blank_role_lists_rejected() {
        assert!(RoleCycler::new(vec![]).is_none());
        assert!(RoleCycler::new(vec![String::new()]).is_none());
        // Blank entries are dropped, usable ones survive.
        let mut roles =
            RoleCycler::new(vec![String::new(), "Ok".to_string()]).unwrap();
        assert_eq!(roles.tick().0, "O");
    }

    #[test]
    fn test_multibyte_roles_step_per_character() {
        let mut roles = cycler(&["héllo"]);
        assert_eq!(roles.tick().0, "h");
        assert_eq!(roles.tick().0, "hé");
        assert_eq!(roles.tick().0, "hél");
    }

    #[test]
    fn test_hero_typing_runs_once() {
        let mut hero = HeroTyping::new("ab");
        assert_eq!(hero.tick(), Some(("a".to_string(), HERO_CHAR_DELAY_MS)));
        assert_eq!(hero.tick(), Some(("ab".to_string(), HERO_CHAR_DELAY_MS)));
        assert_eq!(hero.tick(), None);
        assert_eq!(hero.tick(), None);
    }

    #[test]
    fn test_hero_typing_empty_text() {
        let mut hero = HeroTyping::new("");
        assert_eq!(hero.tick(), None);
    }
}
