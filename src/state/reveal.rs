//! Reveal Module - Once-only reveal bookkeeping
//!
//! The platform's intersection observer reports which reveal element crossed
//! into view; this set records it so the `visible` class is applied exactly
//! once per element per session. Leaving the viewport never clears the flag.

/// Reveal constants: the observer contracts the viewport bottom by 100px and
/// fires at 10% visibility.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Which reveal elements (by index) have been revealed.
#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    /// Track `count` reveal elements, all initially hidden.
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Mark the element revealed. Returns `true` only on the first call for
    /// this index; out-of-range indices are ignored.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen @ false) => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mark_reveals() {
        let mut set = RevealSet::new(3);
        assert!(!set.is_revealed(1));
        assert!(set.mark(1));
        assert!(set.is_revealed(1));
    }

    #[test]
    fn test_mark_is_permanent_and_once_only() {
        let mut set = RevealSet::new(2);
        assert!(set.mark(0));
        // Re-entering the viewport must not re-trigger.
        assert!(!set.mark(0));
        assert!(set.is_revealed(0));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = RevealSet::new(1);
        assert!(!set.mark(5));
        assert!(!set.is_revealed(5));
    }
}
