//! Dom port - the narrow surface the controller drives.
//!
//! The state systems never touch a real document: everything they need from
//! the host environment is behind [`DomPort`] (class membership, a few inline
//! style properties, text content, vertical geometry, the scroll position and
//! the history hash). The browser implementation lives in
//! [`platform::browser`]; tests drive the controller against [`fake::FakeDom`].
//!
//! [`platform::browser`]: crate::platform::browser

/// Host-environment operations needed by the controller.
///
/// `Handle` is an opaque reference to one element; the platform resolves
/// handles once at boot and the controller holds them for the page lifetime.
pub trait DomPort {
    type Handle: Clone;

    // Class membership
    fn add_class(&self, el: &Self::Handle, class: &str);
    fn remove_class(&self, el: &Self::Handle, class: &str);

    // Inline style / text content
    fn set_style(&self, el: &Self::Handle, property: &str, value: &str);
    fn set_text(&self, el: &Self::Handle, text: &str);
    fn text(&self, el: &Self::Handle) -> String;

    // Geometry (live, relative to the document top)
    fn offset_top(&self, el: &Self::Handle) -> f64;
    fn offset_height(&self, el: &Self::Handle) -> f64;

    // Viewport scroll position
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, y: f64);
    /// Built-in smooth scroll (the native strategy).
    fn scroll_to_smooth(&self, y: f64);

    // Landing effect plumbing
    /// Append a `div.landing-ripple` child to `target`, returning its handle
    /// (`None` if the host refused to create the node).
    fn inject_ripple(&self, target: &Self::Handle) -> Option<Self::Handle>;
    fn remove_node(&self, el: &Self::Handle);

    /// Replace the URL hash without causing a scroll.
    fn push_hash(&self, hash: &str);
}

// =============================================================================
// Fake DOM (test double)
// =============================================================================

#[cfg(test)]
pub(crate) mod fake {
    use super::DomPort;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    pub struct FakeElement {
        pub classes: BTreeSet<String>,
        pub styles: BTreeMap<String, String>,
        pub text: String,
        pub top: f64,
        pub height: f64,
        pub removed: bool,
        pub parent: Option<usize>,
    }

    #[derive(Debug, Default)]
    pub struct FakeState {
        pub elements: Vec<FakeElement>,
        pub scroll_y: f64,
        pub smooth_scrolls: Vec<f64>,
        pub history: Vec<String>,
    }

    /// In-memory [`DomPort`] with handles as indices. Cloning shares state,
    /// so tests can keep a handle on the DOM they gave the controller.
    #[derive(Debug, Default, Clone)]
    pub struct FakeDom {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeDom {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add an element with the given vertical bounds, returning its handle.
        pub fn add_element(&self, top: f64, height: f64) -> usize {
            let mut state = self.state.borrow_mut();
            state.elements.push(FakeElement {
                top,
                height,
                ..FakeElement::default()
            });
            state.elements.len() - 1
        }

        pub fn add_element_with_text(&self, text: &str) -> usize {
            let handle = self.add_element(0.0, 0.0);
            self.state.borrow_mut().elements[handle].text = text.to_string();
            handle
        }

        pub fn set_scroll_y(&self, y: f64) {
            self.state.borrow_mut().scroll_y = y;
        }

        pub fn has_class(&self, handle: usize, class: &str) -> bool {
            self.state.borrow().elements[handle].classes.contains(class)
        }

        pub fn style(&self, handle: usize, property: &str) -> Option<String> {
            self.state.borrow().elements[handle]
                .styles
                .get(property)
                .cloned()
        }

        pub fn text_of(&self, handle: usize) -> String {
            self.state.borrow().elements[handle].text.clone()
        }

        pub fn smooth_scrolls(&self) -> Vec<f64> {
            self.state.borrow().smooth_scrolls.clone()
        }

        pub fn history(&self) -> Vec<String> {
            self.state.borrow().history.clone()
        }

        /// Handles of live (not removed) children of `parent`.
        pub fn children_of(&self, parent: usize) -> Vec<usize> {
            let state = self.state.borrow();
            state
                .elements
                .iter()
                .enumerate()
                .filter(|(_, el)| el.parent == Some(parent) && !el.removed)
                .map(|(i, _)| i)
                .collect()
        }
    }

    impl DomPort for FakeDom {
        type Handle = usize;

        fn add_class(&self, el: &usize, class: &str) {
            self.state.borrow_mut().elements[*el]
                .classes
                .insert(class.to_string());
        }

        fn remove_class(&self, el: &usize, class: &str) {
            self.state.borrow_mut().elements[*el].classes.remove(class);
        }

        fn set_style(&self, el: &usize, property: &str, value: &str) {
            self.state.borrow_mut().elements[*el]
                .styles
                .insert(property.to_string(), value.to_string());
        }

        fn set_text(&self, el: &usize, text: &str) {
            self.state.borrow_mut().elements[*el].text = text.to_string();
        }

        fn text(&self, el: &usize) -> String {
            self.state.borrow().elements[*el].text.clone()
        }

        fn offset_top(&self, el: &usize) -> f64 {
            self.state.borrow().elements[*el].top
        }

        fn offset_height(&self, el: &usize) -> f64 {
            self.state.borrow().elements[*el].height
        }

        fn scroll_y(&self) -> f64 {
            self.state.borrow().scroll_y
        }

        fn scroll_to(&self, y: f64) {
            self.state.borrow_mut().scroll_y = y;
        }

        fn scroll_to_smooth(&self, y: f64) {
            let mut state = self.state.borrow_mut();
            state.smooth_scrolls.push(y);
            state.scroll_y = y;
        }

        fn inject_ripple(&self, target: &usize) -> Option<usize> {
            let mut state = self.state.borrow_mut();
            state.elements.push(FakeElement {
                classes: ["landing-ripple".to_string()].into_iter().collect(),
                parent: Some(*target),
                ..FakeElement::default()
            });
            Some(state.elements.len() - 1)
        }

        fn remove_node(&self, el: &usize) {
            self.state.borrow_mut().elements[*el].removed = true;
        }

        fn push_hash(&self, hash: &str) {
            self.state.borrow_mut().history.push(hash.to_string());
        }
    }
}
