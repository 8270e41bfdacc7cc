//! Observable show/hide state.
//!
//! Both the settings panel's nested key binding overlay and the overlay
//! machinery in general track visibility through [`VisibilitySlot`], whose
//! `set` reports each actual transition exactly once. Callers react to the
//! returned transition synchronously, so duplicate sets are idempotent and
//! never re-trigger a reaction.

/// Visibility of an overlay surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Holder of a [`Visibility`] with change detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilitySlot {
    state: Visibility,
}

impl VisibilitySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn get(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Set the state, returning the new state only if it actually changed.
    pub fn set(&mut self, next: Visibility) -> Option<Visibility> {
        if self.state == next {
            return None;
        }
        self.state = next;
        Some(next)
    }
}
