//! The settings/key-binding choreography.
//!
//! [`SettingsFlow`] is the state machine behind the settings panel: the
//! panel itself is Closed or Open, and while Open the nested key binding
//! overlay is independently Hidden or Visible. Every transition issues a
//! fixed set of [`TweenSpec`] commands against the injected scheduler and
//! returns immediately; the commands run concurrently, differing only in
//! their start delay.
//!
//! Closing the panel unconditionally forces the nested overlay back to
//! Hidden first. Skipping that would let a stale open sub-overlay survive a
//! close/reopen cycle, so it is an explicit first step of [`SettingsFlow::pop_out`],
//! not a teardown side effect.

use crate::easing::Easing;
use crate::tween::{MotionScheduler, TweenProperty, TweenSpec, TweenTarget};
use crate::visibility::{Visibility, VisibilitySlot};

/// Width of the content sliver left visible while the key binding overlay
/// occludes the panel.
pub const SLIVER_WIDTH: f64 = 120.0;

/// Scrim opacity while the key binding overlay is up.
pub const BACKGROUND_DIM_OCCLUDED: f64 = 0.9;
/// Scrim opacity while the panel is open normally.
pub const BACKGROUND_DIM_NORMAL: f64 = 0.6;

/// Duration of the scrim fade and the content slide.
pub const SLIDE_DURATION: f64 = 0.5;
/// Section list fade-out (quick, the overlay is taking over).
pub const SECTIONS_FADE_OUT_DURATION: f64 = 0.1;
/// Section list fade-in when the overlay goes away.
pub const SECTIONS_FADE_IN_DURATION: f64 = 0.5;
/// Back button fade duration, both directions.
pub const BACK_BUTTON_FADE_DURATION: f64 = 0.1;
/// Delay before the back button fades in.
pub const BACK_BUTTON_FADE_IN_DELAY: f64 = 0.1;

/// Chevron spacing while hovered.
pub const GLYPH_SPACING_HOVER: f64 = 5.0;
/// Duration of the chevron spacing animation, both directions.
pub const GLYPH_SPACING_DURATION: f64 = 0.5;
/// Glyph group scale while pressed.
pub const GLYPH_PRESS_SCALE: f64 = 0.75;
/// Duration of the slow press squish (expected to be interrupted).
pub const GLYPH_PRESS_DURATION: f64 = 2.0;
/// Duration of the elastic release.
pub const GLYPH_RELEASE_DURATION: f64 = 1.0;

/// Panel-level lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// State machine coordinating the settings panel and its nested key binding
/// overlay.
#[derive(Debug, Default)]
pub struct SettingsFlow {
    panel: PanelState,
    key_bindings: VisibilitySlot,
}

impl SettingsFlow {
    /// A closed panel with the key binding overlay hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Current key binding overlay state.
    pub fn key_bindings(&self) -> Visibility {
        self.key_bindings.get()
    }

    /// Whether the panel may receive input focus. False exactly while the
    /// key binding overlay is visible.
    pub fn accepts_focus(&self) -> bool {
        !self.key_bindings.is_visible()
    }

    /// Open the panel: the scrim dims in and the content slides to its
    /// origin. Returns false if already open.
    pub fn pop_in(&mut self, sched: &mut impl MotionScheduler) -> bool {
        if self.panel == PanelState::Open {
            return false;
        }
        self.panel = PanelState::Open;
        log::debug!("settings panel opening");

        sched.animate(TweenSpec {
            target: TweenTarget::Background,
            property: TweenProperty::Opacity,
            to: BACKGROUND_DIM_NORMAL,
            duration: SLIDE_DURATION,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        sched.animate(TweenSpec {
            target: TweenTarget::ContentRegion,
            property: TweenProperty::OffsetX,
            to: 0.0,
            duration: SLIDE_DURATION,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        true
    }

    /// Close the panel. Forces the key binding overlay Hidden first, even if
    /// it is currently visible, so reopening never starts with a stale open
    /// sub-overlay. Returns false if already closed.
    pub fn pop_out(&mut self, content_width: f64, sched: &mut impl MotionScheduler) -> bool {
        if self.panel == PanelState::Closed {
            return false;
        }
        self.set_key_bindings(Visibility::Hidden, content_width, sched);

        self.panel = PanelState::Closed;
        log::debug!("settings panel closing");

        sched.animate(TweenSpec {
            target: TweenTarget::Background,
            property: TweenProperty::Opacity,
            to: 0.0,
            duration: SLIDE_DURATION,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        sched.animate(TweenSpec {
            target: TweenTarget::ContentRegion,
            property: TweenProperty::OffsetX,
            to: -content_width,
            duration: SLIDE_DURATION,
            delay: 0.0,
            easing: Easing::OutQuint,
        });
        true
    }

    /// Set the key binding overlay's visibility. On an actual transition the
    /// full choreography is issued (all four commands before returning);
    /// re-issuing the current state does nothing. Returns whether the state
    /// changed.
    pub fn set_key_bindings(
        &mut self,
        visibility: Visibility,
        content_width: f64,
        sched: &mut impl MotionScheduler,
    ) -> bool {
        if visibility == Visibility::Visible && self.panel == PanelState::Closed {
            log::warn!("key binding overlay requested while the panel is closed");
        }
        let Some(next) = self.key_bindings.set(visibility) else {
            return false;
        };

        match next {
            Visibility::Visible => {
                log::debug!("key binding overlay shown");
                sched.animate(TweenSpec {
                    target: TweenTarget::Background,
                    property: TweenProperty::Opacity,
                    to: BACKGROUND_DIM_OCCLUDED,
                    duration: SLIDE_DURATION,
                    delay: 0.0,
                    easing: Easing::OutQuint,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::SectionList,
                    property: TweenProperty::Opacity,
                    to: 0.0,
                    duration: SECTIONS_FADE_OUT_DURATION,
                    delay: 0.0,
                    easing: Easing::Linear,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::ContentRegion,
                    property: TweenProperty::OffsetX,
                    to: SLIVER_WIDTH - content_width,
                    duration: SLIDE_DURATION,
                    delay: 0.0,
                    easing: Easing::OutQuint,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::BackButton,
                    property: TweenProperty::Opacity,
                    to: 1.0,
                    duration: BACK_BUTTON_FADE_DURATION,
                    delay: BACK_BUTTON_FADE_IN_DELAY,
                    easing: Easing::Linear,
                });
            }
            Visibility::Hidden => {
                log::debug!("key binding overlay hidden");
                sched.animate(TweenSpec {
                    target: TweenTarget::Background,
                    property: TweenProperty::Opacity,
                    to: BACKGROUND_DIM_NORMAL,
                    duration: SLIDE_DURATION,
                    delay: 0.0,
                    easing: Easing::OutQuint,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::SectionList,
                    property: TweenProperty::Opacity,
                    to: 1.0,
                    duration: SECTIONS_FADE_IN_DURATION,
                    delay: 0.0,
                    easing: Easing::OutQuint,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::ContentRegion,
                    property: TweenProperty::OffsetX,
                    to: 0.0,
                    duration: SLIDE_DURATION,
                    delay: 0.0,
                    easing: Easing::OutQuint,
                });
                sched.animate(TweenSpec {
                    target: TweenTarget::BackButton,
                    property: TweenProperty::Opacity,
                    to: 0.0,
                    duration: BACK_BUTTON_FADE_DURATION,
                    delay: 0.0,
                    easing: Easing::Linear,
                });
            }
        }
        true
    }
}

/// Back button hover: spread the chevrons.
pub fn back_button_hover(sched: &mut impl MotionScheduler) {
    sched.animate(TweenSpec {
        target: TweenTarget::GlyphRow,
        property: TweenProperty::Spacing,
        to: GLYPH_SPACING_HOVER,
        duration: GLYPH_SPACING_DURATION,
        delay: 0.0,
        easing: Easing::OutQuint,
    });
}

/// Back button hover lost: close the chevrons back up.
pub fn back_button_hover_lost(sched: &mut impl MotionScheduler) {
    sched.animate(TweenSpec {
        target: TweenTarget::GlyphRow,
        property: TweenProperty::Spacing,
        to: 0.0,
        duration: GLYPH_SPACING_DURATION,
        delay: 0.0,
        easing: Easing::OutQuint,
    });
}

/// Back button press: start the slow squish. The release tween is expected
/// to interrupt this long before it finishes.
pub fn back_button_press(sched: &mut impl MotionScheduler) {
    sched.animate(TweenSpec {
        target: TweenTarget::GlyphGroup,
        property: TweenProperty::Scale,
        to: GLYPH_PRESS_SCALE,
        duration: GLYPH_PRESS_DURATION,
        delay: 0.0,
        easing: Easing::OutQuint,
    });
}

/// Back button release: spring back to full scale with overshoot.
pub fn back_button_release(sched: &mut impl MotionScheduler) {
    sched.animate(TweenSpec {
        target: TweenTarget::GlyphGroup,
        property: TweenProperty::Scale,
        to: 1.0,
        duration: GLYPH_RELEASE_DURATION,
        delay: 0.0,
        easing: Easing::OutElastic,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::TweenRunner;

    /// Records issued commands instead of running them.
    #[derive(Default)]
    struct Recorder {
        specs: Vec<TweenSpec>,
    }

    impl MotionScheduler for Recorder {
        fn animate(&mut self, spec: TweenSpec) {
            self.specs.push(spec);
        }
    }

    impl Recorder {
        fn find(&self, target: TweenTarget, property: TweenProperty) -> Option<&TweenSpec> {
            self.specs
                .iter()
                .rev()
                .find(|s| s.target == target && s.property == property)
        }
    }

    fn open_flow(recorder: &mut Recorder) -> SettingsFlow {
        let mut flow = SettingsFlow::new();
        flow.pop_in(recorder);
        recorder.specs.clear();
        flow
    }

    #[test]
    fn test_initial_state() {
        let flow = SettingsFlow::new();
        assert_eq!(flow.panel_state(), PanelState::Closed);
        assert_eq!(flow.key_bindings(), Visibility::Hidden);
        assert!(flow.accepts_focus());
    }

    #[test]
    fn test_pop_in_issues_open_choreography() {
        let mut recorder = Recorder::default();
        let mut flow = SettingsFlow::new();

        assert!(flow.pop_in(&mut recorder));
        assert!(flow.is_open());

        let bg = recorder
            .find(TweenTarget::Background, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(bg.to, BACKGROUND_DIM_NORMAL);
        assert_eq!(bg.easing, Easing::OutQuint);

        let slide = recorder
            .find(TweenTarget::ContentRegion, TweenProperty::OffsetX)
            .unwrap();
        assert_eq!(slide.to, 0.0);

        // Opening again is a no-op.
        recorder.specs.clear();
        assert!(!flow.pop_in(&mut recorder));
        assert!(recorder.specs.is_empty());
    }

    #[test]
    fn test_show_key_bindings_issues_all_four_commands() {
        // Scenario A.
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);

        assert!(flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder));
        assert_eq!(recorder.specs.len(), 4);
        assert!(!flow.accepts_focus());

        let bg = recorder
            .find(TweenTarget::Background, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(bg.to, BACKGROUND_DIM_OCCLUDED);
        assert_eq!(bg.duration, SLIDE_DURATION);
        assert_eq!(bg.easing, Easing::OutQuint);

        let sections = recorder
            .find(TweenTarget::SectionList, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(sections.to, 0.0);
        assert_eq!(sections.duration, SECTIONS_FADE_OUT_DURATION);

        let slide = recorder
            .find(TweenTarget::ContentRegion, TweenProperty::OffsetX)
            .unwrap();
        assert_eq!(slide.to, SLIVER_WIDTH - 400.0);
        assert_eq!(slide.duration, SLIDE_DURATION);

        let back = recorder
            .find(TweenTarget::BackButton, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(back.to, 1.0);
        assert_eq!(back.delay, BACK_BUTTON_FADE_IN_DELAY);
    }

    #[test]
    fn test_hide_key_bindings_reverses() {
        // Scenario B.
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);
        flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder);
        recorder.specs.clear();

        assert!(flow.set_key_bindings(Visibility::Hidden, 400.0, &mut recorder));
        assert_eq!(recorder.specs.len(), 4);
        assert!(flow.accepts_focus());

        let bg = recorder
            .find(TweenTarget::Background, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(bg.to, BACKGROUND_DIM_NORMAL);

        let sections = recorder
            .find(TweenTarget::SectionList, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(sections.to, 1.0);
        assert_eq!(sections.duration, SECTIONS_FADE_IN_DURATION);
        assert_eq!(sections.easing, Easing::OutQuint);

        let slide = recorder
            .find(TweenTarget::ContentRegion, TweenProperty::OffsetX)
            .unwrap();
        assert_eq!(slide.to, 0.0);

        let back = recorder
            .find(TweenTarget::BackButton, TweenProperty::Opacity)
            .unwrap();
        assert_eq!(back.to, 0.0);
        assert_eq!(back.delay, 0.0);
    }

    #[test]
    fn test_set_same_state_is_idempotent() {
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);
        flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder);
        let issued = recorder.specs.len();

        assert!(!flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder));
        assert_eq!(recorder.specs.len(), issued);
    }

    #[test]
    fn test_pop_out_forces_key_bindings_hidden() {
        // Scenario C.
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);
        flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder);
        recorder.specs.clear();

        assert!(flow.pop_out(400.0, &mut recorder));
        assert_eq!(flow.key_bindings(), Visibility::Hidden);
        assert_eq!(flow.panel_state(), PanelState::Closed);

        // Reverse choreography plus the panel close commands.
        assert_eq!(recorder.specs.len(), 6);
        let slide = recorder
            .find(TweenTarget::ContentRegion, TweenProperty::OffsetX)
            .unwrap();
        assert_eq!(slide.to, -400.0);
    }

    #[test]
    fn test_pop_out_with_hidden_overlay_skips_reverse() {
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);

        assert!(flow.pop_out(400.0, &mut recorder));
        assert_eq!(recorder.specs.len(), 2);
    }

    #[test]
    fn test_panel_is_reusable() {
        let mut recorder = Recorder::default();
        let mut flow = SettingsFlow::new();

        for _ in 0..3 {
            assert!(flow.pop_in(&mut recorder));
            flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder);
            assert!(flow.pop_out(400.0, &mut recorder));
            assert_eq!(flow.key_bindings(), Visibility::Hidden);
            assert!(flow.accepts_focus());
        }
    }

    #[test]
    fn test_accepts_focus_tracks_overlay() {
        let mut recorder = Recorder::default();
        let mut flow = open_flow(&mut recorder);

        assert!(flow.accepts_focus());
        flow.set_key_bindings(Visibility::Visible, 400.0, &mut recorder);
        assert!(!flow.accepts_focus());
        flow.set_key_bindings(Visibility::Hidden, 400.0, &mut recorder);
        assert!(flow.accepts_focus());
    }

    #[test]
    fn test_back_button_hover_commands() {
        // Scenario E.
        let mut recorder = Recorder::default();

        back_button_hover(&mut recorder);
        let spread = recorder
            .find(TweenTarget::GlyphRow, TweenProperty::Spacing)
            .unwrap();
        assert_eq!(spread.to, GLYPH_SPACING_HOVER);
        assert_eq!(spread.duration, GLYPH_SPACING_DURATION);
        assert_eq!(spread.easing, Easing::OutQuint);

        back_button_hover_lost(&mut recorder);
        let close = recorder
            .find(TweenTarget::GlyphRow, TweenProperty::Spacing)
            .unwrap();
        assert_eq!(close.to, 0.0);
    }

    #[test]
    fn test_press_then_release_resumes_from_interrupted_scale() {
        // Scenario D, with the real runner: release mid-squish picks up from
        // the interrupted value and springs back with overshoot.
        let mut runner = TweenRunner::new();

        back_button_press(&mut runner);
        runner.advance(0.0);
        runner.advance(0.4);
        let interrupted = runner.value(TweenTarget::GlyphGroup, TweenProperty::Scale);
        assert!(interrupted < 1.0 && interrupted > GLYPH_PRESS_SCALE);

        back_button_release(&mut runner);
        runner.advance(0.4);

        // The elastic curve swings past 1.0 partway through.
        runner.advance(0.4 + 0.45 * GLYPH_RELEASE_DURATION);
        assert!(runner.value(TweenTarget::GlyphGroup, TweenProperty::Scale) > 1.0);

        // Strictly past the end, so float noise in the frame time cannot
        // leave the tween alive for one extra frame.
        assert!(!runner.advance(0.4 + GLYPH_RELEASE_DURATION + 0.05));
        let settled = runner.value(TweenTarget::GlyphGroup, TweenProperty::Scale);
        assert!((settled - 1.0).abs() < 1e-9);
    }
}
