//! Back Button - chevron affordance for leaving the key binding overlay
//!
//! Three chevron glyphs over a "back" label. Hover spreads the chevrons,
//! press starts a slow squish that the release interrupts with an elastic
//! spring back. The spacing/scale values live in the widget's tween runner;
//! every `NextFrame` they are read back and applied with `apply_over`.

use makepad_widgets::*;
use tempo_overlay::flow::{
    back_button_hover, back_button_hover_lost, back_button_press, back_button_release,
};
use tempo_overlay::{TweenProperty, TweenRunner, TweenTarget};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    Chevron = <Label> {
        text: "❮"
        draw_text: {
            instance opacity: 0.0
            text_style: { font_size: 15.0 }
            fn get_color(self) -> vec4 {
                let c = (TEXT_PRIMARY);
                return vec4(c.xyz, self.opacity);
            }
        }
    }

    pub BackButton = {{BackButton}} {
        width: 120, height: 150
        visible: false
        flow: Down
        spacing: 10
        align: {x: 0.5, y: 0.5}
        cursor: Hand

        show_bg: true
        draw_bg: {
            instance opacity: 0.0
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                // Subtle backing that brightens slightly on hover.
                let strength = 0.25 + 0.1 * self.hover;
                return vec4(0.0, 0.0, 0.0, strength * self.opacity);
            }
        }

        glyph_row = <View> {
            width: Fit, height: Fit
            flow: Right
            spacing: 0.0
            align: {x: 0.5, y: 0.5}

            chevron1 = <Chevron> {}
            chevron2 = <Chevron> {}
            chevron3 = <Chevron> {}
        }

        back_label = <Label> {
            text: "back"
            draw_text: {
                instance opacity: 0.0
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    let c = (TEXT_PRIMARY);
                    return vec4(c.xyz, self.opacity);
                }
            }
        }
    }
}

/// Actions emitted by the back button.
#[derive(Clone, Debug, DefaultNone)]
pub enum BackButtonAction {
    None,
    /// The button was activated (tap released inside it).
    Clicked,
}

// Rest font sizes the squish scale multiplies into.
const CHEVRON_FONT_SIZE: f64 = 15.0;
const LABEL_FONT_SIZE: f64 = 12.0;

#[derive(Live, LiveHook, Widget)]
pub struct BackButton {
    #[deref]
    view: View,

    /// Spacing and scale micro-animations, owned by the runner.
    #[rust]
    motion: TweenRunner,
}

impl Widget for BackButton {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if let Event::NextFrame(nf) = event {
            if self.motion.advance(nf.time) {
                cx.new_next_frame();
            }
            self.apply_motion(cx);
        }

        match event.hits(cx, self.view.area()) {
            Hit::FingerHoverIn(_) => {
                back_button_hover(&mut self.motion);
                self.view.apply_over(cx, live! { draw_bg: { hover: 1.0 } });
                cx.new_next_frame();
            }
            Hit::FingerHoverOut(_) => {
                back_button_hover_lost(&mut self.motion);
                self.view.apply_over(cx, live! { draw_bg: { hover: 0.0 } });
                cx.new_next_frame();
            }
            Hit::FingerDown(_) => {
                back_button_press(&mut self.motion);
                cx.new_next_frame();
            }
            Hit::FingerUp(fe) => {
                back_button_release(&mut self.motion);
                cx.new_next_frame();
                if fe.was_tap() {
                    cx.widget_action(self.widget_uid(), &scope.path, BackButtonAction::Clicked);
                }
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl BackButton {
    fn apply_motion(&mut self, cx: &mut Cx) {
        let spacing = self.motion.value(TweenTarget::GlyphRow, TweenProperty::Spacing);
        let scale = self.motion.value(TweenTarget::GlyphGroup, TweenProperty::Scale);

        self.view.view(id!(glyph_row)).apply_over(
            cx,
            live! {
                spacing: (spacing)
            },
        );

        let chevron_size = CHEVRON_FONT_SIZE * scale;
        for chevron in [
            id!(glyph_row.chevron1),
            id!(glyph_row.chevron2),
            id!(glyph_row.chevron3),
        ] {
            self.view.label(chevron).apply_over(
                cx,
                live! {
                    draw_text: { text_style: { font_size: (chevron_size) } }
                },
            );
        }

        let label_size = LABEL_FONT_SIZE * scale;
        self.view.label(id!(back_label)).apply_over(
            cx,
            live! {
                draw_text: { text_style: { font_size: (label_size) } }
            },
        );

        self.view.redraw(cx);
    }
}

impl BackButtonRef {
    /// Apply the faded opacity coming from the panel choreography. The
    /// button stops receiving hits entirely while fully transparent.
    pub fn set_opacity(&self, cx: &mut Cx, opacity: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.set_visible(cx, opacity > 0.001);
            inner.view.apply_over(
                cx,
                live! {
                    draw_bg: { opacity: (opacity) }
                },
            );
            for label in [
                id!(glyph_row.chevron1) as &[LiveId],
                id!(glyph_row.chevron2),
                id!(glyph_row.chevron3),
                id!(back_label),
            ] {
                inner.view.label(label).apply_over(
                    cx,
                    live! {
                        draw_text: { opacity: (opacity) }
                    },
                );
            }
        }
    }

    /// Pin the button's left edge and width so its hit region covers the
    /// currently visible sliver of the content region.
    pub fn set_frame(&self, cx: &mut Cx, left: f64, width: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.apply_over(
                cx,
                live! {
                    margin: { left: (left) }
                    width: (width)
                },
            );
        }
    }

    /// Whether this button was activated in the given actions.
    pub fn clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            BackButtonAction::Clicked
        )
    }
}
