//! Settings Panel - the sliding settings overlay and its choreography host
//!
//! Owns the scrim, the sliding content column (header, section rows,
//! footer), the nested key binding overlay and the back button. All state
//! transitions go through [`SettingsFlow`]; this widget's job is to feed
//! the resulting tween values back into the draw tree each frame and to
//! keep the overlay and back button aligned with the content's current,
//! possibly mid-slide, geometry.

use makepad_widgets::*;
use tempo_overlay::{
    create_footer, create_header, create_sections, ContentGeometry, SettingsFlow, TweenProperty,
    TweenRunner, TweenTarget, Visibility,
};

use crate::back_button::BackButtonWidgetExt;
use crate::key_binding_overlay::KeyBindingOverlayWidgetExt;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;
    use crate::back_button::BackButton;
    use crate::key_binding_overlay::KeyBindingOverlay;

    SectionRow = <View> {
        width: Fill, height: Fit
        padding: {left: 20, right: 20, top: 12, bottom: 12}
        cursor: Hand
        align: {x: 0.0, y: 0.5}
        show_bg: true
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                return mix(vec4(0.0, 0.0, 0.0, 0.0), (ROW_HOVER), self.hover);
            }
        }

        animator: {
            hover = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {hover: 1.0} }
                }
            }
        }

        row_label = <Label> {
            draw_text: {
                instance opacity: 1.0
                color: (TEXT_PRIMARY)
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    return vec4(self.color.xyz, self.color.w * self.opacity);
                }
            }
        }
    }

    pub SettingsPanel = {{SettingsPanel}} {
        width: Fill, height: Fill
        visible: false
        flow: Overlay

        scrim = <View> {
            width: Fill, height: Fill
            show_bg: true
            draw_bg: {
                instance dim: 0.0
                fn pixel(self) -> vec4 {
                    return vec4(0.0, 0.0, 0.0, self.dim);
                }
            }
        }

        content = <View> {
            width: 400, height: Fill
            flow: Down
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    return (PANEL_BG);
                }
            }

            header = <View> {
                width: Fill, height: Fit
                padding: {left: 20, right: 20, top: 30, bottom: 20}
                flow: Down
                spacing: 4

                title = <Label> {
                    draw_text: {
                        color: (ACCENT_BLUE)
                        text_style: { font_size: 20.0 }
                    }
                }

                subtitle = <Label> {
                    draw_text: {
                        color: (TEXT_SECONDARY)
                        text_style: { font_size: 11.0 }
                    }
                }
            }

            sections = <View> {
                width: Fill, height: Fill
                flow: Down

                general = <SectionRow> {}
                graphics = <SectionRow> {}
                gameplay = <SectionRow> {}
                audio = <SectionRow> {}
                skin = <SectionRow> {}
                input = <SectionRow> {}
                online = <SectionRow> {}
                maintenance = <SectionRow> {}
                debug = <SectionRow> {}
            }

            footer = <View> {
                width: Fill, height: Fit
                padding: {left: 20, right: 20, top: 16, bottom: 16}
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        return (PANEL_BG_RAISED);
                    }
                }

                hint = <Label> {
                    draw_text: {
                        color: (TEXT_DIM)
                        text_style: { font_size: 10.0 }
                    }
                }
            }
        }

        key_bindings = <KeyBindingOverlay> {}

        back_anchor = <View> {
            width: Fill, height: Fill
            align: {x: 0.0, y: 0.5}

            back_button = <BackButton> {}
        }
    }
}

/// Design-time width of the content column, used before the first layout.
const CONTENT_WIDTH: f64 = 400.0;

/// Actions the settings panel reports to whoever hosts it.
#[derive(Clone, Debug, DefaultNone)]
pub enum SettingsPanelAction {
    None,
    Opened,
    Closed,
}

#[derive(Live, Widget)]
pub struct SettingsPanel {
    #[deref]
    view: View,

    #[rust]
    flow: SettingsFlow,
    #[rust]
    motion: TweenRunner,
}

impl LiveHook for SettingsPanel {
    fn after_new_from_doc(&mut self, cx: &mut Cx) {
        let header = create_header();
        self.view
            .label(id!(content.header.title))
            .set_text(cx, header.title);
        self.view
            .label(id!(content.header.subtitle))
            .set_text(cx, header.subtitle);
        self.view
            .label(id!(content.footer.hint))
            .set_text(cx, create_footer().hint);

        for item in create_sections() {
            let row = match item.id {
                "general" => live_id!(general),
                "graphics" => live_id!(graphics),
                "gameplay" => live_id!(gameplay),
                "audio" => live_id!(audio),
                "skin" => live_id!(skin),
                "input" => live_id!(input),
                "online" => live_id!(online),
                "maintenance" => live_id!(maintenance),
                "debug" => live_id!(debug),
                _ => continue,
            };
            let path = [live_id!(content), live_id!(sections), row, live_id!(row_label)];
            self.view.label(&path).set_text(cx, item.label);
        }

        // Rest values for a panel that has never been opened: scrim clear,
        // back button faded out, content parked off screen.
        self.motion
            .set_value(TweenTarget::Background, TweenProperty::Opacity, 0.0);
        self.motion
            .set_value(TweenTarget::BackButton, TweenProperty::Opacity, 0.0);
        self.motion.set_value(
            TweenTarget::ContentRegion,
            TweenProperty::OffsetX,
            -CONTENT_WIDTH,
        );
    }
}

impl Widget for SettingsPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        match event {
            Event::NextFrame(nf) => {
                let still_running = self.motion.advance(nf.time);
                self.apply_motion(cx);
                self.sync_overlay_geometry(cx);
                if still_running {
                    cx.new_next_frame();
                } else if !self.flow.is_open() {
                    // Close slide finished: take the whole panel out of the
                    // draw tree until the next open.
                    self.view.set_visible(cx, false);
                }
            }
            Event::KeyDown(ke) if ke.key_code == KeyCode::Escape && self.flow.is_open() => {
                if self.flow.accepts_focus() {
                    self.close(cx, scope);
                } else {
                    self.hide_key_bindings(cx);
                }
            }
            Event::Actions(actions) => {
                let actions = actions.as_slice();
                if self
                    .view
                    .view(id!(content.sections.input))
                    .finger_up(actions)
                    .is_some()
                    && self.flow.accepts_focus()
                {
                    self.show_key_bindings(cx);
                }
                if self.view.back_button(id!(back_button)).clicked(actions) {
                    self.hide_key_bindings(cx);
                }
                if self
                    .view
                    .key_binding_overlay(id!(key_bindings))
                    .close_clicked(actions)
                {
                    self.hide_key_bindings(cx);
                }
            }
            _ => {}
        }

        // A tap on the scrim outside the panel chrome closes it.
        if self.flow.is_open() && self.flow.accepts_focus() {
            if let Hit::FingerUp(fe) = event.hits(cx, self.view.view(id!(scrim)).area()) {
                let content = self.view.view(id!(content)).area().rect(cx);
                if fe.was_tap() && !content.contains(fe.abs) {
                    self.close(cx, scope);
                }
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SettingsPanel {
    /// Laid-out width of the content column, falling back to the design-time
    /// width before the first draw.
    fn content_width(&self, cx: &Cx) -> f64 {
        let width = self.view.view(id!(content)).area().rect(cx).size.x;
        if width > 0.0 {
            width
        } else {
            CONTENT_WIDTH
        }
    }

    fn open(&mut self, cx: &mut Cx, scope: &mut Scope) {
        if !self.flow.pop_in(&mut self.motion) {
            return;
        }
        self.view.set_visible(cx, true);
        cx.widget_action(self.widget_uid(), &scope.path, SettingsPanelAction::Opened);
        cx.new_next_frame();
    }

    fn close(&mut self, cx: &mut Cx, scope: &mut Scope) {
        if !self.flow.pop_out(self.content_width(cx), &mut self.motion) {
            return;
        }
        self.view
            .key_binding_overlay(id!(key_bindings))
            .hide(cx);
        cx.widget_action(self.widget_uid(), &scope.path, SettingsPanelAction::Closed);
        cx.new_next_frame();
    }

    fn show_key_bindings(&mut self, cx: &mut Cx) {
        if self
            .flow
            .set_key_bindings(Visibility::Visible, self.content_width(cx), &mut self.motion)
        {
            self.view.key_binding_overlay(id!(key_bindings)).show(cx);
            cx.new_next_frame();
        }
    }

    fn hide_key_bindings(&mut self, cx: &mut Cx) {
        if self
            .flow
            .set_key_bindings(Visibility::Hidden, self.content_width(cx), &mut self.motion)
        {
            self.view.key_binding_overlay(id!(key_bindings)).hide(cx);
            cx.new_next_frame();
        }
    }

    /// Push the current tween values into the draw tree.
    fn apply_motion(&mut self, cx: &mut Cx) {
        let dim = self
            .motion
            .value(TweenTarget::Background, TweenProperty::Opacity);
        self.view.view(id!(scrim)).apply_over(
            cx,
            live! {
                draw_bg: { dim: (dim) }
            },
        );

        let offset = self
            .motion
            .value(TweenTarget::ContentRegion, TweenProperty::OffsetX);
        self.view.view(id!(content)).apply_over(
            cx,
            live! {
                margin: { left: (offset) }
            },
        );

        let sections_opacity = self
            .motion
            .value(TweenTarget::SectionList, TweenProperty::Opacity);
        for row in [
            id!(content.sections.general.row_label),
            id!(content.sections.graphics.row_label),
            id!(content.sections.gameplay.row_label),
            id!(content.sections.audio.row_label),
            id!(content.sections.skin.row_label),
            id!(content.sections.input.row_label),
            id!(content.sections.online.row_label),
            id!(content.sections.maintenance.row_label),
            id!(content.sections.debug.row_label),
        ] {
            self.view.label(row).apply_over(
                cx,
                live! {
                    draw_text: { opacity: (sections_opacity) }
                },
            );
        }

        let back_opacity = self
            .motion
            .value(TweenTarget::BackButton, TweenProperty::Opacity);
        self.view
            .back_button(id!(back_button))
            .set_opacity(cx, back_opacity);

        self.view.redraw(cx);
    }

    /// Recompute overlay and back button placement from the content's
    /// current geometry. Runs every animation frame so both track the
    /// sliding content exactly, even mid-flight.
    fn sync_overlay_geometry(&mut self, cx: &mut Cx) {
        let offset = self
            .motion
            .value(TweenTarget::ContentRegion, TweenProperty::OffsetX);
        let rect = self.view.view(id!(content)).area().rect(cx);
        let geom = ContentGeometry {
            margin_left: rect.pos.x - offset,
            width: rect.size.x,
            offset_x: offset,
        };

        self.view
            .key_binding_overlay(id!(key_bindings))
            .set_left(cx, geom.overlay_left());
        self.view.back_button(id!(back_button)).set_frame(
            cx,
            geom.back_button_left(),
            geom.back_button_width().max(0.0),
        );
    }
}

impl SettingsPanelRef {
    /// Slide the panel in. No-op if it is already open.
    pub fn open(&self, cx: &mut Cx, scope: &mut Scope) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.open(cx, scope);
        }
    }

    /// Slide the panel out, forcing the key binding overlay closed first.
    pub fn close(&self, cx: &mut Cx, scope: &mut Scope) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.close(cx, scope);
        }
    }

    /// Toggle between open and closed.
    pub fn toggle(&self, cx: &mut Cx, scope: &mut Scope) {
        if let Some(mut inner) = self.borrow_mut() {
            if inner.flow.is_open() {
                inner.close(cx, scope);
            } else {
                inner.open(cx, scope);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.borrow().map(|inner| inner.flow.is_open()).unwrap_or(false)
    }

    /// Whether the panel itself currently takes input focus. False while
    /// the key binding overlay is up.
    pub fn accepts_focus(&self) -> bool {
        self.borrow()
            .map(|inner| inner.flow.accepts_focus())
            .unwrap_or(false)
    }

    pub fn opened(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            SettingsPanelAction::Opened
        )
    }

    pub fn closed(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            SettingsPanelAction::Closed
        )
    }
}
