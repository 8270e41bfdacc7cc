//! Key Binding Overlay - nested panel hosted inside the settings panel
//!
//! Hosts the key binding rows at a higher stacking depth than the panel
//! content. Its visibility is driven by the settings panel (which also
//! forces it hidden on close); this widget only renders the content and
//! reports when the user asks to leave it.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    BindingRow = <View> {
        width: Fill, height: Fit
        padding: {left: 16, right: 16, top: 10, bottom: 10}
        flow: Right
        align: {x: 0.0, y: 0.5}

        action_label = <Label> {
            width: Fill
            draw_text: {
                color: (TEXT_PRIMARY)
                text_style: { font_size: 12.0 }
            }
        }

        keycap = <RoundedView> {
            width: Fit, height: Fit
            padding: {left: 10, right: 10, top: 4, bottom: 4}
            show_bg: true
            draw_bg: {
                color: (KEYCAP_BG)
                border_radius: 4.0
            }

            key_label = <Label> {
                draw_text: {
                    color: (TEXT_SECONDARY)
                    text_style: { font_size: 11.0 }
                }
            }
        }
    }

    pub KeyBindingOverlay = {{KeyBindingOverlay}} {
        width: 400, height: Fill
        visible: false
        flow: Down
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                return (PANEL_BG_RAISED);
            }
        }

        header = <View> {
            width: Fill, height: Fit
            padding: {left: 16, right: 16, top: 24, bottom: 16}
            flow: Down
            spacing: 4

            title = <Label> {
                text: "key configuration"
                draw_text: {
                    color: (ACCENT_PINK)
                    text_style: { font_size: 18.0 }
                }
            }

            subtitle = <Label> {
                text: "Customise your keys!"
                draw_text: {
                    color: (TEXT_SECONDARY)
                    text_style: { font_size: 11.0 }
                }
            }
        }

        divider = <View> {
            width: Fill, height: 1
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    return (PANEL_BORDER);
                }
            }
        }

        bindings = <View> {
            width: Fill, height: Fit
            flow: Down

            left_action = <BindingRow> {
                action_label = { text: "Left action" }
                keycap = { key_label = { text: "Z" } }
            }
            right_action = <BindingRow> {
                action_label = { text: "Right action" }
                keycap = { key_label = { text: "X" } }
            }
            smoke = <BindingRow> {
                action_label = { text: "Smoke" }
                keycap = { key_label = { text: "C" } }
            }
            pause = <BindingRow> {
                action_label = { text: "Pause" }
                keycap = { key_label = { text: "Esc" } }
            }
        }

        <View> { width: Fill, height: Fill }

        footer = <View> {
            width: Fill, height: Fit
            padding: 16
            align: {x: 0.0, y: 0.5}

            done_button = <Button> {
                width: Fit, height: 36
                padding: {left: 20, right: 20, top: 8, bottom: 8}
                text: "done"

                animator: {
                    hover = {
                        default: off,
                        off = {
                            from: {all: Forward {duration: 0.15}}
                            apply: { draw_bg: {hover: 0.0} }
                        }
                        on = {
                            from: {all: Forward {duration: 0.15}}
                            apply: { draw_bg: {hover: 1.0} }
                        }
                    }
                }

                draw_bg: {
                    instance hover: 0.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 4.0);
                        let base = (ACCENT_PINK);
                        sdf.fill(mix(base, base * 1.15, self.hover));
                        return sdf.result;
                    }
                }

                draw_text: {
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return vec4(1.0, 1.0, 1.0, 1.0);
                    }
                }
            }
        }
    }
}

/// Actions emitted by the key binding overlay.
#[derive(Clone, Debug, DefaultNone)]
pub enum KeyBindingOverlayAction {
    None,
    /// The user asked to leave the overlay.
    CloseClicked,
}

#[derive(Live, LiveHook, Widget)]
pub struct KeyBindingOverlay {
    #[deref]
    view: View,
}

impl Widget for KeyBindingOverlay {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        if self.view.button(id!(footer.done_button)).clicked(actions) {
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                KeyBindingOverlayAction::CloseClicked,
            );
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl KeyBindingOverlayRef {
    /// Show the overlay content.
    pub fn show(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.set_visible(cx, true);
            inner.view.redraw(cx);
        }
    }

    /// Hide the overlay content.
    pub fn hide(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.set_visible(cx, false);
            inner.view.redraw(cx);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.borrow().map(|inner| inner.view.visible()).unwrap_or(false)
    }

    /// Track the content region's current right edge.
    pub fn set_left(&self, cx: &mut Cx, left: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.apply_over(
                cx,
                live! {
                    margin: { left: (left) }
                },
            );
        }
    }

    /// Whether a close was requested in the given actions.
    pub fn close_clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            KeyBindingOverlayAction::CloseClicked
        )
    }
}
