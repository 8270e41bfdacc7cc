//! Tempo application shell
//!
//! Hosts a stand-in playfield and the settings overlay on top of it. The
//! shell owns nothing of the overlay's choreography; it just opens and
//! closes the panel and reacts to its lifecycle actions.

use makepad_widgets::*;
use std::sync::OnceLock;
use tempo_ui::settings_panel::SettingsPanelWidgetRefExt;

use crate::cli::Args;

static CLI_ARGS: OnceLock<Args> = OnceLock::new();

/// Store parsed CLI args before the app starts.
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use tempo_ui::theme::*;
    use tempo_ui::settings_panel::SettingsPanel;

    // Color constants
    PLAYFIELD_BG = vec4(0.039, 0.047, 0.071, 1.0)

    ShellButton = <Button> {
        width: Fit, height: 36
        padding: {left: 16, right: 16}
        draw_text: {
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return vec4(1.0, 1.0, 1.0, 1.0);
            }
        }
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                let base = (ACCENT_BLUE);
                sdf.fill(mix(base, base * 1.15, self.hover));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
    }

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(1280, 800) }
            pass: { clear_color: (PLAYFIELD_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay

                // Stand-in playfield behind the overlay
                playfield = <View> {
                    width: Fill, height: Fill
                    flow: Down
                    align: {x: 0.5, y: 0.5}
                    spacing: 12
                    show_bg: true
                    draw_bg: {
                        fn pixel(self) -> vec4 {
                            return (PLAYFIELD_BG);
                        }
                    }

                    headline = <Label> {
                        text: "Tempo"
                        draw_text: {
                            color: (ACCENT_PINK)
                            text_style: { font_size: 32.0 }
                        }
                    }

                    settings_btn = <ShellButton> { text: "settings" }
                }

                settings_panel = <SettingsPanel> {}
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        tempo_ui::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        let mut scope = Scope::empty();
        self.ui.handle_event(cx, event, &mut scope);

        if let Event::Startup = event {
            if cli_args().start_open {
                self.ui
                    .settings_panel(id!(settings_panel))
                    .open(cx, &mut scope);
            }
            return;
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        let panel = self.ui.settings_panel(id!(settings_panel));

        if self.ui.button(id!(playfield.settings_btn)).clicked(actions) {
            panel.toggle(cx, &mut scope);
        }

        if panel.opened(actions) {
            ::log::info!("settings panel opened");
        }
        if panel.closed(actions) {
            ::log::info!("settings panel closed");
        }
    }
}

app_main!(App);
