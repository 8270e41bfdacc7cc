//! # Tempo UI - Settings overlay widgets
//!
//! Makepad widgets composing the Tempo settings overlay: the sectioned
//! [`SettingsPanel`], the nested [`KeyBindingOverlay`] that can occlude it,
//! and the [`BackButton`] affordance that appears while it does.
//!
//! All animation state lives in `tempo-overlay`'s tween runner; widgets here
//! only translate interpolated values into `apply_over` calls each frame.
//!
//! [`SettingsPanel`]: settings_panel::SettingsPanel
//! [`KeyBindingOverlay`]: key_binding_overlay::KeyBindingOverlay
//! [`BackButton`]: back_button::BackButton

pub mod back_button;
pub mod key_binding_overlay;
pub mod settings_panel;
pub mod theme;

pub use back_button::{BackButtonAction, BackButtonRef, BackButtonWidgetExt};
pub use key_binding_overlay::{KeyBindingOverlayAction, KeyBindingOverlayRef, KeyBindingOverlayWidgetExt};
pub use settings_panel::{SettingsPanelAction, SettingsPanelRef, SettingsPanelWidgetExt};

use makepad_widgets::Cx;

/// Register all Tempo widgets with Makepad.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    back_button::live_design(cx);
    key_binding_overlay::live_design(cx);
    settings_panel::live_design(cx);
}
