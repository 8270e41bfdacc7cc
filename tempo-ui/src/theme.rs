//! Shared color constants for Tempo widgets.
//!
//! Single source of truth for the overlay palette; widget `live_design!`
//! blocks import these with `use tempo_ui::theme::*;` (or `crate::theme`
//! inside this crate).

use makepad_widgets::*;

live_design! {
    // Panel surfaces
    pub PANEL_BG = vec4(0.082, 0.098, 0.133, 1.0)
    pub PANEL_BG_RAISED = vec4(0.118, 0.141, 0.188, 1.0)
    pub PANEL_BORDER = vec4(0.204, 0.235, 0.298, 1.0)

    // Text
    pub TEXT_PRIMARY = vec4(0.945, 0.961, 0.976, 1.0)
    pub TEXT_SECONDARY = vec4(0.580, 0.639, 0.702, 1.0)
    pub TEXT_DIM = vec4(0.392, 0.455, 0.545, 1.0)

    // Accent
    pub ACCENT_PINK = vec4(1.0, 0.4, 0.667, 1.0)
    pub ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)

    // Row states
    pub ROW_HOVER = vec4(0.157, 0.184, 0.243, 1.0)
    pub KEYCAP_BG = vec4(0.204, 0.235, 0.298, 1.0)
}
