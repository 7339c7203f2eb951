//! Shared colors for the sample screens.

use egui::Color32;

/// Accent used for the tab indicator and the ticker badges.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(103, 80, 164);

/// Fills and text colors the sample tables use, per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header background.
    pub primary: Color32,
    /// Header text and column dividers.
    pub on_primary: Color32,
    /// Body background.
    pub primary_container: Color32,
    /// Body text, item dividers and chart bars.
    pub on_primary_container: Color32,
}

impl Palette {
    pub const DARK: Self = Self {
        primary: Color32::from_rgb(208, 188, 255),
        on_primary: Color32::from_rgb(56, 30, 114),
        primary_container: Color32::from_rgb(79, 55, 139),
        on_primary_container: Color32::from_rgb(234, 221, 255),
    };

    pub const LIGHT: Self = Self {
        primary: Color32::from_rgb(103, 80, 164),
        on_primary: Color32::WHITE,
        primary_container: Color32::from_rgb(234, 221, 255),
        on_primary_container: Color32::from_rgb(33, 0, 93),
    };

    pub fn for_theme(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}
