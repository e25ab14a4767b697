//! Visual styling for the revpanel surface.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the panel.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel face color.
    pub panel_bg: Color32,
    /// Display screen background.
    pub display_bg: Color32,
    /// Accent for active elements.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Knob body color.
    pub knob_body: Color32,
    /// Knob track color.
    pub knob_track: Color32,
    /// Lit dot or LED color.
    pub lit: Color32,
    /// Unlit dot or LED color.
    pub unlit: Color32,
    /// Borders and separators.
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(18, 19, 21),
            panel_bg: Color32::from_rgb(32, 33, 37),
            display_bg: Color32::from_rgb(13, 14, 15),
            accent: Color32::from_rgb(235, 232, 224),
            text_primary: Color32::from_rgb(228, 226, 220),
            text_secondary: Color32::from_rgb(140, 138, 150),
            knob_body: Color32::from_rgb(48, 49, 54),
            knob_track: Color32::from_rgb(62, 62, 72),
            lit: Color32::WHITE,
            unlit: Color32::from_rgb(70, 68, 82),
            border: Color32::from_rgb(58, 58, 66),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.panel_bg;
        visuals.extreme_bg_color = self.display_bg;
        visuals.faint_bg_color = self.knob_body;

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(6);

        visuals.widgets.inactive.bg_fill = self.knob_body;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(58, 59, 66);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

        visuals.widgets.active.bg_fill = Color32::from_rgb(68, 69, 78);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.corner_radius = CornerRadius::same(6);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.2);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }

    /// Dot color for a lit or unlit indicator.
    pub fn dot_color(&self, lit: bool) -> Color32 {
        if lit { self.lit } else { self.unlit }
    }
}
