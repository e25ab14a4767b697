//! Flat square effect button with an LED.

use egui::{Color32, Response, Sense, Stroke, StrokeKind, Ui, Widget, pos2, vec2};
use revpanel_core::FlatButton;

/// Flat push button drawn from a [`FlatButton`].
///
/// Check `clicked()` on the returned response and relay the click.
pub struct FlatButtonWidget<'a> {
    button: &'a FlatButton,
    size: f32,
}

impl<'a> FlatButtonWidget<'a> {
    /// Create a button widget.
    pub fn new(button: &'a FlatButton) -> Self {
        Self { button, size: 56.0 }
    }

    /// Set the square size in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for FlatButtonWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());
        let active = self.button.is_active();

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let body = if response.is_pointer_button_down_on() {
                Color32::from_rgb(38, 39, 43)
            } else if response.hovered() {
                Color32::from_rgb(54, 55, 61)
            } else {
                Color32::from_rgb(46, 47, 52)
            };
            painter.rect_filled(rect, 6.0, body);
            painter.rect_stroke(
                rect,
                6.0,
                Stroke::new(1.0, Color32::from_rgb(66, 66, 74)),
                StrokeKind::Inside,
            );

            // LED
            let led = pos2(rect.center().x, rect.top() + 12.0);
            let led_color = if active {
                Color32::WHITE
            } else {
                Color32::from_rgb(70, 68, 82)
            };
            painter.circle_filled(led, 3.0, led_color);
            if active {
                painter.circle_filled(led, 6.0, led_color.gamma_multiply(0.25));
            }

            painter.text(
                pos2(rect.center().x, rect.bottom() - 12.0),
                egui::Align2::CENTER_CENTER,
                self.button.button().label(),
                egui::FontId::proportional(11.0),
                if active {
                    Color32::from_rgb(228, 226, 220)
                } else {
                    Color32::from_rgb(140, 138, 150)
                },
            );
        }

        response
    }
}
