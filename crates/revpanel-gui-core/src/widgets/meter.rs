//! Stereo dot meter.

use egui::{Color32, Response, Sense, Ui, Widget, pos2, vec2};
use revpanel_core::display::{METER_DOTS, MeterReading};

const DOT: f32 = 4.0;
const GAP: f32 = 2.0;

/// Two columns of eight dots, lit from the bottom, with label and value.
pub struct StereoMeter<'a> {
    reading: &'a MeterReading,
}

impl<'a> StereoMeter<'a> {
    /// Create a meter for one reading.
    pub fn new(reading: &'a MeterReading) -> Self {
        Self { reading }
    }
}

impl Widget for StereoMeter<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let column_height = METER_DOTS as f32 * (DOT + GAP) - GAP;
        let size = vec2(40.0, column_height + 16.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let muted = Color32::from_rgb(140, 138, 150);

            // Vertical caption on the left
            let galley = painter.layout_no_wrap(
                self.reading.label.clone(),
                egui::FontId::proportional(9.0),
                muted,
            );
            let caption_pos = pos2(rect.left(), rect.top() + galley.size().x);
            painter.add(
                egui::epaint::TextShape::new(caption_pos, galley, muted)
                    .with_angle(-std::f32::consts::FRAC_PI_2),
            );

            let left_x = rect.left() + 18.0;
            let right_x = left_x + DOT + GAP;
            for (row, dots) in self.reading.rows().iter().enumerate() {
                let y = rect.top() + row as f32 * (DOT + GAP) + DOT / 2.0;
                for (x, lit) in [(left_x, dots.left), (right_x, dots.right)] {
                    let color = if lit {
                        Color32::WHITE
                    } else {
                        Color32::from_rgb(70, 68, 82)
                    };
                    painter.circle_filled(pos2(x + DOT / 2.0, y), DOT / 2.0, color);
                }
            }

            painter.text(
                pos2(left_x + DOT + GAP / 2.0, rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                &self.reading.value,
                egui::FontId::monospace(10.0),
                muted,
            );
        }

        response
    }
}
