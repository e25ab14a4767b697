//! Four-way segmented filter toggle.

use egui::{Color32, Rect, Response, Sense, Stroke, StrokeKind, Ui, pos2, vec2};
use revpanel_core::FilterMode;

/// Segmented toggle showing `∅ H L B`.
pub struct FilterToggleWidget {
    value: FilterMode,
    segment_width: f32,
    height: f32,
}

impl FilterToggleWidget {
    /// Create a toggle showing `value` as active.
    pub fn new(value: FilterMode) -> Self {
        Self {
            value,
            segment_width: 28.0,
            height: 24.0,
        }
    }

    /// Set segment width in pixels.
    pub fn segment_width(mut self, width: f32) -> Self {
        self.segment_width = width;
        self
    }

    /// Draw the toggle. Returns the segment clicked this frame, if any.
    pub fn show(self, ui: &mut Ui) -> (Response, Option<FilterMode>) {
        let count = FilterMode::ALL.len() as f32;
        let size = vec2(self.segment_width * count, self.height);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());

        let segment_rect = |i: usize| {
            Rect::from_min_size(
                pos2(rect.left() + self.segment_width * i as f32, rect.top()),
                vec2(self.segment_width, self.height),
            )
        };

        let clicked = if response.clicked() {
            response.interact_pointer_pos().and_then(|pos| {
                FilterMode::ALL
                    .into_iter()
                    .enumerate()
                    .find(|(i, _)| segment_rect(*i).contains(pos))
                    .map(|(_, mode)| mode)
            })
        } else {
            None
        };
        if clicked.is_some() {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let hover = response.hover_pos();

            painter.rect_filled(rect, 6.0, Color32::from_rgb(28, 29, 32));

            for (i, mode) in FilterMode::ALL.into_iter().enumerate() {
                let seg = segment_rect(i).shrink(2.0);
                let active = mode == self.value;
                let hovered = hover.is_some_and(|p| seg.contains(p));

                if active {
                    painter.rect_filled(seg, 4.0, Color32::from_rgb(62, 63, 70));
                } else if hovered {
                    painter.rect_filled(seg, 4.0, Color32::from_rgb(42, 43, 48));
                }

                let color = if active {
                    Color32::WHITE
                } else {
                    Color32::from_rgb(130, 128, 140)
                };
                painter.text(
                    seg.center(),
                    egui::Align2::CENTER_CENTER,
                    mode.symbol(),
                    egui::FontId::proportional(12.0),
                    color,
                );
            }

            painter.rect_stroke(
                rect,
                6.0,
                Stroke::new(1.0, Color32::from_rgb(58, 58, 66)),
                StrokeKind::Inside,
            );
        }

        (response, clicked)
    }
}
