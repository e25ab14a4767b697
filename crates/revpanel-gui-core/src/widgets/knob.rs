//! Rotary knob widget.
//!
//! Hardware-style knob with:
//! - Vertical drag to turn (up = clockwise)
//! - Fine control with Cmd/Ctrl or Shift
//! - Double-click to reset
//! - Formatted value below the label
//!
//! The widget does not change the knob itself. It reads the [`KnobControl`]
//! for drawing and translates egui input into [`PointerEvent`]s for the
//! caller to apply.

use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, pos2, vec2};
use revpanel_core::{KnobControl, MAX_ANGLE, MIN_ANGLE, ParamKey, PointerEvent, PointerId};
use std::f32::consts::PI;

/// Pointer id used for the mouse.
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// Rotary knob drawn from a [`KnobControl`].
pub struct KnobWidget<'a> {
    key: ParamKey,
    control: &'a KnobControl,
    diameter: f32,
}

impl<'a> KnobWidget<'a> {
    /// Create a knob for one parameter.
    pub fn new(key: ParamKey, control: &'a KnobControl) -> Self {
        Self {
            key,
            control,
            diameter: 64.0,
        }
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Draw the knob and collect this frame's pointer events.
    pub fn show(self, ui: &mut Ui) -> (Response, Vec<PointerEvent>) {
        let size = vec2(self.diameter, self.diameter + 35.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let events = self.collect_events(ui, &response);

        let center = pos2(rect.center().x, rect.top() + self.diameter / 2.0);
        let radius = self.diameter / 2.0 - 4.0;

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let is_active = self.control.is_dragging() || response.dragged();

            // 270° sweep: MIN_ANGLE sits at 7:30, MAX_ANGLE at 4:30
            let start = angle_to_screen(MIN_ANGLE);
            let end = angle_to_screen(MAX_ANGLE);
            let value = angle_to_screen(self.control.angle());

            draw_arc(painter, center, radius - 2.0, start, end, Color32::from_rgb(62, 62, 72), 4.0);

            let fill = if is_active {
                Color32::WHITE
            } else {
                Color32::from_rgb(200, 198, 192)
            };
            let zero = angle_to_screen(0.0);
            if (value - zero).abs() > 0.001 {
                draw_arc(painter, center, radius - 2.0, zero, value, fill, 4.0);
            }

            let body = if response.hovered() || is_active {
                Color32::from_rgb(58, 59, 66)
            } else {
                Color32::from_rgb(48, 49, 54)
            };
            painter.circle_filled(center, radius - 7.0, body);

            let pointer_end = pos2(
                center.x + value.cos() * (radius - 12.0),
                center.y + value.sin() * (radius - 12.0),
            );
            let pointer_start = pos2(
                center.x + value.cos() * (radius - 22.0).max(2.0),
                center.y + value.sin() * (radius - 22.0).max(2.0),
            );
            painter.line_segment([pointer_start, pointer_end], Stroke::new(2.5, fill));

            painter.text(
                pos2(rect.center().x, center.y + radius + 8.0),
                egui::Align2::CENTER_TOP,
                self.key.label(),
                egui::FontId::proportional(12.0),
                Color32::from_rgb(180, 178, 190),
            );
            painter.text(
                pos2(rect.center().x, center.y + radius + 22.0),
                egui::Align2::CENTER_TOP,
                self.key.format(self.control.angle()),
                egui::FontId::monospace(11.0),
                Color32::from_rgb(140, 138, 150),
            );
        }

        (response, events)
    }

    fn collect_events(&self, ui: &Ui, response: &Response) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let (fine, press_origin, current, any_down) = ui.input(|i| {
            (
                i.modifiers.command || i.modifiers.shift,
                i.pointer.press_origin(),
                i.pointer.interact_pos(),
                i.pointer.any_down(),
            )
        });

        if response.double_clicked() {
            events.push(PointerEvent::DoubleClick);
        }

        if response.drag_started()
            && let Some(origin) = press_origin.or(current)
        {
            events.push(PointerEvent::Down {
                pointer: MOUSE_POINTER,
                y: origin.y,
            });
        }

        if response.dragged()
            && let Some(pos) = current
        {
            events.push(PointerEvent::Move {
                pointer: MOUSE_POINTER,
                y: pos.y,
                fine,
            });
        }

        if response.drag_stopped() {
            events.push(PointerEvent::Up {
                pointer: MOUSE_POINTER,
            });
        } else if self.control.is_dragging() && !response.dragged() && !any_down {
            // Button released somewhere egui did not attribute to this knob
            events.push(PointerEvent::GlobalRelease);
        }

        events
    }
}

/// Map a knob angle (0 = 12 o'clock) to an egui screen angle (0 = 3 o'clock).
fn angle_to_screen(angle: f32) -> f32 {
    (angle - 90.0) * PI / 180.0
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    painter.add(egui::Shape::line(points, Stroke::new(stroke_width, color)));
}
