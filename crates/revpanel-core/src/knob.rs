//! Rotary knob gesture engine.
//!
//! A [`KnobControl`] turns a stream of [`PointerEvent`]s into angle changes.
//! Dragging is relative: at gesture start the pointer's vertical position and
//! the current angle are frozen as anchors, and every move computes the new
//! angle from those anchors. Moving the pointer up turns the knob clockwise.
//!
//! ```text
//!   Down{y0}          Move{y}                         Up / Cancel / GlobalRelease
//!   ─────────► capture ───────► angle = clamp(a0 + (y0 - y) * s) ───────────► idle
//!                 │                emitted on every move
//!                 └── Down again re-anchors at the new position
//! ```
//!
//! Sensitivity `s` is picked per move from the modifier flag and is never
//! remembered between moves. A double-click resets to the default angle
//! regardless of drag state.

use crate::param_info::ParamKey;

/// Lowest knob angle, in degrees.
pub const MIN_ANGLE: f32 = -135.0;
/// Highest knob angle, in degrees.
pub const MAX_ANGLE: f32 = 135.0;
/// Total sweep of a knob, in degrees.
pub const ANGLE_RANGE: f32 = MAX_ANGLE - MIN_ANGLE;
/// Angle restored by the reset gesture.
pub const DEFAULT_ANGLE: f32 = 0.0;

/// Degrees per pixel of vertical drag.
pub const NORMAL_SENSITIVITY: f32 = 1.5;
/// Degrees per pixel while the fine modifier is held.
pub const FINE_SENSITIVITY: f32 = 0.3;

/// Clamp an angle to `[MIN_ANGLE, MAX_ANGLE]`.
///
/// `NaN` maps to [`DEFAULT_ANGLE`]; infinities clamp to the nearest bound.
#[inline]
pub fn clamp_angle(angle: f32) -> f32 {
    if angle.is_nan() {
        DEFAULT_ANGLE
    } else {
        angle.clamp(MIN_ANGLE, MAX_ANGLE)
    }
}

/// Map an angle to its normalized position in `[0, 1]`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    (clamp_angle(angle) - MIN_ANGLE) / ANGLE_RANGE
}

/// Drag rate for a single move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sensitivity {
    /// Coarse adjustment.
    #[default]
    Normal,
    /// Precision adjustment, active while the modifier key is held.
    Fine,
}

impl Sensitivity {
    /// Pick the mode from the modifier-key flag.
    #[inline]
    pub const fn from_modifier(fine: bool) -> Self {
        if fine { Self::Fine } else { Self::Normal }
    }

    /// Degrees of rotation per pixel of drag.
    #[inline]
    pub const fn degrees_per_pixel(self) -> f32 {
        match self {
            Self::Normal => NORMAL_SENSITIVITY,
            Self::Fine => FINE_SENSITIVITY,
        }
    }
}

/// Identifier of a physical pointer (mouse, touch contact, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// Pointer input, already reduced to what the knob needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on the knob.
    Down {
        /// Pointer that pressed.
        pointer: PointerId,
        /// Vertical position in screen pixels (grows downward).
        y: f32,
    },
    /// Pointer moved.
    Move {
        /// Pointer that moved.
        pointer: PointerId,
        /// Vertical position in screen pixels.
        y: f32,
        /// Fine modifier held during this move.
        fine: bool,
    },
    /// Pointer released over the knob.
    Up {
        /// Pointer that was released.
        pointer: PointerId,
    },
    /// Pointer interaction cancelled by the platform.
    Cancel {
        /// Pointer whose interaction was cancelled.
        pointer: PointerId,
    },
    /// A release observed anywhere in the window, for pointers lost outside
    /// the knob.
    GlobalRelease,
    /// Double-click on the knob.
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerCapture {
    pointer: PointerId,
    anchor_y: f32,
    anchor_angle: f32,
}

/// State of one rotary knob.
///
/// The angle is always inside `[MIN_ANGLE, MAX_ANGLE]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobControl {
    angle: f32,
    default_angle: f32,
    capture: Option<PointerCapture>,
}

impl Default for KnobControl {
    fn default() -> Self {
        Self::new()
    }
}

impl KnobControl {
    /// Knob at the default angle.
    pub fn new() -> Self {
        Self::with_default(DEFAULT_ANGLE)
    }

    /// Knob whose initial and reset angle is `default_angle` (clamped).
    pub fn with_default(default_angle: f32) -> Self {
        let default_angle = clamp_angle(default_angle);
        Self {
            angle: default_angle,
            default_angle,
            capture: None,
        }
    }

    /// Current angle in degrees.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Angle restored by a double-click.
    #[inline]
    pub fn default_angle(&self) -> f32 {
        self.default_angle
    }

    /// Normalized position in `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        normalize_angle(self.angle)
    }

    /// True while a drag gesture holds the pointer capture.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    /// Pointer that currently holds the capture.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.capture.map(|c| c.pointer)
    }

    /// Set the angle directly, as an external host update would.
    ///
    /// Does not affect an active gesture's anchors.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = clamp_angle(angle);
    }

    /// Apply one pointer event.
    ///
    /// Returns the new angle when the event changed it (every captured move,
    /// every reset), `None` otherwise.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<f32> {
        match event {
            PointerEvent::Down { pointer, y } => {
                self.begin(pointer, y);
                None
            }
            PointerEvent::Move { pointer, y, fine } => {
                self.drag_to(pointer, y, Sensitivity::from_modifier(fine))
            }
            PointerEvent::Up { pointer } | PointerEvent::Cancel { pointer } => {
                if self.captured_pointer() == Some(pointer) {
                    self.release();
                }
                None
            }
            PointerEvent::GlobalRelease => {
                self.release();
                None
            }
            PointerEvent::DoubleClick => Some(self.reset()),
        }
    }

    /// Start (or restart) a gesture, freezing the anchors.
    pub fn begin(&mut self, pointer: PointerId, y: f32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(pointer = pointer.0, y, angle = self.angle, "knob gesture start");

        self.capture = Some(PointerCapture {
            pointer,
            anchor_y: y,
            anchor_angle: self.angle,
        });
    }

    /// Move the captured pointer to `y`.
    ///
    /// Ignored unless `pointer` holds the capture.
    pub fn drag_to(&mut self, pointer: PointerId, y: f32, sensitivity: Sensitivity) -> Option<f32> {
        let capture = self.capture.filter(|c| c.pointer == pointer)?;
        let delta = capture.anchor_y - y;
        let angle = clamp_angle(capture.anchor_angle + delta * sensitivity.degrees_per_pixel());
        self.angle = angle;
        Some(angle)
    }

    /// End the current gesture. No-op when idle.
    pub fn release(&mut self) {
        if let Some(_capture) = self.capture.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!(pointer = _capture.pointer.0, angle = self.angle, "knob gesture end");
        }
    }

    /// Restore the default angle and return it.
    pub fn reset(&mut self) -> f32 {
        self.angle = self.default_angle;
        self.angle
    }
}

/// Angles of all five knobs, indexed by [`ParamKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobAngles([f32; ParamKey::COUNT]);

impl Default for KnobAngles {
    fn default() -> Self {
        Self([DEFAULT_ANGLE; ParamKey::COUNT])
    }
}

impl KnobAngles {
    /// Angle of one knob.
    #[inline]
    pub fn get(&self, key: ParamKey) -> f32 {
        self.0[key.index()]
    }

    /// Set one knob's angle (clamped).
    pub fn set(&mut self, key: ParamKey, angle: f32) {
        self.0[key.index()] = clamp_angle(angle);
    }

    /// Builder form of [`KnobAngles::set`].
    #[must_use]
    pub fn with(mut self, key: ParamKey, angle: f32) -> Self {
        self.set(key, angle);
        self
    }

    /// Iterate `(key, angle)` in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f32)> + '_ {
        ParamKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PointerId = PointerId(1);
    const P2: PointerId = PointerId(2);

    fn down(y: f32) -> PointerEvent {
        PointerEvent::Down { pointer: P1, y }
    }

    fn mv(y: f32, fine: bool) -> PointerEvent {
        PointerEvent::Move { pointer: P1, y, fine }
    }

    #[test]
    fn starts_at_default() {
        let knob = KnobControl::new();
        assert_eq!(knob.angle(), 0.0);
        assert!(!knob.is_dragging());
    }

    #[test]
    fn upward_drag_increases_angle() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        assert_eq!(knob.handle_event(mv(80.0, false)), Some(30.0));
        assert_eq!(knob.angle(), 30.0);
    }

    #[test]
    fn fine_drag_uses_reduced_rate() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        let angle = knob.handle_event(mv(50.0, true)).unwrap();
        assert!((angle - 15.0).abs() < 1e-4);
    }

    #[test]
    fn sensitivity_is_evaluated_per_move() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        assert!((knob.handle_event(mv(90.0, true)).unwrap() - 3.0).abs() < 1e-4);
        assert_eq!(knob.handle_event(mv(90.0, false)), Some(15.0));
    }

    #[test]
    fn drag_clamps_at_bounds() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(0.0));
        assert_eq!(knob.handle_event(mv(-1000.0, false)), Some(MAX_ANGLE));
        assert_eq!(knob.handle_event(mv(1000.0, false)), Some(MIN_ANGLE));
    }

    #[test]
    fn moves_without_capture_are_ignored() {
        let mut knob = KnobControl::new();
        assert_eq!(knob.handle_event(mv(0.0, false)), None);
        assert_eq!(knob.angle(), 0.0);
    }

    #[test]
    fn moves_from_other_pointer_are_ignored() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        let ev = PointerEvent::Move {
            pointer: P2,
            y: 0.0,
            fine: false,
        };
        assert_eq!(knob.handle_event(ev), None);
        assert_eq!(knob.angle(), 0.0);
    }

    #[test]
    fn release_paths_end_gesture() {
        for release in [
            PointerEvent::Up { pointer: P1 },
            PointerEvent::Cancel { pointer: P1 },
            PointerEvent::GlobalRelease,
        ] {
            let mut knob = KnobControl::new();
            knob.handle_event(down(100.0));
            knob.handle_event(release);
            assert!(!knob.is_dragging(), "{release:?}");
            assert_eq!(knob.handle_event(mv(0.0, false)), None);
        }
    }

    #[test]
    fn up_from_other_pointer_keeps_capture() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        knob.handle_event(PointerEvent::Up { pointer: P2 });
        assert!(knob.is_dragging());
    }

    #[test]
    fn release_when_idle_is_noop() {
        let mut knob = KnobControl::new();
        knob.handle_event(PointerEvent::GlobalRelease);
        knob.release();
        assert!(!knob.is_dragging());
        assert_eq!(knob.angle(), 0.0);
    }

    #[test]
    fn second_down_reanchors() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        knob.handle_event(mv(90.0, false));
        knob.handle_event(down(50.0));
        assert_eq!(knob.handle_event(mv(50.0, false)), Some(15.0));
        assert_eq!(knob.handle_event(mv(40.0, false)), Some(30.0));
    }

    #[test]
    fn double_click_resets_and_emits() {
        let mut knob = KnobControl::new();
        knob.set_angle(90.0);
        assert_eq!(knob.handle_event(PointerEvent::DoubleClick), Some(0.0));
        assert_eq!(knob.angle(), 0.0);
    }

    #[test]
    fn double_click_during_drag_keeps_anchors() {
        let mut knob = KnobControl::new();
        knob.handle_event(down(100.0));
        knob.handle_event(mv(80.0, false));
        knob.handle_event(PointerEvent::DoubleClick);
        assert!(knob.is_dragging());
        assert_eq!(knob.handle_event(mv(90.0, false)), Some(15.0));
    }

    #[test]
    fn custom_default_is_clamped() {
        let mut knob = KnobControl::with_default(500.0);
        assert_eq!(knob.angle(), MAX_ANGLE);
        knob.set_angle(0.0);
        assert_eq!(knob.reset(), MAX_ANGLE);
    }

    #[test]
    fn clamp_angle_handles_non_finite() {
        assert_eq!(clamp_angle(f32::NAN), DEFAULT_ANGLE);
        assert_eq!(clamp_angle(f32::INFINITY), MAX_ANGLE);
        assert_eq!(clamp_angle(f32::NEG_INFINITY), MIN_ANGLE);
    }

    #[test]
    fn normalize_angle_endpoints() {
        assert_eq!(normalize_angle(MIN_ANGLE), 0.0);
        assert_eq!(normalize_angle(0.0), 0.5);
        assert_eq!(normalize_angle(MAX_ANGLE), 1.0);
    }

    #[test]
    fn knob_angles_clamp_and_iterate_in_order() {
        let angles = KnobAngles::default()
            .with(ParamKey::Decay, 200.0)
            .with(ParamKey::Signal, -45.0);
        assert_eq!(angles.get(ParamKey::Decay), MAX_ANGLE);
        let keys: Vec<_> = angles.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ParamKey::ALL.to_vec());
        assert_eq!(angles.iter().next(), Some((ParamKey::Signal, -45.0)));
    }
}
