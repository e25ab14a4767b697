//! Parameter metadata for the five rotary controls.
//!
//! Every knob on the panel is identified by a [`ParamKey`] and described by a
//! [`ParamDescriptor`]. The descriptor carries the display metadata and the
//! plain-value range a parameter host expects, while the knob itself only ever
//! stores an angle in `[-135, 135]` degrees.
//!
//! Two representations live side by side:
//!
//! - **Display text**: produced by the pure formatters in [`crate::format`].
//!   These are the only externally visible semantics of each knob and follow
//!   exact rounding rules.
//! - **Plain value**: a host-facing `f32` in the parameter's native unit
//!   (percent, milliseconds, seconds), produced by
//!   [`ParamDescriptor::plain_value`] through the descriptor's [`ParamScale`].
//!
//! # Example
//!
//! ```rust
//! use revpanel_core::ParamKey;
//!
//! let decay = ParamKey::Decay.descriptor();
//! assert_eq!(decay.name, "Decay");
//! assert_eq!(ParamKey::Decay.format(-135.0), "0.1s");
//!
//! // Logarithmic midpoint is the geometric mean of 0.1 s and 20 s
//! let mid = decay.plain_value(0.0);
//! assert!((mid - (0.1f32 * 20.0).sqrt()).abs() < 1e-3);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::format;
use crate::knob::{DEFAULT_ANGLE, MAX_ANGLE, MIN_ANGLE, normalize_angle};

/// Identity of a rotary parameter on the panel.
///
/// The string form (`"signal"`, `"delay"`, ...) is the id emitted to the host
/// alongside every angle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// Input signal level, 0–100 %.
    Signal,
    /// Pre-delay, 0–250 ms.
    Delay,
    /// Decay time, 0.1–20 s on a logarithmic curve.
    Decay,
    /// Stereo spread, 0–200 % with a centered dead zone.
    Spread,
    /// Shimmer amount, 0.000–1.000.
    Shimmer,
}

impl ParamKey {
    /// Number of rotary parameters.
    pub const COUNT: usize = 5;

    /// All parameters in panel order (left to right).
    pub const ALL: [ParamKey; Self::COUNT] = [
        ParamKey::Signal,
        ParamKey::Delay,
        ParamKey::Decay,
        ParamKey::Spread,
        ParamKey::Shimmer,
    ];

    /// Zero-based position in [`ParamKey::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ParamKey::Signal => 0,
            ParamKey::Delay => 1,
            ParamKey::Decay => 2,
            ParamKey::Spread => 3,
            ParamKey::Shimmer => 4,
        }
    }

    /// Stable string id emitted to the host.
    pub const fn id(self) -> &'static str {
        match self {
            ParamKey::Signal => "signal",
            ParamKey::Delay => "delay",
            ParamKey::Decay => "decay",
            ParamKey::Spread => "spread",
            ParamKey::Shimmer => "shimmer",
        }
    }

    /// Human-readable label shown under the knob and in the display column.
    pub const fn label(self) -> &'static str {
        self.descriptor().name
    }

    /// Look up a parameter by id (case-insensitive).
    ///
    /// Returns `None` for unknown ids.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Metadata for this parameter.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            ParamKey::Signal => ParamDescriptor {
                key: ParamKey::Signal,
                name: "Signal",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                scale: ParamScale::Linear,
                default_angle: DEFAULT_ANGLE,
            },
            ParamKey::Delay => ParamDescriptor {
                key: ParamKey::Delay,
                name: "Delay",
                unit: ParamUnit::Milliseconds,
                min: 0.0,
                max: 250.0,
                scale: ParamScale::Linear,
                default_angle: DEFAULT_ANGLE,
            },
            ParamKey::Decay => ParamDescriptor {
                key: ParamKey::Decay,
                name: "Decay",
                unit: ParamUnit::Seconds,
                min: 0.1,
                max: 20.0,
                scale: ParamScale::Logarithmic,
                default_angle: DEFAULT_ANGLE,
            },
            ParamKey::Spread => ParamDescriptor {
                key: ParamKey::Spread,
                name: "Spread",
                unit: ParamUnit::StereoWidth,
                min: 0.0,
                max: 200.0,
                scale: ParamScale::DeadZone(format::SPREAD_DEAD_ZONE as f32),
                default_angle: DEFAULT_ANGLE,
            },
            ParamKey::Shimmer => ParamDescriptor {
                key: ParamKey::Shimmer,
                name: "Shimmer",
                unit: ParamUnit::Ratio,
                min: 0.0,
                max: 1.0,
                scale: ParamScale::Linear,
                default_angle: DEFAULT_ANGLE,
            },
        }
    }

    /// Format an angle as this parameter's display text.
    ///
    /// Shorthand for the matching function in [`crate::format`].
    pub fn format(self, angle: f32) -> String {
        match self {
            ParamKey::Signal => format::format_signal(angle),
            ParamKey::Delay => format::format_delay(angle),
            ParamKey::Decay => format::format_decay(angle),
            ParamKey::Spread => format::format_spread(angle),
            ParamKey::Shimmer => format::format_shimmer(angle),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown parameter id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter '{0}' (expected one of: signal, delay, decay, spread, shimmer)")]
pub struct ParseParamKeyError(pub String);

impl FromStr for ParamKey {
    type Err = ParseParamKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseParamKeyError(s.to_string()))
    }
}

/// Unit of a parameter's plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Percentage, 0–100.
    Percent,
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Stereo width in percent, 0 (narrow) – 100 (neutral) – 200 (wide).
    StereoWidth,
    /// Unitless ratio, 0–1.
    Ratio,
}

impl ParamUnit {
    /// Unit suffix used in display text (empty for ratios).
    pub const fn suffix(self) -> &'static str {
        match self {
            ParamUnit::Percent | ParamUnit::StereoWidth => "%",
            ParamUnit::Milliseconds => "ms",
            ParamUnit::Seconds => "s",
            ParamUnit::Ratio => "",
        }
    }
}

/// Curve mapping a normalized knob position to a plain value.
///
/// # Formulas
///
/// With `t ∈ [0, 1]`:
///
/// - **Linear**: `min + t * (max - min)`
/// - **Logarithmic**: `min * (max / min)^t`, equivalently
///   `10^(log10(min) + t * (log10(max) - log10(min)))`. Requires `min > 0`.
/// - **DeadZone(w)**: piecewise linear in angle space. Angles in `[-w, w]`
///   map to the range midpoint; the left arm `[-135, -w)` spans `min..mid`,
///   the right arm `(w, 135]` spans `mid..max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values.
    Logarithmic,
    /// Flat center region of the given half-width in degrees.
    DeadZone(f32),
}

/// Metadata for one rotary parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Parameter identity.
    pub key: ParamKey,
    /// Full display name.
    pub name: &'static str,
    /// Unit of the plain value.
    pub unit: ParamUnit,
    /// Plain value at the minimum angle.
    pub min: f32,
    /// Plain value at the maximum angle.
    pub max: f32,
    /// Angle → plain value curve.
    pub scale: ParamScale,
    /// Angle restored by the reset gesture.
    pub default_angle: f32,
}

impl ParamDescriptor {
    /// Map a normalized position `t ∈ [0, 1]` to a plain value.
    ///
    /// `t` is clamped first.
    pub fn denormalize(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        match self.scale {
            ParamScale::Linear => self.min + t * (self.max - self.min),
            ParamScale::Logarithmic => self.min * (self.max / self.min).powf(t),
            ParamScale::DeadZone(half_width) => {
                let angle = MIN_ANGLE + t * (MAX_ANGLE - MIN_ANGLE);
                let mid = (self.min + self.max) / 2.0;
                if angle < -half_width {
                    let arm = (angle - MIN_ANGLE) / (-half_width - MIN_ANGLE);
                    self.min + arm * (mid - self.min)
                } else if angle > half_width {
                    let arm = (angle - half_width) / (MAX_ANGLE - half_width);
                    mid + arm * (self.max - mid)
                } else {
                    mid
                }
            }
        }
    }

    /// Plain value for a knob angle.
    pub fn plain_value(&self, angle: f32) -> f32 {
        self.denormalize(normalize_angle(angle))
    }

    /// Display text for a knob angle.
    pub fn format(&self, angle: f32) -> String {
        self.key.format(angle)
    }
}
