//! Angle-to-text formatters for each knob.
//!
//! Every formatter takes an angle in degrees and first maps it to the
//! normalized position `t = (angle + 135) / 270`. Out-of-domain angles are
//! clamped before mapping, so the output always stays within the parameter's
//! printed range. Arithmetic is done in `f64` so rounding lands on the same
//! side as a double-precision reference.
//!
//! | Knob | Output range |
//! |---|---|
//! | signal | `0%` – `100%` |
//! | delay | `0ms` – `250ms` |
//! | decay | `0.1s` – `20s` (logarithmic) |
//! | spread | `0%` – `100%`, `∅`, `100%` – `200%` |
//! | shimmer | `0.000` – `1.000` |

use crate::knob::{MAX_ANGLE, MIN_ANGLE, clamp_angle};

/// Half-width of the spread dead zone, in degrees.
pub const SPREAD_DEAD_ZONE: f64 = 10.0;

/// Text shown while the spread knob sits in its dead zone.
pub const SPREAD_CENTER_SYMBOL: &str = "∅";

const DECAY_MIN_SECONDS: f64 = 0.1;
const DECAY_MAX_SECONDS: f64 = 20.0;

/// Normalized knob position in `[0, 1]`.
#[inline]
fn position(angle: f32) -> f64 {
    let angle = f64::from(clamp_angle(angle));
    (angle - f64::from(MIN_ANGLE)) / f64::from(MAX_ANGLE - MIN_ANGLE)
}

/// Round to the given number of decimals, half away from zero.
#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Signal level: `round(t * 100)` percent.
///
/// ```rust
/// use revpanel_core::format_signal;
///
/// assert_eq!(format_signal(-135.0), "0%");
/// assert_eq!(format_signal(0.0), "50%");
/// assert_eq!(format_signal(135.0), "100%");
/// ```
pub fn format_signal(angle: f32) -> String {
    format!("{}%", (position(angle) * 100.0).round())
}

/// Pre-delay: `round(t * 250)` milliseconds.
///
/// ```rust
/// use revpanel_core::format_delay;
///
/// assert_eq!(format_delay(0.0), "125ms");
/// assert_eq!(format_delay(135.0), "250ms");
/// ```
pub fn format_delay(angle: f32) -> String {
    format!("{}ms", (position(angle) * 250.0).round())
}

/// Decay time in seconds, on a logarithmic curve from 0.1 s to 20 s.
///
/// Values below one second keep two decimals, longer ones keep one. The
/// number is printed in its shortest form, so `20.0` prints as `20` and
/// `0.10` as `0.1`.
///
/// ```rust
/// use revpanel_core::format_decay;
///
/// assert_eq!(format_decay(-135.0), "0.1s");
/// assert_eq!(format_decay(0.0), "1.4s");
/// assert_eq!(format_decay(135.0), "20s");
/// ```
pub fn format_decay(angle: f32) -> String {
    let t = position(angle);
    let log_min = DECAY_MIN_SECONDS.log10();
    let log_max = DECAY_MAX_SECONDS.log10();
    let seconds = 10f64.powf(log_min + t * (log_max - log_min));
    let rounded = if seconds < 1.0 {
        round_to(seconds, 2)
    } else {
        round_to(seconds, 1)
    };
    format!("{rounded}s")
}

/// Stereo spread with a centered dead zone.
///
/// Inside `[-10, 10]` degrees the knob reads `∅`. The left arm spans
/// `0%..100%` and the right arm `100%..200%`.
///
/// ```rust
/// use revpanel_core::format_spread;
///
/// assert_eq!(format_spread(0.0), "∅");
/// assert_eq!(format_spread(-135.0), "0%");
/// assert_eq!(format_spread(135.0), "200%");
/// ```
pub fn format_spread(angle: f32) -> String {
    let angle = f64::from(clamp_angle(angle));
    let arm = f64::from(MAX_ANGLE) - SPREAD_DEAD_ZONE;
    if angle < -SPREAD_DEAD_ZONE {
        let pct = (angle - f64::from(MIN_ANGLE)) / arm * 100.0;
        format!("{}%", pct.round())
    } else if angle > SPREAD_DEAD_ZONE {
        let pct = 100.0 + (angle - SPREAD_DEAD_ZONE) / arm * 100.0;
        format!("{}%", pct.round())
    } else {
        SPREAD_CENTER_SYMBOL.to_string()
    }
}

/// Shimmer amount: `t` with exactly three decimals, ties rounded up.
///
/// ```rust
/// use revpanel_core::format_shimmer;
///
/// assert_eq!(format_shimmer(-135.0), "0.000");
/// assert_eq!(format_shimmer(0.0), "0.500");
/// assert_eq!(format_shimmer(-118.125), "0.063");
/// ```
pub fn format_shimmer(angle: f32) -> String {
    let t = position(angle);
    // `{:.3}` rounds the exact binary value correctly except on exact ties,
    // where it picks the even digit. A double `t` in [0, 1] lies exactly
    // halfway between thousandths only at the odd sixteenths.
    let sixteenths = t * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        // t * 1000 = 62.5 * sixteenths, exact in f64
        let thousandths = (t * 1000.0 + 0.5) as u32;
        return format!("{}.{:03}", thousandths / 1000, thousandths % 1000);
    }
    format!("{t:.3}")
}
