//! Property-based tests for revpanel-core controls.
//!
//! Tests angle bounds under arbitrary gestures, formatter ranges, and the
//! toggle's exclusivity using proptest for randomized input generation.

use proptest::prelude::*;
use revpanel_core::{
    FilterMode, FourWayToggle, KnobControl, MAX_ANGLE, MIN_ANGLE, ParamKey, PointerEvent,
    PointerId, format_decay, format_delay, format_shimmer, format_signal, format_spread,
};

fn pointer_event() -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        (0u64..3, -2000.0f32..2000.0).prop_map(|(p, y)| PointerEvent::Down {
            pointer: PointerId(p),
            y
        }),
        (0u64..3, -2000.0f32..2000.0, any::<bool>()).prop_map(|(p, y, fine)| {
            PointerEvent::Move {
                pointer: PointerId(p),
                y,
                fine,
            }
        }),
        (0u64..3).prop_map(|p| PointerEvent::Up {
            pointer: PointerId(p)
        }),
        (0u64..3).prop_map(|p| PointerEvent::Cancel {
            pointer: PointerId(p)
        }),
        Just(PointerEvent::GlobalRelease),
        Just(PointerEvent::DoubleClick),
    ]
}

fn filter_item() -> impl Strategy<Value = Option<FilterMode>> {
    prop_oneof![
        Just(None),
        Just(Some(FilterMode::None)),
        Just(Some(FilterMode::HighCut)),
        Just(Some(FilterMode::LowCut)),
        Just(Some(FilterMode::BandPass)),
    ]
}

fn number(text: &str, suffix: &str) -> f64 {
    text.strip_suffix(suffix)
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or_else(|| panic!("unexpected format {text:?}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// No sequence of pointer events moves a knob outside [-135, 135].
    #[test]
    fn knob_angle_stays_in_domain(events in prop::collection::vec(pointer_event(), 0..64)) {
        let mut knob = KnobControl::new();
        for event in events {
            let emitted = knob.handle_event(event);
            prop_assert!((MIN_ANGLE..=MAX_ANGLE).contains(&knob.angle()));
            if let Some(angle) = emitted {
                prop_assert_eq!(angle, knob.angle());
            }
        }
    }

    /// A captured move lands exactly at anchor + delta * sensitivity, clamped.
    #[test]
    fn move_follows_anchor_formula(
        start in -135.0f32..=135.0,
        y0 in -500.0f32..500.0,
        y in -500.0f32..500.0,
        fine in any::<bool>(),
    ) {
        let mut knob = KnobControl::with_default(start);
        let pointer = PointerId(7);
        knob.handle_event(PointerEvent::Down { pointer, y: y0 });
        let angle = knob.handle_event(PointerEvent::Move { pointer, y, fine });
        let sens = if fine { 0.3 } else { 1.5 };
        let expected = (start + (y0 - y) * sens).clamp(MIN_ANGLE, MAX_ANGLE);
        prop_assert_eq!(angle, Some(expected));
    }

    /// After any release the knob ignores further moves until a new press.
    #[test]
    fn released_knob_ignores_moves(y in -500.0f32..500.0, fine in any::<bool>()) {
        let mut knob = KnobControl::new();
        let pointer = PointerId(1);
        knob.handle_event(PointerEvent::Down { pointer, y: 0.0 });
        knob.handle_event(PointerEvent::GlobalRelease);
        prop_assert_eq!(knob.handle_event(PointerEvent::Move { pointer, y, fine }), None);
        prop_assert_eq!(knob.angle(), 0.0);
    }

    /// Formatter outputs stay within each parameter's printed range.
    #[test]
    fn formatters_stay_in_range(angle in -135.0f32..=135.0) {
        let signal = number(&format_signal(angle), "%");
        prop_assert!((0.0..=100.0).contains(&signal));

        let delay = number(&format_delay(angle), "ms");
        prop_assert!((0.0..=250.0).contains(&delay));

        let decay = number(&format_decay(angle), "s");
        prop_assert!((0.1..=20.0).contains(&decay));

        let shimmer = format_shimmer(angle);
        prop_assert_eq!(shimmer.len(), 5);
        let shimmer: f64 = shimmer.parse().unwrap();
        prop_assert!((0.0..=1.0).contains(&shimmer));

        let spread = format_spread(angle);
        if (-10.0..=10.0).contains(&angle) {
            prop_assert_eq!(spread, "∅");
        } else {
            let pct = number(&spread, "%");
            prop_assert!((0.0..=200.0).contains(&pct));
            if angle < -10.0 {
                prop_assert!(pct <= 100.0);
            } else {
                prop_assert!(pct >= 100.0);
            }
        }
    }

    /// Shimmer text is the nearest thousandth, with exact ties rounded up.
    #[test]
    fn shimmer_rounds_half_up(angle in -135.0f32..=135.0) {
        let t = (f64::from(angle) + 135.0) / 270.0;
        let printed: f64 = format_shimmer(angle).parse().unwrap();
        let error = printed - t;
        prop_assert!(error.abs() <= 0.0005 + 1e-12, "{} -> {}", t, printed);
        if (error.abs() - 0.0005).abs() < 1e-12 {
            prop_assert!(error > 0.0, "tie at {} rounded down to {}", t, printed);
        }
    }

    /// Every exact tie (odd sixteenths of the sweep) rounds up.
    #[test]
    fn shimmer_exact_ties(j in 0u32..8) {
        let sixteenths = 2 * j + 1;
        let angle = sixteenths as f32 * 16.875 - 135.0;
        let expected = (125 * sixteenths + 1) / 2;
        prop_assert_eq!(format_shimmer(angle), format!("0.{expected:03}"));
    }

    /// Signal, delay, and decay never decrease as the angle increases.
    #[test]
    fn formatters_are_monotonic(a in -135.0f32..=135.0, b in -135.0f32..=135.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(number(&format_signal(lo), "%") <= number(&format_signal(hi), "%"));
        prop_assert!(number(&format_delay(lo), "ms") <= number(&format_delay(hi), "ms"));
        prop_assert!(number(&format_decay(lo), "s") <= number(&format_decay(hi), "s"));
    }

    /// Plain values stay inside the descriptor range for any angle.
    #[test]
    fn plain_values_in_range(angle in -1000.0f32..1000.0) {
        for key in ParamKey::ALL {
            let desc = key.descriptor();
            let value = desc.plain_value(angle);
            prop_assert!(value >= desc.min - 1e-4 && value <= desc.max + 1e-3, "{} {}", key, value);
        }
    }

    /// The toggle always holds exactly one mode, and re-selecting the
    /// active non-none mode returns to none.
    #[test]
    fn toggle_exclusive(items in prop::collection::vec(filter_item(), 0..32)) {
        let mut toggle = FourWayToggle::new();
        for item in items {
            let before = toggle.value();
            let after = toggle.select(item);
            prop_assert_eq!(after, toggle.value());
            match item {
                None => prop_assert_eq!(after, FilterMode::None),
                Some(mode) if mode == before => prop_assert_eq!(after, FilterMode::None),
                Some(mode) => prop_assert_eq!(after, mode),
            }
        }
    }
}
