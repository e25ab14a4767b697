//! Read-only view builders for the display column.
//!
//! Nothing here holds state. Each builder takes the current control values
//! and returns plain data that a renderer draws directly.

use crate::buttons::{EffectButton, EffectButtonStates};
use crate::knob::KnobAngles;
use crate::param_info::ParamKey;
use crate::toggle::{EqVariant, FilterMode};

/// Version line shown under the display.
pub const VERSION_TEXT: &str = "Untitled REV 2026 v.01";

/// Number of dots per meter channel.
pub const METER_DOTS: usize = 8;

/// Speaker grille canvas size, in pixels.
pub const GRILLE_SIZE: f32 = 80.0;
/// Speaker grille dot diameter, in pixels.
pub const GRILLE_DOT_SIZE: f32 = 2.0;
/// Default spacing between grille dots.
pub const GRILLE_STEP: f32 = 8.0;
/// Default empty rim inside the grille circle.
pub const GRILLE_INSET: f32 = 6.0;

/// One row of the knob readout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnobDisplayItem {
    /// Which knob.
    pub key: ParamKey,
    /// Row label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

impl KnobDisplayItem {
    /// Value as shown in the readout.
    ///
    /// Spread at its extremes reads `Center` (0%) and `Wide` (200%).
    pub fn display_value(&self) -> &str {
        match (self.key, self.value.as_str()) {
            (ParamKey::Spread, "0%") => "Center",
            (ParamKey::Spread, "200%") => "Wide",
            (_, value) => value,
        }
    }
}

/// Knob readout rows in panel order.
pub fn knob_display_items(angles: &KnobAngles) -> Vec<KnobDisplayItem> {
    angles
        .iter()
        .map(|(key, angle)| KnobDisplayItem {
            key,
            label: key.label(),
            value: key.format(angle),
        })
        .collect()
}

/// One entry of the EQ mode column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqDisplayItem {
    /// Curve variant.
    pub variant: EqVariant,
    /// Variant label.
    pub label: &'static str,
    /// Whether this entry matches the toggle.
    pub active: bool,
}

/// The four EQ entries, with the toggle's mode marked active.
pub fn eq_display_items(mode: FilterMode) -> [EqDisplayItem; 4] {
    let current = mode.eq_variant();
    EqVariant::ALL.map(|variant| EqDisplayItem {
        variant,
        label: variant.label(),
        active: variant == current,
    })
}

/// One cell of the effect status grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCell {
    /// Effect shown in the cell.
    pub button: EffectButton,
    /// Whether the effect is on.
    pub on: bool,
}

/// Effect status as two columns of two cells.
///
/// Left column: chorus, bypass. Right column: reverse, gate.
pub fn effect_status_grid(states: &EffectButtonStates) -> [[StatusCell; 2]; 2] {
    let cell = |button| StatusCell {
        button,
        on: states.get(button),
    };
    [
        [cell(EffectButton::Chorus), cell(EffectButton::Bypass)],
        [cell(EffectButton::Reverse), cell(EffectButton::Gate)],
    ]
}

/// One row of a stereo meter, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeterRow {
    /// Left channel dot lit.
    pub left: bool,
    /// Right channel dot lit.
    pub right: bool,
}

/// Eight meter rows, top to bottom, lit from the bottom up.
///
/// Lit counts are clamped to `0..=8`.
pub fn meter_dots(left_lit: i32, right_lit: i32) -> [MeterRow; METER_DOTS] {
    let max = METER_DOTS as i32;
    let left = left_lit.clamp(0, max);
    let right = right_lit.clamp(0, max);
    core::array::from_fn(|i| {
        let from_bottom = max - 1 - i as i32;
        MeterRow {
            left: from_bottom < left,
            right: from_bottom < right,
        }
    })
}

/// A labelled stereo meter reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterReading {
    /// Caption, e.g. `Input`.
    pub label: String,
    /// Level text, e.g. `-0.6`.
    pub value: String,
    /// Lit dots on the left channel.
    pub left_lit: i32,
    /// Lit dots on the right channel.
    pub right_lit: i32,
}

impl MeterReading {
    /// Create a reading.
    pub fn new(label: impl Into<String>, value: impl Into<String>, left: i32, right: i32) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            left_lit: left,
            right_lit: right,
        }
    }

    /// Placeholder input meter.
    pub fn input() -> Self {
        Self::new("Input", "-0.6", 5, 7)
    }

    /// Placeholder output meter.
    pub fn output() -> Self {
        Self::new("Output", "-3", 5, 7)
    }

    /// Dot rows for this reading.
    pub fn rows(&self) -> [MeterRow; METER_DOTS] {
        meter_dots(self.left_lit, self.right_lit)
    }
}

/// Dot positions (top-left corner) of the speaker grille.
///
/// Rows are spaced `step` apart; with `stagger` every odd row shifts right by
/// half a step. A dot is kept if it stays inside the canvas and its center
/// lies within the circle of radius `size/2 - inset`.
///
/// Steps that are not finite or are smaller than one dot yield no dots.
pub fn speaker_grille_dots(step: f32, inset: f32, stagger: bool) -> Vec<(f32, f32)> {
    if !step.is_finite() || step < GRILLE_DOT_SIZE {
        return Vec::new();
    }
    let limit = GRILLE_SIZE - GRILLE_DOT_SIZE;
    let center = GRILLE_SIZE / 2.0;
    let radius = center - inset;
    let radius_sq = radius * radius;
    let half_dot = GRILLE_DOT_SIZE / 2.0;

    let mut dots = Vec::new();
    let mut row = 0u32;
    let mut y = 0.0;
    while y <= limit {
        let offset = if stagger && row % 2 == 1 { step / 2.0 } else { 0.0 };
        let mut x = 0.0;
        while x <= limit {
            let px = x + offset;
            x += step;
            if px < 0.0 || px > limit {
                continue;
            }
            let dx = px + half_dot - center;
            let dy = y + half_dot - center;
            if dx * dx + dy * dy <= radius_sq {
                dots.push((px.round(), y));
            }
        }
        row += 1;
        y += step;
    }
    dots
}

/// Everything the display column shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    /// Knob readout rows.
    pub knobs: Vec<KnobDisplayItem>,
    /// EQ mode entries.
    pub eq: [EqDisplayItem; 4],
    /// Effect status grid.
    pub effects: [[StatusCell; 2]; 2],
    /// Input meter.
    pub input: MeterReading,
    /// Output meter.
    pub output: MeterReading,
    /// Speaker grille dot positions.
    pub grille: Vec<(f32, f32)>,
    /// Version line.
    pub version: &'static str,
}

impl DisplaySnapshot {
    /// Build a snapshot from the control values, with placeholder meters.
    pub fn new(angles: &KnobAngles, mode: FilterMode, states: &EffectButtonStates) -> Self {
        Self {
            knobs: knob_display_items(angles),
            eq: eq_display_items(mode),
            effects: effect_status_grid(states),
            input: MeterReading::input(),
            output: MeterReading::output(),
            grille: speaker_grille_dots(GRILLE_STEP, GRILLE_INSET, true),
            version: VERSION_TEXT,
        }
    }

    /// Replace the meter readings.
    #[must_use]
    pub fn with_meters(mut self, input: MeterReading, output: MeterReading) -> Self {
        self.input = input;
        self.output = output;
        self
    }
}

impl Default for DisplaySnapshot {
    fn default() -> Self {
        Self::new(
            &KnobAngles::default(),
            FilterMode::None,
            &EffectButtonStates::default(),
        )
    }
}
