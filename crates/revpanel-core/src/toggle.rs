//! Four-way exclusive filter selector.
//!
//! Exactly one [`FilterMode`] is active at any time, with [`FilterMode::None`]
//! treated as a real mode rather than an absence. Clicking the active item
//! again falls back to `None`.

use core::fmt;
use core::str::FromStr;

/// Filter mode selected by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// No filtering.
    #[default]
    None,
    /// High-cut (low-pass) filter.
    HighCut,
    /// Low-cut (high-pass) filter.
    LowCut,
    /// Band-pass filter.
    BandPass,
}

impl FilterMode {
    /// All modes in toggle order.
    pub const ALL: [FilterMode; 4] = [
        FilterMode::None,
        FilterMode::HighCut,
        FilterMode::LowCut,
        FilterMode::BandPass,
    ];

    /// Wire name: `none`, `h`, `l`, `b`.
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterMode::None => "none",
            FilterMode::HighCut => "h",
            FilterMode::LowCut => "l",
            FilterMode::BandPass => "b",
        }
    }

    /// Glyph drawn on the toggle segment.
    pub const fn symbol(self) -> &'static str {
        match self {
            FilterMode::None => "∅",
            FilterMode::HighCut => "H",
            FilterMode::LowCut => "L",
            FilterMode::BandPass => "B",
        }
    }

    /// Lenient conversion from a raw wire value.
    ///
    /// Empty and unrecognized values normalize to [`FilterMode::None`].
    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// EQ indicator variant for this mode.
    pub const fn eq_variant(self) -> EqVariant {
        match self {
            FilterMode::None => EqVariant::Disabled,
            FilterMode::HighCut => EqVariant::HighCut,
            FilterMode::LowCut => EqVariant::LowCut,
            FilterMode::BandPass => EqVariant::BandPass,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by strict parsing of a [`FilterMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter mode '{0}' (expected one of: none, h, l, b)")]
pub struct ParseFilterModeError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(FilterMode::None),
            "h" | "highcut" | "high-cut" => Ok(FilterMode::HighCut),
            "l" | "lowcut" | "low-cut" => Ok(FilterMode::LowCut),
            "b" | "bandpass" | "band-pass" => Ok(FilterMode::BandPass),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// EQ indicator shown in the display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqVariant {
    /// Filter off.
    Disabled,
    /// High-cut curve.
    HighCut,
    /// Low-cut curve.
    LowCut,
    /// Band-pass curve.
    BandPass,
}

impl EqVariant {
    /// All variants in display order.
    pub const ALL: [EqVariant; 4] = [
        EqVariant::Disabled,
        EqVariant::HighCut,
        EqVariant::LowCut,
        EqVariant::BandPass,
    ];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            EqVariant::Disabled => "Disabled",
            EqVariant::HighCut => "High-cut",
            EqVariant::LowCut => "Low-cut",
            EqVariant::BandPass => "Band-pass",
        }
    }
}

/// Exclusive selector over the four filter modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FourWayToggle {
    value: FilterMode,
}

impl FourWayToggle {
    /// Toggle starting at [`FilterMode::None`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[inline]
    pub fn value(&self) -> FilterMode {
        self.value
    }

    /// Replace the mode without click semantics (host-driven update).
    pub fn set_value(&mut self, mode: FilterMode) {
        self.value = mode;
    }

    /// Apply a selection and return the resulting mode.
    ///
    /// Selecting the active mode (other than `None`) resets to `None`. A
    /// deselect (`None` argument) also lands on `None`. The result is always
    /// returned so the caller can emit it, even when nothing changed.
    pub fn select(&mut self, item: Option<FilterMode>) -> FilterMode {
        let next = match item {
            Some(mode) if mode == self.value && mode != FilterMode::None => FilterMode::None,
            Some(mode) => mode,
            None => FilterMode::None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.value, to = %next, "filter toggle");

        self.value = next;
        next
    }

    /// Apply a raw selection value; empty or unknown values deselect.
    pub fn select_raw(&mut self, raw: &str) -> FilterMode {
        let item = raw.parse::<FilterMode>().ok();
        self.select(item)
    }
}
