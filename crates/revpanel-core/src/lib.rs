//! Revpanel Core - control logic for the reverb control surface
//!
//! This crate holds everything the panel does that is not drawing: knob
//! gesture handling, angle-to-text mapping, the filter mode selector, the
//! effect button states, and the read-only view builders the display column
//! is rendered from. Nothing here depends on a GUI toolkit.
//!
//! # Core Abstractions
//!
//! ## Rotary Controls
//!
//! - [`KnobControl`] - Pointer-capture drag engine with fine mode and reset
//! - [`PointerEvent`] - Normalized pointer input fed to a knob
//! - [`KnobAngles`] - The five knob angles, indexed by [`ParamKey`]
//!
//! ## Parameters
//!
//! - [`ParamKey`] - Identity of each knob (`signal`, `delay`, ...)
//! - [`ParamDescriptor`] - Unit, range, and scale for host-facing values
//! - Formatters: [`format_signal`], [`format_delay`], [`format_decay`],
//!   [`format_spread`], [`format_shimmer`]
//!
//! ## Mode Selection
//!
//! - [`FourWayToggle`] - Exclusive four-way selector with re-select reset
//! - [`FilterMode`] / [`EqVariant`] - Toggle value and its EQ indicator
//!
//! ## Buttons and Display
//!
//! - [`EffectButton`], [`EffectButtonStates`], [`FlatButton`]
//! - [`DisplaySnapshot`] and the builders in [`display`]
//!
//! # Example
//!
//! ```rust
//! use revpanel_core::{KnobControl, ParamKey, PointerEvent, PointerId};
//!
//! let mut knob = KnobControl::new();
//! let pointer = PointerId(1);
//!
//! knob.handle_event(PointerEvent::Down { pointer, y: 200.0 });
//! let angle = knob.handle_event(PointerEvent::Move { pointer, y: 190.0, fine: false });
//! assert_eq!(angle, Some(15.0));
//! assert_eq!(ParamKey::Signal.format(15.0), "56%");
//!
//! knob.handle_event(PointerEvent::Up { pointer });
//! assert!(!knob.is_dragging());
//! ```
//!
//! # Feature Flags
//!
//! - `tracing` - emit `tracing` debug events for state transitions

pub mod buttons;
pub mod display;
pub mod format;
pub mod knob;
pub mod param_info;
pub mod toggle;

pub use buttons::{EffectButton, EffectButtonStates, FlatButton};
pub use display::{
    DisplaySnapshot, EqDisplayItem, KnobDisplayItem, MeterReading, MeterRow, StatusCell,
    VERSION_TEXT,
};
pub use format::{format_decay, format_delay, format_shimmer, format_signal, format_spread};
pub use knob::{
    ANGLE_RANGE, DEFAULT_ANGLE, FINE_SENSITIVITY, KnobAngles, KnobControl, MAX_ANGLE, MIN_ANGLE,
    NORMAL_SENSITIVITY, PointerEvent, PointerId, Sensitivity, clamp_angle, normalize_angle,
};
pub use param_info::{ParamDescriptor, ParamKey, ParamScale, ParamUnit, ParseParamKeyError};
pub use toggle::{EqVariant, FilterMode, FourWayToggle, ParseFilterModeError};
