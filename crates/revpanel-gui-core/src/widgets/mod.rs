//! Control-surface widgets.
//!
//! Every widget reads core state for drawing and hands input back to the
//! caller instead of mutating anything:
//! - [`KnobWidget`]: rotary knob, returns [`PointerEvent`](revpanel_core::PointerEvent)s
//! - [`FilterToggleWidget`]: `∅ H L B` segmented toggle, returns the clicked mode
//! - [`FlatButtonWidget`]: square effect button with an LED
//! - [`StereoMeter`]: two-column dot meter
//! - [`DisplayPanel`]: the read-only display screen
//! - [`PresetSelector`]: preset trigger and browser popover

mod button;
mod display;
mod knob;
mod meter;
mod preset_selector;
mod toggle;

pub use button::FlatButtonWidget;
pub use display::DisplayPanel;
pub use knob::{KnobWidget, MOUSE_POINTER};
pub use meter::StereoMeter;
pub use preset_selector::PresetSelector;
pub use toggle::FilterToggleWidget;
