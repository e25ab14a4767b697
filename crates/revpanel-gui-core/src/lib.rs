//! egui front end for the revpanel reverb control surface.
//!
//! This crate wires the pure control logic from `revpanel-core` and the
//! preset catalog from `revpanel-config` into a stateful surface, and draws
//! it with egui. The application crate (`revpanel-gui`) only adds a window,
//! a concrete host, and command-line handling.
//!
//! # Modules
//!
//! - [`browser`]: preset browser state machine (search, hover, favorites, selection)
//! - [`surface`]: [`ControlSurface`], the single owner of all control state
//! - [`host_bridge`]: [`SurfaceHost`] callback trait and the recording [`EventLog`]
//! - [`theme`]: colors and egui style
//! - [`widgets`]: knob, toggle, button, meter, display, and preset selector widgets
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use revpanel_config::factory_catalog;
//! use revpanel_core::{EffectButton, FilterMode};
//! use revpanel_gui_core::{ControlSurface, EventLog, HostEvent};
//!
//! let mut surface = ControlSurface::new(Arc::new(factory_catalog()));
//! let mut log = EventLog::new();
//!
//! surface.select_filter(Some(FilterMode::LowCut), &mut log);
//! surface.click_button(EffectButton::Gate, &mut log);
//!
//! assert_eq!(log.events(), [
//!     HostEvent::Filter(FilterMode::LowCut),
//!     HostEvent::Button(EffectButton::Gate),
//! ]);
//! ```

pub mod browser;
pub mod host_bridge;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use browser::{
    BrowserEvent, BrowserMessage, BrowserSession, CategoryRow, EmptyState, NO_SELECTION_LABEL,
    PresetBrowser,
};
pub use host_bridge::{EventLog, HostEvent, SurfaceHost};
pub use surface::ControlSurface;
pub use theme::Theme;
pub use widgets::{
    DisplayPanel, FilterToggleWidget, FlatButtonWidget, KnobWidget, MOUSE_POINTER, PresetSelector,
    StereoMeter,
};
