//! Callback contract between the control surface and its parameter host.
//!
//! The surface never owns audio state. Every change a user makes is reported
//! through [`SurfaceHost`], synchronously and in the order it happened. The
//! host decides what the values mean (a plugin parameter, an OSC message, a
//! log line).
//!
//! ```text
//! egui widgets ──► ControlSurface::handle_* ──► component state
//!                                  │
//!                                  └──► SurfaceHost::knob_changed(key, angle)
//!                                       SurfaceHost::filter_changed(mode)
//!                                       SurfaceHost::button_clicked(button)
//!                                       SurfaceHost::preset_selected(id)
//! ```
//!
//! Calls happen on the UI thread, so the trait carries no `Send`/`Sync`
//! bound.

use core::fmt;

use revpanel_core::{EffectButton, FilterMode, ParamKey};

/// Receiver of everything the control surface emits.
pub trait SurfaceHost {
    /// A knob moved or was reset. `angle` is in `[-135, 135]`.
    fn knob_changed(&mut self, key: ParamKey, angle: f32);

    /// The filter toggle was clicked. Called even when the mode is unchanged.
    fn filter_changed(&mut self, mode: FilterMode);

    /// An effect button was clicked.
    fn button_clicked(&mut self, button: EffectButton);

    /// A preset was chosen in the browser.
    fn preset_selected(&mut self, id: &str);

    /// The browser's reset row was clicked.
    fn selection_cleared(&mut self) {}

    /// The browser opened or closed.
    fn browser_open_changed(&mut self, _open: bool) {}
}

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// See [`SurfaceHost::knob_changed`].
    Knob(ParamKey, f32),
    /// See [`SurfaceHost::filter_changed`].
    Filter(FilterMode),
    /// See [`SurfaceHost::button_clicked`].
    Button(EffectButton),
    /// See [`SurfaceHost::preset_selected`].
    PresetSelected(String),
    /// See [`SurfaceHost::selection_cleared`].
    SelectionCleared,
    /// See [`SurfaceHost::browser_open_changed`].
    BrowserOpen(bool),
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Knob(key, angle) => {
                write!(f, "{} = {} ({angle:.1}°)", key.label(), key.format(*angle))
            }
            HostEvent::Filter(mode) => write!(f, "EQ = {}", mode.eq_variant().label()),
            HostEvent::Button(button) => write!(f, "{} clicked", button.label()),
            HostEvent::PresetSelected(id) => write!(f, "preset '{id}' selected"),
            HostEvent::SelectionCleared => f.write_str("preset cleared"),
            HostEvent::BrowserOpen(true) => f.write_str("browser opened"),
            HostEvent::BrowserOpen(false) => f.write_str("browser closed"),
        }
    }
}

/// Host that records every call, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<HostEvent>,
}

impl EventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&HostEvent> {
        self.events.last()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return all recorded events.
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SurfaceHost for EventLog {
    fn knob_changed(&mut self, key: ParamKey, angle: f32) {
        self.events.push(HostEvent::Knob(key, angle));
    }

    fn filter_changed(&mut self, mode: FilterMode) {
        self.events.push(HostEvent::Filter(mode));
    }

    fn button_clicked(&mut self, button: EffectButton) {
        self.events.push(HostEvent::Button(button));
    }

    fn preset_selected(&mut self, id: &str) {
        self.events.push(HostEvent::PresetSelected(id.to_string()));
    }

    fn selection_cleared(&mut self) {
        self.events.push(HostEvent::SelectionCleared);
    }

    fn browser_open_changed(&mut self, open: bool) {
        self.events.push(HostEvent::BrowserOpen(open));
    }
}
