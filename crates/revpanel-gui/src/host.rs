//! Logging host for the standalone window.

use std::collections::VecDeque;

use revpanel_core::{EffectButton, FilterMode, ParamKey};
use revpanel_gui_core::{HostEvent, SurfaceHost};

/// How many recent events the status bar history keeps.
pub const HISTORY_LEN: usize = 16;

/// Host that traces every call and keeps a short history for display.
///
/// Knob angles arrive as display angles; the host keeps the matching plain
/// value of each parameter, in the parameter's unit.
#[derive(Debug)]
pub struct AppHost {
    recent: VecDeque<HostEvent>,
    preset: Option<String>,
    plain: [f32; ParamKey::COUNT],
}

impl Default for AppHost {
    fn default() -> Self {
        Self {
            recent: VecDeque::with_capacity(HISTORY_LEN),
            preset: None,
            plain: ParamKey::ALL.map(|key| {
                let desc = key.descriptor();
                desc.plain_value(desc.default_angle)
            }),
        }
    }
}

impl AppHost {
    /// Empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `preset` already active, as when the window opens on a
    /// preselected preset.
    pub fn with_active_preset(mut self, preset: Option<&str>) -> Self {
        self.preset = preset.map(str::to_string);
        self
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&HostEvent> {
        self.recent.back()
    }

    /// Recent events, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &HostEvent> {
        self.recent.iter()
    }

    /// Preset id last reported as selected, cleared on reset.
    pub fn active_preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// Plain value of `key` in its native unit.
    pub fn plain_value(&self, key: ParamKey) -> f32 {
        self.plain[key.index()]
    }

    /// Plain value of `key` with its unit suffix, e.g. `"125.00ms"`.
    pub fn plain_text(&self, key: ParamKey) -> String {
        format!(
            "{:.2}{}",
            self.plain_value(key),
            key.descriptor().unit.suffix()
        )
    }

    fn push(&mut self, event: HostEvent) {
        if self.recent.len() == HISTORY_LEN {
            self.recent.pop_front();
        }
        self.recent.push_back(event);
    }
}

impl SurfaceHost for AppHost {
    fn knob_changed(&mut self, key: ParamKey, angle: f32) {
        let desc = key.descriptor();
        let plain = desc.plain_value(angle);
        self.plain[key.index()] = plain;
        tracing::debug!(
            param = key.id(),
            angle,
            value = %desc.format(angle),
            plain,
            unit = desc.unit.suffix(),
            "knob"
        );
        self.push(HostEvent::Knob(key, angle));
    }

    fn filter_changed(&mut self, mode: FilterMode) {
        tracing::info!(mode = mode.as_str(), "filter");
        self.push(HostEvent::Filter(mode));
    }

    fn button_clicked(&mut self, button: EffectButton) {
        tracing::info!(button = button.id(), "effect button");
        self.push(HostEvent::Button(button));
    }

    fn preset_selected(&mut self, id: &str) {
        tracing::info!(preset = id, "preset selected");
        self.preset = Some(id.to_string());
        self.push(HostEvent::PresetSelected(id.to_string()));
    }

    fn selection_cleared(&mut self) {
        tracing::info!("preset cleared");
        self.preset = None;
        self.push(HostEvent::SelectionCleared);
    }

    fn browser_open_changed(&mut self, open: bool) {
        tracing::trace!(open, "browser");
        self.push(HostEvent::BrowserOpen(open));
    }
}
