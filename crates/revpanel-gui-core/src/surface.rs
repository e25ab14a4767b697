//! The whole control surface as one state owner.
//!
//! [`ControlSurface`] holds the five knobs, the filter toggle, the effect
//! buttons, and the preset browser. Each handler applies a single input
//! event, then reports the resulting emissions to a [`SurfaceHost`] before
//! returning.

use std::sync::Arc;

use revpanel_config::Catalog;
use revpanel_core::{
    DisplaySnapshot, EffectButton, EffectButtonStates, FilterMode, FlatButton, FourWayToggle,
    KnobAngles, KnobControl, ParamKey, PointerEvent, display::MeterReading,
};

use crate::browser::{BrowserEvent, BrowserMessage, PresetBrowser};
use crate::host_bridge::SurfaceHost;

/// Owner of every control's state.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    knobs: [KnobControl; ParamKey::COUNT],
    toggle: FourWayToggle,
    buttons: [FlatButton; 4],
    effects: EffectButtonStates,
    browser: PresetBrowser,
    input_meter: MeterReading,
    output_meter: MeterReading,
}

impl ControlSurface {
    /// Surface with every control at its default, browsing `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_browser(PresetBrowser::new(catalog))
    }

    /// Surface around a preconfigured browser.
    pub fn with_browser(browser: PresetBrowser) -> Self {
        Self {
            knobs: ParamKey::ALL
                .map(|key| KnobControl::with_default(key.descriptor().default_angle)),
            toggle: FourWayToggle::new(),
            buttons: EffectButton::ALL.map(FlatButton::new),
            effects: EffectButtonStates::default(),
            browser,
            input_meter: MeterReading::input(),
            output_meter: MeterReading::output(),
        }
    }

    /// One knob's state.
    pub fn knob(&self, key: ParamKey) -> &KnobControl {
        &self.knobs[key.index()]
    }

    /// All knob angles.
    pub fn angles(&self) -> KnobAngles {
        ParamKey::ALL
            .into_iter()
            .fold(KnobAngles::default(), |angles, key| {
                angles.with(key, self.knob(key).angle())
            })
    }

    /// Current filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.toggle.value()
    }

    /// Local visual state of an effect button.
    pub fn flat_button(&self, button: EffectButton) -> &FlatButton {
        &self.buttons[button.index()]
    }

    /// Host-side effect button states.
    pub fn effect_states(&self) -> &EffectButtonStates {
        &self.effects
    }

    /// The preset browser.
    pub fn browser(&self) -> &PresetBrowser {
        &self.browser
    }

    /// Feed a pointer event to a knob. Returns the emitted angle, if any.
    pub fn handle_knob<H: SurfaceHost + ?Sized>(
        &mut self,
        key: ParamKey,
        event: PointerEvent,
        host: &mut H,
    ) -> Option<f32> {
        let angle = self.knobs[key.index()].handle_event(event)?;
        host.knob_changed(key, angle);
        Some(angle)
    }

    /// Set a knob from outside (host automation). Nothing is emitted.
    pub fn set_knob_angle(&mut self, key: ParamKey, angle: f32) {
        self.knobs[key.index()].set_angle(angle);
    }

    /// Click a toggle item (`None` deselects). Always emits.
    pub fn select_filter<H: SurfaceHost + ?Sized>(
        &mut self,
        item: Option<FilterMode>,
        host: &mut H,
    ) -> FilterMode {
        let mode = self.toggle.select(item);
        host.filter_changed(mode);
        mode
    }

    /// Click a toggle item by raw value; empty or unknown deselects.
    pub fn select_filter_raw<H: SurfaceHost + ?Sized>(
        &mut self,
        raw: &str,
        host: &mut H,
    ) -> FilterMode {
        let mode = self.toggle.select_raw(raw);
        host.filter_changed(mode);
        mode
    }

    /// Click an effect button.
    pub fn click_button<H: SurfaceHost + ?Sized>(&mut self, button: EffectButton, host: &mut H) {
        let clicked = self.buttons[button.index()].click();
        self.effects.handle_click(clicked.id());
        host.button_clicked(clicked);
    }

    /// Click an effect button by id. Unknown ids are ignored.
    pub fn click_button_id<H: SurfaceHost + ?Sized>(
        &mut self,
        id: &str,
        host: &mut H,
    ) -> Option<EffectButton> {
        let Some(button) = EffectButton::parse(id) else {
            tracing::debug!(id, "ignoring click on unknown effect button");
            return None;
        };
        self.click_button(button, host);
        Some(button)
    }

    /// Apply a browser message and relay its events.
    pub fn handle_browser<H: SurfaceHost + ?Sized>(
        &mut self,
        message: BrowserMessage,
        host: &mut H,
    ) {
        for event in self.browser.update(message) {
            match event {
                BrowserEvent::PresetSelected(id) => host.preset_selected(&id),
                BrowserEvent::SelectionCleared => host.selection_cleared(),
                BrowserEvent::OpenChanged(open) => host.browser_open_changed(open),
            }
        }
    }

    /// Replace the meter readings shown in the display.
    pub fn set_meters(&mut self, input: MeterReading, output: MeterReading) {
        self.input_meter = input;
        self.output_meter = output;
    }

    /// Display data for the current state.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::new(&self.angles(), self.filter_mode(), &self.effects)
            .with_meters(self.input_meter.clone(), self.output_meter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host_bridge::{EventLog, HostEvent};
    use revpanel_config::factory_catalog;
    use revpanel_core::PointerId;

    fn surface() -> ControlSurface {
        ControlSurface::new(Arc::new(factory_catalog()))
    }

    #[test]
    fn knob_moves_are_relayed() {
        let mut s = surface();
        let mut log = EventLog::new();
        let pointer = PointerId(0);
        s.handle_knob(ParamKey::Shimmer, PointerEvent::Down { pointer, y: 10.0 }, &mut log);
        s.handle_knob(
            ParamKey::Shimmer,
            PointerEvent::Move { pointer, y: 0.0, fine: false },
            &mut log,
        );
        assert_eq!(log.events(), [HostEvent::Knob(ParamKey::Shimmer, 15.0)]);
        assert_eq!(s.angles().get(ParamKey::Shimmer), 15.0);
        assert_eq!(s.angles().get(ParamKey::Signal), 0.0);
    }

    #[test]
    fn filter_always_emits() {
        let mut s = surface();
        let mut log = EventLog::new();
        s.select_filter(Some(FilterMode::HighCut), &mut log);
        s.select_filter(Some(FilterMode::HighCut), &mut log);
        s.select_filter_raw("", &mut log);
        assert_eq!(
            log.events(),
            [
                HostEvent::Filter(FilterMode::HighCut),
                HostEvent::Filter(FilterMode::None),
                HostEvent::Filter(FilterMode::None),
            ]
        );
    }

    #[test]
    fn button_click_flips_both_states() {
        let mut s = surface();
        let mut log = EventLog::new();
        s.click_button(EffectButton::Reverse, &mut log);
        assert!(s.flat_button(EffectButton::Reverse).is_active());
        assert!(s.effect_states().get(EffectButton::Reverse));
        assert_eq!(log.last(), Some(&HostEvent::Button(EffectButton::Reverse)));
    }

    #[test]
    fn unknown_button_id_is_noop() {
        let mut s = surface();
        let mut log = EventLog::new();
        assert_eq!(s.click_button_id("flanger", &mut log), None);
        assert!(log.is_empty());
        assert_eq!(*s.effect_states(), EffectButtonStates::default());
    }

    #[test]
    fn browser_events_are_relayed() {
        let mut s = surface();
        let mut log = EventLog::new();
        s.handle_browser(BrowserMessage::ToggleOpen, &mut log);
        s.handle_browser(BrowserMessage::SelectPreset("cathedral".into()), &mut log);
        assert_eq!(
            log.events(),
            [
                HostEvent::BrowserOpen(true),
                HostEvent::PresetSelected("cathedral".into()),
                HostEvent::BrowserOpen(false),
            ]
        );
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut s = surface();
        let mut log = EventLog::new();
        s.set_knob_angle(ParamKey::Spread, 135.0);
        s.select_filter(Some(FilterMode::BandPass), &mut log);
        s.click_button(EffectButton::Chorus, &mut log);
        s.set_meters(
            MeterReading::new("Input", "-12", 2, 3),
            MeterReading::new("Output", "-6", 4, 4),
        );

        let snap = s.snapshot();
        assert_eq!(snap.knobs[3].display_value(), "Wide");
        assert!(snap.eq[3].active);
        assert!(snap.effects[0][0].on);
        assert_eq!(snap.input.value, "-12");
        assert_eq!(snap.output.left_lit, 4);
    }
}
