//! Effect buttons: bypass, chorus, reverse, gate.

use core::fmt;

/// One of the four effect buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectButton {
    /// Bypass the reverb entirely.
    Bypass,
    /// Chorus on the wet signal.
    Chorus,
    /// Reversed reverb tail.
    Reverse,
    /// Gated reverb tail.
    Gate,
}

impl EffectButton {
    /// All buttons in panel order.
    pub const ALL: [EffectButton; 4] = [
        EffectButton::Bypass,
        EffectButton::Chorus,
        EffectButton::Reverse,
        EffectButton::Gate,
    ];

    /// Stable id used by the host.
    pub const fn id(self) -> &'static str {
        match self {
            EffectButton::Bypass => "bypass",
            EffectButton::Chorus => "chorus",
            EffectButton::Reverse => "reverse",
            EffectButton::Gate => "gate",
        }
    }

    /// Button caption.
    pub const fn label(self) -> &'static str {
        match self {
            EffectButton::Bypass => "Bypass",
            EffectButton::Chorus => "Chorus",
            EffectButton::Reverse => "Reverse",
            EffectButton::Gate => "Gate",
        }
    }

    /// Look up a button by id. Unknown ids return `None`.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }

    /// Zero-based position in [`EffectButton::ALL`].
    pub const fn index(self) -> usize {
        match self {
            EffectButton::Bypass => 0,
            EffectButton::Chorus => 1,
            EffectButton::Reverse => 2,
            EffectButton::Gate => 3,
        }
    }
}

impl fmt::Display for EffectButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Host-side on/off state for every effect button. All start off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectButtonStates([bool; 4]);

impl EffectButtonStates {
    /// Whether `button` is on.
    #[inline]
    pub fn get(&self, button: EffectButton) -> bool {
        self.0[button.index()]
    }

    /// Turn `button` on or off.
    pub fn set(&mut self, button: EffectButton, on: bool) {
        self.0[button.index()] = on;
    }

    /// Flip `button` and return its new state.
    pub fn toggle(&mut self, button: EffectButton) -> bool {
        let on = !self.get(button);
        self.set(button, on);
        on
    }

    /// Handle a click by id.
    ///
    /// Known ids flip their state and return the button; unknown ids change
    /// nothing.
    pub fn handle_click(&mut self, id: &str) -> Option<EffectButton> {
        let Some(button) = EffectButton::parse(id) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(id, "ignoring click on unknown effect button");
            return None;
        };
        let _on = self.toggle(button);

        #[cfg(feature = "tracing")]
        tracing::debug!(button = button.id(), on = _on, "effect button toggled");

        Some(button)
    }

    /// Iterate `(button, on)` in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (EffectButton, bool)> + '_ {
        EffectButton::ALL.into_iter().map(|b| (b, self.get(b)))
    }
}

/// Flat push button with its own visual active flag.
///
/// The flag is local to the widget and independent of the host state in
/// [`EffectButtonStates`]; both flip on the same click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatButton {
    button: EffectButton,
    active: bool,
}

impl FlatButton {
    /// Inactive button.
    pub fn new(button: EffectButton) -> Self {
        Self {
            button,
            active: false,
        }
    }

    /// Which effect this button controls.
    pub fn button(&self) -> EffectButton {
        self.button
    }

    /// Visual active flag.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the visual flag and return the button for the host.
    pub fn click(&mut self) -> EffectButton {
        self.active = !self.active;
        self.button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_and_unknown_ids() {
        assert_eq!(EffectButton::parse("gate"), Some(EffectButton::Gate));
        assert_eq!(EffectButton::parse("bypass"), Some(EffectButton::Bypass));
        assert_eq!(EffectButton::parse("delay"), None);
        assert_eq!(EffectButton::parse(""), None);
    }

    #[test]
    fn states_start_off() {
        let states = EffectButtonStates::default();
        assert!(states.iter().all(|(_, on)| !on));
    }

    #[test]
    fn handle_click_flips_known_button() {
        let mut states = EffectButtonStates::default();
        assert_eq!(states.handle_click("chorus"), Some(EffectButton::Chorus));
        assert!(states.get(EffectButton::Chorus));
        states.handle_click("chorus");
        assert!(!states.get(EffectButton::Chorus));
    }

    #[test]
    fn handle_click_ignores_unknown_id() {
        let mut states = EffectButtonStates::default();
        assert_eq!(states.handle_click("flanger"), None);
        assert_eq!(states, EffectButtonStates::default());
    }

    #[test]
    fn flat_button_flips_local_flag() {
        let mut button = FlatButton::new(EffectButton::Reverse);
        assert!(!button.is_active());
        assert_eq!(button.click(), EffectButton::Reverse);
        assert!(button.is_active());
        button.click();
        assert!(!button.is_active());
    }
}
