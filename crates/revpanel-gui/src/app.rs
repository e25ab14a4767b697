//! Main application state and UI layout.

use std::path::Path;
use std::sync::Arc;

use egui::{CentralPanel, Context, Frame, Margin, RichText, TopBottomPanel};
use revpanel_config::{Catalog, factory_catalog, find_catalog};
use revpanel_core::{EffectButton, ParamKey};
use revpanel_gui_core::{
    ControlSurface, DisplayPanel, FilterToggleWidget, FlatButtonWidget, KnobWidget,
    HostEvent, PresetBrowser, PresetSelector, Theme,
};

use crate::host::AppHost;

/// Load the preset catalog for the window.
///
/// Uses `explicit` when given, otherwise the first catalog found in the user
/// or system locations. Any failure falls back to the factory catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Catalog {
    let Some(path) = find_catalog(explicit) else {
        match explicit {
            Some(path) => {
                tracing::warn!(path = %path.display(), "catalog not found, using factory presets");
            }
            None => tracing::info!("no catalog installed, using factory presets"),
        }
        return factory_catalog();
    };

    match Catalog::load(&path) {
        Ok(catalog) => {
            tracing::info!(
                path = %path.display(),
                presets = catalog.len(),
                "loaded catalog"
            );
            catalog
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to load catalog, using factory presets"
            );
            factory_catalog()
        }
    }
}

/// The revpanel window.
pub struct RevPanelApp {
    surface: ControlSurface,
    host: AppHost,
    theme: Theme,
}

impl RevPanelApp {
    /// Create the application.
    ///
    /// `preset` is selected initially when it exists in `catalog`.
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog, preset: Option<&str>) -> Self {
        let app = Self::headless(catalog, preset);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Create the application without a window, for tests and embedding.
    pub fn headless(catalog: Catalog, preset: Option<&str>) -> Self {
        let mut browser = PresetBrowser::new(Arc::new(catalog));
        if let Some(id) = preset {
            browser = browser.with_default_preset(id);
        }
        let host = AppHost::new().with_active_preset(browser.session().selected.as_deref());
        Self {
            surface: ControlSurface::with_browser(browser),
            host,
            theme: Theme::default(),
        }
    }

    /// Control state.
    pub fn surface(&self) -> &ControlSurface {
        &self.surface
    }

    /// The host receiving surface events.
    pub fn host(&self) -> &AppHost {
        &self.host
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("REVPANEL")
                    .size(16.0)
                    .strong()
                    .color(self.theme.accent),
            );
            ui.separator();

            let messages = PresetSelector::new(self.surface.browser())
                .width(200.0)
                .show(ui);
            for message in messages {
                self.surface.handle_browser(message, &mut self.host);
            }
        });
    }

    fn render_knobs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for key in ParamKey::ALL {
                let (_, events) = KnobWidget::new(key, self.surface.knob(key))
                    .diameter(68.0)
                    .show(ui);
                for event in events {
                    self.surface.handle_knob(key, event, &mut self.host);
                }
                ui.add_space(8.0);
            }
        });
    }

    fn render_switches(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("EQ").size(10.0).color(self.theme.text_secondary));
                let (_, clicked) = FilterToggleWidget::new(self.surface.filter_mode()).show(ui);
                if let Some(mode) = clicked {
                    self.surface.select_filter(Some(mode), &mut self.host);
                }
            });
            ui.add_space(24.0);

            for button in EffectButton::ALL {
                let response = ui.add(FlatButtonWidget::new(self.surface.flat_button(button)));
                if response.clicked() {
                    self.surface.click_button(button, &mut self.host);
                }
            }
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let preset = self
                .host
                .active_preset()
                .and_then(|id| self.surface.browser().catalog().preset(id))
                .map_or("no preset", |p| p.name.as_str());
            ui.label(preset);
            ui.separator();
            if let Some(event) = self.host.last() {
                ui.label(RichText::new(event.to_string()).monospace());
                if let HostEvent::Knob(key, _) = event {
                    ui.label(
                        RichText::new(self.host.plain_text(*key))
                            .monospace()
                            .color(self.theme.text_secondary),
                    );
                }
            }
        });
    }

    /// Lay out and handle one frame.
    pub fn ui(&mut self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(2.0);
            self.render_status_bar(ui);
            ui.add_space(2.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add(DisplayPanel::new(&self.surface.snapshot()));
            ui.add_space(16.0);

            Frame::new()
                .fill(self.theme.background)
                .corner_radius(8.0)
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    self.render_knobs(ui);
                    ui.add_space(12.0);
                    self.render_switches(ui);
                });
        });
    }
}

impl eframe::App for RevPanelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
