//! Preset selector: trigger button plus the three-column popover.
//!
//! Like [`KnobWidget`](super::KnobWidget), the selector never mutates the
//! browser. It reads the [`PresetBrowser`] for drawing and returns the
//! [`BrowserMessage`]s produced by this frame's input. Hover messages are only
//! emitted when they would change the session.

use egui::{Align2, Color32, Id, Order, Rect, RichText, ScrollArea, Ui, vec2};

use crate::browser::{BrowserMessage, PresetBrowser};

const COLUMN_WIDTH: f32 = 150.0;
const DETAIL_WIDTH: f32 = 200.0;
const LIST_HEIGHT: f32 = 220.0;
const STAR_ON: &str = "★";
const STAR_OFF: &str = "☆";

/// Trigger button and popover for a [`PresetBrowser`].
pub struct PresetSelector<'a> {
    browser: &'a PresetBrowser,
    width: f32,
}

impl<'a> PresetSelector<'a> {
    /// Create a selector for `browser`.
    pub fn new(browser: &'a PresetBrowser) -> Self {
        Self {
            browser,
            width: 180.0,
        }
    }

    /// Set the trigger button width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Draw the trigger and, while open, the popover.
    pub fn show(self, ui: &mut Ui) -> Vec<BrowserMessage> {
        let mut messages = Vec::new();

        let trigger = ui.add_sized(
            vec2(self.width, 24.0),
            egui::Button::new(format!("{} ▾", self.browser.trigger_label())),
        );
        let trigger_clicked = trigger.clicked();
        if trigger_clicked {
            messages.push(BrowserMessage::ToggleOpen);
        }

        if !self.browser.is_open() {
            return messages;
        }

        let area = egui::Area::new(Id::new("revpanel_preset_browser"))
            .order(Order::Foreground)
            .pivot(Align2::LEFT_TOP)
            .fixed_pos(trigger.rect.left_bottom() + vec2(0.0, 4.0))
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    self.popover(ui, &mut messages);
                });
            });

        if !trigger_clicked && area.response.clicked_elsewhere() {
            messages.push(BrowserMessage::SetOpen(false));
        }

        messages
    }

    fn popover(&self, ui: &mut Ui, messages: &mut Vec<BrowserMessage>) {
        let session = self.browser.session();

        let mut search = session.search.clone();
        let field = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search presets")
                .desired_width(COLUMN_WIDTH * 2.0),
        );
        if field.changed() {
            messages.push(BrowserMessage::SearchChanged(search));
        }
        ui.add_space(6.0);

        let columns = ui
            .horizontal_top(|ui| {
                if self.browser.show_categories() {
                    self.category_column(ui, messages);
                    ui.separator();
                }
                if self.browser.show_presets() || self.browser.show_detail() {
                    // The preset list and its detail panel form one hover zone
                    let zone = ui
                        .horizontal_top(|ui| {
                            if self.browser.show_presets() {
                                self.preset_column(ui, messages);
                            }
                            if self.browser.show_detail() {
                                ui.separator();
                                self.detail_column(ui);
                            }
                        })
                        .response
                        .rect;
                    if session.hovered_preset.is_some() && !pointer_in(ui, zone) {
                        messages.push(BrowserMessage::PresetZoneLeft);
                    }
                }
            })
            .response
            .rect;

        let has_hover = session.hovered_category.is_some()
            || session.hovered_preset.is_some()
            || session.reset_row_hovered;
        if has_hover && !self.browser.is_searching() && !pointer_in(ui, columns) {
            messages.push(BrowserMessage::ColumnsLeft);
        }
    }

    fn category_column(&self, ui: &mut Ui, messages: &mut Vec<BrowserMessage>) {
        let session = self.browser.session();
        ui.vertical(|ui| {
            ui.set_width(COLUMN_WIDTH);
            for row in self.browser.category_rows() {
                let text = if row.favorites {
                    RichText::new(format!("{STAR_ON} {}", row.name))
                } else {
                    RichText::new(row.name)
                };
                let response = ui.selectable_label(row.hovered, text);
                if response.hovered() && !row.hovered {
                    messages.push(BrowserMessage::CategoryHovered(row.id.to_string()));
                }
            }

            ui.separator();
            let reset = ui.selectable_label(session.reset_row_hovered, "Reset");
            if reset.hovered() && !session.reset_row_hovered {
                messages.push(BrowserMessage::ResetHovered);
            }
            if reset.clicked() {
                messages.push(BrowserMessage::ResetInstance);
            }
        });
    }

    fn preset_column(&self, ui: &mut Ui, messages: &mut Vec<BrowserMessage>) {
        let session = self.browser.session();
        ui.vertical(|ui| {
            ui.set_width(COLUMN_WIDTH);
            if let Some(empty) = self.browser.empty_state() {
                ui.label(RichText::new(empty.message()).italics().weak());
                return;
            }
            ScrollArea::vertical()
                .id_salt("revpanel_preset_list")
                .max_height(LIST_HEIGHT)
                .show(ui, |ui| {
                    for preset in self.browser.visible_presets() {
                        ui.horizontal(|ui| {
                            let favorite = self.browser.is_favorite(&preset.id);
                            let star = ui.small_button(if favorite { STAR_ON } else { STAR_OFF });
                            if star.clicked() {
                                messages.push(BrowserMessage::ToggleFavorite(preset.id.clone()));
                            }

                            let hovered = session.hovered_preset.as_deref() == Some(&preset.id);
                            let selected = session.selected.as_deref() == Some(&preset.id);
                            let mut text = RichText::new(&preset.name);
                            if selected {
                                text = text.strong();
                            }
                            let row = ui.selectable_label(hovered, text);
                            if row.hovered() && !hovered {
                                messages.push(BrowserMessage::PresetHovered(preset.id.clone()));
                            }
                            if row.clicked() {
                                messages.push(BrowserMessage::SelectPreset(preset.id.clone()));
                            }
                        });
                    }
                });
        });
    }

    fn detail_column(&self, ui: &mut Ui) {
        let Some(preset) = self.browser.detail_preset() else {
            return;
        };
        ui.vertical(|ui| {
            ui.set_width(DETAIL_WIDTH);
            ui.label(RichText::new(&preset.name).strong().size(14.0));
            if let Some(category) = self.browser.catalog().category(&preset.category) {
                ui.label(RichText::new(&category.name).weak());
            }
            if !preset.tags.is_empty() {
                ui.label(
                    RichText::new(preset.tags.join(" · "))
                        .size(10.0)
                        .color(Color32::from_rgb(140, 138, 150)),
                );
            }
            if !preset.description.is_empty() {
                ui.add_space(4.0);
                ui.add(egui::Label::new(&preset.description).wrap());
            }
        });
    }
}

fn pointer_in(ui: &Ui, rect: Rect) -> bool {
    ui.ctx().pointer_hover_pos().is_some_and(|pos| rect.contains(pos))
}
