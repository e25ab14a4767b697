//! The display screen: knob readout, EQ mode, effect status, meters, grille.

use egui::{Color32, Response, RichText, Sense, Stroke, Ui, Widget, pos2, vec2};
use revpanel_core::DisplaySnapshot;
use revpanel_core::display::{GRILLE_DOT_SIZE, GRILLE_SIZE};

use super::StereoMeter;

const MUTED: Color32 = Color32::from_rgb(140, 138, 150);
const BRIGHT: Color32 = Color32::from_rgb(228, 226, 220);

/// Read-only panel drawn from a [`DisplaySnapshot`].
pub struct DisplayPanel<'a> {
    snapshot: &'a DisplaySnapshot,
}

impl<'a> DisplayPanel<'a> {
    /// Create a panel for one frame's snapshot.
    pub fn new(snapshot: &'a DisplaySnapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for DisplayPanel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let snap = self.snapshot;
        egui::Frame::new()
            .fill(Color32::from_rgb(13, 14, 15))
            .corner_radius(8.0)
            .stroke(Stroke::new(1.0, Color32::from_rgb(58, 58, 66)))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    knob_column(ui, snap);
                    ui.separator();
                    eq_column(ui, snap);
                    ui.separator();
                    effects_column(ui, snap);
                    ui.separator();
                    ui.add(StereoMeter::new(&snap.input));
                    ui.add(StereoMeter::new(&snap.output));
                    ui.separator();
                    grille(ui, &snap.grille);
                });
                ui.add_space(4.0);
                ui.label(RichText::new(snap.version).size(9.0).color(MUTED));
            })
            .response
    }
}

fn knob_column(ui: &mut Ui, snap: &DisplaySnapshot) {
    ui.vertical(|ui| {
        ui.set_min_width(110.0);
        for item in &snap.knobs {
            ui.horizontal(|ui| {
                ui.label(RichText::new(item.label).size(11.0).color(MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(item.display_value())
                            .size(11.0)
                            .monospace()
                            .color(BRIGHT),
                    );
                });
            });
        }
    });
}

fn eq_column(ui: &mut Ui, snap: &DisplaySnapshot) {
    ui.vertical(|ui| {
        ui.label(RichText::new("EQ").size(9.0).color(MUTED));
        for item in &snap.eq {
            let color = if item.active { BRIGHT } else { MUTED };
            let text = RichText::new(item.label).size(11.0).color(color);
            ui.label(if item.active { text.strong() } else { text });
        }
    });
}

fn effects_column(ui: &mut Ui, snap: &DisplaySnapshot) {
    ui.horizontal_top(|ui| {
        for column in &snap.effects {
            ui.vertical(|ui| {
                for cell in column {
                    ui.horizontal(|ui| {
                        let (dot, _) = ui.allocate_exact_size(vec2(6.0, 6.0), Sense::hover());
                        let color = if cell.on {
                            Color32::WHITE
                        } else {
                            Color32::from_rgb(70, 68, 82)
                        };
                        ui.painter().circle_filled(dot.center(), 3.0, color);
                        ui.label(
                            RichText::new(cell.button.label())
                                .size(11.0)
                                .color(if cell.on { BRIGHT } else { MUTED }),
                        );
                    });
                }
            });
        }
    });
}

fn grille(ui: &mut Ui, dots: &[(f32, f32)]) {
    let (rect, _) = ui.allocate_exact_size(vec2(GRILLE_SIZE, GRILLE_SIZE), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.circle_filled(rect.center(), GRILLE_SIZE / 2.0, Color32::from_rgb(24, 25, 28));
    painter.circle_stroke(
        rect.center(),
        GRILLE_SIZE / 2.0,
        Stroke::new(1.0, Color32::from_rgb(58, 58, 66)),
    );
    let r = GRILLE_DOT_SIZE / 2.0;
    for &(x, y) in dots {
        painter.circle_filled(
            pos2(rect.left() + x + r, rect.top() + y + r),
            r,
            Color32::from_rgb(90, 88, 100),
        );
    }
}
