use crate::KoreanPrepApp;
use crate::model::ScreenId;
use crate::ui::layout::page;
use egui::{Context, Frame, RichText};

const COLUMNS: usize = 3;

pub fn ui_hangul_grid(app: &mut KoreanPrepApp, ctx: &Context) {
    let sections = &app.content.hangul;

    let back = page(ctx, "🈷 Hangul Chart", 600.0, |ui| {
        let cell_w = (ui.available_width() - 24.0) / COLUMNS as f32;
        for section in sections {
            ui.add_space(8.0);
            ui.label(RichText::new(&section.title).size(18.0).strong());
            ui.add_space(4.0);
            egui::Grid::new(("hangul", &section.title))
                .num_columns(COLUMNS)
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for (i, letter) in section.letters.iter().enumerate() {
                        Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(cell_w - 16.0);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(&letter.hangul).size(30.0).strong());
                                ui.label(&letter.roman);
                                ui.weak(&letter.sinhala);
                            });
                        });
                        if (i + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
    });

    if back {
        app.go(ScreenId::Dashboard);
    }
}
