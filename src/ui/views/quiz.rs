use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::ScreenId;
use crate::ui::helpers::option_button;
use egui::{Align, CentralPanel, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut KoreanPrepApp, ctx: &Context) {
    let mut picked = None;
    let mut advance = false;
    let mut back = false;

    CentralPanel::default().show(ctx, |ui| {
        let View::Quiz(engine) = &app.view else {
            return;
        };
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.95).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);
            ui.horizontal(|ui| {
                back = ui.button("⬅").clicked();
                ui.heading("❓ Quiz");
            });
            ui.separator();

            let Some(question) = engine.current() else {
                ui.label("There are no questions to practise.");
                return;
            };

            ui.label(format!(
                "{} / {}  |  Score: {}",
                engine.position() + 1,
                engine.total(),
                engine.score()
            ));
            ui.add(ProgressBar::new(engine.progress()).desired_width(panel_width));
            ui.add_space(16.0);

            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(&question.prompt_en).size(20.0).strong());
                ui.label(RichText::new(&question.prompt_si).size(16.0));
            });
            ui.add_space(16.0);

            for (idx, option) in question.options.iter().enumerate() {
                if option_button(ui, option, engine.mark(idx), panel_width) {
                    picked = Some(idx);
                }
                ui.add_space(6.0);
            }

            if engine.selected().is_some() {
                ui.add_space(10.0);
                let label = if engine.is_last() { "Finish 🏁" } else { "Next ➡" };
                advance = ui
                    .add_sized([panel_width, 40.0], egui::Button::new(label))
                    .clicked();
            }
        });
    });

    if let Some(idx) = picked {
        app.answer_quiz(idx);
    }
    if advance {
        app.advance_quiz();
    }
    if back {
        app.go(ScreenId::Dashboard);
    }
}
