use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::ScreenId;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, RichText};

pub fn ui_quiz_results(app: &mut KoreanPrepApp, ctx: &Context) {
    let View::QuizResults(outcome) = &app.view else {
        return;
    };
    let outcome = *outcome;
    let mut retry = false;
    let mut back = false;

    centered_panel(ctx, 240.0, 420.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🎉 Quiz Complete!");
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{} / {}", outcome.score, outcome.total))
                    .size(36.0)
                    .strong(),
            );
            ui.label(RichText::new(format!("{}%", outcome.percent())).size(20.0));
            ui.add_space(20.0);
            (retry, back) = two_button_row(ui, 360.0, ("🔄 Try Again", true), ("🏠 Back", true));
        });
    });

    if retry {
        app.go(ScreenId::Quiz);
    } else if back {
        app.go(ScreenId::Dashboard);
    }
}
