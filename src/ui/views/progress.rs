use crate::KoreanPrepApp;
use crate::model::ScreenId;
use crate::ui::helpers::card;
use crate::ui::layout::page;
use egui::{Context, ProgressBar, RichText};

pub fn ui_progress(app: &mut KoreanPrepApp, ctx: &Context) {
    let summary = app.progress_summary();
    let name = app.profile.name_or_default().to_owned();
    let avatar = app.profile.avatar_emoji().unwrap_or("👤");

    let back = page(ctx, "📊 Progress", 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(avatar).size(40.0));
            ui.label(RichText::new(name).size(20.0).strong());
            ui.label("Level Up! 레벨 업! 🚀");
        });
        ui.add_space(12.0);

        card(ui, "Lessons", |ui| {
            ui.label(format!(
                "{} of {} completed",
                summary.lessons_completed, summary.lessons_total
            ));
            ui.add(ProgressBar::new(summary.lesson_fraction()).show_percentage());
        });
        card(ui, "Quizzes this session", |ui| {
            ui.label(summary.quiz_label());
        });
        card(ui, "Mock exams this session", |ui| {
            ui.label(format!("{} finished", summary.exams_finished));
        });
    });

    if back {
        app.go(ScreenId::Dashboard);
    }
}
