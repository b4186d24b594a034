use crate::KoreanPrepApp;
use crate::model::ScreenId;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, ProgressBar, RichText, ScrollArea};

const CARDS: [(&str, &str, ScreenId); 4] = [
    ("📚 Lessons", "Grammar and phrases", ScreenId::Lessons),
    ("💭 Vocabulary", "Practice words", ScreenId::Vocabulary),
    ("❓ Quizzes", "Test yourself", ScreenId::Quiz),
    ("📝 Mock Exams", "Full practice", ScreenId::MockExam),
];

pub fn ui_dashboard(app: &mut KoreanPrepApp, ctx: &Context) {
    let summary = app.progress_summary();
    let mut target = None;

    CentralPanel::default().show(ctx, |ui| {
        let panel_width = ui.available_width().min(560.0);
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let greeting = match app.profile.avatar_emoji() {
                    Some(avatar) => format!("{avatar} Hello, {}! 👋", app.profile.name_or_default()),
                    None => format!("Hello, {}! 👋", app.profile.name_or_default()),
                };
                ui.label(RichText::new(greeting).size(24.0).strong());
                ui.label("Ready to study?");
                ui.add_space(10.0);

                ui.label(format!(
                    "Lessons completed: {}/{}",
                    summary.lessons_completed, summary.lessons_total
                ));
                ui.add(
                    ProgressBar::new(summary.lesson_fraction())
                        .desired_width(panel_width)
                        .show_percentage(),
                );
                ui.add_space(16.0);

                for (title, subtitle, screen) in CARDS {
                    let label = format!("{title}\n{subtitle}");
                    if big_list_button(ui, label, panel_width, 56.0, true) {
                        target = Some(screen);
                    }
                    ui.add_space(6.0);
                }

                ui.add_space(10.0);
                let (progress, settings) = two_button_row(
                    ui,
                    panel_width,
                    ("📊 Progress", true),
                    ("⚙ Settings", true),
                );
                if progress {
                    target = Some(ScreenId::Progress);
                }
                if settings {
                    target = Some(ScreenId::Settings);
                }
            });
        });
    });

    if let Some(screen) = target {
        app.go(screen);
    }
}
