use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::{ExamSection, ScreenId};
use crate::ui::helpers::{card, option_button};
use crate::ui::layout::page;
use egui::{Context, RichText};

enum ExamAction {
    Switch(ExamSection),
    Answer(usize),
    Advance,
    Play,
    Restart,
}

pub fn ui_mock_exam(app: &mut KoreanPrepApp, ctx: &Context) {
    let View::MockExam(session) = &app.view else {
        return;
    };
    let mut action = None;

    let back = page(ctx, "📝 Mock Exam", 620.0, |ui| {
        // Tabs
        ui.horizontal(|ui| {
            for (section, label) in [
                (ExamSection::Listening, "🎧 Listening"),
                (ExamSection::Reading, "📖 Reading"),
            ] {
                if ui.selectable_label(session.section() == section, label).clicked() {
                    action = Some(ExamAction::Switch(section));
                }
            }
        });
        ui.separator();
        let width = ui.available_width();

        if let Some(outcome) = session.finished() {
            ui.vertical_centered(|ui| {
                ui.heading("Exam finished");
                ui.label(
                    RichText::new(format!("Score: {} / {}", outcome.score, outcome.total))
                        .size(24.0)
                        .strong(),
                );
                ui.label(format!("{}%", outcome.percent()));
                ui.add_space(12.0);
                if ui.button("🔄 Restart").clicked() {
                    action = Some(ExamAction::Restart);
                }
            });
            return;
        }

        let engine = session.engine();
        let Some(question) = engine.current() else {
            ui.label("This section has no questions.");
            return;
        };
        ui.label(format!(
            "Question {} of {}  |  Score: {}",
            engine.position() + 1,
            engine.total(),
            engine.score()
        ));
        ui.add_space(8.0);

        if question.audio.is_some() {
            let playing = session.now_playing().is_some();
            let label = if playing { "🔊 Playing…" } else { "▶ Play Audio" };
            if ui.button(label).clicked() {
                action = Some(ExamAction::Play);
            }
        }
        if let Some(image) = &question.image {
            ui.small(format!("🖼 {image}"));
        }

        card(ui, "", |ui| {
            ui.label(RichText::new(&question.text).size(18.0));
        });

        for (idx, option) in question.options.iter().enumerate() {
            if option_button(ui, option, engine.mark(idx), width) {
                action = Some(ExamAction::Answer(idx));
            }
            ui.add_space(6.0);
        }

        if engine.selected().is_some() {
            let label = if engine.is_last() { "Finish 🏁" } else { "Next ➡" };
            if ui
                .add_sized([width, 40.0], egui::Button::new(label))
                .clicked()
            {
                action = Some(ExamAction::Advance);
            }
        }
    });

    if back {
        app.go(ScreenId::Dashboard);
        return;
    }
    match action {
        Some(ExamAction::Switch(section)) => app.switch_exam_section(section),
        Some(ExamAction::Answer(idx)) => {
            app.answer_exam(idx);
        }
        Some(ExamAction::Advance) => app.advance_exam(),
        Some(ExamAction::Play) => app.play_exam_audio(),
        Some(ExamAction::Restart) => app.restart_exam(),
        None => {}
    }
}
