use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::{LessonLevel, ScreenId};
use crate::ui::helpers::card;
use crate::ui::layout::page;
use egui::{Context, RichText};

pub fn ui_lessons(app: &mut KoreanPrepApp, ctx: &Context) {
    let lessons = &app.content.lessons;
    let View::Lessons(browser) = &mut app.view else {
        return;
    };

    let back = page(ctx, "📚 Lessons", 640.0, |ui| {
        // Level filter
        ui.horizontal(|ui| {
            for level in LessonLevel::ALL {
                if ui.selectable_label(browser.level() == level, level.label()).clicked() {
                    browser.set_level(level);
                }
            }
        });
        ui.add_space(8.0);

        let mut toggled = None;
        for lesson in browser.visible(lessons) {
            let open = browser.is_expanded(&lesson.id);
            let marker = if lesson.completed { "✅" } else { "⬜" };
            let arrow = if open { "⏷" } else { "⏵" };
            card(ui, "", |ui| {
                let header = format!("{arrow} {marker} {}", lesson.title);
                if ui
                    .selectable_label(open, RichText::new(header).strong())
                    .clicked()
                {
                    toggled = Some(lesson.id.clone());
                }
                ui.label(&lesson.description);
                if open {
                    ui.separator();
                    egui::Grid::new(("lesson_rows", &lesson.id))
                        .num_columns(3)
                        .striped(true)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for row in &lesson.content {
                                ui.label(RichText::new(&row.korean).size(18.0));
                                ui.label(&row.english);
                                ui.label(&row.sinhala);
                                ui.end_row();
                            }
                        });
                }
            });
        }
        if let Some(id) = toggled {
            browser.toggle(&id);
        }
    });

    if back {
        app.go(ScreenId::Dashboard);
    }
}
