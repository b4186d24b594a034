use crate::KoreanPrepApp;
use crate::app::{NavParams, View};
use crate::model::ScreenId;
use crate::ui::layout::page;
use egui::{Context, RichText, TextEdit};

pub fn ui_word_list(app: &mut KoreanPrepApp, ctx: &Context) {
    let words = &app.content.vocabulary;
    let View::WordList(search) = &mut app.view else {
        return;
    };
    let mut selected = None;

    let back = page(ctx, "📋 All Words", 600.0, |ui| {
        ui.add(
            TextEdit::singleline(&mut search.query)
                .hint_text("🔍 Search Korean, English or Sinhala")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let results = search.results(words);
        if results.is_empty() {
            ui.label("No words match your search.");
        }
        for word in results {
            let text = RichText::new(format!("{}   {}   {}", word.kor, word.eng, word.sinhala));
            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new(text))
                .clicked()
            {
                selected = Some(word.id);
            }
        }
    });

    if let Some(id) = selected {
        app.navigate(ScreenId::WordDetail, Some(NavParams::id(id)));
    } else if back {
        app.go(ScreenId::LessonDetail);
    }
}
