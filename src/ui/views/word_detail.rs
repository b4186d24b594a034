use super::lesson_detail::{word_card, word_notes};
use crate::KoreanPrepApp;
use crate::app::NavParams;
use crate::browse::neighbour_ids;
use crate::model::ScreenId;
use crate::ui::layout::{page, two_button_row};
use egui::Context;

pub fn ui_word_detail(app: &mut KoreanPrepApp, ctx: &Context) {
    let mut target = None;

    let back = page(ctx, "🔤 Word Detail", 600.0, |ui| {
        let Some(word) = app.current_word() else {
            ui.label("Word not found.");
            return;
        };
        let (prev, next) = neighbour_ids(&app.content.vocabulary, word.id);

        word_card(ui, word);
        let width = ui.available_width().min(360.0);
        let (go_prev, go_next) = two_button_row(
            ui,
            width,
            ("⬅ Previous", prev.is_some()),
            ("Next ➡", next.is_some()),
        );
        if go_prev {
            target = prev;
        }
        if go_next {
            target = next;
        }
        ui.add_space(10.0);
        word_notes(ui, word);
    });

    if let Some(id) = target {
        app.navigate(ScreenId::WordDetail, Some(NavParams::id(id)));
    } else if back {
        app.go(ScreenId::WordList);
    }
}
