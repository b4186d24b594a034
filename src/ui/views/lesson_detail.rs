use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::{ScreenId, VocabWord};
use crate::ui::helpers::card;
use crate::ui::layout::{page, two_button_row};
use egui::{Context, RichText, Ui};

pub fn ui_lesson_detail(app: &mut KoreanPrepApp, ctx: &Context) {
    let words = &app.content.vocabulary;
    let View::LessonDetail(pager) = &mut app.view else {
        return;
    };
    let mut view_all = false;

    let back = page(ctx, "📖 Vocabulary Detail", 600.0, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Vocabulary").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                view_all = ui.link("View All").clicked();
            });
        });
        ui.add_space(6.0);

        let Some(word) = words.get(pager.index()) else {
            ui.label("No words yet.");
            return;
        };
        word_card(ui, word);
        ui.label(format!("{} / {}", pager.index() + 1, pager.len()));

        let width = ui.available_width().min(360.0);
        let (prev, next) = two_button_row(
            ui,
            width,
            ("⬅ Previous", pager.has_prev()),
            ("Next ➡", pager.has_next()),
        );
        if prev {
            pager.prev();
        }
        if next {
            pager.next();
        }
        ui.add_space(10.0);
        word_notes(ui, word);
    });

    if back {
        app.go(ScreenId::Lessons);
    } else if view_all {
        app.go(ScreenId::WordList);
    }
}

pub(crate) fn word_card(ui: &mut Ui, word: &VocabWord) {
    card(ui, "", |ui| {
        ui.label(RichText::new(&word.kor).size(32.0).strong());
        ui.label(RichText::new(&word.eng).size(18.0));
        ui.label(&word.sinhala);
    });
}

/// Grammar and culture boxes, each shown only when the word has one.
pub(crate) fn word_notes(ui: &mut Ui, word: &VocabWord) {
    if let Some(grammar) = &word.grammar {
        card(ui, "Grammar Notes", |ui| {
            ui.label(grammar);
            if let Some(si) = &word.grammar_si {
                ui.label(RichText::new(si).strong());
            }
        });
    }
    if let Some(tips) = &word.tips {
        card(ui, "Cultural Tips", |ui| {
            ui.label(tips);
            if let Some(si) = &word.tips_si {
                ui.label(RichText::new(si).strong());
            }
        });
    }
}
