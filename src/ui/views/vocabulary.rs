use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::ScreenId;
use crate::ui::layout::{page, two_button_row};
use egui::{Button, Context, RichText, Vec2};

pub fn ui_vocabulary(app: &mut KoreanPrepApp, ctx: &Context) {
    let cards = &app.content.flashcards;
    let View::Vocabulary(deck) = &mut app.view else {
        return;
    };

    let back = page(ctx, "💭 Flashcards", 520.0, |ui| {
        let Some(card) = cards.get(deck.pager.index()) else {
            ui.label("No flashcards available.");
            return;
        };
        let width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.label(format!("{} / {}", deck.pager.index() + 1, deck.pager.len()));
            ui.add_space(8.0);

            // Tap to flip
            let face = if deck.flipped {
                RichText::new(format!("{}\n\n{}", card.english, card.sinhala)).size(22.0)
            } else {
                RichText::new(&card.korean).size(40.0).strong()
            };
            if ui
                .add(Button::new(face).min_size(Vec2::new(width, 220.0)))
                .on_hover_text("Tap to flip")
                .clicked()
            {
                deck.flip();
            }
            ui.add_space(12.0);

            let (prev, next) = two_button_row(
                ui,
                width.min(360.0),
                ("⬅ Previous", deck.pager.has_prev()),
                ("Next ➡", deck.pager.has_next()),
            );
            if prev {
                deck.prev();
            }
            if next {
                deck.next();
            }
        });
    });

    if back {
        app.go(ScreenId::Dashboard);
    }
}
