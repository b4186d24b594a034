// src/ui/helpers.rs
use crate::quiz::OptionMark;
use crate::storage::AVATARS;
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Answer button coloured after the question was answered:
/// green for the right option, red for a wrong pick.
pub fn option_button(ui: &mut Ui, label: &str, mark: OptionMark, width: f32) -> bool {
    let button = Button::new(label).min_size(Vec2::new(width, 40.0));
    let button = match mark {
        OptionMark::Correct => button.fill(Color32::from_rgb(46, 160, 67)),
        OptionMark::Wrong => button.fill(Color32::from_rgb(200, 55, 55)),
        OptionMark::Open | OptionMark::Neutral => button,
    };
    // answered questions keep their colours but take no more clicks
    ui.add(button).clicked() && mark == OptionMark::Open
}

/// Grouped block with a bold title.
pub fn card(ui: &mut Ui, title: &str, inner: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if !title.is_empty() {
            ui.label(RichText::new(title).strong());
            ui.add_space(4.0);
        }
        inner(ui);
    });
    ui.add_space(8.0);
}

pub fn avatar_picker(ui: &mut Ui, selected: &mut Option<usize>) {
    ui.horizontal(|ui| {
        for (idx, emoji) in AVATARS.iter().enumerate() {
            let text = RichText::new(*emoji).size(32.0);
            if ui.selectable_label(*selected == Some(idx), text).clicked() {
                *selected = Some(idx);
            }
        }
    });
}

pub fn error_label(ui: &mut Ui, message: &str) {
    ui.label(RichText::new(message).color(Color32::from_rgb(220, 80, 80)));
}
