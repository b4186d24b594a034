use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::ScreenId;
use crate::ui::helpers::{avatar_picker, error_label};
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_welcome(app: &mut KoreanPrepApp, ctx: &Context) {
    let mut submit = false;
    let mut to_login = false;

    centered_panel(ctx, 340.0, 460.0, |ui| {
        let View::Welcome(form) = &mut app.view else {
            return;
        };
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("안녕하세요! Welcome");
            ui.label("Let's set up your profile");
            ui.add_space(18.0);

            ui.label("Your name");
            let name = ui.add(
                egui::TextEdit::singleline(&mut form.name)
                    .hint_text("Enter your name")
                    .desired_width(280.0),
            );
            if name.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.add_space(12.0);

            ui.label("Choose an avatar");
            avatar_picker(ui, &mut form.avatar);
            ui.add_space(12.0);

            if let Some(err) = form.error {
                error_label(ui, &err.to_string());
                ui.add_space(6.0);
            }

            if ui
                .add_sized([280.0, 40.0], Button::new(RichText::new("Continue ➡").strong()))
                .clicked()
            {
                submit = true;
            }
            ui.add_space(6.0);
            if ui.link("Already have an account? Log in").clicked() {
                to_login = true;
            }
        });
    });

    if submit {
        app.complete_welcome();
    } else if to_login {
        app.go(ScreenId::Login);
    }
}
