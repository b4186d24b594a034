use crate::KoreanPrepApp;
use crate::app::View;
use crate::model::ScreenId;
use crate::storage::DEFAULT_NAME;
use crate::ui::helpers::{avatar_picker, card};
use crate::ui::layout::page;
use egui::{Context, RichText, TextEdit};

enum SettingsAction {
    Edit,
    Save,
    Cancel,
    ToggleTheme,
}

const STATIC_ROWS: [(&str, &str); 4] = [
    ("🌐 Language", "English"),
    ("🔔 Daily Notifications", ""),
    ("❔ FAQ", "›"),
    ("✉ Contact Us", "›"),
];

pub fn ui_settings(app: &mut KoreanPrepApp, ctx: &Context) {
    let profile = &app.profile;
    let dark = app.theme.mode().is_dark();
    let View::Settings(editor) = &mut app.view else {
        return;
    };
    let mut action = None;

    let back = page(ctx, "⚙ Settings", 560.0, |ui| {
        card(ui, "Profile", |ui| match editor.draft.as_mut() {
            Some(draft) => {
                ui.label("Name");
                ui.add(TextEdit::singleline(&mut draft.display_name).hint_text(DEFAULT_NAME));
                ui.label("Avatar");
                avatar_picker(ui, &mut draft.avatar);
                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        action = Some(SettingsAction::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(SettingsAction::Cancel);
                    }
                });
            }
            None => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(profile.avatar_emoji().unwrap_or("👤")).size(36.0));
                    ui.label(RichText::new(profile.name_or_default()).size(20.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✏ Edit").clicked() {
                            action = Some(SettingsAction::Edit);
                        }
                    });
                });
            }
        });

        card(ui, "Preferences", |ui| {
            ui.horizontal(|ui| {
                ui.label(if dark { "🌙 Dark Mode" } else { "☀ Light Mode" });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut on = dark;
                    if ui.toggle_value(&mut on, if dark { "On" } else { "Off" }).clicked() {
                        action = Some(SettingsAction::ToggleTheme);
                    }
                });
            });
            for (label, value) in STATIC_ROWS {
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(value);
                    });
                });
            }
        });

        ui.vertical_centered(|ui| {
            ui.small("All rights reserved");
        });
    });

    if back {
        app.go(ScreenId::Dashboard);
        return;
    }
    match action {
        Some(SettingsAction::Edit) => app.begin_profile_edit(),
        Some(SettingsAction::Save) => app.save_profile_edit(),
        Some(SettingsAction::Cancel) => app.cancel_profile_edit(),
        Some(SettingsAction::ToggleTheme) => {
            app.toggle_theme();
        }
        None => {}
    }
}
