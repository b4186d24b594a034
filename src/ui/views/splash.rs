use crate::KoreanPrepApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, RichText};

pub fn ui_splash(_app: &mut KoreanPrepApp, ctx: &Context) {
    centered_panel(ctx, 180.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("🇰🇷 Korean Prep Sri Lanka").size(30.0).strong());
            ui.add_space(10.0);
            ui.label(RichText::new("Learn Korean for jobs in Korea").size(16.0));
            ui.add_space(24.0);
            ui.spinner();
        });
    });
}
