use crate::KoreanPrepApp;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui};

/// Top navigation bar. The entry of the current screen is highlighted.
pub fn top_panel(app: &mut KoreanPrepApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let mut target = None;
            for (item, active) in app.nav_items() {
                if ui.selectable_label(active, item.caption()).clicked() {
                    target = Some(item.screen);
                }
            }
            if let Some(screen) = target {
                app.go(screen);
            }
        });
    });
}

pub fn bottom_panel(app: &mut KoreanPrepApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTON -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.theme.mode().is_dark() {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                app.toggle_theme();
                ctx.request_repaint();
            }
        });
    });
}

/// Panel centred both ways, content capped at `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Scrollable page with a header row holding a back button.
/// Returns true when back was clicked.
pub fn page(ctx: &Context, title: &str, max_width: f32, inner: impl FnOnce(&mut Ui)) -> bool {
    let mut back = false;
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let w = ui.available_width().min(max_width);
            ui.set_max_width(w);
            ui.horizontal(|ui| {
                back = ui.button("⬅").clicked();
                ui.heading(title);
            });
            ui.separator();
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
    back
}

/// Two equally sized buttons on one row, centred in `panel_width`.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(egui::vec2(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
