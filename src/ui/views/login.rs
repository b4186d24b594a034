use crate::KoreanPrepApp;
use crate::app::View;
use crate::auth::{LoginForm, SignupForm};
use crate::model::ScreenId;
use crate::ui::helpers::error_label;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Color32, Context, RichText, TextEdit, Ui};

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginAction {
    Submit,
    OpenSignup,
    Back,
    CreateAccount,
    BackToLogin,
}

pub fn ui_login(app: &mut KoreanPrepApp, ctx: &Context) {
    let mut action = None;

    centered_panel(ctx, 420.0, 420.0, |ui| {
        let View::Login(form) = &mut app.view else {
            return;
        };
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            action = match &mut form.signup {
                Some(signup) => signup_fields(ui, signup),
                None => login_fields(ui, form),
            };
        });
    });

    match action {
        Some(LoginAction::Submit) => {
            app.submit_login();
        }
        Some(LoginAction::OpenSignup) => app.open_signup(),
        Some(LoginAction::Back) => app.go(ScreenId::Welcome),
        Some(LoginAction::CreateAccount) => {
            app.submit_signup();
        }
        Some(LoginAction::BackToLogin) => app.close_signup(),
        None => {}
    }
}

fn login_fields(ui: &mut Ui, form: &mut LoginForm) -> Option<LoginAction> {
    ui.heading("Welcome Back!");
    ui.label("Sign in to continue learning");
    ui.add_space(16.0);

    ui.add(
        TextEdit::singleline(&mut form.email)
            .hint_text("📧 Email")
            .desired_width(300.0),
    );
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut form.password)
                .hint_text("🔒 Password")
                .password(!form.show_password)
                .desired_width(260.0),
        );
        ui.toggle_value(&mut form.show_password, "👁");
    });
    ui.add_space(10.0);

    if let Some(notice) = &form.notice {
        ui.label(RichText::new(notice).color(Color32::from_rgb(80, 180, 90)));
        ui.add_space(6.0);
    }
    if let Some(message) = &form.message {
        error_label(ui, message);
        ui.add_space(6.0);
    }

    let mut action = None;
    if ui
        .add_sized([300.0, 40.0], Button::new(RichText::new("Login").strong()))
        .clicked()
    {
        action = Some(LoginAction::Submit);
    }
    ui.add_space(6.0);
    if ui.link("Don't have an account? Sign Up").clicked() {
        action = Some(LoginAction::OpenSignup);
    }
    if ui.link("⬅ Back").clicked() {
        action = Some(LoginAction::Back);
    }
    ui.add_space(8.0);
    ui.small("Demo: demo@example.com / 123456");
    action
}

fn signup_fields(ui: &mut Ui, form: &mut SignupForm) -> Option<LoginAction> {
    ui.heading("Create Account");
    ui.label("Start your Korean learning journey");
    ui.add_space(16.0);

    ui.add(
        TextEdit::singleline(&mut form.full_name)
            .hint_text("👤 Full Name")
            .desired_width(300.0),
    );
    ui.add_space(6.0);
    ui.add(
        TextEdit::singleline(&mut form.email)
            .hint_text("📧 Email")
            .desired_width(300.0),
    );
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut form.password)
                .hint_text("🔒 Password")
                .password(!form.show_password)
                .desired_width(260.0),
        );
        ui.toggle_value(&mut form.show_password, "👁");
    });
    ui.add_space(6.0);
    ui.add(
        TextEdit::singleline(&mut form.confirm)
            .hint_text("🔒 Confirm Password")
            .password(!form.show_password)
            .desired_width(300.0),
    );
    ui.add_space(10.0);

    if let Some(message) = &form.message {
        error_label(ui, message);
        ui.add_space(6.0);
    }

    let mut action = None;
    if ui
        .add_sized([300.0, 40.0], Button::new(RichText::new("Sign Up").strong()))
        .clicked()
    {
        action = Some(LoginAction::CreateAccount);
    }
    ui.add_space(6.0);
    if ui.link("Already have an account? Login").clicked() {
        action = Some(LoginAction::BackToLogin);
    }
    action
}
