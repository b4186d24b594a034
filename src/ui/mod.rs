mod helpers;
pub mod layout;
pub mod views;

use crate::KoreanPrepApp;
use crate::model::ScreenId;
use eframe::{App, Frame, Storage};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for KoreanPrepApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        self.theme.apply(ctx);

        // Splash countdown
        let now = ctx.input(|i| i.time);
        if let Some(left) = self.tick(now) {
            ctx.request_repaint_after(left);
        }

        // Nav bar everywhere except splash and login
        if self.router.current().shows_nav_bar() {
            top_panel(self, ctx);
        }

        // Theme toggle
        bottom_panel(self, ctx);

        // One view per screen
        match self.view.screen() {
            ScreenId::Splash => views::splash::ui_splash(self, ctx),
            ScreenId::Welcome => views::welcome::ui_welcome(self, ctx),
            ScreenId::Login => views::login::ui_login(self, ctx),
            ScreenId::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            ScreenId::Lessons => views::lessons::ui_lessons(self, ctx),
            ScreenId::LessonDetail => views::lesson_detail::ui_lesson_detail(self, ctx),
            ScreenId::Quiz => views::quiz::ui_quiz(self, ctx),
            ScreenId::QuizResults => views::quiz_results::ui_quiz_results(self, ctx),
            ScreenId::MockExam => views::mock_exam::ui_mock_exam(self, ctx),
            ScreenId::Vocabulary => views::vocabulary::ui_vocabulary(self, ctx),
            ScreenId::Progress => views::progress::ui_progress(self, ctx),
            ScreenId::Settings => views::settings::ui_settings(self, ctx),
            ScreenId::WordList => views::word_list::ui_word_list(self, ctx),
            ScreenId::WordDetail => views::word_detail::ui_word_detail(self, ctx),
            ScreenId::HangulGrid => views::hangul_grid::ui_hangul_grid(self, ctx),
        }

        if self.profile_dirty {
            match frame.storage_mut() {
                Some(storage) => {
                    self.persist_profile(&mut *storage);
                    storage.flush();
                }
                None => {
                    let mut memory = std::mem::take(&mut self.memory);
                    self.persist_profile(&mut memory);
                    self.memory = memory;
                }
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        // theme stays per session, only the profile is written
        self.profile.store(storage);
        self.profile_dirty = false;
    }
}
