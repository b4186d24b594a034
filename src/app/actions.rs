use super::*;
use crate::model::{ExamSection, ScreenId};
use crate::quiz::{Answer, Step};
use crate::theme::ThemeMode;

impl KoreanPrepApp {
    // ----- Quiz -----

    pub fn answer_quiz(&mut self, option: usize) -> Answer {
        match &mut self.view {
            View::Quiz(engine) => engine.answer(option),
            _ => Answer::Ignored,
        }
    }

    /// Next question, or hands the outcome to the results screen.
    pub fn advance_quiz(&mut self) -> Step {
        let step = match &mut self.view {
            View::Quiz(engine) => engine.advance(),
            _ => return Step::Unanswered,
        };
        if let Step::Finished(outcome) = step {
            log::info!("quiz finished: {}/{}", outcome.score, outcome.total);
            self.router.record_quiz(outcome);
            self.go(ScreenId::QuizResults);
        }
        step
    }

    // ----- Mock exam -----

    pub fn answer_exam(&mut self, option: usize) -> Answer {
        match &mut self.view {
            View::MockExam(session) => session.answer(option),
            _ => Answer::Ignored,
        }
    }

    pub fn advance_exam(&mut self) {
        let View::MockExam(session) = &mut self.view else {
            return;
        };
        if let Some(outcome) = session.advance() {
            self.router.record_exam(outcome);
        }
    }

    pub fn switch_exam_section(&mut self, section: ExamSection) {
        if let View::MockExam(session) = &mut self.view {
            session.switch_section(&self.content.mock_exam, section);
        }
    }

    pub fn restart_exam(&mut self) {
        if let View::MockExam(session) = &mut self.view {
            session.restart(&self.content.mock_exam);
        }
    }

    pub fn play_exam_audio(&mut self) {
        if let View::MockExam(session) = &mut self.view {
            session.play_current(self.audio.as_ref());
        }
    }

    // ----- Profile -----

    /// Welcome "Continue": validates, stores, opens the dashboard.
    pub fn complete_welcome(&mut self) {
        let View::Welcome(form) = &mut self.view else {
            return;
        };
        let Some(profile) = form.validate() else {
            return;
        };
        self.profile = profile;
        self.profile_dirty = true;
        self.go(ScreenId::Dashboard);
    }

    pub fn begin_profile_edit(&mut self) {
        if let View::Settings(editor) = &mut self.view {
            editor.draft = Some(self.profile.clone());
        }
    }

    pub fn cancel_profile_edit(&mut self) {
        if let View::Settings(editor) = &mut self.view {
            editor.draft = None;
        }
    }

    /// Saves the draft as is, only the name gets trimmed.
    pub fn save_profile_edit(&mut self) {
        let View::Settings(editor) = &mut self.view else {
            return;
        };
        let Some(mut draft) = editor.draft.take() else {
            return;
        };
        draft.display_name = draft.display_name.trim().to_owned();
        self.profile = draft;
        self.profile_dirty = true;
    }

    // ----- Login -----

    pub fn submit_login(&mut self) -> bool {
        let View::Login(form) = &mut self.view else {
            return false;
        };
        if form.submit() {
            self.go(ScreenId::Dashboard);
            true
        } else {
            false
        }
    }

    pub fn open_signup(&mut self) {
        if let View::Login(form) = &mut self.view {
            form.open_signup();
        }
    }

    pub fn close_signup(&mut self) {
        if let View::Login(form) = &mut self.view {
            form.close_signup();
        }
    }

    /// Stays on the login screen either way.
    pub fn submit_signup(&mut self) -> bool {
        match &mut self.view {
            View::Login(form) => form.submit_signup(),
            _ => false,
        }
    }

    // ----- Theme -----

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }
}
