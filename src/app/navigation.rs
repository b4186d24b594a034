use super::*;
use crate::browse::{FlashcardDeck, LessonBrowser, Pager, WordSearch};
use crate::exam::MockExamSession;
use crate::model::{ScreenId, VocabWord};
use crate::quiz::QuizEngine;
use crate::timer::{OneShotTimer, TimerState};
use super::router::INITIAL_WORD_ID;
use std::time::Duration;

impl KoreanPrepApp {
    /// Moves the router and mounts a fresh view when the screen changes.
    /// Staying on the same screen keeps its state.
    pub fn navigate(&mut self, screen: ScreenId, params: Option<NavParams>) {
        // a stored profile skips the welcome form
        if screen == ScreenId::Welcome && self.profile.is_complete() {
            log::info!("profile found, skipping welcome");
            self.navigate(ScreenId::Dashboard, params);
            return;
        }

        self.router.navigate(screen, params);
        if self.view.screen() != screen {
            self.view = self.mount(screen);
        }
    }

    pub fn go(&mut self, screen: ScreenId) {
        self.navigate(screen, None);
    }

    /// Navigation by kebab-case name. Unknown names land on the default screen.
    pub fn navigate_by_name(&mut self, name: &str, params: Option<NavParams>) {
        self.navigate(ScreenId::from_name(name), params);
    }

    fn mount(&mut self, screen: ScreenId) -> View {
        match screen {
            ScreenId::Splash => View::Splash(OneShotTimer::new(self.config.splash_delay)),
            ScreenId::Welcome => View::Welcome(WelcomeForm {
                name: self.profile.display_name.clone(),
                avatar: self.profile.avatar,
                error: None,
            }),
            ScreenId::Login => View::Login(Default::default()),
            ScreenId::Dashboard => View::Dashboard,
            ScreenId::Lessons => View::Lessons(LessonBrowser::default()),
            ScreenId::LessonDetail => View::LessonDetail(Pager::new(self.content.vocabulary.len())),
            ScreenId::Quiz => View::Quiz(QuizEngine::start(&self.content.quiz, &mut self.rng)),
            ScreenId::QuizResults => {
                View::QuizResults(self.router.last_result().unwrap_or_default())
            }
            ScreenId::MockExam => View::MockExam(MockExamSession::new(&self.content.mock_exam)),
            ScreenId::Vocabulary => View::Vocabulary(FlashcardDeck::new(self.content.flashcards.len())),
            ScreenId::Progress => View::Progress,
            ScreenId::Settings => View::Settings(ProfileEditor::default()),
            ScreenId::WordList => View::WordList(WordSearch::default()),
            ScreenId::WordDetail => View::WordDetail,
            ScreenId::HangulGrid => View::HangulGrid,
        }
    }

    /// Drives the splash timer. Returns how long until the next check is due.
    pub fn tick(&mut self, now: f64) -> Option<Duration> {
        let View::Splash(timer) = &mut self.view else {
            return None;
        };
        match timer.poll(now) {
            TimerState::Pending(left) => Some(left),
            TimerState::Fired => {
                self.go(ScreenId::Welcome);
                None
            }
            TimerState::Done => None,
        }
    }

    /// Word selected through the sticky id, first word when none was picked.
    pub fn current_word(&self) -> Option<&VocabWord> {
        let id = self.router.params().id.unwrap_or(INITIAL_WORD_ID);
        self.content.word(id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::app;
    use super::*;
    use crate::quiz::Answer;

    #[test]
    fn splash_fires_into_welcome() {
        let mut app = app();
        assert!(app.tick(0.0).is_some());
        assert!(app.tick(2.0).is_some());
        assert_eq!(app.router.current(), ScreenId::Splash);

        assert_eq!(app.tick(2.7), None);
        assert_eq!(app.router.current(), ScreenId::Welcome);
        assert!(matches!(app.view, View::Welcome(_)));
        // nothing left to tick
        assert_eq!(app.tick(10.0), None);
    }

    #[test]
    fn leaving_splash_cancels_timer() {
        let mut app = app();
        app.tick(0.0);
        app.go(ScreenId::Login);
        assert_eq!(app.tick(5.0), None);
        assert_eq!(app.router.current(), ScreenId::Login);
    }

    #[test]
    fn complete_profile_skips_welcome() {
        let profile = Profile::new("Ama", Some(3)).unwrap();
        let mut app = app().with_profile(profile);
        app.tick(0.0);
        app.tick(3.0);
        assert_eq!(app.router.current(), ScreenId::Dashboard);
        assert!(matches!(app.view, View::Dashboard));
    }

    #[test]
    fn word_detail_uses_sticky_id() {
        let mut app = app();
        assert_eq!(app.current_word().map(|w| w.id), Some(1));

        app.navigate(ScreenId::WordList, Some(NavParams::id(5)));
        app.navigate(ScreenId::WordDetail, None);
        assert_eq!(app.router.params().id, Some(5));
        assert_eq!(app.current_word().map(|w| w.id), Some(5));

        app.navigate(ScreenId::WordDetail, Some(NavParams::id(9999)));
        assert!(app.current_word().is_none());
    }

    #[test]
    fn same_screen_keeps_state() {
        let mut app = app();
        app.go(ScreenId::Quiz);
        let correct = match &app.view {
            View::Quiz(engine) => engine.current().map(|q| q.correct).unwrap(),
            _ => unreachable!(),
        };
        assert_eq!(app.answer_quiz(correct), Answer::Correct);

        app.go(ScreenId::Quiz);
        match &app.view {
            View::Quiz(engine) => assert_eq!(engine.score(), 1),
            other => panic!("expected quiz, got {:?}", other.screen()),
        }

        app.go(ScreenId::Dashboard);
        app.go(ScreenId::Quiz);
        match &app.view {
            View::Quiz(engine) => assert_eq!(engine.score(), 0),
            other => panic!("expected quiz, got {:?}", other.screen()),
        }
    }

    #[test]
    fn unknown_name_goes_to_splash() {
        let mut app = app();
        app.go(ScreenId::Dashboard);
        app.navigate_by_name("nowhere", None);
        assert_eq!(app.router.current(), ScreenId::Splash);
        assert!(matches!(app.view, View::Splash(_)));
        app.navigate_by_name("hangul-grid", None);
        assert_eq!(app.view.screen(), ScreenId::HangulGrid);
    }
}
