use crate::auth::LoginForm;
use crate::browse::{FlashcardDeck, LessonBrowser, Pager, WordSearch};
use crate::exam::MockExamSession;
use crate::model::{QuizQuestion, ScreenId};
use crate::quiz::{QuizEngine, QuizOutcome};
use crate::storage::{Profile, ProfileError};
use crate::timer::OneShotTimer;

/// First-run form: name plus one of the emoji avatars.
#[derive(Clone, Debug, Default)]
pub struct WelcomeForm {
    pub name: String,
    pub avatar: Option<usize>,
    pub error: Option<ProfileError>,
}

impl WelcomeForm {
    pub fn validate(&mut self) -> Option<Profile> {
        match Profile::new(&self.name, self.avatar) {
            Ok(profile) => {
                self.error = None;
                Some(profile)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

/// Settings profile card. `draft` is set while editing.
#[derive(Clone, Debug, Default)]
pub struct ProfileEditor {
    pub draft: Option<Profile>,
}

impl ProfileEditor {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// The mounted screen together with its transient state.
///
/// Replacing the value tears the old screen down: the splash timer is cancelled
/// and exam audio is released by their own drops.
#[derive(Debug)]
pub enum View {
    Splash(OneShotTimer),
    Welcome(WelcomeForm),
    Login(LoginForm),
    Dashboard,
    Lessons(LessonBrowser),
    LessonDetail(Pager),
    Quiz(QuizEngine<QuizQuestion>),
    QuizResults(QuizOutcome),
    MockExam(MockExamSession),
    Vocabulary(FlashcardDeck),
    Progress,
    Settings(ProfileEditor),
    WordList(WordSearch),
    WordDetail,
    HangulGrid,
}

impl View {
    pub fn screen(&self) -> ScreenId {
        match self {
            View::Splash(_) => ScreenId::Splash,
            View::Welcome(_) => ScreenId::Welcome,
            View::Login(_) => ScreenId::Login,
            View::Dashboard => ScreenId::Dashboard,
            View::Lessons(_) => ScreenId::Lessons,
            View::LessonDetail(_) => ScreenId::LessonDetail,
            View::Quiz(_) => ScreenId::Quiz,
            View::QuizResults(_) => ScreenId::QuizResults,
            View::MockExam(_) => ScreenId::MockExam,
            View::Vocabulary(_) => ScreenId::Vocabulary,
            View::Progress => ScreenId::Progress,
            View::Settings(_) => ScreenId::Settings,
            View::WordList(_) => ScreenId::WordList,
            View::WordDetail => ScreenId::WordDetail,
            View::HangulGrid => ScreenId::HangulGrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_form_reports_first_problem() {
        let mut form = WelcomeForm::default();
        assert!(form.validate().is_none());
        assert_eq!(form.error, Some(ProfileError::EmptyName));

        form.name = "Ama".into();
        assert!(form.validate().is_none());
        assert_eq!(form.error, Some(ProfileError::NoAvatar));

        form.avatar = Some(1);
        let profile = form.validate().unwrap();
        assert_eq!(profile.display_name, "Ama");
        assert_eq!(form.error, None);
    }
}
