use crate::quiz::Gradable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every screen the app can show. Closed set: navigation cannot name anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenId {
    #[default]
    Splash,
    Welcome,
    Login,
    Dashboard,
    Lessons,
    LessonDetail,
    Quiz,
    QuizResults,
    MockExam,
    Vocabulary,
    Progress,
    Settings,
    WordList,
    WordDetail,
    HangulGrid,
}

impl ScreenId {
    pub const ALL: [ScreenId; 15] = [
        ScreenId::Splash,
        ScreenId::Welcome,
        ScreenId::Login,
        ScreenId::Dashboard,
        ScreenId::Lessons,
        ScreenId::LessonDetail,
        ScreenId::Quiz,
        ScreenId::QuizResults,
        ScreenId::MockExam,
        ScreenId::Vocabulary,
        ScreenId::Progress,
        ScreenId::Settings,
        ScreenId::WordList,
        ScreenId::WordDetail,
        ScreenId::HangulGrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Welcome => "welcome",
            ScreenId::Login => "login",
            ScreenId::Dashboard => "dashboard",
            ScreenId::Lessons => "lessons",
            ScreenId::LessonDetail => "lesson-detail",
            ScreenId::Quiz => "quiz",
            ScreenId::QuizResults => "quiz-results",
            ScreenId::MockExam => "mock-exam",
            ScreenId::Vocabulary => "vocabulary",
            ScreenId::Progress => "progress",
            ScreenId::Settings => "settings",
            ScreenId::WordList => "word-list",
            ScreenId::WordDetail => "word-detail",
            ScreenId::HangulGrid => "hangul-grid",
        }
    }

    /// Total lookup: unknown names land on the default screen.
    pub fn from_name(name: &str) -> ScreenId {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .unwrap_or_else(|| {
                log::debug!("unknown screen `{name}`, using default");
                ScreenId::default()
            })
    }

    /// Splash and login are full-screen, everything else gets the top bar.
    pub fn shows_nav_bar(self) -> bool {
        !matches!(self, ScreenId::Splash | ScreenId::Login)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt_en: String,
    pub prompt_si: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl Gradable for QuizQuestion {
    fn correct_index(&self) -> usize {
        self.correct
    }
    fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabWord {
    pub id: u32,
    pub kor: String,
    pub eng: String,
    pub sinhala: String,
    #[serde(default)]
    pub grammar: Option<String>,
    #[serde(default)]
    pub grammar_si: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub tips_si: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub korean: String,
    pub english: String,
    pub sinhala: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LessonLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl LessonLevel {
    pub const ALL: [LessonLevel; 3] = [
        LessonLevel::Beginner,
        LessonLevel::Intermediate,
        LessonLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LessonLevel::Beginner => "Beginner",
            LessonLevel::Intermediate => "Intermediate",
            LessonLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LessonLine {
    pub korean: String,
    pub english: String,
    pub sinhala: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub level: LessonLevel,
    pub content: Vec<LessonLine>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HangulLetter {
    pub hangul: String,
    pub roman: String,
    pub sinhala: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HangulSection {
    pub title: String,
    pub letters: Vec<HangulLetter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExamQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
    // Asset names only, the files are not bundled
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Gradable for ExamQuestion {
    fn correct_index(&self) -> usize {
        self.correct
    }
    fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MockExam {
    pub listening: Vec<ExamQuestion>,
    pub reading: Vec<ExamQuestion>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExamSection {
    #[default]
    Listening,
    Reading,
}

impl MockExam {
    pub fn section(&self, section: ExamSection) -> &[ExamQuestion] {
        match section {
            ExamSection::Listening => &self.listening,
            ExamSection::Reading => &self.reading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_names_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_name(screen.as_str()), screen);
        }
    }

    #[test]
    fn unknown_screen_falls_back_to_splash() {
        assert_eq!(ScreenId::from_name("profile"), ScreenId::Splash);
        assert_eq!(ScreenId::from_name(""), ScreenId::Splash);
    }

    #[test]
    fn nav_bar_hidden_on_splash_and_login() {
        let hidden: Vec<_> = ScreenId::ALL
            .into_iter()
            .filter(|s| !s.shows_nav_bar())
            .collect();
        assert_eq!(hidden, vec![ScreenId::Splash, ScreenId::Login]);
    }
}
