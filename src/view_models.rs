// src/view_models.rs

use crate::model::ScreenId;

/// Entry of the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub screen: ScreenId,
    pub icon: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn caption(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { screen: ScreenId::Dashboard, icon: "🏠", label: "Home" },
    NavItem { screen: ScreenId::HangulGrid, icon: "🈷", label: "Hangul Chart" },
    NavItem { screen: ScreenId::Lessons, icon: "📚", label: "Lessons" },
    NavItem { screen: ScreenId::LessonDetail, icon: "📖", label: "Detail" },
    NavItem { screen: ScreenId::Quiz, icon: "❓", label: "Quiz" },
    NavItem { screen: ScreenId::MockExam, icon: "📝", label: "Exam" },
    NavItem { screen: ScreenId::Vocabulary, icon: "💭", label: "Cards" },
    NavItem { screen: ScreenId::Progress, icon: "📊", label: "Progress" },
    NavItem { screen: ScreenId::Settings, icon: "⚙", label: "Settings" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub lessons_completed: usize,
    pub lessons_total: usize,
    pub quizzes_taken: usize,
    /// Mean of the rounded percentages, `None` before the first quiz.
    pub quiz_average: Option<u32>,
    pub exams_finished: usize,
}

impl ProgressSummary {
    /// Share of lessons completed, in `0.0..=1.0`.
    pub fn lesson_fraction(&self) -> f32 {
        if self.lessons_total == 0 {
            return 0.0;
        }
        self.lessons_completed as f32 / self.lessons_total as f32
    }

    pub fn quiz_label(&self) -> String {
        match self.quiz_average {
            Some(avg) => format!("{} taken, average {}%", self.quizzes_taken, avg),
            None => "No quizzes yet".to_owned(),
        }
    }
}
