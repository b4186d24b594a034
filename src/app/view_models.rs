use super::*;

impl KoreanPrepApp {
    pub fn progress_summary(&self) -> ProgressSummary {
        let lessons = &self.content.lessons;
        let quizzes = self.router.quiz_history();
        let quiz_average = if quizzes.is_empty() {
            None
        } else {
            let sum: u32 = quizzes.iter().map(|o| o.percent()).sum();
            Some((sum as f64 / quizzes.len() as f64).round() as u32)
        };

        ProgressSummary {
            lessons_completed: lessons.iter().filter(|l| l.completed).count(),
            lessons_total: lessons.len(),
            quizzes_taken: quizzes.len(),
            quiz_average,
            exams_finished: self.router.exam_history().len(),
        }
    }

    /// Nav bar entries, with the one for the current screen flagged.
    pub fn nav_items(&self) -> Vec<(NavItem, bool)> {
        let current = self.router.current();
        crate::view_models::NAV_ITEMS
            .iter()
            .map(|item| (*item, item.screen == current))
            .collect()
    }
}
