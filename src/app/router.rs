use crate::model::ScreenId;
use crate::quiz::QuizOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavParams {
    pub id: Option<u32>,
}

impl NavParams {
    pub fn id(id: u32) -> Self {
        Self { id: Some(id) }
    }
}

/// Where the app is, plus the values screens hand to each other.
#[derive(Clone, Debug)]
pub struct ScreenRouter {
    current: ScreenId,
    params: NavParams,
    last_result: Option<QuizOutcome>,
    quiz_history: Vec<QuizOutcome>,
    exam_history: Vec<QuizOutcome>,
}

/// Word id used before anything was selected.
pub const INITIAL_WORD_ID: u32 = 1;

impl Default for ScreenRouter {
    fn default() -> Self {
        Self {
            current: ScreenId::default(),
            params: NavParams {
                id: Some(INITIAL_WORD_ID),
            },
            last_result: None,
            quiz_history: Vec::new(),
            exam_history: Vec::new(),
        }
    }
}

impl ScreenRouter {
    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn params(&self) -> NavParams {
        self.params
    }

    /// The id only changes when the caller passes one.
    pub fn navigate(&mut self, screen: ScreenId, params: Option<NavParams>) {
        if let Some(id) = params.and_then(|p| p.id) {
            self.params.id = Some(id);
        }
        if self.current != screen {
            log::debug!("screen {} -> {}", self.current, screen);
        }
        self.current = screen;
    }

    pub fn last_result(&self) -> Option<QuizOutcome> {
        self.last_result
    }

    pub fn record_quiz(&mut self, outcome: QuizOutcome) {
        self.last_result = Some(outcome);
        self.quiz_history.push(outcome);
    }

    pub fn record_exam(&mut self, outcome: QuizOutcome) {
        self.exam_history.push(outcome);
    }

    pub fn quiz_history(&self) -> &[QuizOutcome] {
        &self.quiz_history
    }

    pub fn exam_history(&self) -> &[QuizOutcome] {
        &self.exam_history
    }
}
