// src/exam.rs

use crate::audio::{AudioBackend, PlaybackSlot};
use crate::model::{ExamQuestion, ExamSection, MockExam};
use crate::quiz::{Answer, QuizEngine, QuizOutcome, Step};

/// One mock exam sitting: the active section, its in-order run and the audio clip.
#[derive(Debug)]
pub struct MockExamSession {
    section: ExamSection,
    engine: QuizEngine<ExamQuestion>,
    finished: Option<QuizOutcome>,
    playback: PlaybackSlot,
}

impl MockExamSession {
    pub fn new(exam: &MockExam) -> Self {
        Self::for_section(exam, ExamSection::Listening)
    }

    fn for_section(exam: &MockExam, section: ExamSection) -> Self {
        Self {
            section,
            engine: QuizEngine::in_order(exam.section(section).to_vec()),
            finished: None,
            playback: PlaybackSlot::default(),
        }
    }

    pub fn section(&self) -> ExamSection {
        self.section
    }

    pub fn engine(&self) -> &QuizEngine<ExamQuestion> {
        &self.engine
    }

    pub fn finished(&self) -> Option<QuizOutcome> {
        self.finished
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.playback.current_asset()
    }

    /// Switching tabs throws away the current run, even mid-question.
    pub fn switch_section(&mut self, exam: &MockExam, section: ExamSection) {
        if section == self.section && self.finished.is_none() {
            return;
        }
        self.playback.stop();
        self.section = section;
        self.engine = QuizEngine::in_order(exam.section(section).to_vec());
        self.finished = None;
    }

    pub fn answer(&mut self, index: usize) -> Answer {
        if self.finished.is_some() {
            return Answer::Ignored;
        }
        self.engine.answer(index)
    }

    /// Returns the outcome once, on the step that finishes the section.
    pub fn advance(&mut self) -> Option<QuizOutcome> {
        if self.finished.is_some() {
            return None;
        }
        match self.engine.advance() {
            Step::Finished(outcome) => {
                self.playback.stop();
                self.finished = Some(outcome);
                log::info!(
                    "mock exam {:?} finished: {}/{}",
                    self.section,
                    outcome.score,
                    outcome.total
                );
                Some(outcome)
            }
            Step::Next { .. } => {
                self.playback.stop();
                None
            }
            Step::Unanswered => None,
        }
    }

    pub fn play_current(&mut self, backend: &dyn AudioBackend) {
        let Some(asset) = self.engine.current().and_then(|q| q.audio.clone()) else {
            return;
        };
        self.playback.play(backend, &asset);
    }

    /// Back to the first listening question.
    pub fn restart(&mut self, exam: &MockExam) {
        self.playback.stop();
        *self = Self::for_section(exam, ExamSection::Listening);
    }
}
