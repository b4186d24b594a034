// src/data.rs

use crate::model::{Flashcard, HangulSection, Lesson, MockExam, QuizQuestion, VocabWord};
use crate::quiz::Gradable;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;

/// Every multiple choice question in the app has this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not parse {file}: {source}")]
    Parse {
        file: &'static str,
        source: serde_yaml::Error,
    },
    #[error("{file}: question {index} has {count} options, expected {OPTION_COUNT}")]
    OptionCount {
        file: &'static str,
        index: usize,
        count: usize,
    },
    #[error("{file}: question {index} marks option {correct} as correct")]
    CorrectOutOfRange {
        file: &'static str,
        index: usize,
        correct: usize,
    },
    #[error("vocabulary.yaml: word id {0} is used more than once")]
    DuplicateWordId(u32),
}

/// Static study material bundled with the binary.
#[derive(Debug, Clone)]
pub struct Content {
    pub quiz: Vec<QuizQuestion>,
    pub vocabulary: Vec<VocabWord>,
    pub flashcards: Vec<Flashcard>,
    pub lessons: Vec<Lesson>,
    pub hangul: Vec<HangulSection>,
    pub mock_exam: MockExam,
}

impl Content {
    /// Parses and checks the embedded YAML files.
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            quiz: parse("quiz.yaml", include_str!("data/quiz.yaml"))?,
            vocabulary: parse("vocabulary.yaml", include_str!("data/vocabulary.yaml"))?,
            flashcards: parse("flashcards.yaml", include_str!("data/flashcards.yaml"))?,
            lessons: parse("lessons.yaml", include_str!("data/lessons.yaml"))?,
            hangul: parse("hangul.yaml", include_str!("data/hangul.yaml"))?,
            mock_exam: parse("mock_exam.yaml", include_str!("data/mock_exam.yaml"))?,
        };
        content.validate()?;

        log::info!(
            "content loaded: {} quiz questions, {} words, {} flashcards, {} lessons",
            content.quiz.len(),
            content.vocabulary.len(),
            content.flashcards.len(),
            content.lessons.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        check_questions("quiz.yaml", &self.quiz)?;
        check_questions("mock_exam.yaml", &self.mock_exam.listening)?;
        check_questions("mock_exam.yaml", &self.mock_exam.reading)?;

        let mut seen = HashSet::new();
        for word in &self.vocabulary {
            if !seen.insert(word.id) {
                return Err(ContentError::DuplicateWordId(word.id));
            }
        }
        Ok(())
    }

    pub fn word(&self, id: u32) -> Option<&VocabWord> {
        self.vocabulary.iter().find(|w| w.id == id)
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, text: &str) -> Result<T, ContentError> {
    serde_yaml::from_str(text).map_err(|source| ContentError::Parse { file, source })
}

fn check_questions<Q: Gradable>(file: &'static str, questions: &[Q]) -> Result<(), ContentError> {
    for (index, q) in questions.iter().enumerate() {
        if q.option_count() != OPTION_COUNT {
            return Err(ContentError::OptionCount {
                file,
                index,
                count: q.option_count(),
            });
        }
        if q.correct_index() >= q.option_count() {
            return Err(ContentError::CorrectOutOfRange {
                file,
                index,
                correct: q.correct_index(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LessonLevel;

    #[test]
    fn embedded_content_loads() {
        let content = Content::load().expect("embedded yaml is valid");
        assert_eq!(content.quiz.len(), 15);
        assert_eq!(content.vocabulary.len(), 50);
        assert_eq!(content.mock_exam.listening.len(), 5);
        assert_eq!(content.mock_exam.reading.len(), 10);
        assert_eq!(content.hangul.len(), 3);
        for level in LessonLevel::ALL {
            assert!(content.lessons.iter().any(|l| l.level == level));
        }
    }

    #[test]
    fn listening_questions_carry_audio() {
        let content = Content::load().expect("embedded yaml is valid");
        assert!(content.mock_exam.listening.iter().all(|q| q.audio.is_some()));
        assert!(content.mock_exam.reading.iter().all(|q| q.audio.is_none()));
    }

    #[test]
    fn word_lookup_by_id() {
        let content = Content::load().expect("embedded yaml is valid");
        assert_eq!(content.word(1).map(|w| w.kor.as_str()), Some("안녕하세요"));
        assert!(content.word(999).is_none());
    }

    #[test]
    fn rejects_three_option_question() {
        let questions: Vec<QuizQuestion> = parse(
            "quiz.yaml",
            r#"
- prompt_en: "a"
  prompt_si: "b"
  options: ["1", "2", "3"]
  correct: 0
"#,
        )
        .expect("valid yaml");
        let err = check_questions("quiz.yaml", &questions).unwrap_err();
        assert!(matches!(err, ContentError::OptionCount { count: 3, .. }));
    }

    #[test]
    fn rejects_correct_index_past_options() {
        let questions: Vec<QuizQuestion> = parse(
            "quiz.yaml",
            r#"
- prompt_en: "a"
  prompt_si: "b"
  options: ["1", "2", "3", "4"]
  correct: 4
"#,
        )
        .expect("valid yaml");
        assert!(matches!(
            check_questions("quiz.yaml", &questions),
            Err(ContentError::CorrectOutOfRange { correct: 4, .. })
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = parse::<Vec<QuizQuestion>>("quiz.yaml", "- prompt_en: [").unwrap_err();
        assert!(err.to_string().starts_with("could not parse quiz.yaml"));
    }
}
