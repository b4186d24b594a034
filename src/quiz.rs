// src/quiz.rs

use rand::Rng;
use rand::seq::SliceRandom;

/// Anything that can be asked as a multiple choice question.
pub trait Gradable {
    fn correct_index(&self) -> usize;
    fn option_count(&self) -> usize;
}

/// Final result of a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl QuizOutcome {
    /// Rounded percentage, 0 when there were no questions.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.score as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Incorrect,
    /// Already answered or option out of range.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next { position: usize },
    Finished(QuizOutcome),
    /// `advance` before `answer`: nothing happens.
    Unanswered,
}

/// How an option button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Open,
    Correct,
    Wrong,
    Neutral,
}

/// One quiz run: fixed question order, current position, selected option and score.
#[derive(Clone, Debug)]
pub struct QuizEngine<Q> {
    questions: Vec<Q>,
    position: usize,
    selected: Option<usize>,
    score: usize,
}

impl<Q: Gradable> QuizEngine<Q> {
    /// Starts a run over a uniformly shuffled copy of `questions`.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates walk from the last index down,
    /// swapping each element with a uniformly chosen one in `0..=i`.
    pub fn start<R: Rng + ?Sized>(questions: &[Q], rng: &mut R) -> Self
    where
        Q: Clone,
    {
        let mut order = questions.to_vec();
        order.shuffle(rng);
        Self::in_order(order)
    }

    /// Starts a run in the given order.
    pub fn in_order(questions: Vec<Q>) -> Self {
        Self {
            questions,
            position: 0,
            selected: None,
            score: 0,
        }
    }

    pub fn questions(&self) -> &[Q] {
        &self.questions
    }

    pub fn current(&self) -> Option<&Q> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    /// Fraction of the run reached, counting the current question.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.position + 1) as f32 / self.questions.len() as f32
    }

    pub fn answer(&mut self, index: usize) -> Answer {
        if self.selected.is_some() {
            return Answer::Ignored;
        }
        let Some(question) = self.questions.get(self.position) else {
            return Answer::Ignored;
        };
        if index >= question.option_count() {
            return Answer::Ignored;
        }

        self.selected = Some(index);
        if index == question.correct_index() {
            self.score += 1;
            Answer::Correct
        } else {
            Answer::Incorrect
        }
    }

    pub fn advance(&mut self) -> Step {
        if self.selected.is_none() {
            return Step::Unanswered;
        }
        if self.is_last() {
            return Step::Finished(self.outcome());
        }
        self.position += 1;
        self.selected = None;
        Step::Next {
            position: self.position,
        }
    }

    /// Score so far against the full question count.
    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            total: self.questions.len(),
        }
    }

    pub fn mark(&self, option: usize) -> OptionMark {
        let Some(selected) = self.selected else {
            return OptionMark::Open;
        };
        match self.current() {
            Some(q) if option == q.correct_index() => OptionMark::Correct,
            Some(_) if option == selected => OptionMark::Wrong,
            _ => OptionMark::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Q {
        id: usize,
        correct: usize,
    }

    impl Gradable for Q {
        fn correct_index(&self) -> usize {
            self.correct
        }
        fn option_count(&self) -> usize {
            4
        }
    }

    fn questions(n: usize) -> Vec<Q> {
        (0..n).map(|id| Q { id, correct: id % 4 }).collect()
    }

    #[test]
    fn start_answer_advance_scenario() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quiz = QuizEngine::start(&questions(15), &mut rng);
        assert_eq!(quiz.total(), 15);

        let correct = quiz.current().map(|q| q.correct).unwrap();
        assert_eq!(quiz.answer(correct), Answer::Correct);
        assert_eq!(quiz.score(), 1);

        assert_eq!(quiz.advance(), Step::Next { position: 1 });
        assert_eq!(quiz.position(), 1);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn second_answer_is_ignored() {
        let mut quiz = QuizEngine::in_order(questions(3));
        assert_eq!(quiz.answer(0), Answer::Correct);
        assert_eq!(quiz.answer(0), Answer::Ignored);
        assert_eq!(quiz.answer(1), Answer::Ignored);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.selected(), Some(0));
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut quiz = QuizEngine::in_order(questions(2));
        assert_eq!(quiz.answer(4), Answer::Ignored);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.advance(), Step::Unanswered);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut quiz = QuizEngine::in_order(questions(2));
        assert_eq!(quiz.advance(), Step::Unanswered);
        assert_eq!(quiz.position(), 0);
    }

    #[test]
    fn last_question_reports_full_total() {
        let mut quiz = QuizEngine::in_order(questions(3));
        quiz.answer(0); // correct
        quiz.advance();
        quiz.answer(0); // wrong, correct is 1
        quiz.advance();
        quiz.answer(2); // correct
        assert_eq!(
            quiz.advance(),
            Step::Finished(QuizOutcome { score: 2, total: 3 })
        );
        // finishing does not move past the end
        assert_eq!(quiz.position(), 2);
    }

    #[test]
    fn empty_run_cannot_be_answered() {
        let mut quiz: QuizEngine<Q> = QuizEngine::in_order(Vec::new());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.answer(0), Answer::Ignored);
        assert_eq!(quiz.advance(), Step::Unanswered);
        assert_eq!(quiz.progress(), 0.0);
    }

    #[test]
    fn marks_follow_selection() {
        let mut quiz = QuizEngine::in_order(questions(2));
        assert_eq!(quiz.mark(0), OptionMark::Open);
        quiz.answer(3);
        assert_eq!(quiz.mark(0), OptionMark::Correct);
        assert_eq!(quiz.mark(3), OptionMark::Wrong);
        assert_eq!(quiz.mark(1), OptionMark::Neutral);
    }

    #[test]
    fn fresh_starts_are_independent() {
        let mut rng = StdRng::seed_from_u64(99);
        let input = questions(15);
        let first = QuizEngine::start(&input, &mut rng);
        let second = QuizEngine::start(&input, &mut rng);
        // 15! orders, two equal draws from one seeded stream would be a broken shuffle
        assert_ne!(first.questions(), second.questions());
    }

    #[test]
    fn percent_rounds_and_handles_zero() {
        assert_eq!(QuizOutcome { score: 0, total: 0 }.percent(), 0);
        assert_eq!(QuizOutcome { score: 2, total: 3 }.percent(), 67);
        assert_eq!(QuizOutcome { score: 15, total: 15 }.percent(), 100);
    }

    proptest! {
        #[test]
        fn start_is_a_permutation(n in 0usize..40, seed in any::<u64>()) {
            let input = questions(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let quiz = QuizEngine::start(&input, &mut rng);

            let mut shuffled = quiz.questions().to_vec();
            shuffled.sort();
            prop_assert_eq!(shuffled, input);
        }

        #[test]
        fn score_stays_in_bounds(
            picks in proptest::collection::vec(0usize..4, 1..20),
            seed in any::<u64>(),
        ) {
            let input = questions(picks.len());
            let mut rng = StdRng::seed_from_u64(seed);
            let mut quiz = QuizEngine::start(&input, &mut rng);

            let mut finished = None;
            for pick in picks {
                quiz.answer(pick);
                prop_assert!(quiz.score() <= quiz.position() + 1);
                match quiz.advance() {
                    Step::Finished(outcome) => finished = Some(outcome),
                    Step::Next { .. } => prop_assert_eq!(quiz.selected(), None),
                    Step::Unanswered => prop_assert!(false, "answered question reported unanswered"),
                }
            }

            let outcome = finished.expect("last advance finishes the run");
            prop_assert_eq!(outcome.total, input.len());
            prop_assert!(outcome.score <= outcome.total);
        }
    }
}
