pub mod error;
pub mod flavors;
pub mod questions;
pub mod results;
pub mod scoring;
pub mod session;

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

pub use error::{QuizError, Result};
pub use scoring::ScoreTally;
pub use session::{QuizSession, SessionState};

/// Question bank plus the tie-break priority used to score it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    questions: Vec<Question>,
    priority: Vec<String>,
}

impl Quiz {
    /// Builds an engine over `questions`, rejecting banks that could never
    /// produce a winner.
    pub fn new(questions: Vec<Question>, priority: Vec<String>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::InvalidQuestionSet("no questions".to_string()));
        }

        let mut ids = BTreeSet::new();
        let mut scored_flavors = 0;
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if question.answers.is_empty() {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "question {} has no answers",
                    question.id
                )));
            }
            for answer in &question.answers {
                if let Some((flavor, _)) = answer.scores.iter().find(|(_, points)| **points == 0) {
                    return Err(QuizError::InvalidQuestionSet(format!(
                        "question {} answer '{}' gives zero points to '{}'",
                        question.id, answer.text, flavor
                    )));
                }
                scored_flavors += answer.scores.len();
            }
        }
        if scored_flavors == 0 {
            return Err(QuizError::InvalidQuestionSet(
                "no answer scores any flavor".to_string(),
            ));
        }

        Ok(Self {
            questions,
            priority,
        })
    }

    /// The standard 7-question personality quiz, ties broken by catalog order.
    pub fn standard() -> Self {
        Self {
            questions: questions::load_questions().to_vec(),
            priority: flavors::priority(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Records `answer_index` for `question_id`, replacing any earlier choice.
    /// The session is left untouched on error.
    pub fn record_answer(
        &self,
        session: &mut QuizSession,
        question_id: u32,
        answer_index: usize,
    ) -> Result<()> {
        let valid = self
            .question(question_id)
            .is_some_and(|q| answer_index < q.answers.len());
        if !valid {
            return Err(QuizError::InvalidSelection {
                question_id,
                answer_index,
            });
        }

        let previous = session.set(question_id, answer_index);
        debug!(
            "question {} answered with {} (previously {:?})",
            question_id, answer_index, previous
        );
        Ok(())
    }

    /// The answer recorded for `question`, if its index is still in range.
    /// Stored sessions can outlive the bank they were recorded against.
    fn recorded_answer<'q>(
        &self,
        session: &QuizSession,
        question: &'q Question,
    ) -> Option<&'q Answer> {
        session
            .answer_for(question.id)
            .and_then(|index| question.answers.get(index))
    }

    pub fn answered_count(&self, session: &QuizSession) -> usize {
        self.questions
            .iter()
            .filter(|q| self.recorded_answer(session, q).is_some())
            .count()
    }

    pub fn is_complete(&self, session: &QuizSession) -> bool {
        self.answered_count(session) == self.questions.len()
    }

    pub fn state(&self, session: &QuizSession) -> SessionState {
        match self.answered_count(session) {
            0 => SessionState::NotStarted,
            n if n == self.questions.len() => SessionState::Complete,
            _ => SessionState::InProgress,
        }
    }

    /// First question, in bank order, still waiting for an answer.
    pub fn next_unanswered(&self, session: &QuizSession) -> Option<&Question> {
        self.questions
            .iter()
            .find(|q| self.recorded_answer(session, q).is_none())
    }

    /// Sums the contributions of every recorded answer. Works on partial
    /// sessions too.
    pub fn tally(&self, session: &QuizSession) -> Result<ScoreTally> {
        let mut tally = ScoreTally::seeded(&self.questions, &self.priority);
        for question in &self.questions {
            if let Some(answer) = self.recorded_answer(session, question) {
                tally.add(answer)?;
            }
        }
        Ok(tally)
    }

    /// Winning flavor id of a complete session.
    pub fn compute_result(&self, session: &QuizSession) -> Result<String> {
        let answered = self.answered_count(session);
        if answered != self.questions.len() {
            return Err(QuizError::IncompleteQuiz {
                answered,
                total: self.questions.len(),
            });
        }

        let tally = self.tally(session)?;
        debug!("final tally: {:?}", tally);
        tally
            .leader()
            .map(str::to_string)
            .ok_or_else(|| QuizError::InvalidQuestionSet("no flavor to score".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub emoji: String,
    pub answers: Vec<Answer>,
}
impl Question {
    pub fn new(id: u32, text: &str, emoji: &str, answers: Vec<Answer>) -> Self {
        Self {
            id,
            text: text.to_string(),
            emoji: emoji.to_string(),
            answers,
        }
    }

    /// Position of the answer whose text is exactly `text`.
    pub fn answer_index(&self, text: &str) -> Option<usize> {
        self.answers.iter().position(|a| a.text == text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    /// Flavor id -> points. Flavors that gain nothing are absent.
    pub scores: BTreeMap<String, u32>,
}
impl Answer {
    pub fn new(text: &str, scores: &[(&str, u32)]) -> Self {
        Self {
            text: text.to_string(),
            scores: scores
                .iter()
                .map(|(flavor, points)| (flavor.to_string(), *points))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(quiz: &Quiz, choices: &[usize]) -> QuizSession {
        let mut session = QuizSession::new();
        for (question, choice) in quiz.questions().iter().zip(choices) {
            quiz.record_answer(&mut session, question.id, *choice).unwrap();
        }
        session
    }

    #[test]
    fn first_answers_everywhere_is_white_cheese() {
        let quiz = Quiz::standard();
        let session = answer_all(&quiz, &[0; 7]);

        let tally = quiz.tally(&session).unwrap();
        assert_eq!(tally.points("white-cheese"), 12);
        assert_eq!(tally.points("mozz-pure"), 7);
        assert_eq!(tally.points("cheddar-beddar"), 1);
        assert_eq!(tally.points("orange-spice"), 1);
        assert_eq!(tally.points("mega-spice"), 0);

        assert_eq!(quiz.compute_result(&session).unwrap(), "white-cheese");
    }

    #[test]
    fn three_way_tie_goes_to_orange_spice() {
        let quiz = Quiz::standard();
        let session = answer_all(&quiz, &[0, 0, 1, 1, 2, 2, 3]);

        let tally = quiz.tally(&session).unwrap();
        assert_eq!(tally.points("orange-spice"), 5);
        assert_eq!(tally.points("cheddar-beddar"), 5);
        assert_eq!(tally.points("mega-spice"), 5);
        assert_eq!(tally.points("white-cheese"), 3);
        assert_eq!(tally.points("mozz-pure"), 3);

        assert_eq!(quiz.compute_result(&session).unwrap(), "orange-spice");
    }

    #[test]
    fn six_of_seven_is_incomplete() {
        let quiz = Quiz::standard();
        let session = answer_all(&quiz, &[0; 6]);

        assert!(!quiz.is_complete(&session));
        assert_eq!(
            quiz.compute_result(&session),
            Err(QuizError::IncompleteQuiz {
                answered: 6,
                total: 7
            })
        );
    }

    #[test]
    fn one_past_the_end_is_invalid() {
        let quiz = Quiz::standard();
        let mut session = QuizSession::new();
        quiz.record_answer(&mut session, 1, 2).unwrap();

        let err = quiz.record_answer(&mut session, 1, 4).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidSelection {
                question_id: 1,
                answer_index: 4
            }
        );
        // failed call leaves the earlier answer alone
        assert_eq!(session.answer_for(1), Some(2));
    }

    #[test]
    fn unknown_question_is_invalid() {
        let quiz = Quiz::standard();
        let mut session = QuizSession::new();
        assert!(matches!(
            quiz.record_answer(&mut session, 8, 0),
            Err(QuizError::InvalidSelection { question_id: 8, .. })
        ));
        assert!(matches!(
            quiz.record_answer(&mut session, 0, 0),
            Err(QuizError::InvalidSelection { question_id: 0, .. })
        ));
        assert_eq!(quiz.state(&session), SessionState::NotStarted);
    }

    #[test]
    fn rerecording_replaces_the_contribution() {
        let quiz = Quiz::standard();
        let mut session = QuizSession::new();
        // Q1 answer 3: mega-spice 2, orange-spice 1
        quiz.record_answer(&mut session, 1, 3).unwrap();
        // Q1 answer 0: mozz-pure 2, white-cheese 1
        quiz.record_answer(&mut session, 1, 0).unwrap();

        let tally = quiz.tally(&session).unwrap();
        assert_eq!(tally.points("mega-spice"), 0);
        assert_eq!(tally.points("orange-spice"), 0);
        assert_eq!(tally.points("mozz-pure"), 2);
        assert_eq!(tally.points("white-cheese"), 1);
        assert_eq!(quiz.answered_count(&session), 1);
    }

    #[test]
    fn state_machine() {
        let quiz = Quiz::standard();
        let mut session = QuizSession::new();
        assert_eq!(quiz.state(&session), SessionState::NotStarted);
        assert_eq!(quiz.next_unanswered(&session).map(|q| q.id), Some(1));

        quiz.record_answer(&mut session, 1, 0).unwrap();
        assert_eq!(quiz.state(&session), SessionState::InProgress);
        assert_eq!(quiz.next_unanswered(&session).map(|q| q.id), Some(2));

        for id in 2..=7 {
            quiz.record_answer(&mut session, id, 1).unwrap();
        }
        assert_eq!(quiz.state(&session), SessionState::Complete);
        assert!(quiz.is_complete(&session));
        assert!(quiz.next_unanswered(&session).is_none());
    }

    #[test]
    fn custom_bank_tie_uses_given_priority() {
        let questions = vec![
            Question::new(1, "One", "1️⃣", vec![Answer::new("x", &[("gouda", 1)])]),
            Question::new(2, "Two", "2️⃣", vec![Answer::new("y", &[("brie", 1)])]),
        ];
        let quiz = Quiz::new(questions.clone(), vec!["gouda".into(), "brie".into()]).unwrap();
        assert_eq!(quiz.compute_result(&answer_all(&quiz, &[0, 0])).unwrap(), "gouda");

        let quiz = Quiz::new(questions, vec!["brie".into(), "gouda".into()]).unwrap();
        assert_eq!(quiz.compute_result(&answer_all(&quiz, &[0, 0])).unwrap(), "brie");
    }

    #[test]
    fn unlisted_flavors_tie_break_alphabetically() {
        let questions = vec![Question::new(
            1,
            "One",
            "1️⃣",
            vec![Answer::new("x", &[("gouda", 1), ("brie", 1)])],
        )];
        let quiz = Quiz::new(questions, vec![]).unwrap();
        assert_eq!(quiz.compute_result(&answer_all(&quiz, &[0])).unwrap(), "brie");
    }

    #[test]
    fn points_are_not_capped_at_two() {
        let questions = vec![Question::new(
            1,
            "Big",
            "💯",
            vec![Answer::new("lots", &[("mega-spice", 40), ("white-cheese", 39)])],
        )];
        let quiz = Quiz::new(questions, flavors::priority()).unwrap();
        let session = answer_all(&quiz, &[0]);
        assert_eq!(quiz.tally(&session).unwrap().points("mega-spice"), 40);
        assert_eq!(quiz.compute_result(&session).unwrap(), "mega-spice");
    }

    #[test]
    fn overflowing_totals_fail_the_result() {
        let questions = vec![
            Question::new(1, "a", "", vec![Answer::new("x", &[("brie", u32::MAX)])]),
            Question::new(2, "b", "", vec![Answer::new("y", &[("brie", 1)])]),
        ];
        let quiz = Quiz::new(questions, vec![]).unwrap();
        let session = answer_all(&quiz, &[0, 0]);
        assert_eq!(
            quiz.compute_result(&session),
            Err(QuizError::ScoreOverflow("brie".to_string()))
        );
    }

    #[test]
    fn rejects_broken_banks() {
        let empty = Quiz::new(vec![], vec![]);
        assert!(matches!(empty, Err(QuizError::InvalidQuestionSet(_))));

        let duplicate = Quiz::new(
            vec![
                Question::new(1, "a", "", vec![Answer::new("x", &[("brie", 1)])]),
                Question::new(1, "b", "", vec![Answer::new("y", &[("brie", 1)])]),
            ],
            vec![],
        );
        assert!(matches!(duplicate, Err(QuizError::InvalidQuestionSet(_))));

        let no_answers = Quiz::new(vec![Question::new(1, "a", "", vec![])], vec![]);
        assert!(matches!(no_answers, Err(QuizError::InvalidQuestionSet(_))));

        let zero_points = Quiz::new(
            vec![Question::new(1, "a", "", vec![Answer::new("x", &[("brie", 0)])])],
            vec![],
        );
        assert!(matches!(zero_points, Err(QuizError::InvalidQuestionSet(_))));

        let unscored = Quiz::new(
            vec![Question::new(1, "a", "", vec![Answer::new("x", &[])])],
            vec![],
        );
        assert!(matches!(unscored, Err(QuizError::InvalidQuestionSet(_))));
    }

    #[test]
    fn standard_bank_passes_validation() {
        let quiz = Quiz::standard();
        let rebuilt = Quiz::new(quiz.questions().to_vec(), quiz.priority().to_vec()).unwrap();
        assert_eq!(rebuilt, quiz);
    }

    #[test]
    fn answer_index_by_text() {
        let question = &questions::load_questions()[6];
        assert_eq!(question.answer_index("Custom painted by a friend"), Some(2));
        assert_eq!(question.answer_index("Flip flops"), None);
    }
}
