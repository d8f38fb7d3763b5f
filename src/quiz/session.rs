use std::collections::BTreeMap;

/// One user's answers, keyed by question id.
///
/// The session only holds indices; validation and scoring live on
/// [`Quiz`](crate::quiz::Quiz), so a session can be persisted between chat
/// messages without carrying the question bank around.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizSession {
    answers: BTreeMap<u32, usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_for(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    // Unchecked; callers go through `Quiz::record_answer`.
    pub(crate) fn set(&mut self, question_id: u32, answer_index: usize) -> Option<usize> {
        self.answers.insert(question_id, answer_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Complete,
}
