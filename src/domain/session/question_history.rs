//! Follow-up question history for one symptom-check session.

use serde::{Deserialize, Serialize};

/// Maximum number of follow-up questions asked per session.
pub const MAX_FOLLOWUP_QUESTIONS: usize = 5;

/// Questions already put to the user in this session, plus a terminal flag.
///
/// The history is the only per-session state the service keeps. It exists to
/// stop the follow-up interview after [`MAX_FOLLOWUP_QUESTIONS`] questions and
/// to feed previously asked questions back into the next prompt so the model
/// does not repeat itself.
///
/// Exhaustion is absorbing: once the cap is reached or the interview is
/// terminated early, every later request reports the interview as complete
/// until [`QuestionHistory::reset`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionHistory {
    questions: Vec<String>,
    terminated: bool,
}

impl QuestionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a question that was put to the user.
    ///
    /// Blank questions are not recorded; they carry nothing worth feeding
    /// back into later prompts.
    pub fn record(&mut self, question: impl Into<String>) {
        let question = question.into();
        if !question.trim().is_empty() {
            self.questions.push(question);
        }
    }

    /// Ends the interview early, before the question cap is reached.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    /// Whether the interview is over, either by cap or early termination.
    pub fn is_exhausted(&self) -> bool {
        self.terminated || self.questions.len() >= MAX_FOLLOWUP_QUESTIONS
    }

    /// Clears all recorded questions and the terminal flag.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.terminated = false;
    }

    /// The questions asked so far, oldest first.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Number of questions asked so far.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether no questions have been asked yet.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_not_exhausted() {
        let history = QuestionHistory::new();
        assert!(!history.is_exhausted());
        assert!(history.is_empty());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = QuestionHistory::new();
        history.record("How long have you had the fever?");
        history.record("Is the pain constant?");

        assert_eq!(history.len(), 2);
        assert_eq!(history.questions()[0], "How long have you had the fever?");
        assert_eq!(history.questions()[1], "Is the pain constant?");
    }

    #[test]
    fn record_ignores_blank_questions() {
        let mut history = QuestionHistory::new();
        history.record("");
        history.record("   ");

        assert!(history.is_empty());
    }

    #[test]
    fn exhausts_at_question_cap() {
        let mut history = QuestionHistory::new();
        for i in 0..MAX_FOLLOWUP_QUESTIONS {
            assert!(!history.is_exhausted(), "exhausted after {i} questions");
            history.record(format!("question {i}"));
        }

        assert!(history.is_exhausted());
    }

    #[test]
    fn terminate_is_absorbing() {
        let mut history = QuestionHistory::new();
        history.record("first question");
        history.terminate();

        assert!(history.is_exhausted());

        // Recording more questions does not reopen the interview.
        history.record("late question");
        assert!(history.is_exhausted());
    }

    #[test]
    fn reset_reopens_the_interview() {
        let mut history = QuestionHistory::new();
        for i in 0..MAX_FOLLOWUP_QUESTIONS {
            history.record(format!("question {i}"));
        }
        history.terminate();
        assert!(history.is_exhausted());

        history.reset();
        assert!(!history.is_exhausted());
        assert!(history.is_empty());
    }
}
