//! Core data model types for quizgame.
//!
//! A [`QuestionRecord`] is an immutable multiple-choice question and a
//! [`QuestionBank`] is the ordered, capacity-bounded collection of them that
//! gets loaded, played and saved as a whole.

use serde::Serialize;

use crate::error::QuizError;

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Default soft capacity of a question bank.
pub const DEFAULT_CAPACITY: usize = 100;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl QuestionRecord {
    /// Build a record, checking that `correct_index` points at one of the
    /// four options.
    pub fn new(
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        if correct_index >= OPTION_COUNT {
            return Err(QuizError::InvalidCorrectIndex(correct_index as i64));
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_index,
        })
    }

    /// The question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The four options in storage order.
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// 0-based index of the correct option.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// 1-based number of the correct option, as shown to players.
    pub fn correct_option_number(&self) -> usize {
        self.correct_index + 1
    }
}

/// An ordered collection of questions with a soft capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
    capacity: usize,
}

impl QuestionBank {
    /// Create an empty bank holding at most `capacity` questions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            questions: Vec::new(),
            capacity,
        }
    }

    /// Append a question.
    ///
    /// A full bank rejects the record with [`QuizError::CapacityExceeded`]
    /// and stays unchanged; callers warn and carry on.
    pub fn push(&mut self, question: QuestionRecord) -> Result<(), QuizError> {
        if self.is_full() {
            tracing::warn!(
                capacity = self.capacity,
                "question bank is full, dropping question: {}",
                question.text()
            );
            return Err(QuizError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.questions.push(question);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.questions.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Question at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_question(text: &str, correct_index: usize) -> QuestionRecord {
    QuestionRecord::new(
        text,
        [
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
            "delta".to_string(),
        ],
        correct_index,
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_out_of_bounds_index() {
        let options = ["a", "b", "c", "d"].map(String::from);
        let err = QuestionRecord::new("q", options, 4).unwrap_err();
        assert!(matches!(err, QuizError::InvalidCorrectIndex(4)));
    }

    #[test]
    fn record_accessors() {
        let q = sample_question("Capital of France?", 2);
        assert_eq!(q.text(), "Capital of France?");
        assert_eq!(q.options()[0], "alpha");
        assert_eq!(q.correct_index(), 2);
        assert_eq!(q.correct_option_number(), 3);
    }

    #[test]
    fn bank_push_until_full() {
        let mut bank = QuestionBank::with_capacity(2);
        bank.push(sample_question("one", 0)).unwrap();
        bank.push(sample_question("two", 1)).unwrap();
        assert!(bank.is_full());

        let err = bank.push(sample_question("three", 2)).unwrap_err();
        assert!(matches!(err, QuizError::CapacityExceeded { capacity: 2 }));
        assert_eq!(bank.len(), 2);

        // every rejected push reports exactly once and leaves the bank alone
        let rejected = ["four", "five"]
            .into_iter()
            .map(|text| bank.push(sample_question(text, 3)))
            .filter(|r| matches!(r, Err(QuizError::CapacityExceeded { capacity: 2 })))
            .count();
        assert_eq!(rejected, 2);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1).unwrap().text(), "two");
    }

    #[test]
    fn default_bank_capacity() {
        let bank = QuestionBank::default();
        assert_eq!(bank.capacity(), DEFAULT_CAPACITY);
        assert!(bank.is_empty());
    }

    #[test]
    fn question_serializes_to_json() {
        let q = sample_question("Serialize me", 3);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["text"], "Serialize me");
        assert_eq!(json["options"][3], "delta");
        assert_eq!(json["correct_index"], 3);
    }
}
