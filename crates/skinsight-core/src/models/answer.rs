use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Keyword that marks an answer as affirmative.
pub const AFFIRMATIVE_KEYWORD: &str = "yes";

/// Interpret a free-text answer as a binary trait observation.
///
/// Matching is a case-insensitive substring test on [`AFFIRMATIVE_KEYWORD`],
/// so "Yes", "yes, a lot" and "YES" are all affirmative; anything else
/// (including "Not at all") is negative.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase().contains(AFFIRMATIVE_KEYWORD)
}

/// The answers given so far in a session, keyed by question id.
///
/// Iteration follows insertion order (the order questions were asked).
/// Re-answering a question replaces the text in place without moving it.
/// Serializes as a JSON object `{ "<question id>": "<answer text>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(IndexMap<u32, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Returns the previous answer for the same question, if any.
    pub fn insert(&mut self, question_id: u32, answer: impl Into<String>) -> Option<String> {
        self.0.insert(question_id, answer.into())
    }

    pub fn remove(&mut self, question_id: u32) -> Option<String> {
        self.0.shift_remove(&question_id)
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    /// The binary value of an answer: `Some(true)` for affirmative.
    pub fn value(&self, question_id: u32) -> Option<bool> {
        self.get(question_id).map(is_affirmative)
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recently inserted answer.
    pub fn last(&self) -> Option<(u32, &str)> {
        self.0.last().map(|(id, answer)| (*id, answer.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(id, answer)| (*id, answer.as_str()))
    }

    pub fn question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, answer)| (id, answer.into())).collect())
    }
}
