use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerSet;
use super::category::Category;
use super::prediction::{ClassifierResult, Urgency};
use super::score::ScoreMap;

/// One ranked condition guess for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultEntry {
    pub condition: String,
    pub display_name: String,
    /// Share of the displayed top-K total, in whole percent.
    pub percentage: u32,
    pub category: Category,
    pub display_threshold: u32,
}

/// A question the user answered, resolved to its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnsweredQuestion {
    pub question_id: u32,
    pub question: String,
    pub answer: String,
}

/// Everything the report/display collaborator needs once a session completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinalResult {
    pub session_id: Uuid,
    pub category: Category,
    pub classifier: ClassifierResult,
    pub urgency: Urgency,
    pub answers: AnswerSet,
    pub answered: Vec<AnsweredQuestion>,
    pub scores: ScoreMap,
    pub normalized_results: Vec<ResultEntry>,
    pub completed_at: jiff::Timestamp,
}

/// Human-readable form of a knowledge-base condition key:
/// `Basal_Cell_Cancer` → `Basal Cell Cancer`.
pub fn display_name(condition: &str) -> String {
    condition
        .split('_')
        .filter(|word| !word.trim().is_empty())
        .map(|word| {
            let word = word.trim();
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
