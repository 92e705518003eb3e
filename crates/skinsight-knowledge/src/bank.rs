use serde::{Deserialize, Serialize};
use skinsight_core::Category;
use thiserror::Error;
use ts_rs::TS;

use crate::CategoryBank;
use crate::error::KnowledgeError;

pub const AFFIRMATIVE_OPTION: &str = "Yes";
pub const NEGATIVE_OPTION: &str = "Not at all";

/// A yes/no question bound to one trait position in every condition
/// vector of its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within the category.
    pub id: u32,
    pub text: String,
    /// `[affirmative, negative]`.
    pub options: [String; 2],
    pub attribute_index: usize,
}

impl Question {
    pub fn yes_no(id: u32, text: &str, attribute_index: usize) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: [AFFIRMATIVE_OPTION.to_string(), NEGATIVE_OPTION.to_string()],
            attribute_index,
        }
    }

    pub fn affirmative(&self) -> &str {
        &self.options[0]
    }

    pub fn negative(&self) -> &str {
        &self.options[1]
    }
}

/// A diagnosable condition: which traits it is expected to show and how
/// much each trait matters for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    name: String,
    attributes: Vec<bool>,
    weights: Vec<f64>,
}

impl Condition {
    /// Build a condition, rejecting mismatched vector lengths and weights
    /// that are negative or not finite.
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<bool>,
        weights: Vec<f64>,
    ) -> Result<Self, KnowledgeError> {
        let name = name.into();
        if attributes.len() != weights.len() {
            return Err(KnowledgeError::InvalidCondition {
                condition: name,
                reason: format!(
                    "{} attributes but {} weights",
                    attributes.len(),
                    weights.len()
                ),
            });
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(KnowledgeError::InvalidCondition {
                condition: name,
                reason: format!("weight {w} at index {i} must be a non-negative number"),
            });
        }
        Ok(Self {
            name,
            attributes,
            weights,
        })
    }

    /// Static table rows: attributes as 0/1 flags. Checked by `validate()`.
    pub(crate) fn table(name: &str, attributes: &[u8], weights: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            attributes: attributes.iter().map(|a| *a == 1).collect(),
            weights: weights.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[bool] {
        &self.attributes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Whether the condition is expected to show the trait at `index`.
    pub fn expects(&self, index: usize) -> Option<bool> {
        self.attributes.get(index).copied()
    }

    pub fn weight(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    /// Mean of the full weight vector; 0 for an empty vector.
    pub fn average_weight(&self) -> f64 {
        if self.weights.is_empty() {
            return 0.0;
        }
        self.weights.iter().sum::<f64>() / self.weights.len() as f64
    }

    /// Number of traits the condition is expected not to show. Fewer means
    /// a more specific condition.
    pub fn zero_attribute_count(&self) -> usize {
        self.attributes.iter().filter(|a| !**a).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub category: Category,
    pub subject: String,
    pub message: String,
}

/// A caller-supplied category table.
#[derive(Debug, Clone)]
pub struct CustomBank {
    category: Category,
    questions: Vec<Question>,
    conditions: Vec<Condition>,
}

impl CustomBank {
    pub fn new(
        category: Category,
        questions: Vec<Question>,
        conditions: Vec<Condition>,
    ) -> Result<Self, KnowledgeError> {
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|earlier| earlier.id == q.id) {
                return Err(KnowledgeError::DuplicateQuestion(q.id));
            }
        }
        Ok(Self {
            category,
            questions,
            conditions,
        })
    }
}

impl CategoryBank for CustomBank {
    fn category(&self) -> Category {
        self.category
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}
