//! skinsight-knowledge
//!
//! Static reference data for the questionnaire: per-category condition
//! tables, question banks, and the keyword rules that map a classifier
//! label to a category. Pure data plus lookups; no scoring.

pub mod bank;
pub mod categories;
pub mod classifier;
pub mod error;

use bank::{Condition, Question, ValidationError};
use error::KnowledgeError;
use skinsight_core::Category;

/// A category's knowledge base and question bank.
pub trait CategoryBank: Send + Sync {
    fn category(&self) -> Category;

    /// Questions in declaration order.
    fn questions(&self) -> &[Question];

    /// Conditions in declaration order. Empty for non-adaptive categories.
    fn conditions(&self) -> &[Condition];

    fn question(&self, id: u32) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn condition(&self, name: &str) -> Option<&Condition> {
        self.conditions().iter().find(|c| c.name() == name)
    }

    /// Check that every condition vector lines up with the question bank.
    fn validate(&self) -> Vec<ValidationError> {
        let category = self.category();
        let questions = self.questions();
        let mut errors = Vec::new();

        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|earlier| earlier.id == q.id) {
                errors.push(ValidationError {
                    category,
                    subject: format!("question {}", q.id),
                    message: format!("{category}: question id {} is declared twice", q.id),
                });
            }
            if q.attribute_index >= questions.len() {
                errors.push(ValidationError {
                    category,
                    subject: format!("question {}", q.id),
                    message: format!(
                        "{category}: question {} points at attribute {} but the bank has {} questions",
                        q.id,
                        q.attribute_index,
                        questions.len(),
                    ),
                });
            }
        }

        for (i, c) in self.conditions().iter().enumerate() {
            if self.conditions()[..i].iter().any(|earlier| earlier.name() == c.name()) {
                errors.push(ValidationError {
                    category,
                    subject: c.name().to_string(),
                    message: format!("{category}: condition {} is declared twice", c.name()),
                });
            }
            if c.attributes().len() != questions.len() || c.weights().len() != questions.len() {
                errors.push(ValidationError {
                    category,
                    subject: c.name().to_string(),
                    message: format!(
                        "{category}: {} has {} attributes and {} weights, expected {}",
                        c.name(),
                        c.attributes().len(),
                        c.weights().len(),
                        questions.len(),
                    ),
                });
            }
        }

        errors
    }
}

/// Fail on the first structural problem `validate()` finds.
pub fn ensure_valid(bank: &dyn CategoryBank) -> Result<(), KnowledgeError> {
    match bank.validate().into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Return every built-in category bank, `DEFAULT` last.
pub fn all_banks() -> Vec<Box<dyn CategoryBank>> {
    Category::ALL.into_iter().map(get_bank).collect()
}

/// Look up the built-in bank for a category.
pub fn get_bank(category: Category) -> Box<dyn CategoryBank> {
    match category {
        Category::Inflammatory => Box::new(categories::inflammatory::Inflammatory),
        Category::Infectious => Box::new(categories::infectious::Infectious),
        Category::Autoimmune => Box::new(categories::autoimmune::Autoimmune),
        Category::BenignGrowth => Box::new(categories::benign_growth::BenignGrowth),
        Category::Pigmentary => Box::new(categories::pigmentary::Pigmentary),
        Category::SkinCancer => Box::new(categories::skin_cancer::SkinCancer),
        Category::Environmental => Box::new(categories::environmental::Environmental),
        Category::Default => Box::new(categories::default::DefaultBank),
    }
}
