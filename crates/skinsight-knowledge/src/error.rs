use thiserror::Error;

use crate::bank::ValidationError;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("invalid condition '{condition}': {reason}")]
    InvalidCondition { condition: String, reason: String },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),

    #[error("knowledge base validation failed: {0}")]
    Validation(#[from] ValidationError),
}
