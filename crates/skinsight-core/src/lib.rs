//! skinsight-core
//!
//! Pure domain types shared by the knowledge base, the questionnaire
//! engine and the display layer. No scoring logic lives here.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::*;
