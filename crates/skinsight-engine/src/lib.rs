//! skinsight-engine
//!
//! The adaptive questionnaire: condition scoring, next-question
//! selection, early stopping, result normalization, and the session
//! state machine that ties them together.
//!
//! Public API:
//! - `score()`: recompute every condition score from the full answer set
//! - `select_next()`: pick the most informative unanswered question
//! - `should_stop()`: decide whether the evidence is already conclusive
//! - `normalize()`: top-K percentages that sum to 100
//! - `Session`: one user's pass through the questionnaire

pub mod config;
pub mod error;
pub mod normalize;
pub mod scoring;
pub mod selector;
pub mod session;
pub mod stop;

pub use crate::config::{EngineConfig, ScoreFloor, ScoringParams, StopPolicy};
pub use crate::error::EngineError;
pub use crate::normalize::normalize;
pub use crate::scoring::score;
pub use crate::selector::select_next;
pub use crate::session::{Session, SessionState, Step};
pub use crate::stop::should_stop;
