use thiserror::Error;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    #[error("answer given for question {got}, but question {expected} is being asked")]
    UnexpectedQuestion { expected: u32, got: u32 },

    #[error("no earlier question to return to")]
    NoPreviousQuestion,
}
