//! skinsight-cli library root.
//!
//! Exposes the config layer and the answer-prompt parser so integration
//! tests can exercise them without a terminal.

pub mod config;
pub mod prompt;
