//! Error type shared by every pipeline component

use crate::pipeline::StageKind;
use thiserror::Error;

/// Errors raised while building or running a cleaning pipeline
#[derive(Debug, Error)]
pub enum CleanError {
    /// A missing record reached a stage that only accepts text
    #[error("stage '{stage}' received a missing record at index {index}")]
    InvalidInput { stage: &'static str, index: usize },

    /// Stages were listed against the canonical execution order
    #[error("stage '{later}' must run after '{earlier}'")]
    StageOrder { earlier: StageKind, later: StageKind },

    /// The same stage was listed twice
    #[error("stage '{0}' is listed more than once")]
    DuplicateStage(StageKind),

    /// A configured pattern fragment failed to compile
    #[error("invalid pattern '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be loaded or deserialized
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
