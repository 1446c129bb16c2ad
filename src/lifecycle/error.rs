//! Page startup and shutdown errors.

use thiserror::Error;

/// Configuration and lifecycle failures. These are caller errors caught at
/// page startup (or join failures at shutdown), never runtime render errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A fragment region container is missing from the document.
    #[error("required region container missing from the document: {0}")]
    MissingRegion(&'static str),

    /// The controller task panicked or was cancelled.
    #[error("controller task failed: {0}")]
    ControllerTask(String),
}
