//! Compiler errors shared across the njx crates.

use crate::String;
use thiserror::Error;

/// Errors that can occur while compiling a template.
///
/// All of these are fatal to the current compile call; nothing is retried or
/// recovered internally. A failed compile caches no result, so a memoized
/// template accessor may retry the computation on a later access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The parameter-list text did not match a supported declaration shape
    #[error("failed to parse parameter list: {0}")]
    Parse(String),

    /// An access on a tracking value that can never appear in a rendered
    /// framework expression
    #[error("unsupported key on tracking value: {0}")]
    UnsupportedKey(String),

    /// A repeat callback is missing the required iteration-variable name(s)
    #[error("invalid repeat signature: {0}")]
    InvalidRepeatSignature(String),

    /// Failure raised by the user's template body, propagated unmodified
    #[error("template execution failed: {0}")]
    TemplateExecution(String),
}
