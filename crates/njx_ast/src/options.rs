//! Compiler options.

use crate::String;
use serde::{Deserialize, Serialize};

/// Options for template compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// The parameter name representing the current binding context; access
    /// paths are rendered relative to it and calling its bare tracker
    /// renders an interpolation.
    #[serde(default = "default_scope_root")]
    pub scope_root: String,
}

fn default_scope_root() -> String {
    "$".into()
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            scope_root: default_scope_root(),
        }
    }
}

impl CompilerOptions {
    pub fn with_scope_root(scope_root: impl Into<String>) -> Self {
        Self {
            scope_root: scope_root.into(),
        }
    }
}
