//! Error types for parsing and analysis.

use thiserror::Error;

use crate::tree::TreeError;
use crate::workspace::LabelNamespace;

/// Errors raised while parsing a file or querying the workspace.
///
/// All variants except [`ParseError::EntityNotFound`] are fatal for the
/// file being processed; none of them is retried, since parsing is
/// deterministic and re-attempting with unchanged input reproduces the same
/// failure.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The same `(namespace, label)` key was registered with two distinct
    /// owning nodes.
    #[error("{namespace} label '{label}' is already defined")]
    DuplicateLabel {
        namespace: LabelNamespace,
        label: String,
    },

    /// Entity lookup miss; carries every name the workspace currently
    /// knows.
    #[error("unknown entity '{name}'; known entities are: {}", .known.join(", "))]
    EntityNotFound { name: String, known: Vec<String> },

    /// Input the analyzer cannot safely continue past, e.g. a use clause
    /// without a prefix or a reference to an undeclared library.
    #[error("malformed declaration: {0}")]
    MalformedDeclaration(String),

    /// The token stream's enter/leave markers are unbalanced, which is a
    /// tokenizer contract violation.
    #[error("unbalanced production markers: {0}")]
    BuilderStack(String),

    /// Failure reported by the tokenizer collaborator.
    #[error("tokenizer error: {0}")]
    Tokenize(String),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
