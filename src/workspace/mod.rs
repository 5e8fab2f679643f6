//! Workspace: the explicit session object for one documentation-build run.
//!
//! Owns the project tree, the tokenizer collaborator, the entity/library
//! registries, the label registry, and the per-path parsed-file cache.
//! There is no module-level state: construct a [`Workspace`], parse files
//! into it, query it, drop it.

mod accessors;
mod core;
mod labels;

pub use accessors::CommentMarkers;
pub use core::{ParseOptions, Workspace};
pub use labels::{LabelNamespace, LabelRegistry};
