//! Annotated ownership tree.
//!
//! A [`Tree`] owns every node of one project in an arena (`Vec<NodeData>`
//! addressed by [`NodeId`], the same typed-index pattern as a symbol arena).
//! Nodes are tagged, ordered containers: leaves carry the literal token text,
//! production nodes carry the grammar-level grouping reconstructed from the
//! tokenizer's enter/leave markers.
//!
//! All mutation goes through a small set of primitives (`group`, `move_to`,
//! `append`, `insert`, `detach`) that only relocate arena references. Leaf
//! text is never copied or mutated, so the document-order concatenation of
//! leaf text under any subtree is invariant across every transformation pass.

#[allow(clippy::module_inception)]
mod tree;

mod node;

pub use node::{NodeData, NodeId};
pub use tree::{IterBounds, Tree, TreeError};
