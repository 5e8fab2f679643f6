use std::path::PathBuf;

use smol_str::SmolStr;

use crate::base::Position;

/// Index of a node within its owning [`super::Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Data stored for one tree node.
///
/// The attribute set is fixed: `tag`, `pos`, `is_production`, `text`, plus
/// `source_path` as the one ad hoc field (set only on `file` nodes). There is
/// no dynamic attribute table and no implicit fallback to child attributes;
/// callers that need a position for a synthetic group node use
/// [`super::Tree::effective_column`].
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Token type id for leaves, production name for inner nodes.
    pub tag: SmolStr,
    /// Position of the first character covered by this node.
    pub pos: Position,
    /// True only for nodes created from production enter/leave markers.
    pub is_production: bool,
    /// Literal source text. Present only on leaf token nodes.
    pub text: Option<SmolStr>,
    /// Source path, set only on `file` nodes.
    pub source_path: Option<PathBuf>,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl NodeData {
    pub(super) fn new(tag: SmolStr, pos: Position) -> Self {
        Self {
            tag,
            pos,
            is_production: false,
            text: None,
            source_path: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// A leaf is a node created from a single token; it carries text and
    /// never has children.
    pub fn is_leaf(&self) -> bool {
        self.text.is_some()
    }
}
