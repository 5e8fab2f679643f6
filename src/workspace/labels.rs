//! Process-wide label registry.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::ParseError;
use crate::tree::NodeId;

/// Partition of the shared label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelNamespace {
    Entity,
    Library,
    Port,
    Generic,
}

impl fmt::Display for LabelNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LabelNamespace::Entity => "entity",
            LabelNamespace::Library => "library",
            LabelNamespace::Port => "port",
            LabelNamespace::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Mapping from `(namespace, case-folded label)` to the node owning that
/// label.
///
/// A key is inserted at most once: a second insertion with a different
/// owner is a fatal [`ParseError::DuplicateLabel`], never a silent
/// overwrite. Re-inserting the same owner (an idempotent re-parse) is
/// accepted.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    entries: FxHashMap<(LabelNamespace, String), NodeId>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        namespace: LabelNamespace,
        label: &str,
        owner: NodeId,
    ) -> Result<(), ParseError> {
        let key = (namespace, label.to_lowercase());
        match self.entries.get(&key) {
            Some(&existing) if existing == owner => Ok(()),
            Some(_) => Err(ParseError::DuplicateLabel {
                namespace,
                label: label.to_string(),
            }),
            None => {
                self.entries.insert(key, owner);
                Ok(())
            }
        }
    }

    pub fn get(&self, namespace: LabelNamespace, label: &str) -> Option<NodeId> {
        self.entries
            .get(&(namespace, label.to_lowercase()))
            .copied()
    }

    pub fn contains(&self, namespace: LabelNamespace, label: &str) -> bool {
        self.get(namespace, label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
