//! Read-only query surface exposed to the documentation renderer.

use std::path::{Path, PathBuf};

use crate::ParseError;
use crate::analyze::{EntityInfo, LibraryInfo};
use crate::comments::marks::{dedent, strip_comment_marks};
use crate::parser::{Tokenize, tags};
use crate::tree::{NodeId, Tree};

use super::core::Workspace;
use super::labels::LabelRegistry;

/// Textual match markers delimiting a sub-range of comment text.
///
/// Comment blocks of the entity's file are scanned in document order;
/// within each block, `start_before` starts capture on the matching line
/// itself, `start_after` on the line following it, and the `end_*` markers
/// stop it symmetrically. The first block that yields any captured line
/// wins.
#[derive(Debug, Clone, Default)]
pub struct CommentMarkers {
    pub start_before: Option<String>,
    pub start_after: Option<String>,
    pub end_before: Option<String>,
    pub end_after: Option<String>,
}

impl<T: Tokenize> Workspace<T> {
    /// Returns a reference to the project tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns a reference to the label registry.
    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }

    /// Returns the number of parsed files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over all parsed file paths.
    pub fn file_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.keys()
    }

    /// Returns the `file` node for an already-parsed path.
    pub fn file_node(&self, path: impl AsRef<Path>) -> Option<NodeId> {
        self.files.get(path.as_ref()).copied()
    }

    /// Returns an iterator over all known entities in discovery order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityInfo> {
        self.entities.values()
    }

    /// Returns an iterator over all known libraries in declaration order.
    pub fn libraries(&self) -> impl Iterator<Item = &LibraryInfo> {
        self.libraries.values()
    }

    /// Looks up an entity by name, case-insensitively.
    pub fn entity(&self, name: &str) -> Result<&EntityInfo, ParseError> {
        self.entities
            .get(&name.to_lowercase())
            .ok_or_else(|| ParseError::EntityNotFound {
                name: name.to_string(),
                known: self.entities.values().map(|e| e.name.clone()).collect(),
            })
    }

    /// Returns the file node containing the named entity.
    pub fn file_with_entity(&self, name: &str) -> Result<NodeId, ParseError> {
        Ok(self.entity(name)?.file_node)
    }

    /// Extracts a delimited sub-range of comment text from the named
    /// entity's file, mark-stripped and dedented.
    pub fn comments_between(
        &self,
        entity: &str,
        markers: &CommentMarkers,
    ) -> Result<Vec<String>, ParseError> {
        let file = self.file_with_entity(entity)?;

        fn hit(line: &str, marker: &Option<String>) -> bool {
            marker
                .as_deref()
                .is_some_and(|m| !m.is_empty() && line.contains(m))
        }

        let mut captured: Vec<String> = Vec::new();
        let mut capture = false;
        for block in self.tree.find_descendants(file, tags::COMMENT_BLOCK) {
            let text = self.tree.subtext(block);
            for line in text.lines() {
                if hit(line, &markers.start_before) {
                    capture = true;
                }
                if hit(line, &markers.end_before) {
                    break;
                }
                if capture {
                    captured.push(line.to_string());
                }
                if hit(line, &markers.start_after) {
                    capture = true;
                }
                if hit(line, &markers.end_after) {
                    break;
                }
            }
            // Stop at the first block that yielded anything.
            if !captured.is_empty() {
                break;
            }
        }
        Ok(dedent(&strip_comment_marks(
            captured.iter().map(String::as_str),
        )))
    }
}
