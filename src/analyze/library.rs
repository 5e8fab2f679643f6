//! Library and use-clause extraction.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::ParseError;
use crate::parser::tags;
use crate::tree::{NodeId, Tree};
use crate::workspace::{LabelNamespace, LabelRegistry};

use super::entity::head_and_tail_comments;

/// One `use` selection attached to the library it draws from.
#[derive(Debug, Clone)]
pub struct UseClauseInfo {
    /// The selected suffix, e.g. `std_logic_1164.all`.
    pub label: String,
    pub node: NodeId,
    pub head_comment: Option<NodeId>,
    pub tail_comment: Option<NodeId>,
}

/// A declared library and the use clauses referring to it.
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    /// The `library_clause` node; `None` for the predeclared `work`
    /// library.
    pub node: Option<NodeId>,
    pub uses: Vec<UseClauseInfo>,
    pub head_comment: Option<NodeId>,
    pub tail_comment: Option<NodeId>,
    pub source_file: PathBuf,
}

impl LibraryInfo {
    /// The implicit `work` library every file may reference.
    pub fn work() -> Self {
        Self {
            name: "work".to_string(),
            node: None,
            uses: Vec::new(),
            head_comment: None,
            tail_comment: None,
            source_file: PathBuf::new(),
        }
    }
}

/// Collects library declarations and use clauses from `file` into the
/// workspace registry.
///
/// A library declared again in a later file (or a later clause) merges into
/// the existing descriptor; only the first declaration owns the label.
/// A use clause must carry a prefix and at least one suffix, and its prefix
/// must name a known library; both violations are
/// [`ParseError::MalformedDeclaration`].
pub fn analyze_libraries(
    tree: &Tree,
    file: NodeId,
    labels: &mut LabelRegistry,
    libraries: &mut IndexMap<String, LibraryInfo>,
) -> Result<(), ParseError> {
    let source_file = tree[file].source_path.clone().unwrap_or_default();

    for lib_node in tree.find_descendants(file, tags::LIBRARY_CLAUSE) {
        for id_node in tree.find_descendants(lib_node, tags::IDENTIFIER) {
            let name = tree.subtext(id_node);
            let key = name.to_lowercase();
            if libraries.contains_key(&key) {
                continue;
            }
            let (head_comment, tail_comment) = head_and_tail_comments(tree, lib_node);
            labels.insert(LabelNamespace::Library, &name, lib_node)?;
            debug!(library = %name, "declared library");
            libraries.insert(
                key,
                LibraryInfo {
                    name,
                    node: Some(lib_node),
                    uses: Vec::new(),
                    head_comment,
                    tail_comment,
                    source_file: source_file.clone(),
                },
            );
        }
    }

    for use_node in tree.find_descendants(file, tags::USE_CLAUSE) {
        for selected in tree.find_descendants(use_node, tags::SELECTED_NAME) {
            let name_node = tree.find_descendant(selected, tags::NAME).ok_or_else(|| {
                ParseError::MalformedDeclaration(format!(
                    "use clause without a name in {}",
                    source_file.display()
                ))
            })?;
            let parts = tree.children(name_node);
            if parts.len() < 2 {
                return Err(ParseError::MalformedDeclaration(format!(
                    "use clause must have a prefix and one or more suffixes in {}",
                    source_file.display()
                )));
            }
            let prefix = tree.subtext(parts[0]);
            let suffix: String = parts[1..].iter().map(|&p| tree.subtext(p)).collect();
            let (head_comment, tail_comment) = head_and_tail_comments(tree, use_node);

            let library = libraries.get_mut(&prefix.to_lowercase()).ok_or_else(|| {
                ParseError::MalformedDeclaration(format!(
                    "use of library '{prefix}' before it is declared"
                ))
            })?;
            library.uses.push(UseClauseInfo {
                label: suffix,
                node: use_node,
                head_comment,
                tail_comment,
            });
        }
    }
    Ok(())
}
