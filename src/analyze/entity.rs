//! Entity and interface extraction.

use std::path::PathBuf;

use tracing::debug;

use crate::ParseError;
use crate::comments::marks::split_brief_details;
use crate::parser::tags;
use crate::tree::{IterBounds, NodeId, Tree};
use crate::workspace::{LabelNamespace, LabelRegistry};

/// One port or generic entry of an entity's declared interface.
///
/// Either a named entry (one or more declared names sharing a definition)
/// or a pure separator: a comment-only row with no names, used to render
/// section-dividing comments inside a ports/generics table. The
/// empty-name-set case is not an error.
#[derive(Debug, Clone)]
pub struct InterfaceElement {
    /// Declared names sharing this definition; empty for a separator.
    pub names: Vec<String>,
    /// Verbatim definition text between the name list and any trailing
    /// comment; `None` for separators.
    pub definition: Option<String>,
    /// Raw text of the entry's comment blocks (head and tail), newline
    /// joined. Comment marks are kept so decorative separators survive to
    /// the renderer.
    pub comments: String,
    /// The `interface_unknown_declaration` node, or the comment block for a
    /// separator.
    pub node: NodeId,
}

impl InterfaceElement {
    pub fn is_separator(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything the documentation renderer needs to know about one entity.
#[derive(Debug, Clone)]
pub struct EntityInfo {
    /// Declared name, case preserved for display.
    pub name: String,
    pub ports: Vec<InterfaceElement>,
    pub generics: Vec<InterfaceElement>,
    /// First paragraph of the leading documentation, line by line.
    pub brief: Vec<String>,
    /// Remainder of the leading documentation, dedented as a block.
    pub details: Vec<String>,
    /// Comment block trailing the entity, when present.
    pub tail_comment: Option<NodeId>,
    pub source_file: PathBuf,
    pub entity_node: NodeId,
    pub file_node: NodeId,
}

/// Returns the head and tail comment blocks of the declaration `node`:
/// its first `comment_block` child, and its last when more than one
/// exists.
pub fn head_and_tail_comments(tree: &Tree, node: NodeId) -> (Option<NodeId>, Option<NodeId>) {
    let blocks = tree.find_all(node, tags::COMMENT_BLOCK);
    let head = blocks.first().copied();
    let tail = if blocks.len() > 1 {
        blocks.last().copied()
    } else {
        None
    };
    (head, tail)
}

/// Extracts every entity declared directly under `file`, registering each
/// entity and its port/generic names in the label registry.
pub fn analyze_entities(
    tree: &Tree,
    file: NodeId,
    labels: &mut LabelRegistry,
) -> Result<Vec<EntityInfo>, ParseError> {
    let source_file = tree[file].source_path.clone().unwrap_or_default();
    let mut entities = Vec::new();

    for entity_node in tree.find_all(file, tags::ENTITY_DECLARATION) {
        let name_node = tree
            .find_descendant(entity_node, tags::ENTITY_IDENTIFIER)
            .ok_or_else(|| {
                ParseError::MalformedDeclaration(format!(
                    "entity declaration without an identifier in {}",
                    source_file.display()
                ))
            })?;
        let name = tree.subtext(name_node);

        let ports = analyze_interface(tree, tree.find(entity_node, tags::PORT_CLAUSE));
        let generics = analyze_interface(tree, tree.find(entity_node, tags::GENERIC_CLAUSE));

        let (head, tail_comment) = head_and_tail_comments(tree, entity_node);
        let (brief, details) = match head {
            Some(block) => split_brief_details(&tree.subtext(block)),
            None => (Vec::new(), Vec::new()),
        };

        labels.insert(LabelNamespace::Entity, &name, entity_node)?;
        for (namespace, elements) in [
            (LabelNamespace::Port, &ports),
            (LabelNamespace::Generic, &generics),
        ] {
            for element in elements {
                for declared in &element.names {
                    labels.insert(namespace, &format!("{name}.{declared}"), element.node)?;
                }
            }
        }

        debug!(
            entity = %name,
            ports = ports.len(),
            generics = generics.len(),
            "analyzed entity"
        );
        entities.push(EntityInfo {
            name,
            ports,
            generics,
            brief,
            details,
            tail_comment,
            source_file: source_file.clone(),
            entity_node,
            file_node: file,
        });
    }
    Ok(entities)
}

/// Classifies the children of a `port_clause`/`generic_clause` node into
/// named interface elements and separators, in declaration order.
fn analyze_interface(tree: &Tree, clause: Option<NodeId>) -> Vec<InterfaceElement> {
    let Some(clause) = clause else {
        return Vec::new();
    };
    let mut elements = Vec::new();
    for &child in tree.children(clause) {
        if tree.tag(child) == tags::INTERFACE_DECLARATION {
            let names = tree
                .find_all(child, tags::INTERFACE_IDENTIFIER)
                .into_iter()
                .map(|n| tree.subtext(n))
                .collect();
            let children = tree.children(child);
            let colon_idx = children
                .iter()
                .position(|&c| tree.tag(c) == tags::INTERFACE_COLON);
            let definition = colon_idx.map(|at| {
                let colon = tree.children(child)[at];
                // The bound is the trailing comment: the first block after
                // the colon, not a leading documentation block.
                let block = tree.children(child)[at + 1..]
                    .iter()
                    .copied()
                    .find(|&c| tree.tag(c) == tags::COMMENT_BLOCK);
                let mut bounds = IterBounds::start_after(colon);
                if let Some(block) = block {
                    bounds = bounds.stop_before(block);
                }
                clean_definition(&tree.subtext_between(child, bounds))
            });
            let comments = tree
                .find_all(child, tags::COMMENT_BLOCK)
                .into_iter()
                .map(|block| tree.subtext(block).trim_end().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            elements.push(InterfaceElement {
                names,
                definition,
                comments,
                node: child,
            });
        } else if tree.tag(child) == tags::COMMENT_BLOCK {
            elements.push(InterfaceElement {
                names: Vec::new(),
                definition: None,
                comments: tree.subtext(child).trim_end().to_string(),
                node: child,
            });
        }
    }
    elements
}

/// The tail pass may have re-homed the statement terminator into the
/// element; the definition contract excludes it.
fn clean_definition(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(';')
        .map(str::trim_end)
        .unwrap_or(trimmed)
        .to_string()
}
