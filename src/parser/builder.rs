//! Token-list → tree builder.
//!
//! Reconstructs the hierarchical file tree from the collaborator's flat
//! token stream using only the enter/leave production markers.

use std::path::Path;

use tracing::debug;

use crate::ParseError;
use crate::base::Position;
use crate::tree::{NodeId, Tree};

use super::tags;
use super::token::Token;

/// Builds the subtree for one file and appends it under `parent` (the
/// workspace project root).
///
/// A stack of open nodes starts at the new `file` node. For each token,
/// every production in its enter-list pushes a new child node, the token
/// itself is appended as a leaf of the current top, and every production in
/// its leave-list pops the stack. The running position advances by the
/// leaf's character count and wraps on line-end tokens.
pub fn build_file_tree(
    tree: &mut Tree,
    parent: NodeId,
    path: &Path,
    tokens: &[Token],
) -> Result<NodeId, ParseError> {
    let file = tree.new_file(tags::FILE, path);
    tree.append(parent, file);

    let mut stack = vec![file];
    let mut pos = Position::default();

    for token in tokens {
        for production in &token.enter {
            let node = tree.new_production(production, pos);
            let top = *stack.last().ok_or_else(|| stack_underflow(path))?;
            tree.append(top, node);
            stack.push(node);
        }

        let leaf = tree.new_leaf(&token.id, &token.text, pos);
        let top = *stack.last().ok_or_else(|| stack_underflow(path))?;
        tree.append(top, leaf);

        pos.advance(&token.text);
        if token.id == tags::CARRIAGE_RETURN {
            pos.newline();
        }

        for production in &token.leave {
            if stack.len() <= 1 {
                return Err(ParseError::BuilderStack(format!(
                    "leave marker for '{}' without matching enter in {}",
                    production,
                    path.display()
                )));
            }
            stack.pop();
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::BuilderStack(format!(
            "{} production(s) left open at end of stream in {}",
            stack.len() - 1,
            path.display()
        )));
    }

    debug!(
        path = %path.display(),
        tokens = tokens.len(),
        nodes = tree.len(),
        "built file tree"
    );
    Ok(file)
}

fn stack_underflow(path: &Path) -> ParseError {
    ParseError::BuilderStack(format!("builder stack underflow in {}", path.display()))
}
