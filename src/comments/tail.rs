//! Tail comment attachment pass.
//!
//! A comment block that starts on a declaration's closing line, after its
//! statement terminator and continuing onto following lines as long as the
//! grouper kept the block together, becomes the declaration's trailing
//! documentation. The pass tracks the most recent production seen at the
//! current scope with nothing but whitespace and a single `;` after it; on
//! reaching a comment block it relocates the in-between run and the block
//! into that production as appended children. A bare line end (or any
//! other token) between the two drops the association.
//!
//! Runs after header attachment has completed for the whole file, and only
//! considers its result.

use tracing::trace;

use crate::tree::{IterBounds, NodeId, Tree, TreeError};

use crate::parser::tags;

pub fn attach_tail_comments(
    tree: &mut Tree,
    scope: NodeId,
    recurse: bool,
) -> Result<(), TreeError> {
    let snapshot = tree.children(scope).to_vec();

    let mut last_prod: Option<NodeId> = None;
    let mut seen_terminator = false;

    for child in snapshot {
        let tag = tree[child].tag.clone();

        if tree.is_production(child) {
            if recurse {
                attach_tail_comments(tree, child, recurse)?;
            }
            last_prod = Some(child);
            seen_terminator = false;
        } else if tag == tags::COMMENT_BLOCK {
            if let Some(prod) = last_prod {
                trace!(production = tree.tag(prod), "attaching tail comment");
                let run = tree.iter_between(
                    scope,
                    IterBounds::start_after(prod).stop_before(child),
                    false,
                );
                tree.move_to(&run, prod, None)?;
                tree.move_to(&[child], prod, None)?;
            }
            last_prod = None;
            seen_terminator = false;
        } else if tag == tags::WHITESPACE {
            // Stays a trailing candidate; relocated with the block if one
            // follows.
        } else if tree.text(child) == Some(";") && !seen_terminator {
            seen_terminator = true;
        } else {
            last_prod = None;
            seen_terminator = false;
        }
    }
    Ok(())
}
