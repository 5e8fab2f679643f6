//! Header comment attachment pass.
//!
//! A comment block above a declaration, possibly separated from it by
//! whitespace or blank lines, becomes the declaration's leading
//! documentation: the block and the trivia run following it are relocated
//! to the front of the production node, in original order. Only the last
//! block before the declaration counts; any other token in between
//! invalidates the pending run.
//!
//! A block whose first line starts on a preceding declaration's closing
//! line (reachable backward through whitespace and a single `;`, with no
//! intervening line end) is a *tail* comment of that declaration, not a
//! header of the next one; this pass leaves it in place for the tail pass.

use tracing::trace;

use crate::tree::{NodeId, Tree, TreeError};

use crate::parser::tags;

pub fn attach_header_comments(
    tree: &mut Tree,
    scope: NodeId,
    recurse: bool,
) -> Result<(), TreeError> {
    let snapshot = tree.children(scope).to_vec();

    let mut run: Vec<NodeId> = Vec::new();
    // True while scanning the tail anchorage of the last production: set on
    // the production, kept through whitespace and one `;`, broken by any
    // line end.
    let mut anchored = false;
    let mut seen_terminator = false;

    for child in snapshot {
        let tag = tree[child].tag.clone();

        if tag == tags::COMMENT_BLOCK {
            run.clear();
            if anchored {
                anchored = false;
            } else {
                run.push(child);
            }
        } else if tree.is_production(child) {
            // Inner headers are attached before the outer pass moves
            // anything into this production.
            if recurse {
                attach_header_comments(tree, child, recurse)?;
            }
            if !run.is_empty() {
                trace!(
                    production = tree.tag(child),
                    nodes = run.len(),
                    "attaching header comment"
                );
                tree.move_to(&run, child, Some(0))?;
                run.clear();
            }
            anchored = true;
            seen_terminator = false;
        } else if tag == tags::WHITESPACE {
            if !run.is_empty() {
                run.push(child);
            }
        } else if tags::is_trivia(&tag) {
            // A line end between the last production and a comment breaks
            // the tail anchorage.
            anchored = false;
            if !run.is_empty() {
                run.push(child);
            }
        } else if tree.text(child) == Some(";") && anchored && !seen_terminator {
            seen_terminator = true;
            run.clear();
        } else {
            run.clear();
            anchored = false;
        }
    }
    Ok(())
}
