//! Comment grouping pass.
//!
//! A single left-to-right scan over each scope's children, driven by a
//! small state machine: a *comment line* buffer accumulates
//! whitespace/comment/line-end tokens of the current physical line, and a
//! *comment group* buffer accumulates completed lines that qualify for
//! merging. A line qualifies while its indentation stays at or right of the
//! group's column (the column of the first line merged into the group), so
//! a gradually right-drifting block stays together while a left-shifted
//! trailing remark starts a new block. Delimited comments may span several
//! lines without breaking the group.

use tracing::trace;

use crate::tree::{NodeId, Tree, TreeError};

use crate::parser::tags;

pub fn group_comments(tree: &mut Tree, scope: NodeId, recurse: bool) -> Result<(), TreeError> {
    let snapshot = tree.children(scope).to_vec();

    let mut line: Vec<NodeId> = Vec::new();
    let mut line_col: Option<usize> = None;
    let mut group: Vec<NodeId> = Vec::new();
    let mut group_col: Option<usize> = None;
    let mut delimited = false;

    for child in snapshot {
        let tag = tree[child].tag.clone();

        if delimited {
            line.push(child);
            if tag == tags::DELIMITED_COMMENT_END {
                delimited = false;
            } else if tag == tags::CARRIAGE_RETURN {
                // Multi-line delimited comment: flush the line into the
                // group without ending it.
                if group_col.is_none() {
                    group_col = line_col;
                }
                group.append(&mut line);
            }
            continue;
        }

        match tag.as_str() {
            tags::DELIMITED_COMMENT_BEGIN => {
                line.push(child);
                line_col = Some(tree.pos(child).column);
                delimited = true;
            }
            tags::WHITESPACE | tags::BLANK_LINE_TOKEN => {
                line.push(child);
            }
            tags::COMMENT => {
                line.push(child);
                line_col = Some(tree.pos(child).column);
            }
            tags::CARRIAGE_RETURN => {
                line.push(child);
                let merges = match (line_col, group_col) {
                    (None, _) => false,
                    (Some(_), _) if group.is_empty() => true,
                    (Some(_), None) => true,
                    (Some(lc), Some(gc)) => lc >= gc,
                };
                if merges {
                    if group_col.is_none() {
                        group_col = line_col;
                    }
                    group.append(&mut line);
                    line_col = None;
                } else {
                    // Blank or left-shifted line: the group ends here.
                    finalize_group(tree, scope, &mut group, &mut group_col)?;
                    match line_col {
                        None => {
                            if tree.pos(line[0]).column == 0 {
                                tree.group(scope, &line, tags::BLANK_LINE)?;
                            }
                        }
                        Some(col) => {
                            // The left-shifted comment line seeds the next
                            // group.
                            group.append(&mut line);
                            group_col = Some(col);
                        }
                    }
                    line.clear();
                    line_col = None;
                }
            }
            _ => {
                finalize_group(tree, scope, &mut group, &mut group_col)?;
                line.clear();
                line_col = None;
                if recurse && tree.is_production(child) {
                    group_comments(tree, child, recurse)?;
                }
            }
        }
    }

    finalize_group(tree, scope, &mut group, &mut group_col)
}

/// Wraps the pending group into a `comment_block` sibling, stamping the
/// block with the group's indentation column.
fn finalize_group(
    tree: &mut Tree,
    scope: NodeId,
    group: &mut Vec<NodeId>,
    group_col: &mut Option<usize>,
) -> Result<(), TreeError> {
    if let Some(block) = tree.group(scope, group, tags::COMMENT_BLOCK)? {
        let mut pos = tree.pos(block);
        pos.column = group_col.unwrap_or_else(|| tree.effective_column(block));
        tree.set_pos(block, pos);
        trace!(
            line = pos.line,
            column = pos.column,
            tokens = group.len(),
            "grouped comment block"
        );
    }
    group.clear();
    *group_col = None;
    Ok(())
}
