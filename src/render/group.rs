// src/render/group.rs
//! Pre-processing pass that merges consecutive list items.
//!
//! HTML wants list items inside one `<ul>`/`<ol>` container, but the
//! API returns them as independent sibling blocks. This pass collapses
//! every maximal run of same-type list items into one synthetic list
//! node; everything else passes through in position. The nodes borrow
//! from the fetched tree and live only for the render pass.

use crate::model::Block;

/// Whether a synthetic list renders ordered or unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    /// The list kind of a block, or `None` for non-list-item blocks.
    pub fn of(block: &Block) -> Option<ListKind> {
        match block {
            Block::BulletedListItem(_) => Some(ListKind::Bulleted),
            Block::NumberedListItem(_) => Some(ListKind::Numbered),
            _ => None,
        }
    }
}

/// A node of the grouped sequence: a passthrough block or a synthetic
/// list wrapping a run of same-type list items.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode<'a> {
    Single(&'a Block),
    List {
        kind: ListKind,
        items: Vec<&'a Block>,
    },
}

/// Groups a block sequence for rendering.
///
/// A run breaks whenever the list kind changes — bulleted and numbered
/// runs are never merged. A trailing run is flushed after the loop.
pub fn group_blocks(blocks: &[Block]) -> Vec<RenderNode<'_>> {
    let mut grouped = Vec::with_capacity(blocks.len());
    let mut run: Vec<&Block> = Vec::new();
    let mut run_kind: Option<ListKind> = None;

    for block in blocks {
        match ListKind::of(block) {
            Some(kind) => {
                if run_kind != Some(kind) {
                    flush_run(&mut grouped, &mut run, run_kind);
                    run_kind = Some(kind);
                }
                run.push(block);
            }
            None => {
                flush_run(&mut grouped, &mut run, run_kind);
                run_kind = None;
                grouped.push(RenderNode::Single(block));
            }
        }
    }
    flush_run(&mut grouped, &mut run, run_kind);

    grouped
}

fn flush_run<'a>(
    grouped: &mut Vec<RenderNode<'a>>,
    run: &mut Vec<&'a Block>,
    kind: Option<ListKind>,
) {
    if run.is_empty() {
        return;
    }
    let kind = kind.expect("a non-empty run always has a kind");
    grouped.push(RenderNode::List {
        kind,
        items: std::mem::take(run),
    });
}
