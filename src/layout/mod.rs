pub(crate) mod types;
pub use types::*;

use crate::config::Config;
use crate::error::Result;
use crate::font::GLYPH_CELL;
use crate::theme::{Palette, Theme};
use crate::tree::TreeNode;
use tracing::{debug, warn};

/// Lays out `tree` with its root centred horizontally at `config.layout.top_margin`.
///
/// Fails with [`Error::InvalidLayout`](crate::Error::InvalidLayout) or
/// [`Error::InvalidCanvas`](crate::Error::InvalidCanvas) when `config` does not pass
/// [`Config::validate`].
pub fn compute_layout(tree: &TreeNode, theme: &Theme, config: &Config) -> Result<Layout> {
    config.validate()?;
    let palette = theme.palette()?;
    let mut ctx = LayoutContext::new(&config.layout, &config.canvas);
    let origin_x = ctx.canvas_width / 2;
    let root = assign_geometry(
        tree,
        origin_x,
        config.layout.top_margin,
        &mut ctx,
        &palette,
        Placement::ROOT,
    );
    debug!(
        nodes = ctx.node_count,
        branches = ctx.branch_count,
        overflows = ctx.overflow_count,
        gap = ctx.gap,
        "layout complete"
    );
    Ok(Layout {
        root,
        canvas_width: config.canvas.width,
        canvas_height: config.canvas.height,
        node_count: ctx.node_count,
        branch_count: ctx.branch_count,
        overflow_count: ctx.overflow_count,
        final_gap: ctx.gap,
    })
}

/// Where a node sits relative to its parent and siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The root is centred on its origin instead of starting there.
    pub is_root: bool,
    pub is_first_child: bool,
    pub has_following_sibling: bool,
}

impl Placement {
    pub const ROOT: Self = Self {
        is_root: true,
        is_first_child: false,
        has_following_sibling: false,
    };
}

/// Places `node` with its box at `(origin_x, origin_y)` and recursively places its
/// children on the row below.
///
/// Children start at `middle - expected_child_width / 2`, where `middle` is this box's
/// horizontal centre, and each following sibling starts `gap` pixels after the previous
/// sibling's box. Only the boxes are accounted for, so a sibling whose own subtree is
/// wider than its box can overlap the next sibling's subtree.
pub fn assign_geometry(
    node: &TreeNode,
    origin_x: i32,
    origin_y: i32,
    ctx: &mut LayoutContext,
    palette: &Palette,
    placement: Placement,
) -> DrawNode {
    ctx.node_count += 1;

    let (width, height) = box_size(node.name_len(), ctx);
    let x = if placement.is_root {
        origin_x.saturating_sub(width / 2)
    } else {
        origin_x
    };
    let y = origin_y;

    let mut next_level_needed_width = None;
    let mut children = Vec::with_capacity(node.child_count());

    if node.is_branch() {
        ctx.branch_count += 1;
        let expected = fit_child_row(node, ctx);
        next_level_needed_width = Some(expected);

        let middle = x.saturating_add(width / 2);
        let child_y = y.saturating_add(ctx.row_step(height));
        let mut cursor = middle.saturating_sub(expected / 2);
        let last = node.child_count().saturating_sub(1);
        for (idx, child) in node.children().iter().enumerate() {
            let placed = assign_geometry(
                child,
                cursor,
                child_y,
                ctx,
                palette,
                Placement {
                    is_root: false,
                    is_first_child: idx == 0,
                    has_following_sibling: idx < last,
                },
            );
            // Read the gap after recursing: a descendant may have shrunk it.
            cursor = placed.x.saturating_add(placed.width).saturating_add(ctx.gap);
            children.push(placed);
        }
    }

    DrawNode {
        // ASCII-only so the character count, and with it the box width, stays fixed.
        name: node.name().to_ascii_uppercase(),
        kind: node.kind(),
        x,
        y,
        width,
        height,
        color: if node.is_branch() {
            palette.branch_fill
        } else {
            palette.leaf_fill
        },
        child_count: node.child_count(),
        next_level_needed_width,
        has_following_sibling: placement.has_following_sibling,
        is_first_child: placement.is_first_child,
        children,
    }
}

/// Box size for a label of `name_len` characters. The `- 1` drops the whitespace column
/// and row that every glyph cell carries. Saturates instead of overflowing.
pub fn box_size(name_len: usize, ctx: &LayoutContext) -> (i32, i32) {
    let cell = GLYPH_CELL.saturating_mul(ctx.scale);
    let margins = ctx.padding.saturating_mul(2);
    let width = cell
        .saturating_mul(to_i32(name_len))
        .saturating_sub(1)
        .saturating_add(margins);
    let height = cell.saturating_sub(1).saturating_add(margins);
    (width, height)
}

/// Estimated width of the row holding `node`'s children: every child box plus a gap
/// between neighbours. Zero for a childless node.
pub fn expected_child_width(node: &TreeNode, ctx: &LayoutContext) -> i32 {
    let count = to_i32(node.child_count());
    if count == 0 {
        return 0;
    }
    let names = to_i32(node.child_name_len());
    let per_box = ctx.padding.saturating_mul(2).saturating_sub(1);
    names
        .saturating_mul(GLYPH_CELL.saturating_mul(ctx.scale))
        .saturating_add(per_box.saturating_mul(count))
        .saturating_add(ctx.gap.saturating_mul(count - 1))
}

/// Computes the child row width, shrinking `ctx.gap` when the row plus a gap margin on
/// either side does not fit on the canvas. The shrunk gap stays in effect for the rest
/// of the pass.
fn fit_child_row(node: &TreeNode, ctx: &mut LayoutContext) -> i32 {
    let expected = expected_child_width(node, ctx);
    let count = to_i32(node.child_count());
    if count == 0 || expected.saturating_add(ctx.gap.saturating_mul(2)) <= ctx.canvas_width {
        return expected;
    }

    ctx.overflow_count += 1;
    if count == 1 {
        warn!(
            node = node.name(),
            needed = expected,
            canvas = ctx.canvas_width,
            "child row wider than canvas; single child, gap unchanged"
        );
        return expected;
    }

    let spare = ctx.canvas_width.saturating_sub(expected).saturating_add(count);
    let fitted = (spare / (count - 1)).max(0);
    let previous = ctx.gap;
    ctx.gap = fitted.min(previous);
    warn!(
        node = node.name(),
        needed = expected,
        canvas = ctx.canvas_width,
        previous_gap = previous,
        gap = ctx.gap,
        "child row wider than canvas; shrinking sibling gap"
    );
    expected_child_width(node, ctx)
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
