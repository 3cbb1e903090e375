use crate::config::{CanvasConfig, LayoutConfig};
use crate::theme::Color;
use crate::tree::NodeKind;

/// A tree node with its box placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawNode {
    /// Upper-cased label, drawn as-is.
    pub name: String,
    pub kind: NodeKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub child_count: usize,
    /// Width reserved for the child row; `None` for leaves.
    pub next_level_needed_width: Option<i32>,
    pub has_following_sibling: bool,
    pub is_first_child: bool,
    pub children: Vec<DrawNode>,
}

impl DrawNode {
    pub fn is_branch(&self) -> bool {
        self.kind == NodeKind::Branch
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn center_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    /// Pre-order iterator over this subtree: a node, then its children left to right.
    pub fn iter(&self) -> DrawNodeIter<'_> {
        DrawNodeIter { stack: vec![self] }
    }
}

#[derive(Debug)]
pub struct DrawNodeIter<'a> {
    stack: Vec<&'a DrawNode>,
}

impl<'a> Iterator for DrawNodeIter<'a> {
    type Item = &'a DrawNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: DrawNode,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub node_count: usize,
    pub branch_count: usize,
    /// Child rows that did not fit the canvas and forced the gap to shrink.
    pub overflow_count: usize,
    /// Sibling gap in effect when the pass finished.
    pub final_gap: i32,
}

/// Mutable state threaded through one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutContext {
    pub scale: i32,
    pub padding: i32,
    /// Sibling gap; shrinks when a child row overflows the canvas.
    pub gap: i32,
    pub arrow_length: i32,
    pub vertical_gap: i32,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub node_count: usize,
    pub branch_count: usize,
    pub overflow_count: usize,
}

impl LayoutContext {
    pub fn new(config: &LayoutConfig, canvas: &CanvasConfig) -> Self {
        Self {
            scale: config.scale,
            padding: config.padding,
            gap: config.gap,
            arrow_length: config.arrow_length,
            vertical_gap: config.vertical_gap,
            canvas_width: i32::try_from(canvas.width).unwrap_or(i32::MAX),
            canvas_height: i32::try_from(canvas.height).unwrap_or(i32::MAX),
            node_count: 0,
            branch_count: 0,
            overflow_count: 0,
        }
    }

    /// Restores the configured values, undoing any gap shrinking and counters.
    pub fn reset(&mut self, config: &LayoutConfig, canvas: &CanvasConfig) {
        *self = Self::new(config, canvas);
    }

    /// Vertical distance from a box's top edge to its child row.
    pub fn row_step(&self, box_height: i32) -> i32 {
        box_height
            .saturating_add(self.arrow_length)
            .saturating_add(self.vertical_gap)
    }
}
