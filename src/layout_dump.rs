use crate::layout::{DrawNode, Layout};
use crate::tree::NodeKind;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub node_count: usize,
    pub branch_count: usize,
    pub overflow_count: usize,
    pub final_gap: i32,
    pub root: NodeDump,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub name: String,
    pub kind: NodeKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level_needed_width: Option<i32>,
    pub is_first_child: bool,
    pub has_following_sibling: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDump>,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        LayoutDump {
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            node_count: layout.node_count,
            branch_count: layout.branch_count,
            overflow_count: layout.overflow_count,
            final_gap: layout.final_gap,
            root: NodeDump::from_node(&layout.root),
        }
    }
}

impl NodeDump {
    fn from_node(node: &DrawNode) -> Self {
        NodeDump {
            name: node.name.clone(),
            kind: node.kind,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            color: format!("#{:06X}", node.color.0),
            next_level_needed_width: node.next_level_needed_width,
            is_first_child: node.is_first_child,
            has_following_sibling: node.has_following_sibling,
            children: node.children.iter().map(NodeDump::from_node).collect(),
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::compute_layout;
    use crate::tree::TreeNode;

    #[test]
    fn dump_mirrors_geometry() {
        let tree = TreeNode::branch("root").with_child(TreeNode::leaf("file"));
        let config = Config::default();
        let layout = compute_layout(&tree, &config.theme, &config).unwrap();
        let value = serde_json::to_value(LayoutDump::from_layout(&layout)).unwrap();

        assert_eq!(value["node_count"], 2);
        assert_eq!(value["root"]["name"], "ROOT");
        assert_eq!(value["root"]["kind"], "branch");
        assert_eq!(value["root"]["color"], "#FF0000");
        assert_eq!(value["root"]["x"], layout.root.x);
        let child = &value["root"]["children"][0];
        assert_eq!(child["kind"], "leaf");
        assert!(child.get("next_level_needed_width").is_none());
        assert!(child.get("children").is_none());
    }
}
