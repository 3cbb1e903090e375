use serde::Serialize;

/// Longest stored name in bytes; longer names are cut on a character boundary.
pub const MAX_NAME_BYTES: usize = 511;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Interior node, e.g. a directory. Drawn with an arrow to its children even when empty.
    Branch,
    Leaf,
}

/// A node of the input hierarchy.
///
/// Children keep insertion order. `child_name_len` is the sum of the immediate children's
/// name lengths (in characters) and feeds the width estimate of the child row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    kind: NodeKind,
    children: Vec<TreeNode>,
    child_name_len: usize,
}

impl TreeNode {
    pub fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: truncate_name(name, MAX_NAME_BYTES).to_string(),
            kind,
            children: Vec::new(),
            child_name_len: 0,
        }
    }

    pub fn branch(name: &str) -> Self {
        Self::new(name, NodeKind::Branch)
    }

    pub fn leaf(name: &str) -> Self {
        Self::new(name, NodeKind::Leaf)
    }

    /// Appends `child` after the existing children and updates the width metric.
    pub fn append_child(&mut self, child: TreeNode) {
        self.child_name_len += child.name_len();
        self.children.push(child);
    }

    /// Builder form of [`TreeNode::append_child`].
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.append_child(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name length in characters; one glyph cell per character.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_branch(&self) -> bool {
        self.kind == NodeKind::Branch
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_name_len(&self) -> usize {
        self.child_name_len
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a lone node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Indented text dump: five spaces per level, `[P]` for branches, `[C]` for leaves.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, level: usize) {
        let tag = match self.kind {
            NodeKind::Branch => "[P]",
            NodeKind::Leaf => "[C]",
        };
        let indent = " ".repeat(level * 5);
        out.push_str(&format!(
            "{indent}{tag}{}({})\n",
            self.name,
            self.child_count()
        ));
        for child in &self.children {
            child.write_outline(out, level + 1);
        }
    }
}

fn truncate_name(name: &str, max_bytes: usize) -> &str {
    if name.len() <= max_bytes {
        return name;
    }
    let mut end = max_bytes;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
