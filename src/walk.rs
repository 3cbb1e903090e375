//! Builds a [`TreeNode`] hierarchy from a directory on disk.

use crate::error::{Error, Result};
use crate::tree::TreeNode;
use std::path::Path;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Walks `root` and returns its hierarchy: directories become branches, everything else
/// leaves. Entries are visited in file-name order and symbolic links are not followed, so
/// the result is always finite and acyclic. Unreadable entries below the root are logged
/// and skipped.
#[instrument(level = "debug")]
pub fn walk_directory(root: &Path) -> Result<TreeNode> {
    let meta = std::fs::metadata(root)?;
    let name = root_name(root);
    if !meta.is_dir() {
        return Ok(TreeNode::leaf(&name));
    }

    let mut tree = TreeNode::branch(&name);
    // `open[i]` is the directory currently being filled at depth `i + 1`.
    let mut open: Vec<TreeNode> = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        close_until(&mut tree, &mut open, entry.depth());
        let name = entry.file_name().to_string_lossy();
        let node = if entry.file_type().is_dir() {
            TreeNode::branch(&name)
        } else {
            TreeNode::leaf(&name)
        };
        open.push(node);
    }
    close_until(&mut tree, &mut open, 1);

    debug!(nodes = tree.node_count(), depth = tree.depth(), "walked hierarchy");
    Ok(tree)
}

/// Attaches finished nodes to their parents until the innermost open node sits at
/// `depth - 1`.
fn close_until(tree: &mut TreeNode, open: &mut Vec<TreeNode>, depth: usize) {
    while open.len() >= depth {
        let Some(done) = open.pop() else {
            break;
        };
        match open.last_mut() {
            Some(parent) => parent.append_child(done),
            None => tree.append_child(done),
        }
    }
}

fn root_name(root: &Path) -> String {
    let resolved = root.canonicalize().ok();
    resolved
        .as_deref()
        .unwrap_or(root)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use std::fs;

    #[test]
    fn builds_sorted_hierarchy() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("proj");
        fs::create_dir_all(base.join("src/bin")).unwrap();
        fs::create_dir_all(base.join("docs")).unwrap();
        fs::write(base.join("src/main.rs"), "").unwrap();
        fs::write(base.join("src/bin/tool.rs"), "").unwrap();
        fs::write(base.join("README"), "").unwrap();

        let tree = walk_directory(&base).unwrap();
        let expected = "\
[P]proj(3)
     [C]README(0)
     [P]docs(0)
     [P]src(2)
          [P]bin(1)
               [C]tool.rs(0)
          [C]main.rs(0)
";
        assert_eq!(tree.outline(), expected);
        assert_eq!(tree.child_name_len(), "README".len() + "docs".len() + "src".len());
    }

    #[test]
    fn file_root_is_a_leaf() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "x").unwrap();
        let tree = walk_directory(&file).unwrap();
        assert_eq!(tree.kind(), NodeKind::Leaf);
        assert_eq!(tree.name(), "notes.txt");
    }

    #[test]
    fn empty_directory_is_empty_branch() {
        let dir = tempfile::tempdir().unwrap();
        let tree = walk_directory(dir.path()).unwrap();
        assert!(tree.is_branch());
        assert_eq!(tree.child_count(), 0);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            walk_directory(&dir.path().join("nope")),
            Err(Error::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loops_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("loop");
        fs::create_dir(&base).unwrap();
        std::os::unix::fs::symlink(&base, base.join("self")).unwrap();
        let tree = walk_directory(&base).unwrap();
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.children()[0].kind(), NodeKind::Leaf);
    }
}
