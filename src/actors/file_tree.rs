//! Directory hierarchy built from slash-delimited paths

use crate::errors::{ActorError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The `name` path of a file record
pub(crate) fn record_name<'a>(record: &'a Value, index: usize, context: &str) -> Result<&'a str> {
    record
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ActorError::missing_field("name", format!("{} (file #{})", context, index)))
}

/// A node in the file tree
///
/// Serializes as `null` for a leaf and as an object for a directory, so
/// a leaf stays distinguishable from an empty directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileTreeNode {
    Leaf,
    Dir(FileTree),
}

impl FileTreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, FileTreeNode::Leaf)
    }

    /// Children of a directory node
    pub fn as_dir(&self) -> Option<&FileTree> {
        match self {
            FileTreeNode::Dir(tree) => Some(tree),
            FileTreeNode::Leaf => None,
        }
    }
}

/// One directory level: segment name to node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileTree {
    entries: BTreeMap<String, FileTreeNode>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from path strings
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    /// Build a tree from raw JSON records carrying a `name` path
    ///
    /// Fails on the first record without a string `name`; `context` names
    /// the owner of the records in that error.
    pub fn from_records(records: &[Value], context: &str) -> Result<Self> {
        let mut tree = Self::new();
        for (index, record) in records.iter().enumerate() {
            tree.insert(record_name(record, index, context)?);
        }
        Ok(tree)
    }

    /// Insert a single path, creating intermediate directories
    pub fn insert(&mut self, path: &str) {
        let mut segments: Vec<&str> = path.split('/').collect();
        // split always yields at least one segment
        let leaf = segments.pop().unwrap_or_default();

        let mut current = self;
        for segment in segments {
            let node = current
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| FileTreeNode::Dir(FileTree::new()));

            // A file recorded earlier under a directory's name becomes that directory
            if node.is_leaf() {
                *node = FileTreeNode::Dir(FileTree::new());
            }

            current = match node {
                FileTreeNode::Dir(child) => child,
                FileTreeNode::Leaf => unreachable!("leaf promoted above"),
            };
        }

        // The final segment is always a leaf, even over an existing directory
        current.entries.insert(leaf.to_string(), FileTreeNode::Leaf);
    }

    pub fn get(&self, segment: &str) -> Option<&FileTreeNode> {
        self.entries.get(segment)
    }

    /// Look up a node by its full slash-delimited path
    pub fn lookup(&self, path: &str) -> Option<&FileTreeNode> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut node = self.entries.get(first)?;
        for segment in segments {
            node = node.as_dir()?.entries.get(segment)?;
        }
        Some(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileTreeNode)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaves in the whole tree
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                FileTreeNode::Leaf => 1,
                FileTreeNode::Dir(child) => child.leaf_count(),
            })
            .sum()
    }

    /// Longest segment chain from the root to a leaf
    pub fn depth(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                FileTreeNode::Leaf => 1,
                FileTreeNode::Dir(child) => 1 + child.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Render as an indented listing, directories suffixed with `/`
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, level: usize) {
        for (name, node) in &self.entries {
            out.push_str(&"  ".repeat(level));
            out.push_str(name);
            match node {
                FileTreeNode::Leaf => out.push('\n'),
                FileTreeNode::Dir(child) => {
                    out.push_str("/\n");
                    child.render_into(out, level + 1);
                }
            }
        }
    }
}
