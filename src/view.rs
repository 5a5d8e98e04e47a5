//! Read-only snapshots of a tree's shape.
//!
//! A [`TreeView`] is an owned copy: it holds no references into the live
//! tree and stays valid across later mutations.

use crate::node::Node;
use core::{cmp, fmt};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One node of a snapshot, with the cached height it had when taken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TreeView<K> {
    pub key: K,
    pub height: i32,
    pub left: Option<Box<TreeView<K>>>,
    pub right: Option<Box<TreeView<K>>>,
}

impl<K: Clone> TreeView<K> {
    pub(crate) fn from_node(node: &Node<K>) -> Self {
        TreeView {
            key: node.key.clone(),
            height: node.height,
            left: node.left.as_deref().map(|n| Box::new(TreeView::from_node(n))),
            right: node.right.as_deref().map(|n| Box::new(TreeView::from_node(n))),
        }
    }
}

impl<K> TreeView<K> {
    /// Keys in order.
    pub fn keys(&self) -> Vec<&K> {
        let mut out = Vec::new();
        self.collect_keys(&mut out);
        out
    }

    fn collect_keys<'a>(&'a self, out: &mut Vec<&'a K>) {
        if let Some(left) = &self.left {
            left.collect_keys(out);
        }
        out.push(&self.key);
        if let Some(right) = &self.right {
            right.collect_keys(out);
        }
    }

    /// Height measured from the shape, ignoring the recorded `height` fields.
    pub fn derived_height(&self) -> i32 {
        let left = self.left.as_ref().map_or(-1, |l| l.derived_height());
        let right = self.right.as_ref().map_or(-1, |r| r.derived_height());
        1 + cmp::max(left, right)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn write_children(&self, f: &mut fmt::Formatter, tab: &str) -> fmt::Result
    where
        K: fmt::Display,
    {
        if self.is_leaf() {
            return Ok(());
        }
        let children = [(&self.left, "├─", "│  "), (&self.right, "└─", "   ")];
        for (child, branch, indent) in children {
            write!(f, "\n{tab}{branch} ")?;
            match child {
                Some(child) => {
                    write!(f, "{}", child.key)?;
                    child.write_children(f, &format!("{tab}{indent}"))?;
                }
                None => write!(f, "∅")?,
            }
        }
        Ok(())
    }
}

/// Renders the subtree one key per line, left child first:
///
/// ```text
/// 20
/// ├─ 10
/// └─ 30
///    ├─ 25
///    └─ ∅
/// ```
impl<K: fmt::Display> fmt::Display for TreeView<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key)?;
        self.write_children(f, "")
    }
}
