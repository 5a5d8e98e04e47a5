//! The AVL tree proper: insertion, removal and traversal.
//!
//! Every mutation descends recursively, taking ownership of each subtree on
//! the way down and handing back the subtree's (possibly new) root on the way
//! up, so no parent pointers are needed.

use crate::error::InvariantError;
use crate::node::{Direction, EMPTY_HEIGHT, Link, Node, height_of};
use crate::rotate::rebalance;
use crate::view::TreeView;
use core::cmp::{self, Ordering};
use core::iter::FusedIterator;
use core::{fmt, mem};
use log::debug;

/// A self-balancing binary search tree of bare keys.
///
/// Keys equal to one already stored are not rejected: insertion routes them
/// to the right of the existing key, and removal takes out the first equal key
/// met on the search path.
pub struct AvlTree<K> {
    root: Link<K>,
    count: usize,
}

/// Outcome of detaching one node from a subtree.
pub(crate) struct Removal<K> {
    /// The node taken out of the tree, with its links cleared. It carries the
    /// removed key.
    pub(crate) detached: Box<Node<K>>,
    /// What is left of the subtree, already rebalanced.
    pub(crate) remaining: Link<K>,
}

/// `Err` hands back the untouched subtree when the key is not present.
type Removed<K> = Result<Removal<K>, Box<Node<K>>>;

fn insert_into<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    let Some(mut node) = link else {
        return Node::new(key);
    };
    let dir = if key < node.key { Direction::Left } else { Direction::Right };
    let child = node.child_mut(dir).take();
    *node.child_mut(dir) = Some(insert_into(child, key));
    node.recompute_height();
    if node.skew().abs() == 2 { rebalance(node) } else { node }
}

fn remove_from<K: Ord>(mut node: Box<Node<K>>, key: &K) -> Removed<K> {
    let dir = match key.cmp(&node.key) {
        Ordering::Less => Direction::Left,
        Ordering::Greater => Direction::Right,
        Ordering::Equal => return Ok(remove_here(node)),
    };
    let Some(child) = node.child_mut(dir).take() else {
        return Err(node);
    };
    match remove_from(child, key) {
        Ok(Removal { detached, remaining }) => {
            *node.child_mut(dir) = remaining;
            node.recompute_height();
            Ok(Removal { detached, remaining: Some(rebalance(node)) })
        }
        Err(child) => {
            *node.child_mut(dir) = Some(child);
            Err(node)
        }
    }
}

/// Removes `node` itself from the subtree it roots.
fn remove_here<K>(mut node: Box<Node<K>>) -> Removal<K> {
    match node.detach() {
        (Some(left), Some(right)) => {
            // The in-order predecessor takes this node's place; the node it
            // came from leaves the tree carrying the removed key.
            let Removal { detached: mut predecessor, remaining } = remove_largest(left);
            mem::swap(&mut node.key, &mut predecessor.key);
            node.left = remaining;
            node.right = Some(right);
            node.recompute_height();
            Removal { detached: predecessor, remaining: Some(rebalance(node)) }
        }
        (left, right) => Removal { detached: node, remaining: left.or(right) },
    }
}

/// Detaches the largest node of a non-empty subtree.
fn remove_largest<K>(mut node: Box<Node<K>>) -> Removal<K> {
    match node.right.take() {
        None => {
            let (remaining, _) = node.detach();
            Removal { detached: node, remaining }
        }
        Some(right) => {
            let Removal { detached, remaining } = remove_largest(right);
            node.right = remaining;
            node.recompute_height();
            Removal { detached, remaining: Some(rebalance(node)) }
        }
    }
}

/// Walks `link` checking order between `lower` and `upper` (both inclusive),
/// balance and cached heights. Returns the derived height.
fn check_subtree<'a, K: Ord>(
    link: &'a Link<K>, lower: Option<&'a K>, upper: Option<&'a K>, counted: &mut usize,
) -> Result<i32, InvariantError> {
    let Some(node) = link else {
        return Ok(EMPTY_HEIGHT);
    };
    if lower.is_some_and(|low| node.key < *low) || upper.is_some_and(|up| node.key > *up) {
        return Err(InvariantError::Unordered);
    }
    *counted += 1;
    let left = check_subtree(&node.left, lower, Some(&node.key), counted)?;
    let right = check_subtree(&node.right, Some(&node.key), upper, counted)?;
    if (left - right).abs() > 1 {
        return Err(InvariantError::Unbalanced { left, right });
    }
    let expected = 1 + cmp::max(left, right);
    if node.height != expected {
        return Err(InvariantError::StaleHeight { cached: node.height, expected });
    }
    Ok(expected)
}

impl<K> AvlTree<K> {
    pub const fn new() -> Self {
        AvlTree { root: None, count: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree: 0 for a single node, -1 when empty.
    #[inline]
    pub fn height(&self) -> i32 {
        height_of(&self.root)
    }

    #[inline]
    pub fn first(&self) -> Option<&K> {
        self.end(Direction::Left)
    }

    #[inline]
    pub fn last(&self) -> Option<&K> {
        self.end(Direction::Right)
    }

    fn end(&self, dir: Direction) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(child) = node.child(dir).as_deref() {
            node = child;
        }
        Some(&node.key)
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.count)
    }

    /// An owned copy of the current shape, `None` when the tree is empty.
    pub fn snapshot(&self) -> Option<TreeView<K>>
    where
        K: Clone,
    {
        self.root.as_deref().map(TreeView::from_node)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Inserts `key`. Always accepts the key and returns `true`.
    pub fn insert(&mut self, key: K) -> bool {
        let root = self.root.take();
        self.root = Some(insert_into(root, key));
        self.count += 1;
        true
    }

    /// Removes `key`, returning whether it was present. A tree without the
    /// key is left exactly as it was.
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and returns the stored key that matched it.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let Some(root) = self.root.take() else {
            debug!("remove from empty tree");
            return None;
        };
        match remove_from(root, key) {
            Ok(Removal { detached, remaining }) => {
                self.root = remaining;
                self.count -= 1;
                Some(detached.key)
            }
            Err(root) => {
                self.root = Some(root);
                debug!("remove: key not present among {} nodes", self.count);
                None
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Checks search order, AVL balance, cached heights and the node count.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut counted = 0;
        check_subtree(&self.root, None, None, &mut counted)?;
        if counted != self.count {
            return Err(InvariantError::CountMismatch { counted, recorded: self.count });
        }
        Ok(())
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// In-order iterator returned by [`AvlTree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Link<K>, len: usize) -> Self {
        let depth = (height_of(root) + 1) as usize;
        let mut iter = Iter { stack: Vec::with_capacity(depth), remaining: len };
        iter.push_left(root);
        iter
    }

    #[inline]
    fn push_left(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
