//! The rotation engine.
//!
//! Every transform takes ownership of a subtree root and hands back the root
//! that now owns that position. Heights are recomputed bottom-up inside the
//! transform, so callers only need to refresh the nodes above it.

use crate::node::{Direction, Node};
use log::trace;

/// The four classic rebalancing shapes.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub(crate) enum Rotation {
    /// Right-right case: the right child is promoted.
    Left,
    /// Left-left case: the left child is promoted.
    Right,
    /// Right-left case: the right child's left child is promoted.
    RightLeft,
    /// Left-right case: the left child's right child is promoted.
    LeftRight,
}

impl Rotation {
    /// Picks the rotation restoring balance at `node`, or `None` when the
    /// heights of its children are already within one of each other.
    pub(crate) fn needed<K>(node: &Node<K>) -> Option<Rotation> {
        let skew = node.skew();
        if skew.abs() <= 1 {
            return None;
        }
        let heavy = if skew > 0 { Direction::Right } else { Direction::Left };
        let child = node.child(heavy).as_deref()?;
        // An outer grandchild at least as tall as the inner one takes a single rotation.
        let single = child.child_height(heavy) >= child.child_height(heavy.reverse());
        Some(match (heavy, single) {
            (Direction::Right, true) => Rotation::Left,
            (Direction::Right, false) => Rotation::RightLeft,
            (Direction::Left, true) => Rotation::Right,
            (Direction::Left, false) => Rotation::LeftRight,
        })
    }
}

/// Promotes the `dir` child of `node` to subtree root.
fn rotate_single<K>(mut node: Box<Node<K>>, dir: Direction) -> Box<Node<K>> {
    let inverse = dir.reverse();
    let Some(mut child) = node.child_mut(dir).take() else {
        return node;
    };
    *node.child_mut(dir) = child.child_mut(inverse).take();
    node.recompute_height();
    *child.child_mut(inverse) = Some(node);
    child.recompute_height();
    child
}

/// Promotes the inner grandchild on the `dir` side of `node` to subtree root,
/// with `node` and its former `dir` child as the grandchild's children.
fn rotate_double<K>(mut node: Box<Node<K>>, dir: Direction) -> Box<Node<K>> {
    let inverse = dir.reverse();
    let Some(mut child) = node.child_mut(dir).take() else {
        return node;
    };
    let Some(mut grand) = child.child_mut(inverse).take() else {
        *node.child_mut(dir) = Some(child);
        return node;
    };

    /*
     * The grandchild's subtrees are split between the two flanking nodes:
     * its `dir` side goes to the child, its `inverse` side goes to node.
     */
    *child.child_mut(inverse) = grand.child_mut(dir).take();
    *node.child_mut(dir) = grand.child_mut(inverse).take();
    child.recompute_height();
    node.recompute_height();

    *grand.child_mut(inverse) = Some(node);
    *grand.child_mut(dir) = Some(child);
    grand.recompute_height();
    grand
}

/// Single left rotation: the right child becomes the subtree root.
#[inline]
pub(crate) fn rotate_left<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_single(node, Direction::Right)
}

/// Single right rotation: the left child becomes the subtree root.
#[inline]
pub(crate) fn rotate_right<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_single(node, Direction::Left)
}

#[inline]
pub(crate) fn rotate_right_left<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_double(node, Direction::Right)
}

#[inline]
pub(crate) fn rotate_left_right<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    rotate_double(node, Direction::Left)
}

/// Restores AVL balance at `node`, returning the new root of the subtree.
///
/// A node within tolerance is returned unchanged. After a double rotation both
/// new children are rebalanced as well.
pub(crate) fn rebalance<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(rotation) = Rotation::needed(&node) else {
        return node;
    };
    trace!(
        "rotate {:?}: left height {}, right height {}",
        rotation,
        node.child_height(Direction::Left),
        node.child_height(Direction::Right)
    );
    match rotation {
        Rotation::Left => rotate_left(node),
        Rotation::Right => rotate_right(node),
        Rotation::RightLeft | Rotation::LeftRight => {
            let mut root = if rotation == Rotation::RightLeft {
                rotate_right_left(node)
            } else {
                rotate_left_right(node)
            };
            root.left = root.left.take().map(rebalance);
            root.right = root.right.take().map(rebalance);
            root.recompute_height();
            root
        }
    }
}
