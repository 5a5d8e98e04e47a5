//! Owned tree nodes and height bookkeeping.

use core::cmp;

/// An owning reference to a subtree, `None` for an empty position.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// The height of an absent subtree.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline(always)]
    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The root of one subtree.
///
/// A node owns both of its children exclusively. `height` is a cache of
/// `1 + max(height(left), height(right))` and is refreshed with
/// [`Node::recompute_height`] whenever the child set changes; a leaf has
/// height 0.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

/// Height of `link`, or [`EMPTY_HEIGHT`] when absent.
#[inline(always)]
pub(crate) fn height_of<K>(link: &Link<K>) -> i32 {
    match link {
        Some(node) => node.height,
        None => EMPTY_HEIGHT,
    }
}

impl<K> Node<K> {
    #[inline]
    pub(crate) fn new(key: K) -> Box<Self> {
        Box::new(Node { key, left: None, right: None, height: 0 })
    }

    #[inline(always)]
    pub(crate) fn child(&self, dir: Direction) -> &Link<K> {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn child_mut(&mut self, dir: Direction) -> &mut Link<K> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn child_height(&self, dir: Direction) -> i32 {
        height_of(self.child(dir))
    }

    #[inline]
    pub(crate) fn recompute_height(&mut self) {
        self.height =
            1 + cmp::max(self.child_height(Direction::Left), self.child_height(Direction::Right));
    }

    /// `height(right) - height(left)`; positive when right heavy.
    #[inline(always)]
    pub(crate) fn skew(&self) -> i32 {
        self.child_height(Direction::Right) - self.child_height(Direction::Left)
    }

    /// Drops both child links and resets the node to a leaf.
    #[inline]
    pub(crate) fn detach(&mut self) -> (Link<K>, Link<K>) {
        let children = (self.left.take(), self.right.take());
        self.height = 0;
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link<i32> {
        Some(Node::new(key))
    }

    #[test]
    fn absent_height() {
        let link: Link<i32> = None;
        assert_eq!(height_of(&link), EMPTY_HEIGHT);
        assert_eq!(height_of(&leaf(1)), 0);
    }

    #[test]
    fn recompute_after_attach() {
        let mut node = Node::new(10);
        node.left = leaf(5);
        node.recompute_height();
        assert_eq!(node.height, 1);
        assert_eq!(node.skew(), -1);

        let mut right = Node::new(20);
        right.right = leaf(30);
        right.recompute_height();
        node.right = Some(right);
        node.recompute_height();
        assert_eq!(node.height, 2);
        assert_eq!(node.skew(), 1);
        assert_eq!(node.child_height(Direction::Left.reverse()), 1);
    }

    #[test]
    fn detach_clears_links() {
        let mut node = Node::new(10);
        node.left = leaf(5);
        node.right = leaf(15);
        node.recompute_height();
        let (left, right) = node.detach();
        assert_eq!(left.map(|n| n.key), Some(5));
        assert_eq!(right.map(|n| n.key), Some(15));
        assert!(node.left.is_none() && node.right.is_none());
        assert_eq!(node.height, 0);
    }
}
