#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]

//! An AVL tree built from exclusively owned nodes.
//!
//! Each node caches the height of its subtree and every insert or remove
//! restores balance on the way back up through one of the four classic
//! rotations. The tree stores bare keys; keys equal to an existing one are
//! kept and routed to its right.
//!
//! # Example
//! ```rust
//! use owned_avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! let view = tree.snapshot().unwrap();
//! assert_eq!(view.key, 20);
//! assert_eq!(view.to_string(), "20\n├─ 10\n└─ 30");
//!
//! assert!(tree.remove(&20));
//! assert!(!tree.remove(&20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! assert!(tree.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`tree`]: [`AvlTree`] with insertion, removal and traversal.
//! - [`view`]: [`TreeView`], the owned snapshot handed to display code.
//! - [`command`]: a text command front-end driving a tree of integers.
//! - [`error`]: invariant and command parsing errors.

pub mod command;
pub mod error;
mod node;
mod rotate;
pub mod tree;
pub mod view;

pub use error::{CommandError, InvariantError};
pub use tree::{AvlTree, Iter};
pub use view::TreeView;
