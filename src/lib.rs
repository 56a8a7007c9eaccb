//! This crate exposes a plain, unbalanced Binary Search Tree (BST) used as
//! an in-memory ordered key-value container.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, a value
//! and at most two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(depth)` where `depth` is the number of nodes on the
//! longest path from the root to a leaf. This tree never rebalances, so
//! inserting keys in sorted order produces a tree whose depth equals the
//! number of keys.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert(5, "A");
//!
//! assert_eq!(tree.find(&5), Ok(&"A"));
//! assert_eq!(tree.remove(&5), Ok("A"));
//! assert_eq!(tree.find(&5), Err(Error::KeyNotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod unbalanced;
mod util;


pub use error::{Error, Result};
pub use unbalanced::Tree;
