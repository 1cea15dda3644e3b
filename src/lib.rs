//! This crate exposes an ordered container backed by an unbalanced Binary Search Tree (BST)
//! that keeps duplicate values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a value and will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than or equal to
//!    its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! Rule 1 means equal values always go left, so repeated inserts of one value pile up along the
//! left-ward path from where it was first inserted.
//!
//! Every `Node` also knows its parent. The parent link is weak: it lets callers walk up the tree
//! but never keeps a `Node` alive on its own.
//!
//! Searching takes `O(height)`. Since nothing rebalances the tree, the height is `O(N)` for
//! sorted input and `O(lg N)` on average for random input.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod collection;
mod error;
pub mod ordered;

pub use collection::SortedCollection;
pub use error::TreeError;
pub use ordered::{Node, OrderedTree};
