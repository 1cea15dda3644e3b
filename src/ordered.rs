//! An unbalanced BST that keeps duplicates. Every node owns its children and keeps a weak
//! back-link to its parent, so the shape of the tree can be walked in both directions without
//! the parent links ever keeping a node alive.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! tree.insert(2);
//! tree.insert(1);
//!
//! // Inserting an equal value keeps both.
//! tree.insert(2);
//! assert_eq!(tree.size(), 3);
//!
//! // Absent values are rejected by the checked entry points.
//! assert!(tree.try_insert(None).is_err());
//! assert_eq!(tree.size(), 3);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

use std::borrow::Borrow;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::{SortedCollection, TreeError};

/// A Binary Search Tree of values. Values equal to a node's value are placed in its left subtree,
/// larger values in its right subtree. No balancing is done so the shape depends on insertion
/// order.
pub struct OrderedTree<T> {
    root: Option<Rc<Node<T>>>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Copies every node, keeping the exact shape and linking each copy to its new parent.
    fn clone(&self) -> Self {
        let root = match &self.root {
            Some(root) => root,
            None => return Self::new(),
        };

        let new_root = Node::new_rc(root.value.clone());
        let mut stack = vec![(Rc::clone(root), Rc::clone(&new_root))];
        while let Some((source, copy)) = stack.pop() {
            if let Some(left) = source.left() {
                let child = Node::attach(&copy, &copy.left, left.value.clone());
                stack.push((left, child));
            }
            if let Some(right) = source.right() {
                let child = Node::attach(&copy, &copy.right, right.value.clone());
                stack.push((right, child));
            }
        }

        Self {
            root: Some(new_root),
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    /// Lists the values in pre-order. Re-inserting them in that order rebuilds the exact same
    /// shape, and walking an explicit stack keeps deep trees from overflowing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut preorder = Vec::new();
        let mut stack: Vec<_> = self.root.iter().map(Rc::clone).collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.right());
            stack.extend(node.left());
            preorder.push(node);
        }

        let values: Vec<&T> = preorder.iter().map(|node| &node.value).collect();
        f.debug_struct("OrderedTree")
            .field("preorder", &values)
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `value` into the tree. Starting at the root, the value goes left when it compares
    /// less than or equal to a node's value and right otherwise, until it reaches an empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert("b");
    /// tree.insert("b");
    ///
    /// // The duplicate is the root's left child.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.value()), Some("b"));
    /// assert!(root.right().is_none());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut current = match self.root() {
            Some(root) => root,
            None => {
                self.root = Some(Node::new_rc(value));
                trace!("inserted new root");
                return;
            }
        };

        let mut depth = 1;
        loop {
            let next = {
                let slot = current.slot_for(&value);
                let next = slot.borrow().as_ref().map(Rc::clone);
                match next {
                    Some(next) => next,
                    None => {
                        Node::attach(&current, slot, value);
                        trace!("inserted value at depth {}", depth);
                        return;
                    }
                }
            };
            current = next;
            depth += 1;
        }
    }

    /// Like [`insert`][Self::insert] but takes a value that may be absent. An absent value is
    /// rejected with [`TreeError::InvalidArgument`] and the tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.try_insert(Some(1)), Ok(()));
    /// assert_eq!(tree.try_insert(None), Err(TreeError::InvalidArgument));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn try_insert(&mut self, value: Option<T>) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let value = value.ok_or(TreeError::InvalidArgument)?;
        self.insert(value);
        Ok(())
    }

    /// Returns whether any stored value compares equal to `probe`. The probe can be any type the
    /// stored values borrow as, e.g. `&str` for a tree of `String`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("z"));
    /// ```
    pub fn contains<Q>(&self, probe: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_ref().map(Rc::clone);
        while let Some(node) = current {
            current = match probe.cmp(node.value.borrow()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Like [`contains`][Self::contains] but takes a probe that may be absent. An absent probe is
    /// rejected with [`TreeError::InvalidArgument`].
    pub fn try_contains<Q>(&self, probe: Option<&Q>) -> Result<bool, TreeError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        probe
            .map(|probe| self.contains(probe))
            .ok_or(TreeError::InvalidArgument)
    }

    /// Counts the stored values, duplicates included. This walks the whole tree on every call.
    pub fn size(&self) -> usize {
        let mut stack: Vec<_> = self.root.iter().map(Rc::clone).collect();
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }

        count
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            let released = release(root);
            debug!("cleared tree, released {} nodes", released);
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<Rc<Node<T>>> {
        self.root.as_ref().map(Rc::clone)
    }
}

impl<T> SortedCollection<T> for OrderedTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) {
        OrderedTree::insert(self, value)
    }

    fn contains<Q>(&self, probe: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        OrderedTree::contains(self, probe)
    }

    fn size(&self) -> usize {
        OrderedTree::size(self)
    }

    fn is_empty(&self) -> bool {
        OrderedTree::is_empty(self)
    }

    fn clear(&mut self) {
        OrderedTree::clear(self)
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

type Child<T> = RefCell<Option<Rc<Node<T>>>>;

/// A single stored value with its two children and a back-link to its parent. The value never
/// changes after the node is created.
pub struct Node<T> {
    value: T,
    left: Child<T>,
    right: Child<T>,
    parent: RefCell<Weak<Node<T>>>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Children are shown by value only and the parent is left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = self.left.borrow();
        let right = self.right.borrow();
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &left.as_ref().map(|n| &n.value))
            .field("right", &right.as_ref().map(|n| &n.value))
            .finish()
    }
}

impl<T> Drop for Node<T> {
    // Unlinks the subtree one node at a time so that a long spine doesn't drop recursively. A
    // child still shared with a caller is left to them and torn down the same way later.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.left.get_mut().take().into_iter().collect();
        stack.extend(self.right.get_mut().take());
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                stack.extend(node.left.get_mut().take());
                stack.extend(node.right.get_mut().take());
            }
        }
    }
}

impl<T> Node<T> {
    fn new_rc(value: T) -> Rc<Self> {
        Rc::new(Self {
            value,
            left: RefCell::new(None),
            right: RefCell::new(None),
            parent: RefCell::new(Weak::new()),
        })
    }

    /// Creates a node holding `value`, stores it in `slot` (one of `parent`'s children) and
    /// points its back-link at `parent`.
    fn attach(parent: &Rc<Self>, slot: &Child<T>, value: T) -> Rc<Self> {
        let child = Self::new_rc(value);
        *child.parent.borrow_mut() = Rc::downgrade(parent);
        *slot.borrow_mut() = Some(Rc::clone(&child));
        child
    }

    /// The child slot a search for `value` continues into.
    fn slot_for(&self, value: &T) -> &Child<T>
    where
        T: Ord,
    {
        if *value <= self.value {
            &self.left
        } else {
            &self.right
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child. Its value, and every value below it, is less than or equal to this one.
    pub fn left(&self) -> Option<Rc<Self>> {
        self.left.borrow().as_ref().map(Rc::clone)
    }

    /// The right child. Its value, and every value below it, is greater than this one.
    pub fn right(&self) -> Option<Rc<Self>> {
        self.right.borrow().as_ref().map(Rc::clone)
    }

    /// The node this one hangs from, or `None` for the root. Also `None` once the tree that held
    /// the parent has been cleared or dropped.
    pub fn parent(&self) -> Option<Rc<Self>> {
        self.parent.borrow().upgrade()
    }
}

/// Tears down the subtree under `root` and returns how many nodes were freed. A node still shared
/// with a caller stays alive together with everything below it and isn't counted.
fn release<T>(root: Rc<Node<T>>) -> usize {
    let mut stack = vec![root];
    let mut released = 0;
    while let Some(node) = stack.pop() {
        if let Ok(mut node) = Rc::try_unwrap(node) {
            released += 1;
            stack.extend(node.left.get_mut().take());
            stack.extend(node.right.get_mut().take());
        }
    }

    released
}
