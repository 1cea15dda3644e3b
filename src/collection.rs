use std::borrow::Borrow;

/// A collection that keeps its values in sorted order and allows duplicates.
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, SortedCollection};
///
/// fn fill<C: SortedCollection<i32>>(collection: &mut C) {
///     for x in [3, 1, 2, 3] {
///         collection.insert(x);
///     }
/// }
///
/// let mut tree = OrderedTree::new();
/// fill(&mut tree);
///
/// assert_eq!(SortedCollection::size(&tree), 4);
/// assert!(SortedCollection::contains(&tree, &2));
/// ```
pub trait SortedCollection<T: Ord> {
    /// Adds `value` to the collection. Values equal to existing ones are kept alongside them.
    fn insert(&mut self, value: T);

    /// Returns whether some stored value compares equal to `probe`.
    fn contains<Q>(&self, probe: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Number of stored values, counting duplicates.
    fn size(&self) -> usize;

    /// Returns `true` when nothing is stored.
    fn is_empty(&self) -> bool;

    /// Removes every value.
    fn clear(&mut self);
}
