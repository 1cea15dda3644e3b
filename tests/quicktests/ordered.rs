use ordered_tree::{Node, OrderedTree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;
use std::rc::Rc;

use crate::Op;

/// Applies a set of operations to a tree and a plain `Vec` holding the same values.
/// Every `Contains` is checked against the `Vec` as it happens.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, values: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                values.push(x.clone());
            }
            Op::Contains(x) => {
                if tree.contains(x) != values.contains(x) {
                    return false;
                }
            }
            Op::Clear => {
                tree.clear();
                values.clear();
            }
        }
    }

    true
}

/// Collects every value in the subtree rooted at `node`.
fn subtree_values<T: Clone>(node: &Rc<Node<T>>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack = vec![Rc::clone(node)];
    while let Some(node) = stack.pop() {
        values.push(node.value().clone());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    values
}

/// Checks the ordering invariant and that every child links back to its parent.
fn is_well_formed<T: Ord + Clone>(tree: &OrderedTree<T>) -> bool {
    let root = match tree.root() {
        Some(root) => root,
        None => return tree.is_empty(),
    };
    if root.parent().is_some() {
        return false;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let Some(left) = node.left() {
            let linked = left.parent().map_or(false, |p| Rc::ptr_eq(&p, &node));
            let ordered = subtree_values(&left).iter().all(|x| x <= node.value());
            if !linked || !ordered {
                return false;
            }
            stack.push(left);
        }
        if let Some(right) = node.right() {
            let linked = right.parent().map_or(false, |p| Rc::ptr_eq(&p, &node));
            let ordered = subtree_values(&right).iter().all(|x| x > node.value());
            if !linked || !ordered {
                return false;
            }
            stack.push(right);
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut values = Vec::new();

    do_ops(&ops, &mut tree, &mut values)
        && tree.size() == values.len()
        && tree.is_empty() == values.is_empty()
        && is_well_formed(&tree)
}

#[quickcheck]
fn ordering_invariant(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    is_well_formed(&tree)
}

#[quickcheck]
fn size_counts_every_insert(xs: Vec<u8>) -> bool {
    let mut tree = OrderedTree::new();
    for (inserted, x) in xs.iter().enumerate() {
        if tree.size() != inserted {
            return false;
        }
        tree.insert(*x);
    }

    tree.size() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicates_add_to_size(xs: Vec<i8>, duplicate: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.insert(duplicate);
    tree.insert(duplicate);

    tree.size() == xs.len() + 2 && tree.contains(&duplicate) && is_well_formed(&tree)
}

#[quickcheck]
fn clear_resets(xs: Vec<String>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().cloned().collect();
    tree.clear();

    tree.is_empty()
        && tree.size() == 0
        && tree.root().is_none()
        && xs.iter().all(|x| !tree.contains(x.as_str()))
}

#[quickcheck]
fn absent_values_leave_tree_unchanged(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let before = format!("{:?}", tree);

    tree.try_insert(None) == Err(TreeError::InvalidArgument)
        && tree.try_contains::<i8>(None) == Err(TreeError::InvalidArgument)
        && tree.size() == xs.len()
        && format!("{:?}", tree) == before
}

#[quickcheck]
fn clone_is_identical(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let copy = tree.clone();

    format!("{:?}", copy) == format!("{:?}", tree) && is_well_formed(&copy)
}
