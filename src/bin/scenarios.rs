//! Builds a few small trees, checks their contents and shape, and reports `Test N : true|false`
//! for each. Exits with a non-zero status if any check fails.

use std::process;
use std::rc::Rc;

use log::{info, warn, LevelFilter};
use ordered_tree::{Node, OrderedTree};
use simple_logger::SimpleLogger;

/// Integers inserted on both sides of the root, then looked up at the root, inner nodes and
/// leaves, plus one value that was never inserted.
fn lookups() -> bool {
    let tree: OrderedTree<i32> = vec![20, 10, 5, 30, 25, 1, 40].into_iter().collect();

    tree.size() == 7
        && [20, 1, 40, 10, 25].iter().all(|x| tree.contains(x))
        && !tree.contains(&100)
}

/// Strings with one duplicate. Checks the root, its children and their back-links.
fn shape() -> bool {
    let tree: OrderedTree<&str> = vec!["b", "a", "c", "c"].into_iter().collect();
    if tree.size() != 4 || !["a", "b", "c"].iter().all(|s| tree.contains(*s)) {
        return false;
    }

    let root = match tree.root() {
        Some(root) => root,
        None => return false,
    };
    *root.value() == "b"
        && is_child_of(root.left(), &root, "a")
        && is_child_of(root.right(), &root, "c")
}

fn is_child_of(
    child: Option<Rc<Node<&'static str>>>,
    parent: &Rc<Node<&'static str>>,
    expected: &str,
) -> bool {
    child.map_or(false, |child| {
        *child.value() == expected
            && child.parent().map_or(false, |p| Rc::ptr_eq(&p, parent))
    })
}

/// Clears a populated tree and builds a new one in its place.
fn clear_and_refill() -> bool {
    let mut tree: OrderedTree<i32> = vec![20, 10, 5, 30, 25, 1, 40].into_iter().collect();
    if tree.size() != 7 {
        return false;
    }

    tree.clear();
    if !tree.is_empty() || tree.size() != 0 {
        return false;
    }

    tree.extend(vec![3, 2, 5, 4, 1]);
    tree.size() == 5 && !tree.is_empty() && tree.contains(&1)
}

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("failed to install logger: {}", e);
    }

    let scenarios: [(&str, fn() -> bool); 3] = [
        ("lookups", lookups),
        ("shape", shape),
        ("clear and refill", clear_and_refill),
    ];

    let mut failed = 0;
    for (i, (name, scenario)) in scenarios.iter().enumerate() {
        let passed = scenario();
        println!("Test {} : {}", i + 1, passed);
        if passed {
            info!("scenario '{}' passed", name);
        } else {
            warn!("scenario '{}' failed", name);
            failed += 1;
        }
    }

    if failed > 0 {
        process::exit(1);
    }
}
