use avl::Tree;
use quickcheck_macros::quickcheck;

mod iter {
    use super::*;

    #[quickcheck]
    fn ascends(tree: Tree<u32>) -> bool {
        tree.iter().zip(tree.iter().skip(1)).all(|(l, r)| l < r)
    }

    #[quickcheck]
    fn descends_when_reversed(tree: Tree<u32>) -> bool {
        tree.iter().rev().zip(tree.iter().rev().skip(1)).all(|(r, l)| r > l)
    }

    #[quickcheck]
    fn size_hint_is_exact(tree: Tree<u32>) -> bool {
        let mut len = tree.len();
        let mut it = tree.iter();

        loop {
            if it.size_hint() != (len, Some(len)) { return false; }
            if it.next().is_none() { break; }
            len -= 1;
        }

        len == 0 && it.size_hint() == (0, Some(0))
    }
}

mod insert {
    use super::*;

    #[quickcheck]
    fn sets_len(tree: Tree<u32>, value: u32) -> bool {
        let mut tree = tree;
        let old_len = tree.len();

        if tree.insert(value) {
            tree.len() == old_len + 1
        } else {
            tree.len() == old_len
        }
    }

    #[quickcheck]
    fn inserts_value(tree: Tree<u32>, value: u32) -> bool {
        let mut tree = tree;
        tree.insert(value);

        tree.contains(&value) &&
            tree.iter().filter(|&&v| v == value).collect::<Vec<_>>() == [&value]
    }

    #[quickcheck]
    fn affects_no_others(tree: Tree<u32>, value: u32) -> bool {
        let mut tree = tree;
        let old_tree = tree.clone();
        tree.insert(value);

        tree.iter().filter(|&&v| v != value).collect::<Vec<_>>() ==
            old_tree.iter().filter(|&&v| v != value).collect::<Vec<_>>()
    }

    #[quickcheck]
    fn duplicates_leave_shape_unchanged(tree: Tree<u32>, value: u32) -> bool {
        let mut tree = tree;
        tree.insert(value);
        let once: Vec<_> = tree.level_order().map(|(v, h)| (*v, h)).collect();

        tree.insert(value);
        let twice: Vec<_> = tree.level_order().map(|(v, h)| (*v, h)).collect();

        once == twice
    }

    #[quickcheck]
    fn returns_whether_value_was_absent(tree: Tree<u32>, value: u32) -> bool {
        let mut tree = tree;
        let was_present = tree.contains(&value);
        tree.insert(value) == !was_present
    }
}

mod height {
    use super::*;

    // The classic bound on an AVL tree's height in terms of its size.
    #[quickcheck]
    fn is_logarithmic(tree: Tree<u32>) -> bool {
        let n = tree.len() as f64;
        (tree.height() as f64) <= 1.4405 * (n + 2.0).log2() - 0.3277 + 1e-9
    }

    #[quickcheck]
    fn is_zero_only_when_empty(tree: Tree<u32>) -> bool {
        (tree.height() == 0) == tree.is_empty()
    }
}

mod level_order {
    use super::*;

    #[quickcheck]
    fn yields_all_values(tree: Tree<u32>) -> bool {
        let mut values: Vec<u32> = tree.level_order().map(|(v, _)| *v).collect();
        values.sort();
        values == tree.iter().cloned().collect::<Vec<_>>()
    }

    #[quickcheck]
    fn starts_at_the_root(tree: Tree<u32>) -> bool {
        match tree.level_order().next() {
            None => tree.is_empty(),
            Some((_, height)) => height == tree.height(),
        }
    }

    #[quickcheck]
    fn heights_are_positive_and_bounded(tree: Tree<u32>) -> bool {
        tree.level_order().all(|(_, height)| height >= 1 && height <= tree.height())
    }
}

mod extremum {
    use super::*;

    #[quickcheck]
    fn min_agrees_with_iter(tree: Tree<u32>) -> bool {
        tree.min() == tree.iter().next()
    }

    #[quickcheck]
    fn max_agrees_with_iter(tree: Tree<u32>) -> bool {
        tree.max() == tree.iter().next_back()
    }
}

#[test]
fn sequential_inserts_rebalance() {
    let mut tree = Tree::new();

    for value in [10, 20, 30, 40, 50, 25] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.iter().collect::<Vec<_>>(), [&10, &20, &25, &30, &40, &50]);

    let (root, root_height) = tree.level_order().next().unwrap();
    assert_eq!((root, root_height), (&30, 3));
}

#[test]
fn empty_tree() {
    let tree: Tree<u32> = Tree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.level_order().next(), None);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
}
