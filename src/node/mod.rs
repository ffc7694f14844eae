mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::swap;

pub use self::iter::{Iter, LevelOrder};

pub type Link<T> = Option<Box<Node<T>>>;

pub fn as_node_ref<T>(link: &Link<T>) -> Option<&Node<T>> {
    link.as_ref().map(|node| &**node)
}

/// Returns the height of the subtree behind the given link, with an absent
/// subtree contributing 0.
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    height: usize,
    value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { left: None, right: None, height: 1, value }
    }

    fn update_height(&mut self) {
        self.height = 1 + std::cmp::max(height(&self.left), height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    // Promote the left child as the subtree root by rotating right.
    // Callers ensure the left child exists.
    fn rotate_right(node: &mut Box<Self>) {
        let mut save = node.left.take().unwrap();
        swap(&mut node.left, &mut save.right); // save.right now None
        node.update_height();
        swap(node, &mut save);
        node.right = Some(save);
        node.update_height();
    }

    // Promote the right child as the subtree root by rotating left.
    // Callers ensure the right child exists.
    fn rotate_left(node: &mut Box<Self>) {
        let mut save = node.right.take().unwrap();
        swap(&mut node.right, &mut save.left); // save.left now None
        node.update_height();
        swap(node, &mut save);
        node.left = Some(save);
        node.update_height();
    }

    // Restores the balance invariant at `node` after an insertion in one of
    // its subtrees, assuming both subtrees are balanced and carry correct
    // cached heights.
    fn rebalance(node: &mut Box<Self>) {
        node.update_height();

        let bf = node.balance_factor();

        if bf > 1 {
            if node.left.as_ref().unwrap().balance_factor() < 0 {
                Self::rotate_left(node.left.as_mut().unwrap());
            }
            Self::rotate_right(node);
        } else if bf < -1 {
            if node.right.as_ref().unwrap().balance_factor() > 0 {
                Self::rotate_right(node.right.as_mut().unwrap());
            }
            Self::rotate_left(node);
        }
    }
}

pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, value: T) -> bool
    where C: Compare<T> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(ref mut node) => {
            let inserted = match cmp.compare(&value, &node.value) {
                Equal => return false,
                Less => insert(&mut node.left, cmp, value),
                Greater => insert(&mut node.right, cmp, value),
            };

            Node::rebalance(node);
            inserted
        }
    }
}

pub fn get<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, value: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    let mut link = link;

    while let Some(ref node) = *link {
        match cmp.compare(value, &node.value) {
            Equal => return Some(&node.value),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn min<T>(link: &Link<T>) -> Option<&T> {
    link.as_ref().map(|mut node| {
        while let Some(ref left) = node.left { node = left; }
        &node.value
    })
}

pub fn max<T>(link: &Link<T>) -> Option<&T> {
    link.as_ref().map(|mut node| {
        while let Some(ref right) = node.right { node = right; }
        &node.value
    })
}
