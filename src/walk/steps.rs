use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use super::Step;

/// A persistent singly-linked list of [steps](Step).
///
/// The list is immutable: [`push`](Steps::push) returns a new list made of a
/// single new node whose tail is the original list, which is shared, not
/// copied. This is what makes it possible for a depth-first traversal to keep
/// one list per level of the visit path without duplicating the common prefix
/// of sibling walks.
///
/// The empty list does not allocate, and all empty lists are
/// interchangeable.
///
/// Lists are stored newest-first, but are iterated oldest-first by
/// [`iter`](Steps::iter): the oldest-first view of the nodes is computed the
/// first time it is needed and then cached in the node, so iterating the same
/// list many times does not walk the chain again. Each cached view holds a
/// reference to every older node, so iterating every prefix of a list of
/// length `n` keeps `O(n²)` references alive.
pub struct Steps<V, E>(Option<Rc<Node<V, E>>>);

struct Node<V, E> {
    head: Step<V, E>,
    tail: Steps<V, E>,
    len: usize,
    /// The nodes of the tail, oldest first. Never contains the node itself,
    /// so no reference cycle can be created.
    ancestry: OnceCell<Box<[Rc<Node<V, E>>]>>,
}

impl<V, E> Node<V, E> {
    fn ancestry(&self) -> &[Rc<Node<V, E>>] {
        self.ancestry.get_or_init(|| {
            let Some(parent) = &self.tail.0 else {
                return Box::default();
            };
            // Reuse the cached view of the parent if it is already there
            if let Some(cached) = parent.ancestry.get() {
                let mut nodes = Vec::with_capacity(cached.len() + 1);
                nodes.extend(cached.iter().cloned());
                nodes.push(parent.clone());
                return nodes.into_boxed_slice();
            }
            let mut nodes = Vec::with_capacity(parent.len);
            let mut current = Some(parent);
            while let Some(node) = current {
                nodes.push(node.clone());
                current = node.tail.0.as_ref();
            }
            nodes.reverse();
            nodes.into_boxed_slice()
        })
    }
}

impl<V, E> Steps<V, E> {
    /// Returns the empty list.
    pub const fn new() -> Self {
        Steps(None)
    }

    /// Returns a new list with `step` as its newest element.
    ///
    /// The current list is shared by the result, and it is not modified.
    pub fn push(&self, step: Step<V, E>) -> Self {
        let len = self.len() + 1;
        Steps(Some(Rc::new(Node {
            head: step,
            tail: self.clone(),
            len,
            ancestry: OnceCell::new(),
        })))
    }

    /// Returns the number of steps in the list.
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the newest step, if any.
    pub fn last(&self) -> Option<&Step<V, E>> {
        self.0.as_deref().map(|node| &node.head)
    }

    /// Returns the list without its newest step; the empty list
    /// is returned unchanged.
    pub fn tail(&self) -> Self {
        self.0
            .as_deref()
            .map_or_else(Self::new, |node| node.tail.clone())
    }

    /// Returns whether the two lists are the same list instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns an iterator over the steps, oldest first.
    pub fn iter(&self) -> Iter<'_, V, E> {
        match self.0.as_deref() {
            None => Iter {
                nodes: Default::default(),
                last: None,
            },
            Some(node) => Iter {
                nodes: node.ancestry().iter(),
                last: Some(&node.head),
            },
        }
    }

    /// Returns an iterator over the steps, newest first.
    ///
    /// Unlike [`iter`](Steps::iter), this iterator never allocates.
    pub fn iter_rev(&self) -> RevIter<'_, V, E> {
        RevIter {
            current: self.0.as_deref(),
        }
    }
}

impl<V, E> Default for Steps<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Clone for Steps<V, E> {
    fn clone(&self) -> Self {
        Steps(self.0.clone())
    }
}

impl<V, E> Drop for Steps<V, E> {
    // Unlink iteratively: long lists would otherwise overflow the stack
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.0.take(),
                Err(_) => break,
            }
        }
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for Steps<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.len() == other.len() && self.iter_rev().eq(other.iter_rev()))
    }
}

impl<V: Eq, E: Eq> Eq for Steps<V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Steps<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V, E> FromIterator<Step<V, E>> for Steps<V, E> {
    fn from_iter<I: IntoIterator<Item = Step<V, E>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Steps::new(), |steps, step| steps.push(step))
    }
}

impl<'a, V, E> IntoIterator for &'a Steps<V, E> {
    type Item = &'a Step<V, E>;
    type IntoIter = Iter<'a, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The iterator returned by [`Steps::iter`].
pub struct Iter<'a, V, E> {
    nodes: std::slice::Iter<'a, Rc<Node<V, E>>>,
    last: Option<&'a Step<V, E>>,
}

impl<'a, V, E> Iterator for Iter<'a, V, E> {
    type Item = &'a Step<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.nodes.next() {
            Some(node) => Some(&node.head),
            None => self.last.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.nodes.len() + usize::from(self.last.is_some());
        (len, Some(len))
    }
}

impl<V, E> ExactSizeIterator for Iter<'_, V, E> {}

impl<V, E> std::iter::FusedIterator for Iter<'_, V, E> {}

/// The iterator returned by [`Steps::iter_rev`].
pub struct RevIter<'a, V, E> {
    current: Option<&'a Node<V, E>>,
}

impl<'a, V, E> Iterator for RevIter<'a, V, E> {
    type Item = &'a Step<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.tail.0.as_deref();
        Some(&node.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.current.map_or(0, |node| node.len);
        (len, Some(len))
    }
}

impl<V, E> ExactSizeIterator for RevIter<'_, V, E> {}

impl<V, E> std::iter::FusedIterator for RevIter<'_, V, E> {}
