use super::{Adjacency, Successors};
use crate::algo::visits::Unsupported;
use crate::walk::Walk;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// A mutable adjacency list supporting removal during traversals.
///
/// Clones of an adjacency list share the same arcs: removing an arc through
/// a traversal cursor (see, for example,
/// [`PreOrder::remove`](crate::algo::visits::Traverse::remove)) is visible to
/// all clones and to all traversals started afterwards.
///
/// Arcs are enumerated in insertion order.
///
/// Each arc has a stable identifier, and successors resume after the
/// identifier of the last arc they returned: removing an arc never makes
/// other live successors, even of the same vertex, skip or repeat arcs.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::AdjacencyList;
///
/// let list = AdjacencyList::from_arcs([('a', 'b', 1), ('a', 'c', 2)]);
/// assert_eq!(list.arcs(&'a'), vec![('b', 1), ('c', 2)]);
/// assert!(list.arcs(&'b').is_empty());
/// ```
pub struct AdjacencyList<V, E> {
    arcs: Rc<RefCell<Arcs<V, E>>>,
}

/// The shared arcs of an [`AdjacencyList`].
struct Arcs<V, E> {
    /// For each source, its arcs as `(id, to, label)` by increasing id.
    by_source: HashMap<V, Vec<(u64, V, E)>>,
    next_id: u64,
}

impl<V: Eq + Hash, E> Arcs<V, E> {
    /// Returns the first arc leaving `from` whose id follows `after`.
    fn after(&self, from: &V, after: Option<u64>) -> Option<&(u64, V, E)> {
        let arcs = self.by_source.get(from)?;
        let start = after.map_or(0, |after| arcs.partition_point(|&(id, ..)| id <= after));
        arcs.get(start)
    }
}

impl<V: Eq + Hash, E> AdjacencyList<V, E> {
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        Self {
            arcs: Rc::new(RefCell::new(Arcs {
                by_source: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Creates an adjacency list from a sequence of triples
    /// `(from, to, label)`.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (V, V, E)>) -> Self {
        let list = Self::new();
        for (from, to, label) in arcs {
            list.add_arc(from, to, label);
        }
        list
    }

    /// Adds an arc after all arcs with the same source.
    pub fn add_arc(&self, from: V, to: V, label: E) {
        let mut arcs = self.arcs.borrow_mut();
        let id = arcs.next_id;
        arcs.next_id += 1;
        arcs.by_source.entry(from).or_default().push((id, to, label));
    }

    /// Returns the number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.borrow().by_source.values().map(Vec::len).sum()
    }

    /// Returns a copy of the arcs leaving `vertex`, in order.
    pub fn arcs(&self, vertex: &V) -> Vec<(V, E)>
    where
        V: Clone,
        E: Clone,
    {
        self.arcs.borrow().by_source.get(vertex).map_or_else(Vec::new, |arcs| {
            arcs.iter()
                .map(|(_, to, label)| (to.clone(), label.clone()))
                .collect()
        })
    }
}

impl<V: Eq + Hash, E> Default for AdjacencyList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Clone for AdjacencyList<V, E> {
    fn clone(&self) -> Self {
        Self {
            arcs: Rc::clone(&self.arcs),
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for AdjacencyList<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arcs = self.arcs.borrow();
        f.debug_map()
            .entries(arcs.by_source.iter().map(|(from, arcs)| {
                let targets = arcs.iter().map(|(_, to, label)| (to, label));
                (from, targets.collect::<Vec<_>>())
            }))
            .finish()
    }
}

/// The successors of a vertex in an [`AdjacencyList`].
///
/// The arcs are read one at a time from the shared list, so arcs appended
/// while the enumeration is in progress will be returned too.
pub struct ListSuccessors<V, E> {
    arcs: Rc<RefCell<Arcs<V, E>>>,
    from: V,
    /// The id of the last arc returned, removed or not.
    last: Option<u64>,
    /// Whether the last arc returned can still be removed.
    removable: bool,
}

impl<V: Eq + Hash + Clone, E: Clone> Successors<V, E> for ListSuccessors<V, E> {
    type Error = Infallible;

    fn next_walk(&mut self) -> Option<Result<Walk<V, E>, Infallible>> {
        let arcs = self.arcs.borrow();
        let (id, to, label) = arcs.after(&self.from, self.last)?;
        let walk = Walk::step(self.from.clone(), to.clone(), label.clone());
        self.last = Some(*id);
        self.removable = true;
        Some(Ok(walk))
    }

    fn remove(&mut self) -> Result<(), Unsupported> {
        let Some(last) = self.last.filter(|_| self.removable) else {
            return Err(Unsupported::Remove);
        };
        let mut arcs = self.arcs.borrow_mut();
        let successors = arcs
            .by_source
            .get_mut(&self.from)
            .ok_or(Unsupported::Remove)?;
        // The arc may have been removed through other successors
        let index = successors
            .binary_search_by_key(&last, |&(id, ..)| id)
            .map_err(|_| Unsupported::Remove)?;
        successors.remove(index);
        self.removable = false;
        Ok(())
    }
}

impl<V: Eq + Hash + Clone, E: Clone> Adjacency<V, E> for AdjacencyList<V, E> {
    type Error = Infallible;
    type Successors<'a>
        = ListSuccessors<V, E>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Result<ListSuccessors<V, E>, Infallible> {
        Ok(ListSuccessors {
            arcs: Rc::clone(&self.arcs),
            from: vertex.clone(),
            last: None,
            removable: false,
        })
    }
}
