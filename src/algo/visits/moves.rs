use crate::adjacency::{Adjacency, Successors};
use crate::algo::visits::Unsupported;
use crate::walk::Walk;

/// The candidates of a [`Move`].
enum Candidates<'a, V, E, A: Adjacency<V, E> + 'a> {
    /// The synthetic candidates of the root: just the empty walk.
    Root(Option<Walk<V, E>>),
    /// The adjacency function has not been invoked yet.
    Unforced,
    Forced(A::Successors<'a>),
}

/// A move: the successors of the last vertex of a walk, paired with
/// the walk itself.
///
/// Moves are the unit of state of all traversals: a depth-first traversal
/// keeps a stack of moves, one for each vertex on the visit path, and a
/// breadth-first traversal keeps a queue of moves. The adjacency function is
/// invoked on the last vertex of the walk only when the move is
/// [advanced](Move::next) for the first time.
pub(crate) struct Move<'a, V, E, A: Adjacency<V, E> + 'a> {
    candidates: Candidates<'a, V, E, A>,
    walk: Walk<V, E>,
    /// Whether some candidate has been returned.
    descended: bool,
    /// Whether the successors returned a failure, which consumed the
    /// candidate.
    broken: bool,
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> Move<'a, V, E, A> {
    /// Creates the sentinel move of a traversal, whose only candidate is the
    /// empty walk on `root`.
    pub(crate) fn root(root: V) -> Self {
        Self {
            candidates: Candidates::Root(Some(Walk::empty(root.clone()))),
            walk: Walk::empty(root),
            descended: false,
            broken: false,
        }
    }

    /// Consumes the next candidate, returning the move reaching its last
    /// vertex, or `None` if there are no more candidates.
    ///
    /// If the adjacency function fails, the move is left unchanged and the
    /// call can be retried. If instead the successors return a failure, the
    /// failed candidate is gone and the move is [broken](Move::is_broken).
    pub(crate) fn next(&mut self, adjacency: &'a A) -> Option<Result<Self, A::Error>> {
        if matches!(self.candidates, Candidates::Unforced) {
            match adjacency.successors(self.walk.to()) {
                Ok(successors) => self.candidates = Candidates::Forced(successors),
                Err(err) => return Some(Err(err)),
            }
        }

        let candidate = match &mut self.candidates {
            Candidates::Root(walk) => walk.take().map(Ok),
            Candidates::Forced(successors) => successors.next_walk(),
            Candidates::Unforced => None,
        }?;

        Some(match candidate {
            Ok(step) => {
                self.descended = true;
                Ok(Self {
                    candidates: Candidates::Unforced,
                    walk: self.walk.concat(&step),
                    descended: false,
                    broken: false,
                })
            }
            Err(err) => {
                self.broken = true;
                Err(err)
            }
        })
    }

    /// Removes the element that produced the last candidate returned by
    /// [`next`](Move::next) from the underlying successors.
    pub(crate) fn remove(&mut self) -> Result<(), Unsupported> {
        match &mut self.candidates {
            Candidates::Root(_) => Err(Unsupported::Root),
            Candidates::Forced(successors) => successors.remove(),
            Candidates::Unforced => Err(Unsupported::Remove),
        }
    }
}

impl<'a, V, E, A: Adjacency<V, E> + 'a> Move<'a, V, E, A> {
    /// Returns the walk reaching the current vertex.
    pub(crate) fn walk(&self) -> &Walk<V, E> {
        &self.walk
    }

    pub(crate) fn into_walk(self) -> Walk<V, E> {
        self.walk
    }

    /// Returns whether [`next`](Move::next) ever returned a candidate.
    pub(crate) fn descended(&self) -> bool {
        self.descended
    }

    /// Returns whether the successors of the move returned a failure.
    pub(crate) fn is_broken(&self) -> bool {
        self.broken
    }
}
