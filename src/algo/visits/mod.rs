//! Lazy traversals returning walks.
//!
//! Each cursor in this module explores the structure defined by an
//! [adjacency function](crate::adjacency::Adjacency) starting from a root
//! vertex, and returns, one at a time, the [walks](crate::walk::Walk) from the
//! root to the vertices it visits. Vertices are not required to support
//! equality, so there is no notion of an already-visited vertex: a vertex
//! reachable through several walks is visited once per walk, and a cyclic
//! structure yields an infinite traversal. All cursors are lazy: the
//! adjacency function is invoked only when the consumer asks for a walk that
//! requires it.
//!
//! There are four orders:
//! * [`PreOrder`]: depth-first, a walk is returned before all walks
//!   extending it;
//! * [`PostOrder`]: depth-first, a walk is returned after all walks
//!   extending it;
//! * [`BreadthFirst`]: walks are returned by increasing length;
//! * [`Leaves`]: depth-first, only walks to vertices without successors are
//!   returned.
//!
//! All cursors implement [`Traverse`] and [`Iterator`]. The cursors that
//! return a walk before exploring its extensions implement also [`Prune`].

/// Implements [`Iterator`] on a cursor in terms of [`Traverse::advance`].
///
/// The iterator returns `None` at the end of the traversal and then keeps
/// returning `None`; failures of the adjacency function are returned as
/// items.
macro_rules! impl_iterator {
    ($cursor:ident) => {
        impl<'a, V: Clone, E: Clone, A: $crate::adjacency::Adjacency<V, E> + 'a> Iterator
            for $cursor<'a, V, E, A>
        {
            type Item = Result<$crate::walk::Walk<V, E>, A::Error>;

            fn next(&mut self) -> Option<Self::Item> {
                match $crate::algo::visits::Traverse::advance(self) {
                    Ok(walk) => walk.map(Ok),
                    Err($crate::algo::visits::TraversalError::Adjacency(err)) => Some(Err(err)),
                    Err(_) => None,
                }
            }
        }

        impl<'a, V: Clone, E: Clone, A: $crate::adjacency::Adjacency<V, E> + 'a>
            std::iter::FusedIterator for $cursor<'a, V, E, A>
        {
        }
    };
}
pub(crate) use impl_iterator;

mod error;
pub use error::*;

mod moves;
pub(crate) use moves::Move;

mod pre_order;
pub use pre_order::*;

mod post_order;
pub use post_order::*;

mod breadth_first;
pub use breadth_first::*;

mod leaves;
pub use leaves::*;

use crate::walk::Walk;
use sealed::sealed;

/// A traversal cursor.
///
/// Walks are obtained by calling [`advance`](Traverse::advance) until it
/// returns `Ok(None)`. After each successful advance the last walk may be
/// [removed](Traverse::remove) or, if the cursor supports it,
/// [pruned](Prune::prune); at most one of the two mutations is accepted per
/// advance.
#[sealed(pub(crate))]
pub trait Traverse {
    type Vertex;
    type Label;
    /// The error type of the adjacency function.
    type Error;

    /// Returns the next walk, or `None` if the traversal is completed.
    ///
    /// Calling this method again after it returned `None` is a
    /// [protocol violation](ProtocolViolation::Exhausted). Failures of the
    /// adjacency function are returned as [`TraversalError::Adjacency`]:
    /// if the function itself failed, the cursor is unchanged and advancing
    /// again calls it again; if the successors it returned failed, the
    /// failed element cannot be recovered, and advancing again is a
    /// [protocol violation](ProtocolViolation::Broken).
    #[allow(clippy::type_complexity)]
    fn advance(
        &mut self,
    ) -> Result<Option<Walk<Self::Vertex, Self::Label>>, TraversalError<Self::Error>>;

    /// Removes, from the structure underlying the adjacency function, the
    /// element that produced the walk returned by the last advance.
    ///
    /// The extensions of the removed walk will not be visited. The root walk
    /// cannot be removed.
    fn remove(&mut self) -> Result<(), TraversalError<Self::Error>>;
}

/// A traversal cursor supporting pruning.
#[sealed]
pub trait Prune: Traverse {
    /// Prevents the traversal from visiting the extensions of the walk
    /// returned by the last advance.
    ///
    /// The walk itself, walks already returned, and walks that do not extend
    /// the last walk are not affected.
    fn prune(&mut self) -> Result<(), TraversalError<Self::Error>>;
}

/// The position of a cursor with respect to its protocol.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub(crate) enum Position {
    Start,
    Emitted,
    Pruned,
    Removed,
    /// The adjacency function failed; advancing retries it.
    Failed,
    /// The successors of a vertex failed; the traversal cannot go on.
    Broken,
    Exhausted,
}

impl Position {
    /// Returns the position after a failure of the adjacency function.
    pub(crate) fn failed(broken: bool) -> Self {
        if broken {
            Position::Broken
        } else {
            Position::Failed
        }
    }

    /// Checks that the last walk can be pruned or removed.
    pub(crate) fn check_mutation(self) -> Result<(), ProtocolViolation> {
        match self {
            Position::Emitted => Ok(()),
            Position::Start | Position::Failed => Err(ProtocolViolation::NotAdvanced),
            Position::Pruned => Err(ProtocolViolation::AlreadyPruned),
            Position::Removed => Err(ProtocolViolation::AlreadyRemoved),
            Position::Broken => Err(ProtocolViolation::Broken),
            Position::Exhausted => Err(ProtocolViolation::Exhausted),
        }
    }

    /// Checks that the cursor can be advanced.
    pub(crate) fn check_advance(self) -> Result<(), ProtocolViolation> {
        match self {
            Position::Broken => Err(ProtocolViolation::Broken),
            Position::Exhausted => Err(ProtocolViolation::Exhausted),
            _ => Ok(()),
        }
    }
}
