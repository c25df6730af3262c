use super::{Move, Position, ProtocolViolation, TraversalError};
use crate::adjacency::Adjacency;
use crate::walk::Walk;
use sealed::sealed;
use std::collections::VecDeque;

/// A breadth-first traversal.
///
/// Walks are returned by increasing length; walks of the same length are
/// returned in the order in which the walks they extend were returned, and
/// then in the order of the adjacency function.
///
/// The cursor keeps a queue of moves. The move reaching the vertex of the
/// last walk is not enqueued immediately, but *staged*, and it is enqueued
/// only at the following advance: in this way, [pruning](super::Prune::prune) the
/// last walk just discards the staged move, and
/// [removing](super::Traverse::remove) it can still reach, at the front of the
/// queue, the successors that produced it.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::AdjacencyList;
/// use graph_walks::algo::visits::BreadthFirst;
/// use unwrap_infallible::UnwrapInfallible;
///
/// let list = AdjacencyList::from_arcs([(0, 1, ()), (0, 2, ()), (1, 3, ()), (2, 3, ())]);
/// let lengths = BreadthFirst::new(0, &list)
///     .map(|walk| walk.map(|walk| (*walk.to(), walk.len())))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap_infallible();
/// assert_eq!(lengths, vec![(0, 0), (1, 1), (2, 1), (3, 2), (3, 2)]);
/// ```
pub struct BreadthFirst<'a, V, E, A: Adjacency<V, E> + 'a> {
    adjacency: &'a A,
    /// The front of the queue is the move that produced the last walk.
    queue: VecDeque<Move<'a, V, E, A>>,
    /// The move reaching the vertex of the last walk, not yet enqueued.
    staged: Option<Move<'a, V, E, A>>,
    position: Position,
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> BreadthFirst<'a, V, E, A> {
    /// Creates a new breadth-first traversal.
    ///
    /// # Arguments
    /// * `root`: the vertex to start the traversal from.
    ///
    /// * `adjacency`: the adjacency function.
    pub fn new(root: V, adjacency: &'a A) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Move::root(root));
        Self {
            adjacency,
            queue,
            staged: None,
            position: Position::Start,
        }
    }
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> super::Traverse
    for BreadthFirst<'a, V, E, A>
{
    type Vertex = V;
    type Label = E;
    type Error = A::Error;

    fn advance(&mut self) -> Result<Option<Walk<V, E>>, TraversalError<A::Error>> {
        self.position.check_advance()?;
        // Exhausted moves are discarded when they reach the front, so that
        // the successors of a staged vertex are not computed in advance
        if let Some(staged) = self.staged.take() {
            self.queue.push_back(staged);
        }
        loop {
            let Some(front) = self.queue.front_mut() else {
                self.position = Position::Exhausted;
                return Ok(None);
            };
            match front.next(self.adjacency) {
                Some(Ok(next)) => {
                    let walk = next.walk().clone();
                    self.staged = Some(next);
                    self.position = Position::Emitted;
                    return Ok(Some(walk));
                }
                Some(Err(err)) => {
                    self.position = Position::failed(front.is_broken());
                    return Err(TraversalError::Adjacency(err));
                }
                None => {
                    self.queue.pop_front();
                }
            }
        }
    }

    fn remove(&mut self) -> Result<(), TraversalError<A::Error>> {
        self.position.check_mutation()?;
        self.queue
            .front_mut()
            .ok_or(ProtocolViolation::NotAdvanced)?
            .remove()?;
        self.staged = None;
        self.position = Position::Removed;
        Ok(())
    }
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> super::Prune
    for BreadthFirst<'a, V, E, A>
{
    fn prune(&mut self) -> Result<(), TraversalError<A::Error>> {
        self.position.check_mutation()?;
        self.staged = None;
        self.position = Position::Pruned;
        Ok(())
    }
}

super::impl_iterator!(BreadthFirst);
