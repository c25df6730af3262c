use super::{Move, Position, ProtocolViolation, TraversalError};
use crate::adjacency::Adjacency;
use crate::walk::Walk;
use sealed::sealed;

/// A depth-first traversal returning each walk before all walks extending
/// it.
///
/// This is an iterative implementation that does not need a large stack
/// size: the cursor keeps a stack of moves, one for each vertex on
/// the visit path, plus a sentinel at the bottom that produces the root.
/// Successors are visited in the order they are returned by the adjacency
/// function.
///
/// The last walk can be [pruned](super::Prune::prune), in which case its extensions
/// will not be visited, or [removed](super::Traverse::remove) from the underlying
/// structure.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::AdjacencyList;
/// use graph_walks::algo::visits::{PreOrder, Prune, Traverse};
///
/// let list = AdjacencyList::from_arcs([('a', 'b', ()), ('a', 'c', ()), ('b', 'd', ())]);
/// let mut visit = PreOrder::new('a', &list);
/// let mut visited = vec![];
/// while let Some(walk) = visit.advance()? {
///     visited.push(*walk.to());
///     if *walk.to() == 'b' {
///         visit.prune()?;
///     }
/// }
/// assert_eq!(visited, vec!['a', 'b', 'c']);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PreOrder<'a, V, E, A: Adjacency<V, E> + 'a> {
    adjacency: &'a A,
    /// The top of the stack is the move that reached the vertex of the last
    /// walk, unless it has been pruned or removed.
    stack: Vec<Move<'a, V, E, A>>,
    position: Position,
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> PreOrder<'a, V, E, A> {
    /// Creates a new pre-order traversal.
    ///
    /// # Arguments
    /// * `root`: the vertex to start the traversal from.
    ///
    /// * `adjacency`: the adjacency function.
    pub fn new(root: V, adjacency: &'a A) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(Move::root(root));
        Self {
            adjacency,
            stack,
            position: Position::Start,
        }
    }

    /// Returns the number of vertices on the visit path.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> super::Traverse
    for PreOrder<'a, V, E, A>
{
    type Vertex = V;
    type Label = E;
    type Error = A::Error;

    fn advance(&mut self) -> Result<Option<Walk<V, E>>, TraversalError<A::Error>> {
        self.position.check_advance()?;
        loop {
            let Some(top) = self.stack.last_mut() else {
                self.position = Position::Exhausted;
                return Ok(None);
            };
            match top.next(self.adjacency) {
                Some(Ok(next)) => {
                    let walk = next.walk().clone();
                    self.stack.push(next);
                    self.position = Position::Emitted;
                    return Ok(Some(walk));
                }
                Some(Err(err)) => {
                    self.position = Position::failed(top.is_broken());
                    return Err(TraversalError::Adjacency(err));
                }
                // No more successors: retreat
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn remove(&mut self) -> Result<(), TraversalError<A::Error>> {
        self.position.check_mutation()?;
        // The move below the top produced the last walk
        let parent = self
            .stack
            .len()
            .checked_sub(2)
            .and_then(|index| self.stack.get_mut(index))
            .ok_or(ProtocolViolation::NotAdvanced)?;
        parent.remove()?;
        self.stack.pop();
        self.position = Position::Removed;
        Ok(())
    }
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> super::Prune
    for PreOrder<'a, V, E, A>
{
    fn prune(&mut self) -> Result<(), TraversalError<A::Error>> {
        self.position.check_mutation()?;
        self.stack.pop();
        self.position = Position::Pruned;
        Ok(())
    }
}

super::impl_iterator!(PreOrder);

