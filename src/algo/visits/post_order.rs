use super::{Move, Position, ProtocolViolation, TraversalError};
use crate::adjacency::Adjacency;
use crate::walk::Walk;
use sealed::sealed;

/// A depth-first traversal returning each walk after all walks extending it.
///
/// The root walk is returned last. Since a walk is returned only when all its
/// extensions have been explored, this cursor does not support pruning; the
/// last walk can however be [removed](super::Traverse::remove) from the underlying
/// structure, which affects the following traversals.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::from_vertices;
/// use graph_walks::algo::visits::PostOrder;
/// use unwrap_infallible::UnwrapInfallible;
///
/// // Divisors by repeated halving
/// let adjacency = from_vertices(|&n: &u32| (n % 2 == 0).then_some(n / 2));
/// let order = PostOrder::new(12, &adjacency)
///     .map(|walk| walk.map(|walk| *walk.to()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap_infallible();
/// assert_eq!(order, vec![3, 6, 12]);
/// ```
pub struct PostOrder<'a, V, E, A: Adjacency<V, E> + 'a> {
    adjacency: &'a A,
    /// The bottom of the stack is the sentinel producing the root; when a
    /// walk has just been returned, the top of the stack is the move that
    /// produced it.
    stack: Vec<Move<'a, V, E, A>>,
    position: Position,
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> PostOrder<'a, V, E, A> {
    /// Creates a new post-order traversal.
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
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> super::Traverse
    for PostOrder<'a, V, E, A>
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
                // Descend as far as possible
                Some(Ok(next)) => self.stack.push(next),
                Some(Err(err)) => {
                    self.position = Position::failed(top.is_broken());
                    return Err(TraversalError::Adjacency(err));
                }
                None => {
                    let done = self.stack.pop();
                    // Only the sentinel was left
                    if self.stack.is_empty() {
                        self.position = Position::Exhausted;
                        return Ok(None);
                    }
                    self.position = Position::Emitted;
                    return Ok(done.map(Move::into_walk));
                }
            }
        }
    }

    fn remove(&mut self) -> Result<(), TraversalError<A::Error>> {
        self.position.check_mutation()?;
        self.stack
            .last_mut()
            .ok_or(ProtocolViolation::NotAdvanced)?
            .remove()?;
        self.position = Position::Removed;
        Ok(())
    }
}

super::impl_iterator!(PostOrder);
