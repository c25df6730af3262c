use super::{Move, Position, ProtocolViolation, TraversalError};
use crate::adjacency::Adjacency;
use crate::walk::Walk;
use sealed::sealed;

/// A depth-first traversal returning only walks to vertices without
/// successors.
///
/// The order is the same of a [pre-order](super::PreOrder) (or, equivalently,
/// [post-order](super::PostOrder)) traversal restricted to leaves. Being a
/// leaf is a property of the walk as seen by the adjacency function: for
/// example, an empty container is a leaf.
///
/// Pruning is not supported; the last walk can be
/// [removed](super::Traverse::remove) from the underlying structure.
pub struct Leaves<'a, V, E, A: Adjacency<V, E> + 'a> {
    adjacency: &'a A,
    stack: Vec<Move<'a, V, E, A>>,
    position: Position,
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> Leaves<'a, V, E, A> {
    /// Creates a new leaves traversal.
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
    for Leaves<'a, V, E, A>
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
                Some(Ok(next)) => self.stack.push(next),
                Some(Err(err)) => {
                    self.position = Position::failed(top.is_broken());
                    return Err(TraversalError::Adjacency(err));
                }
                None => {
                    let done = self.stack.pop();
                    if self.stack.is_empty() {
                        self.position = Position::Exhausted;
                        return Ok(None);
                    }
                    // Moves that produced some candidate are inner vertices
                    if let Some(done) = done.filter(|done| !done.descended()) {
                        self.position = Position::Emitted;
                        return Ok(Some(done.into_walk()));
                    }
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

super::impl_iterator!(Leaves);
