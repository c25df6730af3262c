use thiserror::Error;

/// Misuses of the cursor protocol.
///
/// Violations are reported synchronously and never modify the state of
/// the cursor.
#[derive(Error, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ProtocolViolation {
    /// The cursor has already reported the end of the traversal.
    #[error("the traversal is exhausted")]
    Exhausted,
    /// No walk has been returned since the cursor was created, or the last
    /// advance failed.
    #[error("no walk has been returned by the last advance")]
    NotAdvanced,
    /// The walk returned by the last advance has already been pruned.
    #[error("the last walk has already been pruned")]
    AlreadyPruned,
    /// The walk returned by the last advance has already been removed.
    #[error("the last walk has already been removed")]
    AlreadyRemoved,
    /// The successors of a vertex failed, so the traversal cannot be
    /// resumed.
    #[error("the traversal was interrupted by failed successors")]
    Broken,
}

/// Mutations that are not supported at the current position.
#[derive(Error, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Unsupported {
    /// The root walk is not backed by any removable collection.
    #[error("the root of a traversal cannot be removed")]
    Root,
    /// The successors that produced the last walk do not support removal.
    #[error("the successors of this vertex do not support removal")]
    Remove,
    /// The cursor explores whole subtrees before returning walks.
    #[error("this traversal order does not support pruning")]
    Prune,
}

/// Errors returned by traversal cursors.
///
/// `X` is the error type of the [adjacency
/// function](crate::adjacency::Adjacency); failures of the adjacency function
/// are returned verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError<X> {
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),
    #[error("unsupported mutation: {0}")]
    Unsupported(#[from] Unsupported),
    #[error(transparent)]
    Adjacency(X),
}

impl<X> TraversalError<X> {
    /// Returns the adjacency failure, if this is one.
    pub fn into_adjacency(self) -> Option<X> {
        match self {
            TraversalError::Adjacency(err) => Some(err),
            _ => None,
        }
    }
}
