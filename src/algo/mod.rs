//! Module containing all traversal implementations.

pub mod visits;

pub mod traversal;

/// Traits used to interact with the implemented traversals.
pub mod traits {
    use super::*;

    pub use visits::{Prune, Traverse};
}
