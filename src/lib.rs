/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod adjacency;
pub mod algo;
pub mod utils;
pub mod walk;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use adjacency::{Adjacency, Successors};
    pub use algo::traits::*;
    pub use walk::Weight;
}

/// Use `use graph_walks::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use adjacency::{from_fn, from_vertices, try_from_fn, AdjacencyList};
    pub use algo::traversal::{Action, Order, Traversal};
    pub use algo::visits;
    pub use traits::*;
    pub use walk::{Step, Walk, WalkBuilder, WeightedWalk};
}
