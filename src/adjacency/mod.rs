//! Adjacency functions.
//!
//! An [adjacency function](Adjacency) maps a vertex to its
//! [successors](Successors), that is, a lazy sequence of one-step
//! [walks](Walk) starting from the vertex. This is the only interface through
//! which [traversals](crate::algo::traversal) access the structure they
//! explore: vertices and labels are opaque, and need not support equality or
//! hashing.
//!
//! Besides implementing the traits directly, adjacency functions can be
//! obtained from closures using [`from_fn`], [`try_from_fn`] and
//! [`from_vertices`], from a shared mutable [`AdjacencyList`], from a
//! [`webgraph`] graph using [`GraphAdjacency`], or from a JSON document
//! using [`JsonAdjacency`].

mod list;
pub use list::*;

mod graph;
pub use graph::*;

mod json;
pub use json::*;

use crate::algo::visits::Unsupported;
use crate::walk::Walk;
use std::convert::Infallible;

/// A lazy sequence of walks starting from a vertex.
///
/// The sequence may be finite, infinite or empty. Each call to
/// [`next_walk`](Successors::next_walk) may fail, in which case the error is
/// propagated to the consumer of the traversal.
pub trait Successors<V, E> {
    type Error;

    /// Returns the next walk, or `None` if there are no more walks.
    fn next_walk(&mut self) -> Option<Result<Walk<V, E>, Self::Error>>;

    /// Removes from the underlying structure the element that produced
    /// the walk most recently returned by
    /// [`next_walk`](Successors::next_walk).
    ///
    /// The default implementation does not support removal.
    fn remove(&mut self) -> Result<(), Unsupported> {
        Err(Unsupported::Remove)
    }
}

/// An adjacency function.
///
/// Implementations should perform as little work as possible in
/// [`successors`](Adjacency::successors), deferring it to the returned
/// [`Successors`]: traversals call this method only when they actually need
/// the first successor of a vertex.
pub trait Adjacency<V, E> {
    type Error;
    type Successors<'a>: Successors<V, E, Error = Self::Error>
    where
        Self: 'a;

    /// Returns the successors of `vertex`.
    ///
    /// The `from` vertex of each returned walk should be `vertex`.
    fn successors(&self, vertex: &V) -> Result<Self::Successors<'_>, Self::Error>;
}

impl<V, E, A: Adjacency<V, E> + ?Sized> Adjacency<V, E> for &A {
    type Error = A::Error;
    type Successors<'a>
        = A::Successors<'a>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Result<Self::Successors<'_>, Self::Error> {
        (**self).successors(vertex)
    }
}

/// [`Successors`] over an iterator of walks; removal is not supported.
#[derive(Debug, Clone)]
pub struct IterSuccessors<I>(I);

impl<V, E, I: Iterator<Item = Walk<V, E>>> Successors<V, E> for IterSuccessors<I> {
    type Error = Infallible;

    fn next_walk(&mut self) -> Option<Result<Walk<V, E>, Infallible>> {
        self.0.next().map(Ok)
    }
}

/// [`Successors`] over an iterator of fallible walks; removal is not
/// supported.
#[derive(Debug, Clone)]
pub struct TryIterSuccessors<I>(I);

impl<V, E, X, I: Iterator<Item = Result<Walk<V, E>, X>>> Successors<V, E>
    for TryIterSuccessors<I>
{
    type Error = X;

    fn next_walk(&mut self) -> Option<Result<Walk<V, E>, X>> {
        self.0.next()
    }
}

/// [`Successors`] pairing each successor vertex with the label `()`.
#[derive(Debug, Clone)]
pub struct VertexSuccessors<V, I> {
    from: V,
    iter: I,
}

impl<V: Clone, I: Iterator<Item = V>> Successors<V, ()> for VertexSuccessors<V, I> {
    type Error = Infallible;

    fn next_walk(&mut self) -> Option<Result<Walk<V, ()>, Infallible>> {
        self.iter
            .next()
            .map(|to| Ok(Walk::step(self.from.clone(), to, ())))
    }
}

/// The adjacency function returned by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Creates an adjacency function from a closure returning, for each vertex,
/// an iterable of walks.
///
/// The closure is invoked only when a traversal needs the successors of a
/// vertex, even if the iterable it returns is already materialized.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::from_fn;
/// use graph_walks::algo::traversal::Traversal;
/// use graph_walks::walk::Walk;
/// use unwrap_infallible::UnwrapInfallible;
///
/// // The binary tree of strings over {0, 1}, truncated at length 2
/// let adjacency = from_fn(|s: &String| {
///     let children = if s.len() < 2 { vec!['0', '1'] } else { vec![] };
///     children
///         .into_iter()
///         .map(|c| Walk::step(s.clone(), format!("{s}{c}"), c))
///         .collect::<Vec<_>>()
/// });
/// let traversal = Traversal::breadth_first(String::new(), adjacency);
/// let walks = traversal
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap_infallible();
/// let vertices: Vec<&str> = walks.iter().map(|walk| walk.to().as_str()).collect();
/// assert_eq!(vertices, ["", "0", "1", "00", "01", "10", "11"]);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<V, E, F, I> Adjacency<V, E> for FromFn<F>
where
    F: Fn(&V) -> I,
    I: IntoIterator<Item = Walk<V, E>>,
{
    type Error = Infallible;
    type Successors<'a>
        = IterSuccessors<I::IntoIter>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Result<Self::Successors<'_>, Infallible> {
        Ok(IterSuccessors((self.0)(vertex).into_iter()))
    }
}

/// The adjacency function returned by [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F>(F);

/// Creates a fallible adjacency function from a closure.
///
/// Both the closure and the iterable it returns may fail; failures are
/// propagated verbatim by traversals.
pub fn try_from_fn<F>(f: F) -> TryFromFn<F> {
    TryFromFn(f)
}

impl<V, E, X, F, I> Adjacency<V, E> for TryFromFn<F>
where
    F: Fn(&V) -> Result<I, X>,
    I: IntoIterator<Item = Result<Walk<V, E>, X>>,
{
    type Error = X;
    type Successors<'a>
        = TryIterSuccessors<I::IntoIter>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Result<Self::Successors<'_>, X> {
        Ok(TryIterSuccessors((self.0)(vertex)?.into_iter()))
    }
}

/// The adjacency function returned by [`from_vertices`].
#[derive(Debug, Clone, Copy)]
pub struct FromVertices<F>(F);

/// Creates an adjacency function without labels from a closure returning,
/// for each vertex, an iterable of successor vertices.
///
/// All walks are labelled with `()`.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::from_vertices;
/// use graph_walks::algo::traversal::Traversal;
///
/// // Collatz successors, stopping at 1
/// let adjacency = from_vertices(|&n: &u64| {
///     match n {
///         1 => None,
///         n if n % 2 == 0 => Some(n / 2),
///         n => Some(3 * n + 1),
///     }
/// });
/// let traversal = Traversal::leaves(6, adjacency);
/// let leaf = traversal.into_iter().next().unwrap().unwrap();
/// assert_eq!(leaf.len(), 8);
/// assert_eq!(*leaf.to(), 1);
/// ```
pub fn from_vertices<F>(f: F) -> FromVertices<F> {
    FromVertices(f)
}

impl<V, F, I> Adjacency<V, ()> for FromVertices<F>
where
    V: Clone,
    F: Fn(&V) -> I,
    I: IntoIterator<Item = V>,
{
    type Error = Infallible;
    type Successors<'a>
        = VertexSuccessors<V, I::IntoIter>
    where
        Self: 'a;

    fn successors(&self, vertex: &V) -> Result<Self::Successors<'_>, Infallible> {
        Ok(VertexSuccessors {
            from: vertex.clone(),
            iter: (self.0)(vertex).into_iter(),
        })
    }
}
