//! Walks, that is, paths from a root to a visited vertex.
//!
//! A [`Walk`] records the vertex it starts [from](Walk::from) and the ordered
//! sequence of [steps](Step) taken from there. The steps are kept in a
//! persistent list ([`Steps`]), so extending a walk by one step is a constant
//! time operation that shares the whole prefix with the original walk.

mod steps;
pub use steps::*;

mod weight;
pub use weight::*;

use std::fmt;

/// One arc of a walk: the vertex reached and the label of the arc
/// traversed to reach it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Step<V, E> {
    /// The vertex reached by the step.
    pub to: V,
    /// The label of the arc traversed.
    pub over: E,
}

impl<V, E> Step<V, E> {
    pub fn new(to: V, over: E) -> Self {
        Self { to, over }
    }
}

/// An immutable walk.
///
/// A walk is either *empty*, in which case [`from`](Walk::from) and
/// [`to`](Walk::to) coincide and there are no steps, or it contains at least
/// one step, and [`to`](Walk::to) is the vertex reached by the last step.
///
/// Note that an empty walk on `a` and a walk made of a self-loop on `a` both
/// end in `a`, but they are different walks:
///
/// ```
/// use graph_walks::walk::Walk;
///
/// let empty = Walk::<char, ()>::empty('a');
/// let self_loop = Walk::step('a', 'a', ());
///
/// assert_eq!(empty.to(), self_loop.to());
/// assert!(empty.is_empty());
/// assert_eq!(self_loop.len(), 1);
/// assert_ne!(empty, self_loop);
/// ```
#[derive(Clone)]
pub struct Walk<V, E> {
    from: V,
    via: Steps<V, E>,
}

impl<V, E> Walk<V, E> {
    /// Creates the empty walk on `from`.
    pub fn empty(from: V) -> Self {
        Self {
            from,
            via: Steps::new(),
        }
    }

    /// Creates a walk made of a single step.
    pub fn step(from: V, to: V, over: E) -> Self {
        Self {
            from,
            via: Steps::new().push(Step::new(to, over)),
        }
    }

    /// Creates a walk from a starting vertex and a list of steps.
    pub fn from_steps(from: V, via: Steps<V, E>) -> Self {
        Self { from, via }
    }

    /// Returns the first vertex of the walk.
    pub fn from(&self) -> &V {
        &self.from
    }

    /// Returns the last vertex of the walk.
    pub fn to(&self) -> &V {
        self.via.last().map_or(&self.from, |step| &step.to)
    }

    /// Returns the steps of the walk.
    pub fn via(&self) -> &Steps<V, E> {
        &self.via
    }

    /// Returns an iterator over the steps of the walk, in order.
    pub fn steps(&self) -> Iter<'_, V, E> {
        self.via.iter()
    }

    /// Returns an iterator over the vertices of the walk, in order, starting
    /// with [`from`](Walk::from).
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        std::iter::once(&self.from).chain(self.via.iter().map(|step| &step.to))
    }

    /// Returns an iterator over the labels of the arcs of the walk, in order.
    pub fn labels(&self) -> impl Iterator<Item = &E> + '_ {
        self.via.iter().map(|step| &step.over)
    }

    /// Returns the number of steps of the walk.
    pub fn len(&self) -> usize {
        self.via.len()
    }

    /// Returns whether the walk contains no steps.
    pub fn is_empty(&self) -> bool {
        self.via.is_empty()
    }
}

impl<V: Clone, E: Clone> Walk<V, E> {
    /// Returns the walk extended by one step.
    ///
    /// The steps of the current walk are shared, not copied.
    pub fn then(&self, to: V, over: E) -> Self {
        Self {
            from: self.from.clone(),
            via: self.via.push(Step::new(to, over)),
        }
    }

    /// Returns the walk extended by all steps of `other`.
    ///
    /// The starting vertex of `other` is assumed to be the last vertex of
    /// this walk, and it is not checked.
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            from: self.from.clone(),
            via: other
                .via
                .iter()
                .fold(self.via.clone(), |via, step| via.push(step.clone())),
        }
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for Walk<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.via == other.via
    }
}

impl<V: Eq, E: Eq> Eq for Walk<V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Walk<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk")
            .field("from", &self.from)
            .field("via", &self.via)
            .finish()
    }
}

/// Displays the vertices of the walk separated by arrows.
impl<V: fmt::Display, E> fmt::Display for Walk<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        for step in self.via.iter() {
            write!(f, " -> {}", step.to)?;
        }
        Ok(())
    }
}

/// An incremental builder for [walks](Walk).
///
/// # Examples
///
/// ```
/// use graph_walks::walk::WalkBuilder;
///
/// let walk = WalkBuilder::new(0).step(1, "a").step(2, "b").build();
/// assert_eq!(walk.vertices().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(walk.labels().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub struct WalkBuilder<V, E> {
    from: V,
    via: Steps<V, E>,
}

impl<V, E> WalkBuilder<V, E> {
    /// Starts a walk on the given vertex.
    pub fn new(from: V) -> Self {
        Self {
            from,
            via: Steps::new(),
        }
    }

    /// Continues building from an existing walk, whose steps are shared.
    pub fn extend(walk: &Walk<V, E>) -> Self
    where
        V: Clone,
    {
        Self {
            from: walk.from.clone(),
            via: walk.via.clone(),
        }
    }

    /// Adds a step.
    pub fn step(mut self, to: V, over: E) -> Self {
        self.via = self.via.push(Step::new(to, over));
        self
    }

    pub fn build(self) -> Walk<V, E> {
        Walk {
            from: self.from,
            via: self.via,
        }
    }
}
