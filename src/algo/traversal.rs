//! Restartable traversals.
//!
//! A [`Traversal`] pairs a root with an adjacency function and an
//! [`Order`]. Each call to [`cursor`](Traversal::cursor) (or iteration over a
//! reference to the traversal) starts a fresh [`Cursor`] from the root;
//! cursors are not reusable once exhausted.

use crate::adjacency::Adjacency;
use crate::algo::visits::{
    BreadthFirst, Leaves, PostOrder, PreOrder, Prune, TraversalError, Traverse, Unsupported,
};
use crate::walk::Walk;
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

/// The order of a traversal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Order {
    /// See [`PreOrder`].
    PreOrder,
    /// See [`PostOrder`].
    PostOrder,
    /// See [`BreadthFirst`].
    BreadthFirst,
    /// See [`Leaves`].
    Leaves,
}

impl Order {
    pub const ALL: [Order; 4] = [
        Order::PreOrder,
        Order::PostOrder,
        Order::BreadthFirst,
        Order::Leaves,
    ];

    /// Returns whether cursors in this order support [pruning](Prune).
    pub const fn supports_pruning(self) -> bool {
        matches!(self, Order::PreOrder | Order::BreadthFirst)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
            Order::BreadthFirst => "breadth-first",
            Order::Leaves => "leaves",
        })
    }
}

/// The error returned when parsing an unknown [`Order`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal order {0:?} (expected pre, post, bfs or leaves)")]
pub struct UnknownOrder(pub String);

impl FromStr for Order {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" | "pre-order" | "preorder" => Ok(Order::PreOrder),
            "post" | "post-order" | "postorder" => Ok(Order::PostOrder),
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Order::BreadthFirst),
            "leaves" => Ok(Order::Leaves),
            _ => Err(UnknownOrder(s.to_owned())),
        }
    }
}

/// What a [visit](Traversal::visit) should do after a walk has been passed
/// to the callback.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Action {
    /// Go on with the traversal.
    #[default]
    Continue,
    /// [Prune](Prune::prune) the walk.
    Prune,
    /// [Remove](Traverse::remove) the walk.
    Remove,
    /// Stop the visit.
    Stop,
}

/// A restartable traversal.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::AdjacencyList;
/// use graph_walks::algo::traversal::{Order, Traversal};
///
/// let list = AdjacencyList::from_arcs([('a', 'b', ()), ('a', 'c', ()), ('b', 'd', ())]);
/// for order in Order::ALL {
///     let traversal = Traversal::new(order, 'a', list.clone());
///     let first = traversal.cursor().map(|walk| walk.map(|walk| *walk.to()));
///     let again = traversal.cursor().map(|walk| walk.map(|walk| *walk.to()));
///     assert!(first.eq(again));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Traversal<V, E, A> {
    order: Order,
    root: V,
    adjacency: A,
    _marker: PhantomData<fn() -> E>,
}

impl<V: Clone, E: Clone, A: Adjacency<V, E>> Traversal<V, E, A> {
    /// Creates a new traversal.
    ///
    /// # Arguments
    /// * `order`: the order of the traversal.
    ///
    /// * `root`: the vertex to start the traversal from.
    ///
    /// * `adjacency`: the adjacency function.
    pub fn new(order: Order, root: V, adjacency: A) -> Self {
        Self {
            order,
            root,
            adjacency,
            _marker: PhantomData,
        }
    }

    /// Creates a new [pre-order](PreOrder) traversal.
    pub fn pre_order(root: V, adjacency: A) -> Self {
        Self::new(Order::PreOrder, root, adjacency)
    }

    /// Creates a new [post-order](PostOrder) traversal.
    pub fn post_order(root: V, adjacency: A) -> Self {
        Self::new(Order::PostOrder, root, adjacency)
    }

    /// Creates a new [breadth-first](BreadthFirst) traversal.
    pub fn breadth_first(root: V, adjacency: A) -> Self {
        Self::new(Order::BreadthFirst, root, adjacency)
    }

    /// Creates a new [leaves](Leaves) traversal.
    pub fn leaves(root: V, adjacency: A) -> Self {
        Self::new(Order::Leaves, root, adjacency)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    /// Starts a fresh cursor from the root.
    pub fn cursor(&self) -> Cursor<'_, V, E, A> {
        let root = self.root.clone();
        match self.order {
            Order::PreOrder => Cursor::PreOrder(PreOrder::new(root, &self.adjacency)),
            Order::PostOrder => Cursor::PostOrder(PostOrder::new(root, &self.adjacency)),
            Order::BreadthFirst => Cursor::BreadthFirst(BreadthFirst::new(root, &self.adjacency)),
            Order::Leaves => Cursor::Leaves(Leaves::new(root, &self.adjacency)),
        }
    }

    /// Visits all walks of the traversal, passing them to a callback.
    ///
    /// After each walk, the visit behaves according to the [`Action`]
    /// returned by the callback. Pruning in an order that does not support it
    /// is reported as an [unsupported mutation](Unsupported::Prune).
    ///
    /// # Arguments
    /// * `callback`: the callback receiving the walks.
    ///
    /// * `pl`: a progress logger that will be updated once for each walk
    ///   returned; pass `no_logging![]` to disable logging.
    pub fn visit(
        &self,
        mut callback: impl FnMut(&Walk<V, E>) -> Action,
        pl: &mut impl ProgressLog,
    ) -> Result<(), TraversalError<A::Error>> {
        pl.item_name("walk");
        pl.start(format!("Visiting walks in {}...", self.order));

        let mut cursor = self.cursor();
        while let Some(walk) = cursor.advance()? {
            pl.light_update();
            match callback(&walk) {
                Action::Continue => {}
                Action::Prune => cursor.prune()?,
                Action::Remove => cursor.remove()?,
                Action::Stop => {
                    pl.info(format_args!("Visit stopped by the callback"));
                    break;
                }
            }
        }

        pl.done();
        Ok(())
    }
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E>> IntoIterator for &'a Traversal<V, E, A> {
    type Item = Result<Walk<V, E>, A::Error>;
    type IntoIter = Cursor<'a, V, E, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// A cursor in any [`Order`].
///
/// Pruning is resolved by variant: [`prune`](Cursor::prune) fails with
/// [`Unsupported::Prune`] on post-order and leaves cursors.
pub enum Cursor<'a, V, E, A: Adjacency<V, E> + 'a> {
    PreOrder(PreOrder<'a, V, E, A>),
    PostOrder(PostOrder<'a, V, E, A>),
    BreadthFirst(BreadthFirst<'a, V, E, A>),
    Leaves(Leaves<'a, V, E, A>),
}

impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> Cursor<'a, V, E, A> {
    pub fn order(&self) -> Order {
        match self {
            Cursor::PreOrder(_) => Order::PreOrder,
            Cursor::PostOrder(_) => Order::PostOrder,
            Cursor::BreadthFirst(_) => Order::BreadthFirst,
            Cursor::Leaves(_) => Order::Leaves,
        }
    }

    /// Prunes the walk returned by the last advance.
    ///
    /// See [`Prune::prune`].
    pub fn prune(&mut self) -> Result<(), TraversalError<A::Error>> {
        match self {
            Cursor::PreOrder(cursor) => cursor.prune(),
            Cursor::BreadthFirst(cursor) => cursor.prune(),
            Cursor::PostOrder(_) | Cursor::Leaves(_) => Err(Unsupported::Prune.into()),
        }
    }
}

#[sealed]
impl<'a, V: Clone, E: Clone, A: Adjacency<V, E> + 'a> crate::algo::visits::Traverse
    for Cursor<'a, V, E, A> {
    type Vertex = V;
    type Label = E;
    type Error = A::Error;

    fn advance(&mut self) -> Result<Option<Walk<V, E>>, TraversalError<A::Error>> {
        match self {
            Cursor::PreOrder(cursor) => cursor.advance(),
            Cursor::PostOrder(cursor) => cursor.advance(),
            Cursor::BreadthFirst(cursor) => cursor.advance(),
            Cursor::Leaves(cursor) => cursor.advance(),
        }
    }

    fn remove(&mut self) -> Result<(), TraversalError<A::Error>> {
        match self {
            Cursor::PreOrder(cursor) => cursor.remove(),
            Cursor::PostOrder(cursor) => cursor.remove(),
            Cursor::BreadthFirst(cursor) => cursor.remove(),
            Cursor::Leaves(cursor) => cursor.remove(),
        }
    }
}

crate::algo::visits::impl_iterator!(Cursor);
