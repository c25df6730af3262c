use std::ops::Deref;

use super::Walk;
use crate::utils::KahanSummation;

/// Edge labels carrying a numeric weight.
pub trait Weight {
    fn weight(&self) -> f64;
}

macro_rules! impl_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline(always)]
                fn weight(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weight!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Missing labels weigh nothing.
impl<W: Weight> Weight for Option<W> {
    fn weight(&self) -> f64 {
        self.as_ref().map_or(0.0, Weight::weight)
    }
}

impl<W: Weight + ?Sized> Weight for &W {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

impl<V, E: Weight> Walk<V, E> {
    /// Returns the sum of the weights of the labels of the walk.
    ///
    /// The sum is computed using [Kahan summation](KahanSummation).
    pub fn weight(&self) -> f64 {
        self.labels()
            .map(Weight::weight)
            .collect::<KahanSummation>()
            .value()
    }
}

/// A [walk](Walk) decorated with its total weight.
///
/// # Examples
///
/// ```
/// use graph_walks::walk::{WalkBuilder, WeightedWalk};
///
/// let walk = WalkBuilder::new('a').step('b', 0.5).step('c', 2.0).build();
/// let weighted = WeightedWalk::new(walk);
/// assert_eq!(weighted.weight(), 2.5);
/// assert_eq!(*weighted.to(), 'c');
/// ```
#[derive(Debug, Clone)]
pub struct WeightedWalk<V, E> {
    walk: Walk<V, E>,
    weight: f64,
}

impl<V, E: Weight> WeightedWalk<V, E> {
    pub fn new(walk: Walk<V, E>) -> Self {
        let weight = walk.weight();
        Self { walk, weight }
    }
}

impl<V, E> WeightedWalk<V, E> {
    /// Decorates a walk using a custom weight function for its labels.
    pub fn with_weights(walk: Walk<V, E>, mut weigh: impl FnMut(&E) -> f64) -> Self {
        let weight = walk
            .labels()
            .map(&mut weigh)
            .collect::<KahanSummation>()
            .value();
        Self { walk, weight }
    }

    /// Returns the total weight of the walk.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn into_walk(self) -> Walk<V, E> {
        self.walk
    }
}

impl<V, E> Deref for WeightedWalk<V, E> {
    type Target = Walk<V, E>;

    fn deref(&self) -> &Self::Target {
        &self.walk
    }
}
