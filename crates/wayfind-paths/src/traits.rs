use std::hash::Hash;

/// One outgoing move found while expanding a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<N> {
    pub to: N,
    /// Cost of taking this move. Must be finite and `>= 0`.
    pub cost: f32,
}

impl<N> Step<N> {
    #[inline]
    pub fn new(to: N, cost: f32) -> Self {
        Self { to, cost }
    }
}

/// Successor enumeration over some spatial model.
///
/// The search engine only ever sees a space through this trait, so the same
/// algorithms run over node graphs and implicit grids.
pub trait Pather {
    type Node: Copy + Eq + Hash;

    /// Append the usable moves out of `node` into `buf`. The caller clears
    /// `buf` before calling.
    fn successors(&self, node: Self::Node, buf: &mut Vec<Step<Self::Node>>);
}

/// Estimate of the remaining cost from `current` to `goal`.
///
/// Must be non-negative, and must never overestimate (admissible) for A* to
/// return optimal routes. Neither property is checked.
pub trait Heuristic<N> {
    fn estimate(&self, current: N, goal: N) -> f32;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(N, N) -> f32,
{
    #[inline]
    fn estimate(&self, current: N, goal: N) -> f32 {
        self(current, goal)
    }
}
