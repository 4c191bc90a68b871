//! Search results: [`Route`], [`Outcome`], and the predecessor tree they are
//! extracted from.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::Heuristic;

/// An ordered sequence of moves from (excluding) the start to the last node
/// reached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    nodes: Vec<N>,
    cost: f32,
}

impl<N> Default for Route<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            cost: 0.0,
        }
    }
}

impl<N> Route<N> {
    /// Accumulated cost of the route as recorded by the search.
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Final node of the route, if it has any.
    #[inline]
    pub fn last(&self) -> Option<&N> {
        self.nodes.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }
}

impl<N> IntoIterator for Route<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Route<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// How a search ended.
///
/// Only [`Outcome::Reached`] carries a route that ends at the goal.
/// `Cutoff` and `Unreachable` carry a best-effort route to the visited node
/// with the smallest heuristic estimate to the goal; that route is empty when
/// the start itself was the closest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<N> {
    /// Nothing to search: start equals goal, or no move is allowed.
    Trivial,
    /// The goal was reached.
    Reached(Route<N>),
    /// The loop budget ran out first.
    Cutoff(Route<N>),
    /// Every reachable node was expanded without meeting the goal.
    Unreachable(Route<N>),
}

impl<N> Outcome<N> {
    /// The route, or `None` for [`Outcome::Trivial`].
    pub fn route(&self) -> Option<&Route<N>> {
        match self {
            Self::Trivial => None,
            Self::Reached(r) | Self::Cutoff(r) | Self::Unreachable(r) => Some(r),
        }
    }

    /// The route's nodes, empty for [`Outcome::Trivial`].
    pub fn nodes(&self) -> &[N] {
        self.route().map(Route::as_slice).unwrap_or(&[])
    }

    /// Consume the outcome, keeping only its route (empty when trivial).
    pub fn into_route(self) -> Route<N> {
        match self {
            Self::Trivial => Route::default(),
            Self::Reached(r) | Self::Cutoff(r) | Self::Unreachable(r) => r,
        }
    }

    #[inline]
    pub fn reached_goal(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    /// Whether the route stops short of the goal.
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Cutoff(_) | Self::Unreachable(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Reached(_) => "reached",
            Self::Cutoff(_) => "cutoff",
            Self::Unreachable(_) => "unreachable",
        }
    }
}

/// Predecessor tree built by one search.
///
/// `from` doubles as the visited set; the start maps to `None`. `cost` holds
/// the accumulated cost of each node's recorded predecessor chain.
#[derive(Debug)]
pub(crate) struct SearchTree<N> {
    from: HashMap<N, Option<N>>,
    cost: HashMap<N, f32>,
    discovered: Vec<N>,
}

impl<N: Copy + Eq + Hash> SearchTree<N> {
    pub(crate) fn new(start: N) -> Self {
        let mut tree = Self {
            from: HashMap::new(),
            cost: HashMap::new(),
            discovered: Vec::new(),
        };
        tree.from.insert(start, None);
        tree.cost.insert(start, 0.0);
        tree.discovered.push(start);
        tree
    }

    #[inline]
    pub(crate) fn cost(&self, node: N) -> Option<f32> {
        self.cost.get(&node).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.discovered.len()
    }

    /// Record `parent` as the predecessor of `node` at `cost`.
    pub(crate) fn record(&mut self, node: N, parent: N, cost: f32) {
        if self.from.insert(node, Some(parent)).is_none() {
            self.discovered.push(node);
        }
        self.cost.insert(node, cost);
    }

    /// The visited node with the smallest estimate to `goal`. Ties go to the
    /// node discovered first.
    pub(crate) fn closest<H: Heuristic<N>>(&self, goal: N, heuristic: &H) -> N {
        let mut best = self.discovered[0];
        let mut best_h = f32::INFINITY;
        for &node in &self.discovered {
            let h = heuristic.estimate(node, goal);
            if h < best_h {
                best = node;
                best_h = h;
            }
        }
        best
    }

    /// Walk predecessors from `end` back to the start.
    pub(crate) fn route_to(&self, end: N) -> Route<N> {
        let cost = self.cost(end).unwrap_or(0.0);
        let mut nodes = Vec::new();
        let mut current = end;
        while let Some(&Some(parent)) = self.from.get(&current) {
            nodes.push(current);
            current = parent;
        }
        nodes.reverse();
        Route { nodes, cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> SearchTree<i32> {
        // 0 -> 1 -> 2 -> 3, plus 0 -> 10
        let mut t = SearchTree::new(0);
        t.record(1, 0, 1.0);
        t.record(2, 1, 2.0);
        t.record(10, 0, 4.0);
        t.record(3, 2, 3.0);
        t
    }

    #[test]
    fn route_excludes_start_and_runs_forward() {
        let t = chain();
        let r = t.route_to(3);
        assert_eq!(r.as_slice(), &[1, 2, 3]);
        assert_eq!(r.cost(), 3.0);
        assert!(t.route_to(0).is_empty());
    }

    #[test]
    fn relaxing_overwrites_without_rediscovering() {
        let mut t = chain();
        t.record(3, 0, 1.5);
        assert_eq!(t.len(), 5);
        let r = t.route_to(3);
        assert_eq!(r.as_slice(), &[3]);
        assert_eq!(r.cost(), 1.5);
    }

    #[test]
    fn closest_prefers_first_discovered_on_ties() {
        let t = chain();
        let dist = |a: i32, b: i32| (a - b).abs() as f32;
        assert_eq!(t.closest(7, &dist), 10);
        assert_eq!(t.closest(-5, &dist), 0);
        assert_eq!(t.closest(6, &dist), 3);
        // Every node ties, so the start wins.
        assert_eq!(t.closest(6, &|_: i32, _: i32| 1.0_f32), 0);
    }

    #[test]
    fn outcome_accessors() {
        let t = chain();
        let reached = Outcome::Reached(t.route_to(2));
        assert!(reached.reached_goal());
        assert!(!reached.is_partial());
        assert_eq!(reached.nodes(), &[1, 2]);

        let cut = Outcome::Cutoff(t.route_to(1));
        assert!(cut.is_partial());
        assert_eq!(cut.into_route().into_vec(), vec![1]);

        let trivial: Outcome<i32> = Outcome::Trivial;
        assert!(trivial.route().is_none());
        assert!(trivial.nodes().is_empty());
        assert!(trivial.into_route().is_empty());
    }
}
