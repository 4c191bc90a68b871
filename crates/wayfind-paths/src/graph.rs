//! Pathfinding over node-and-connection [`Graph`]s.
//!
//! A graph carries no geometry, so every entry point takes the caller's
//! heuristic. Any `Fn(NodeId, NodeId) -> f32` closure works.

use wayfind_core::{Graph, GraphError, NodeId};

use crate::algorithm::Algorithm;
use crate::error::PathError;
use crate::options::SearchOptions;
use crate::route::Outcome;
use crate::search::search;
use crate::traits::{Heuristic, Pather, Step};

/// [`Pather`] view of a [`Graph`].
///
/// A connection is followed iff it is active and leads to an active node.
/// Following it costs the connection weight plus the destination's weight.
pub struct GraphPather<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> GraphPather<'a, T> {
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }
}

impl<T> Pather for GraphPather<'_, T> {
    type Node = NodeId;

    fn successors(&self, node: NodeId, buf: &mut Vec<Step<NodeId>>) {
        for conn in self.graph.connections(node) {
            let Some(to) = self.graph.node(conn.to) else {
                continue;
            };
            if conn.active && to.active {
                buf.push(Step::new(conn.to, conn.weight + to.weight()));
            }
        }
    }
}

fn check_node<T>(graph: &Graph<T>, id: NodeId) -> Result<(), PathError> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(GraphError::UnknownNode(id).into())
    }
}

/// Search `graph` from `start` towards `goal` with the chosen algorithm.
///
/// Fails only when `start` or `goal` is not a node of `graph`.
pub fn pathfind<T, H>(
    graph: &Graph<T>,
    algorithm: Algorithm,
    start: NodeId,
    goal: NodeId,
    heuristic: &H,
    options: &SearchOptions,
) -> Result<Outcome<NodeId>, PathError>
where
    H: Heuristic<NodeId>,
{
    check_node(graph, start)?;
    check_node(graph, goal)?;
    Ok(search(
        &GraphPather::new(graph),
        heuristic,
        algorithm,
        start,
        goal,
        options,
    ))
}

macro_rules! algorithm_fns {
    ($($(#[$doc:meta])* $name:ident => $alg:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T, H>(
                graph: &Graph<T>,
                start: NodeId,
                goal: NodeId,
                heuristic: &H,
                options: &SearchOptions,
            ) -> Result<Outcome<NodeId>, PathError>
            where
                H: Heuristic<NodeId>,
            {
                pathfind(graph, $alg, start, goal, heuristic, options)
            }
        )*
    };
}

algorithm_fns! {
    /// Newest-discovered node first.
    depth_first_search => Algorithm::DepthFirst;
    /// Discovery order; fewest connections.
    breadth_first_search => Algorithm::BreadthFirst;
    /// Smallest heuristic first, ignoring weights.
    heuristic_search => Algorithm::Heuristic;
    /// Same as [`heuristic_search`].
    greedy_best_first_search => Algorithm::GREEDY_BEST_FIRST;
    /// Cheapest accumulated weight first.
    dijkstra_search => Algorithm::Dijkstra;
    /// Same as [`dijkstra_search`].
    uniform_cost_search => Algorithm::UNIFORM_COST;
    /// Accumulated weight plus scaled heuristic.
    astar_search => Algorithm::AStar;
}

/// Total weight of walking `route` from `start`, taking the cheapest usable
/// connection for every hop. `None` if some hop has no usable connection.
pub fn route_cost<T>(graph: &Graph<T>, start: NodeId, route: &[NodeId]) -> Option<f32> {
    let mut total = 0.0;
    let mut at = start;
    for &next in route {
        let hop = graph
            .connections(at)
            .iter()
            .filter(|c| c.to == next && graph.is_usable(c))
            .map(|c| c.weight)
            .min_by(f32::total_cmp)?;
        total += hop + graph.node(next)?.weight();
        at = next;
    }
    Some(total)
}
