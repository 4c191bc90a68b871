//! Pathfinding over the implicit 3D grid described by a [`GridGraph3D`].
//!
//! Each space has six adjacent and twenty diagonal neighbours. As in 2D the
//! grid is unbounded, so fence it with `occupied` when the goal may be
//! unreachable.

use wayfind_core::{GridGraph3D, GridSpace3D};

use crate::algorithm::Algorithm;
use crate::distance::GridHeuristic;
use crate::grid::{grid_algorithm_fns, search_rules};
use crate::options::SearchOptions;
use crate::route::Outcome;
use crate::traits::Heuristic;

pub use crate::grid::{GridPather, route_cost};

/// Search the 3D grid from `start` towards `goal` with the built-in
/// heuristic: Manhattan distance when `graph.manhattan` is set or diagonal
/// moves are off, Euclidean distance otherwise.
pub fn pathfind(
    graph: &GridGraph3D,
    algorithm: Algorithm,
    start: GridSpace3D,
    goal: GridSpace3D,
    options: &SearchOptions,
) -> Outcome<GridSpace3D> {
    let heuristic = GridHeuristic {
        manhattan: graph.manhattan || !graph.diagonal_navigation,
    };
    pathfind_with(graph, algorithm, start, goal, &heuristic, options)
}

/// Like [`pathfind`], with a caller-supplied heuristic.
pub fn pathfind_with<H>(
    graph: &GridGraph3D,
    algorithm: Algorithm,
    start: GridSpace3D,
    goal: GridSpace3D,
    heuristic: &H,
    options: &SearchOptions,
) -> Outcome<GridSpace3D>
where
    H: Heuristic<GridSpace3D>,
{
    search_rules(graph, algorithm, start, goal, heuristic, options)
}

grid_algorithm_fns! {
    GridGraph3D, GridSpace3D;
    depth_first_search => Algorithm::DepthFirst;
    breadth_first_search => Algorithm::BreadthFirst;
    heuristic_search => Algorithm::Heuristic;
    greedy_best_first_search => Algorithm::GREEDY_BEST_FIRST;
    dijkstra_search => Algorithm::Dijkstra;
    uniform_cost_search => Algorithm::UNIFORM_COST;
    astar_search => Algorithm::AStar;
}
