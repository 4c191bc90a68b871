//! Pathfinding over the implicit 2D grid described by a [`GridGraph`].
//!
//! The grid is unbounded: unless `occupied` fences it in, a search for an
//! unreachable goal only stops when the loop budget runs out.

use wayfind_core::{GridCoord, GridGraph, GridRules, GridSpace};

use crate::algorithm::Algorithm;
use crate::distance::GridHeuristic;
use crate::options::SearchOptions;
use crate::route::Outcome;
use crate::search::search;
use crate::traits::{Heuristic, Pather, Step};

/// [`Pather`] view of a [`GridRules`], for either grid dimension.
///
/// Moves follow the enabled directions onto walkable spaces and cost the
/// weight of the space entered. Moves that would leave the `i32` range are
/// skipped.
pub struct GridPather<'a, S> {
    rules: &'a GridRules<S>,
}

impl<'a, S> GridPather<'a, S> {
    pub fn new(rules: &'a GridRules<S>) -> Self {
        Self { rules }
    }
}

impl<S: GridCoord> Pather for GridPather<'_, S> {
    type Node = S;

    fn successors(&self, space: S, buf: &mut Vec<Step<S>>) {
        for to in self.rules.moves_from(space) {
            buf.push(Step::new(to, self.rules.weight_of(to)));
        }
    }
}

/// Search the grid from `start` towards `goal` with the built-in heuristic
/// (Euclidean, or Manhattan when `graph.manhattan` is set).
pub fn pathfind(
    graph: &GridGraph,
    algorithm: Algorithm,
    start: GridSpace,
    goal: GridSpace,
    options: &SearchOptions,
) -> Outcome<GridSpace> {
    let heuristic = GridHeuristic {
        manhattan: graph.manhattan,
    };
    pathfind_with(graph, algorithm, start, goal, &heuristic, options)
}

/// Like [`pathfind`], with a caller-supplied heuristic.
pub fn pathfind_with<H>(
    graph: &GridGraph,
    algorithm: Algorithm,
    start: GridSpace,
    goal: GridSpace,
    heuristic: &H,
    options: &SearchOptions,
) -> Outcome<GridSpace>
where
    H: Heuristic<GridSpace>,
{
    search_rules(graph, algorithm, start, goal, heuristic, options)
}

pub(crate) fn search_rules<S, H>(
    rules: &GridRules<S>,
    algorithm: Algorithm,
    start: S,
    goal: S,
    heuristic: &H,
    options: &SearchOptions,
) -> Outcome<S>
where
    S: GridCoord,
    H: Heuristic<S>,
{
    if !rules.can_navigate() {
        log::debug!("{algorithm}: grid allows no moves");
        return Outcome::Trivial;
    }
    search(
        &GridPather::new(rules),
        heuristic,
        algorithm,
        start,
        goal,
        options,
    )
}

macro_rules! grid_algorithm_fns {
    ($graph:ty, $space:ty; $($(#[$doc:meta])* $name:ident => $alg:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(
                graph: &$graph,
                start: $space,
                goal: $space,
                options: &SearchOptions,
            ) -> Outcome<$space> {
                pathfind(graph, $alg, start, goal, options)
            }
        )*
    };
}

pub(crate) use grid_algorithm_fns;

grid_algorithm_fns! {
    GridGraph, GridSpace;
    /// Newest-discovered space first.
    depth_first_search => Algorithm::DepthFirst;
    /// Discovery order; fewest moves.
    breadth_first_search => Algorithm::BreadthFirst;
    /// Closest-looking space first, ignoring weights.
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

/// Total weight of walking `route` from `start`. `None` if some step is not
/// an allowed move.
pub fn route_cost<S: GridCoord>(graph: &GridRules<S>, start: S, route: &[S]) -> Option<f32> {
    let mut total = 0.0;
    let mut at = start;
    for &next in route {
        if !graph.is_move(at, next) {
            return None;
        }
        total += graph.weight_of(next);
        at = next;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn sp(x: i32, y: i32) -> GridSpace {
        GridSpace::new(x, y)
    }

    /// Every space of the `w` x `h` rectangle at the origin except `holes`.
    fn room(w: i32, h: i32, holes: &[GridSpace]) -> Vec<GridSpace> {
        (0..h)
            .flat_map(|y| (0..w).map(move |x| sp(x, y)))
            .filter(|s| !holes.contains(s))
            .collect()
    }

    #[test]
    fn astar_detours_around_obstacle() {
        let wall = sp(1, 0);
        let grid = GridGraph::adjacent().with_walkable(room(3, 3, &[wall]));
        let out = astar_search(&grid, sp(0, 0), sp(2, 0), &SearchOptions::default());
        assert!(out.reached_goal());
        assert_eq!(out.nodes(), &[sp(0, 1), sp(1, 1), sp(2, 1), sp(2, 0)]);
        assert_eq!(out.route().map(|r| r.cost()), Some(4.0));
    }

    #[test]
    fn open_grid_detour_never_crosses_obstacle() {
        let wall = sp(1, 0);
        let grid = GridGraph::adjacent().with_occupied([wall]);
        for alg in [Algorithm::AStar, Algorithm::Dijkstra, Algorithm::BreadthFirst] {
            let out = pathfind(&grid, alg, sp(0, 0), sp(2, 0), &SearchOptions::default());
            assert!(out.reached_goal(), "{alg}");
            assert_eq!(out.nodes().len(), 4, "{alg}");
            assert!(!out.nodes().contains(&wall));
            assert_eq!(route_cost(&grid, sp(0, 0), out.nodes()), Some(4.0));
        }
    }

    #[test]
    fn no_navigation_is_trivial() {
        let grid = GridGraph {
            adjacent_navigation: false,
            diagonal_navigation: false,
            ..GridGraph::default()
        };
        for alg in Algorithm::ALL {
            let out = pathfind(&grid, alg, sp(0, 0), sp(5, 5), &SearchOptions::default());
            assert_eq!(out, Outcome::Trivial);
        }
    }

    #[test]
    fn identical_start_and_goal_is_trivial() {
        let grid = GridGraph::default();
        for alg in Algorithm::ALL {
            let out = pathfind(&grid, alg, sp(3, 3), sp(3, 3), &SearchOptions::default());
            assert_eq!(out, Outcome::Trivial);
        }
    }

    #[test]
    fn diagonal_moves_cut_corners() {
        let grid = GridGraph::default();
        let out = dijkstra_search(&grid, sp(0, 0), sp(3, 3), &SearchOptions::default());
        assert_eq!(out.nodes(), &[sp(1, 1), sp(2, 2), sp(3, 3)]);
        let out = breadth_first_search(&grid, sp(0, 0), sp(3, -3), &SearchOptions::default());
        assert_eq!(out.nodes(), &[sp(1, -1), sp(2, -2), sp(3, -3)]);
    }

    #[test]
    fn heavy_spaces_are_avoided() {
        // A band of mud across x = 2, with one cheap gap at y = 4.
        let mud: Vec<_> = (-5..=5)
            .filter(|&y| y != 4)
            .map(|y| (sp(2, y), 20.0))
            .collect();
        let grid = GridGraph::adjacent()
            .with_walkable(room(5, 6, &[]).into_iter().map(|s| s - sp(0, 1)))
            .with_weights(mud)
            .unwrap();
        for alg in [Algorithm::AStar, Algorithm::Dijkstra] {
            let out = pathfind(&grid, alg, sp(0, 0), sp(4, 0), &SearchOptions::default());
            assert!(out.nodes().contains(&sp(2, 4)), "{alg}: {:?}", out.nodes());
            assert_eq!(out.route().map(|r| r.cost()), Some(12.0));
        }
        let flat = GridGraph {
            ignore_weights: true,
            ..grid
        };
        let out = dijkstra_search(&flat, sp(0, 0), sp(4, 0), &SearchOptions::default());
        assert_eq!(out.route().map(|r| r.cost()), Some(4.0));
    }

    #[test]
    fn fenced_goal_falls_back_to_closest_space() {
        // A corridor along y = 0 from x = 0 to 3; the goal lies beyond it.
        let grid = GridGraph::adjacent().with_walkable((0..4).map(|x| sp(x, 0)));
        for alg in Algorithm::ALL {
            let out = pathfind(&grid, alg, sp(0, 0), sp(8, 1), &SearchOptions::default());
            assert!(matches!(out, Outcome::Unreachable(_)), "{alg}");
            assert_eq!(out.nodes(), &[sp(1, 0), sp(2, 0), sp(3, 0)], "{alg}");
        }
    }

    #[test]
    fn ignore_occupied_walks_through_walls() {
        let grid = GridGraph {
            ignore_occupied: true,
            ..GridGraph::adjacent().with_occupied([sp(1, 0)])
        };
        let out = astar_search(&grid, sp(0, 0), sp(2, 0), &SearchOptions::default());
        assert_eq!(out.nodes(), &[sp(1, 0), sp(2, 0)]);
    }

    #[test]
    fn parity_bound_goal_hits_loop_budget() {
        // Diagonal moves never change x + y parity, and the open grid never
        // runs out of spaces, so only the budget stops this search.
        let grid = GridGraph::diagonal();
        let opts = SearchOptions::default().with_max_loops(50);
        let out = uniform_cost_search(&grid, sp(0, 0), sp(5, 0), &opts);
        let Outcome::Cutoff(route) = out else {
            panic!("expected cutoff");
        };
        let last = route.last().copied().unwrap_or(sp(0, 0));
        assert_eq!((last.x + last.y).rem_euclid(2), 0);
        assert!(route_cost(&grid, sp(0, 0), route.as_slice()).is_some());
    }

    #[test]
    fn zero_loops_matches_unreachable_fallback() {
        let grid = GridGraph::default();
        let opts = SearchOptions::default().with_max_loops(0);
        for alg in Algorithm::ALL {
            let out = pathfind(&grid, alg, sp(0, 0), sp(9, 9), &opts);
            assert_eq!(out, Outcome::Cutoff(Default::default()));
        }
    }

    #[test]
    fn searches_at_the_edge_of_the_range() {
        let opts = SearchOptions::default();
        let edge = sp(i32::MAX, 0);
        let out = astar_search(&GridGraph::adjacent(), edge, sp(i32::MAX - 3, 0), &opts);
        assert_eq!(
            out.nodes(),
            &[sp(i32::MAX - 1, 0), sp(i32::MAX - 2, 0), sp(i32::MAX - 3, 0)]
        );

        // The far side of the range is walkable but not one move away.
        let wrap = sp(i32::MIN, 0);
        let grid = GridGraph::adjacent().with_walkable([edge, sp(i32::MAX - 1, 0), wrap]);
        for alg in Algorithm::ALL {
            let out = pathfind(&grid, alg, edge, wrap, &opts);
            assert!(matches!(out, Outcome::Unreachable(_)), "{alg}");
            assert!(!out.nodes().contains(&wrap), "{alg}");
            assert!(route_cost(&grid, edge, out.nodes()).is_some());
        }
        assert_eq!(route_cost(&grid, edge, &[wrap]), None);
    }

    #[test]
    fn manhattan_flag_changes_fallback_choice() {
        // Two arms out of the origin; the goal (6, 0) is fenced off. The end
        // of the flat arm is 3 away by either metric, the end of the bent arm
        // 2.83 by Euclidean distance but 4 by Manhattan distance.
        let arms = [
            sp(0, 0),
            sp(1, 0),
            sp(2, 0),
            sp(3, 0),
            sp(1, -1),
            sp(2, -2),
            sp(3, -2),
            sp(4, -2),
        ];
        let grid = GridGraph::new().with_walkable(arms);
        let opts = SearchOptions::default();
        let euclid = dijkstra_search(&grid, sp(0, 0), sp(6, 0), &opts);
        assert!(matches!(euclid, Outcome::Unreachable(_)));
        assert_eq!(euclid.nodes().last(), Some(&sp(4, -2)));
        let manhattan = dijkstra_search(&grid.with_manhattan(true), sp(0, 0), sp(6, 0), &opts);
        assert_eq!(manhattan.nodes().last(), Some(&sp(3, 0)));
    }

    #[test]
    fn custom_heuristic() {
        let grid = GridGraph::adjacent();
        let zero = |_: GridSpace, _: GridSpace| 0.0_f32;
        let opts = SearchOptions::default().with_max_loops(2000);
        let a = pathfind_with(&grid, Algorithm::AStar, sp(0, 0), sp(3, 2), &zero, &opts);
        let d = pathfind(&grid, Algorithm::Dijkstra, sp(0, 0), sp(3, 2), &opts);
        assert_eq!(a.route().map(|r| r.cost()), Some(5.0));
        assert_eq!(a, d);
    }

    #[test]
    fn random_rooms_hold_route_properties() {
        let mut rng = StdRng::seed_from_u64(2024);
        let opts = SearchOptions::unbounded();
        for _ in 0..60 {
            let open: Vec<_> = room(8, 8, &[])
                .into_iter()
                .filter(|_| rng.random_range(0..100) >= 25)
                .collect();
            if open.len() < 2 {
                continue;
            }
            let weights: Vec<_> = open
                .iter()
                .map(|&s| (s, rng.random_range(1..5) as f32))
                .collect();
            let grid = GridGraph::adjacent()
                .with_walkable(open.iter().copied())
                .with_weights(weights)
                .unwrap()
                .with_manhattan(true);
            let start = open[rng.random_range(0..open.len())];
            let goal = open[rng.random_range(0..open.len())];

            let mut reached = Vec::new();
            for alg in Algorithm::ALL {
                let out = pathfind(&grid, alg, start, goal, &opts);
                let nodes = out.nodes();
                assert_ne!(nodes.first(), Some(&start));
                let walked = route_cost(&grid, start, nodes);
                assert!(walked.is_some(), "{alg}: invalid step in {nodes:?}");
                if let Some(r) = out.route() {
                    assert!(walked.unwrap_or(f32::NAN) <= r.cost(), "{alg}");
                }
                if out.reached_goal() {
                    assert_eq!(nodes.last(), Some(&goal));
                    reached.push((alg, out.into_route()));
                }
            }
            if reached.is_empty() {
                continue;
            }
            assert_eq!(reached.len(), Algorithm::ALL.len());

            let fewest = reached.iter().map(|(_, r)| r.len()).min();
            let bfs = reached.iter().find(|(a, _)| *a == Algorithm::BreadthFirst);
            assert_eq!(bfs.map(|(_, r)| r.len()), fewest);

            // Manhattan distance is consistent when every space costs >= 1.
            let cost_of = |alg: Algorithm| {
                reached
                    .iter()
                    .find(|(a, _)| *a == alg)
                    .map(|(_, r)| r.cost())
            };
            let best = cost_of(Algorithm::Dijkstra);
            assert_eq!(cost_of(Algorithm::AStar), best);
            assert!(reached.iter().all(|(_, r)| Some(r.cost()) >= best));
        }
    }
}
