//! Pathfinding over node graphs and implicit grids.
//!
//! Five algorithms share one traversal skeleton ([`search()`]):
//!
//! | [`Algorithm`] | Frontier | Finds |
//! |---|---|---|
//! | `DepthFirst` | stack | some route |
//! | `BreadthFirst` | FIFO queue | fewest moves |
//! | `Heuristic` (greedy best-first) | heap by heuristic | some route, quickly |
//! | `Dijkstra` (uniform cost) | heap by accumulated cost | cheapest route |
//! | `AStar` | heap by cost + scaled heuristic | cheapest route, with an admissible heuristic |
//!
//! Three front ends feed it:
//!
//! - [`graph`]: [`wayfind_core::Graph`] nodes and connections, with a
//!   caller-supplied heuristic.
//! - [`grid`]: a [`wayfind_core::GridGraph`] over unbounded grid spaces, with a
//!   built-in Euclidean or Manhattan heuristic.
//! - [`grid3d`]: the same for [`wayfind_core::GridGraph3D`], with 6 adjacent
//!   and 20 diagonal moves per space.
//!
//! Searches never fail for reachability reasons. The [`Outcome`] tells the
//! caller whether the goal was reached, or whether the route only leads to the
//! visited node closest to it because the goal was unreachable or the loop
//! budget in [`SearchOptions`] ran out.
//!
//! # Extending
//!
//! Implement [`Pather`] for any other spatial model and call [`search()`]
//! directly.

mod algorithm;
mod distance;
mod error;
mod frontier;
pub mod graph;
pub mod grid;
pub mod grid3d;
mod options;
mod route;
mod search;
mod traits;

pub use algorithm::Algorithm;
pub use distance::{GridHeuristic, euclidean, euclidean_3d, manhattan, manhattan_3d};
pub use error::{OptionsError, PathError};
pub use options::{DEFAULT_MAX_LOOPS, SearchOptions};
pub use route::{Outcome, Route};
pub use search::search;
pub use traits::{Heuristic, Pather, Step};
