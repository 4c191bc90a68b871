//! **wayfind-core** — spatial model for the *wayfind* pathfinding crates.
//!
//! Two ways to describe a space to search:
//!
//! - [`Graph`]: an arena of weighted [`Node`]s joined by directed, weighted
//!   [`Connection`]s, each of which can be switched off.
//! - [`GridRules`]: traversal rules over an implicit, unbounded grid of
//!   [`GridSpace`]s ([`GridGraph`]) or [`GridSpace3D`]s ([`GridGraph3D`]),
//!   with optional blocked spaces and per-space weights.

pub mod error;
pub mod geom;
pub mod graph;
pub mod grid_graph;

pub use error::GraphError;
pub use geom::{GridCoord, GridSpace, GridSpace3D};
pub use graph::{Connection, Graph, Node, NodeId};
pub use grid_graph::{GridGraph, GridGraph3D, GridRules};
