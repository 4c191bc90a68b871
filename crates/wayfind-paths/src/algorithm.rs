use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Cost-ordered search guided by `cost + heuristic * scale`.
    AStar,
    /// Uniform-cost search: cheapest accumulated cost first.
    Dijkstra,
    /// Greedy best-first search: smallest heuristic first, costs ignored.
    Heuristic,
    /// FIFO expansion; fewest moves, not lowest cost.
    BreadthFirst,
    /// LIFO expansion; newest discovery first.
    DepthFirst,
}

/// How the frontier of an algorithm is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrontierKind {
    Stack,
    Queue,
    Priority,
}

impl Algorithm {
    pub const UNIFORM_COST: Self = Self::Dijkstra;
    pub const GREEDY_BEST_FIRST: Self = Self::Heuristic;

    pub const ALL: [Self; 5] = [
        Self::AStar,
        Self::Dijkstra,
        Self::Heuristic,
        Self::BreadthFirst,
        Self::DepthFirst,
    ];

    /// Whether the algorithm relaxes already-discovered nodes when a cheaper
    /// route to them turns up.
    #[inline]
    pub fn is_cost_aware(self) -> bool {
        matches!(self, Self::AStar | Self::Dijkstra)
    }

    #[inline]
    pub(crate) fn frontier_kind(self) -> FrontierKind {
        match self {
            Self::DepthFirst => FrontierKind::Stack,
            Self::BreadthFirst => FrontierKind::Queue,
            Self::AStar | Self::Dijkstra | Self::Heuristic => FrontierKind::Priority,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::Heuristic => "heuristic",
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Self::Dijkstra),
            "heuristic" | "greedy" | "greedy-best-first" => Ok(Self::Heuristic),
            "breadth-first" | "bfs" => Ok(Self::BreadthFirst),
            "depth-first" | "dfs" => Ok(Self::DepthFirst),
            _ => Err(PathError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
