//! Traversal rules for grid search: [`GridRules`], aliased as [`GridGraph`]
//! for 2D grids and [`GridGraph3D`] for 3D grids.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, check_weight};
use crate::geom::{GridCoord, GridSpace, GridSpace3D};

/// Settings describing how a search may move through an unbounded grid of
/// `S` coordinates.
///
/// A `GridRules` is plain configuration: it is borrowed for the duration of
/// one search and has no other lifecycle.
#[derive(Clone, Debug)]
pub struct GridRules<S> {
    /// Allow moves along a single axis.
    pub adjacent_navigation: bool,
    /// Allow moves along two or more axes at once.
    pub diagonal_navigation: bool,
    /// Treat every space as walkable regardless of `occupied`.
    pub ignore_occupied: bool,
    /// Blocked spaces (or, with `invert_occupied`, the only open ones).
    pub occupied: Option<HashSet<S>>,
    pub invert_occupied: bool,
    /// Use `default_weight` everywhere regardless of `weights`.
    pub ignore_weights: bool,
    /// Cost of entering specific spaces.
    pub weights: Option<HashMap<S, f32>>,
    /// Cost of entering any space missing from `weights`.
    pub default_weight: f32,
    /// Use Manhattan instead of Euclidean distance as the built-in heuristic.
    pub manhattan: bool,
}

/// Rules for the 2D grid.
pub type GridGraph = GridRules<GridSpace>;

/// Rules for the 3D grid.
pub type GridGraph3D = GridRules<GridSpace3D>;

impl<S> Default for GridRules<S> {
    fn default() -> Self {
        Self {
            adjacent_navigation: true,
            diagonal_navigation: true,
            ignore_occupied: false,
            occupied: None,
            invert_occupied: false,
            ignore_weights: false,
            weights: None,
            default_weight: 1.0,
            manhattan: false,
        }
    }
}

impl<S: GridCoord> GridRules<S> {
    /// Both navigation modes, nothing blocked, every space costs 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only single-axis moves.
    pub fn adjacent() -> Self {
        Self {
            diagonal_navigation: false,
            ..Self::default()
        }
    }

    /// Only diagonal moves.
    pub fn diagonal() -> Self {
        Self {
            adjacent_navigation: false,
            ..Self::default()
        }
    }

    /// Block the given spaces.
    pub fn with_occupied(mut self, occupied: impl IntoIterator<Item = S>) -> Self {
        self.occupied = Some(occupied.into_iter().collect());
        self.invert_occupied = false;
        self
    }

    /// Make the given spaces the only walkable ones.
    pub fn with_walkable(mut self, walkable: impl IntoIterator<Item = S>) -> Self {
        self.occupied = Some(walkable.into_iter().collect());
        self.invert_occupied = true;
        self
    }

    /// Set per-space entry costs.
    pub fn with_weights(
        mut self,
        weights: impl IntoIterator<Item = (S, f32)>,
    ) -> Result<Self, GraphError> {
        let map = weights
            .into_iter()
            .map(|(s, w)| check_weight(w).map(|w| (s, w)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        self.weights = Some(map);
        Ok(self)
    }

    /// Set the cost of spaces missing from the weight map.
    pub fn with_default_weight(mut self, weight: f32) -> Result<Self, GraphError> {
        self.default_weight = check_weight(weight)?;
        Ok(self)
    }

    pub fn with_manhattan(mut self, manhattan: bool) -> Self {
        self.manhattan = manhattan;
        self
    }

    /// Whether any move is allowed at all.
    #[inline]
    pub fn can_navigate(&self) -> bool {
        self.adjacent_navigation || self.diagonal_navigation
    }

    /// Whether a search may enter `space`.
    #[inline]
    pub fn is_walkable(&self, space: S) -> bool {
        if self.ignore_occupied {
            return true;
        }
        match &self.occupied {
            None => true,
            Some(set) => set.contains(&space) == self.invert_occupied,
        }
    }

    /// Cost of entering `space`.
    #[inline]
    pub fn weight_of(&self, space: S) -> f32 {
        if self.ignore_weights {
            return self.default_weight;
        }
        self.weights
            .as_ref()
            .and_then(|w| w.get(&space).copied())
            .unwrap_or(self.default_weight)
    }

    /// The enabled move offsets, in enumeration order.
    pub fn directions(&self) -> impl Iterator<Item = S> + '_ {
        S::offsets().iter().copied().filter(move |&dir| {
            if S::is_diagonal(dir) {
                self.diagonal_navigation
            } else {
                self.adjacent_navigation
            }
        })
    }

    /// The spaces one allowed move away from `from`. Moves past the edge of
    /// the `i32` range are never allowed.
    pub fn moves_from(&self, from: S) -> impl Iterator<Item = S> + '_ {
        self.directions()
            .filter_map(move |dir| from.checked_add(dir))
            .filter(move |&to| self.is_walkable(to))
    }

    /// Whether a single move from `from` to `to` is allowed.
    pub fn is_move(&self, from: S, to: S) -> bool {
        self.moves_from(from).any(|s| s == to)
    }
}
