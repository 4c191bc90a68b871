use crate::error::OptionsError;

/// Default loop budget of a single search.
pub const DEFAULT_MAX_LOOPS: usize = 300;

/// Per-call search configuration.
///
/// `max_loops` bounds how many frontier entries one search may pop,
/// including outdated entries a cost-aware search discards. When it runs out
/// the search stops and falls back to the closest node found so far, exactly
/// as if the goal were unreachable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptions"))]
pub struct SearchOptions {
    max_loops: usize,
    heuristic_scale: f32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_loops: DEFAULT_MAX_LOOPS,
            heuristic_scale: 1.0,
        }
    }
}

impl SearchOptions {
    pub fn new(max_loops: usize, heuristic_scale: f32) -> Result<Self, OptionsError> {
        Self::default()
            .with_max_loops(max_loops)
            .with_heuristic_scale(heuristic_scale)
    }

    /// No loop budget at all.
    ///
    /// A grid search with an unreachable goal never terminates unless the
    /// grid is bounded through `occupied`/`invert_occupied`.
    pub fn unbounded() -> Self {
        Self {
            max_loops: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_max_loops(mut self, max_loops: usize) -> Self {
        self.max_loops = max_loops;
        self
    }

    /// Weight of the heuristic term in A* priorities. `0` degrades to
    /// Dijkstra, large values approach greedy best-first.
    pub fn with_heuristic_scale(mut self, scale: f32) -> Result<Self, OptionsError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(OptionsError::InvalidHeuristicScale(scale));
        }
        self.heuristic_scale = scale;
        Ok(self)
    }

    #[inline]
    pub fn max_loops(&self) -> usize {
        self.max_loops
    }

    #[inline]
    pub fn heuristic_scale(&self) -> f32 {
        self.heuristic_scale
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawOptions {
    max_loops: usize,
    heuristic_scale: f32,
}

#[cfg(feature = "serde")]
impl Default for RawOptions {
    fn default() -> Self {
        let d = SearchOptions::default();
        Self {
            max_loops: d.max_loops,
            heuristic_scale: d.heuristic_scale,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptions> for SearchOptions {
    type Error = OptionsError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        SearchOptions::new(raw.max_loops, raw.heuristic_scale)
    }
}
