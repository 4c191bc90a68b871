use thiserror::Error;
use wayfind_core::GraphError;

/// Rejected [`SearchOptions`](crate::SearchOptions) values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    #[error("heuristic scale {0} must be finite and non-negative")]
    InvalidHeuristicScale(f32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unknown search algorithm `{0}`")]
    UnknownAlgorithm(String),
}
