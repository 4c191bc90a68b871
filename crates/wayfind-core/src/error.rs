use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised when building or editing a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} does not belong to this graph")]
    UnknownNode(NodeId),

    #[error("weight {0} must be finite and non-negative")]
    InvalidWeight(f32),
}

/// Check that a node or connection weight is usable as a traversal cost.
pub(crate) fn check_weight(weight: f32) -> Result<f32, GraphError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}
