//! Node-and-connection graphs: [`Graph`], [`Node`], [`Connection`].
//!
//! Nodes live in an arena owned by the [`Graph`] and are addressed by
//! [`NodeId`] handles. Nodes are never removed, so handles stay valid for the
//! lifetime of the graph; deactivate a node to make it unreachable instead.

use std::fmt;

use crate::error::{GraphError, check_weight};

/// Handle to a node inside a [`Graph`].
///
/// A handle is a plain index and does not remember which graph issued it.
/// Passing it to a different graph addresses whatever node sits at the same
/// index there, or fails with [`GraphError::UnknownNode`] if there is none.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed edge between two nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    /// Cost of traversing the edge itself.
    pub weight: f32,
    pub active: bool,
}

/// A graph node carrying a user payload.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    pub data: T,
    weight: f32,
    /// Inactive nodes are never entered by a search.
    pub active: bool,
    connections: Vec<Connection>,
}

impl<T> Node<T> {
    /// Cost added when entering this node. Always finite and `>= 0`.
    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Outgoing connections, in insertion order.
    #[inline]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// An arena of nodes joined by directed connections.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add an active node with weight 1.
    pub fn add_node(&mut self, data: T) -> NodeId {
        self.push(data, 1.0)
    }

    /// Add an active node with the given entry weight.
    pub fn add_weighted_node(&mut self, data: T, weight: f32) -> Result<NodeId, GraphError> {
        let weight = check_weight(weight)?;
        Ok(self.push(data, weight))
    }

    fn push(&mut self, data: T, weight: f32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            weight,
            active: true,
            connections: Vec::new(),
        });
        id
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is in bounds for this graph. Handles from other graphs
    /// are not told apart; see [`NodeId`].
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.0)
    }

    fn node_or_err(&self, id: NodeId) -> Result<&Node<T>, GraphError> {
        self.node(id).ok_or(GraphError::UnknownNode(id))
    }

    fn node_mut_or_err(&mut self, id: NodeId) -> Result<&mut Node<T>, GraphError> {
        self.nodes.get_mut(id.0).ok_or(GraphError::UnknownNode(id))
    }

    /// Handles of every node, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate over `(id, node)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Add an active connection `from -> to`.
    ///
    /// Parallel connections are allowed; a search takes whichever is cheaper.
    pub fn connect(&mut self, from: NodeId, to: NodeId, weight: f32) -> Result<(), GraphError> {
        let weight = check_weight(weight)?;
        self.node_or_err(to)?;
        self.node_mut_or_err(from)?.connections.push(Connection {
            from,
            to,
            weight,
            active: true,
        });
        Ok(())
    }

    /// Add connections in both directions between `a` and `b`.
    pub fn connect_both(&mut self, a: NodeId, b: NodeId, weight: f32) -> Result<(), GraphError> {
        self.connect(a, b, weight)?;
        self.connect(b, a, weight)
    }

    /// Remove every connection `from -> to`. Returns how many were removed.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) -> Result<usize, GraphError> {
        self.node_or_err(to)?;
        let conns = &mut self.node_mut_or_err(from)?.connections;
        let before = conns.len();
        conns.retain(|c| c.to != to);
        Ok(before - conns.len())
    }

    /// Change the entry weight of a node.
    pub fn set_node_weight(&mut self, id: NodeId, weight: f32) -> Result<(), GraphError> {
        let weight = check_weight(weight)?;
        self.node_mut_or_err(id)?.weight = weight;
        Ok(())
    }

    /// Activate or deactivate a node.
    pub fn set_node_active(&mut self, id: NodeId, active: bool) -> Result<(), GraphError> {
        self.node_mut_or_err(id)?.active = active;
        Ok(())
    }

    /// Activate or deactivate every connection `from -> to`. Returns how many
    /// connections were touched.
    pub fn set_connection_active(
        &mut self,
        from: NodeId,
        to: NodeId,
        active: bool,
    ) -> Result<usize, GraphError> {
        self.node_or_err(to)?;
        let mut touched = 0;
        for c in self.node_mut_or_err(from)?.connections.iter_mut() {
            if c.to == to {
                c.active = active;
                touched += 1;
            }
        }
        Ok(touched)
    }

    /// Outgoing connections of `id`. Empty for unknown handles.
    #[inline]
    pub fn connections(&self, id: NodeId) -> &[Connection] {
        self.node(id).map(|n| n.connections.as_slice()).unwrap_or(&[])
    }

    /// Connections that end at `id`.
    pub fn incoming(&self, id: NodeId) -> Vec<&Connection> {
        self.all_connections().filter(|c| c.to == id).collect()
    }

    /// Every connection of the graph, grouped by source node.
    pub fn all_connections(&self) -> impl Iterator<Item = &Connection> {
        self.nodes.iter().flat_map(|n| n.connections.iter())
    }

    pub fn total_connections(&self) -> usize {
        self.nodes.iter().map(|n| n.connections.len()).sum()
    }

    /// Whether a search standing on `conn.from` may follow `conn`.
    #[inline]
    pub fn is_usable(&self, conn: &Connection) -> bool {
        conn.active && self.node(conn.to).is_some_and(|n| n.active)
    }

    /// Whether some usable connection leads from `from` to `to`.
    pub fn is_traversable(&self, from: NodeId, to: NodeId) -> bool {
        self.connections(from)
            .iter()
            .any(|c| c.to == to && self.is_usable(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph<&'static str>, [NodeId; 3]) {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.connect(a, b, 1.0).unwrap();
        g.connect(b, c, 2.0).unwrap();
        g.connect(a, c, 5.0).unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn build_and_query() {
        let (g, [a, b, c]) = triangle();
        assert_eq!(g.len(), 3);
        assert_eq!(g.total_connections(), 3);
        assert_eq!(g.connections(a).len(), 2);
        assert_eq!(g.node(b).map(|n| n.data), Some("b"));
        assert_eq!(g.incoming(c).len(), 2);
        assert!(g.incoming(a).is_empty());
        assert!(g.is_traversable(a, b));
        assert!(!g.is_traversable(b, a));
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let (mut g, [a, ..]) = triangle();
        let mut other = Graph::new();
        for _ in 0..10 {
            other.add_node(());
        }
        let stranger = other.node_ids().last().unwrap();
        assert_eq!(g.connect(a, stranger, 1.0), Err(GraphError::UnknownNode(stranger)));
        assert_eq!(g.set_node_active(stranger, false), Err(GraphError::UnknownNode(stranger)));
        assert!(g.connections(stranger).is_empty());
        assert!(!g.contains(stranger));
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let (mut g, [a, b, _]) = triangle();
        assert_eq!(g.connect(a, b, -1.0), Err(GraphError::InvalidWeight(-1.0)));
        assert!(matches!(
            g.add_weighted_node("bad", f32::NAN),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(g.connect(a, b, f32::INFINITY).is_err());
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn node_weights_stay_valid() {
        let (mut g, [a, b, _]) = triangle();
        assert_eq!(g.node(a).map(|n| n.weight()), Some(1.0));
        g.set_node_weight(a, 4.5).unwrap();
        assert_eq!(g.node(a).map(|n| n.weight()), Some(4.5));
        assert_eq!(g.set_node_weight(b, -2.0), Err(GraphError::InvalidWeight(-2.0)));
        assert!(g.set_node_weight(b, f32::NAN).is_err());
        assert_eq!(g.node(b).map(|n| n.weight()), Some(1.0));
        if let Some(n) = g.node_mut(b) {
            n.data = "renamed";
        }
        assert_eq!(g.node(b).map(|n| n.data), Some("renamed"));
    }

    #[test]
    fn disconnect_removes_parallel_edges() {
        let (mut g, [a, b, c]) = triangle();
        g.connect(a, b, 9.0).unwrap();
        assert_eq!(g.disconnect(a, b), Ok(2));
        assert!(!g.is_traversable(a, b));
        assert!(g.is_traversable(a, c));
        assert_eq!(g.disconnect(a, b), Ok(0));
    }

    #[test]
    fn inactive_node_or_connection_blocks_traversal() {
        let (mut g, [a, b, c]) = triangle();
        g.set_node_active(b, false).unwrap();
        assert!(!g.is_traversable(a, b));
        g.set_node_active(b, true).unwrap();
        assert_eq!(g.set_connection_active(a, c, false), Ok(1));
        assert!(!g.is_traversable(a, c));
        assert!(g.is_traversable(a, b));
    }

    #[test]
    fn node_ids_match_iter() {
        let (g, ids) = triangle();
        let listed: Vec<_> = g.node_ids().collect();
        assert_eq!(listed, ids.to_vec());
        assert_eq!(g.iter().map(|(id, _)| id).collect::<Vec<_>>(), listed);
        assert_eq!(ids[2].index(), 2);
        assert_eq!(ids[2].to_string(), "#2");
    }
}
