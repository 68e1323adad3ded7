//! Undirected acquaintance graph backed by petgraph::UnGraph.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Wrapper around petgraph::UnGraph keyed by email address.
///
/// Simple graph: at most one edge per pair of people. Self-loops are allowed
/// and stored once. Nodes are never removed, so node indices follow
/// first-seen order and edge indices follow insertion order.
#[derive(Debug, Clone)]
pub struct AcquaintanceGraph {
    graph: UnGraph<String, ()>,
    /// O(1) address → NodeIndex lookup.
    id_index: HashMap<String, NodeIndex>,
}

impl AcquaintanceGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            id_index: HashMap::new(),
        }
    }

    /// Get or create the node for a person.
    fn ensure_node(&mut self, person: &str) -> NodeIndex {
        if let Some(&idx) = self.id_index.get(person) {
            idx
        } else {
            let idx = self.graph.add_node(person.to_string());
            self.id_index.insert(person.to_string(), idx);
            idx
        }
    }

    /// Register a person without adding any edge.
    pub fn add_person(&mut self, person: &str) {
        self.ensure_node(person);
    }

    /// Insert the friendship `a`–`b`. Repeated insertions are no-ops.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a_idx = self.ensure_node(a);
        let b_idx = self.ensure_node(b);
        if self.graph.find_edge(a_idx, b_idx).is_none() {
            self.graph.add_edge(a_idx, b_idx, ());
        }
    }

    /// Owned copy of a person's neighbours in insertion order; empty if unknown.
    pub fn neighbors(&self, person: &str) -> Vec<String> {
        match self.id_index.get(person) {
            Some(&idx) => self
                .neighbor_indices(idx)
                .into_iter()
                .map(|n| self.graph[n].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// True iff `b` is in `a`'s neighbour set.
    ///
    /// Only `a`'s side is consulted; symmetry is guaranteed by `add_edge`.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        let (Some(&a_idx), Some(&b_idx)) = (self.id_index.get(a), self.id_index.get(b)) else {
            return false;
        };
        self.graph
            .edges(a_idx)
            .any(|e| other_end(e.source(), e.target(), a_idx) == b_idx)
    }

    pub fn contains(&self, person: &str) -> bool {
        self.id_index.contains_key(person)
    }

    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All people in first-seen order.
    pub fn people(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Number of connected components (isolated people count as one each).
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Neighbour node indices ordered by edge insertion.
    pub(crate) fn neighbor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|e| (e.id(), other_end(e.source(), e.target(), idx)))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        // a self-loop must only be listed once
        edges.dedup_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, n)| n).collect()
    }

    /// Access the underlying petgraph for algorithms that need it.
    pub fn inner_graph(&self) -> &UnGraph<String, ()> {
        &self.graph
    }
}

fn other_end(source: NodeIndex, target: NodeIndex, from: NodeIndex) -> NodeIndex {
    if source == from {
        target
    } else {
        source
    }
}

impl Default for AcquaintanceGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("a@x", "b@x");
        assert!(g.are_adjacent("a@x", "b@x"));
        assert!(g.are_adjacent("b@x", "a@x"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("a@x", "b@x");
        g.add_edge("a@x", "b@x");
        g.add_edge("b@x", "a@x");
        assert_eq!(g.neighbors("a@x").len(), 1);
        assert_eq!(g.neighbors("b@x").len(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unknown_person_has_no_neighbours() {
        let g = AcquaintanceGraph::new();
        assert!(g.neighbors("ghost@x").is_empty());
        assert!(!g.are_adjacent("ghost@x", "a@x"));
        assert!(!g.contains("ghost@x"));
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("hub", "c");
        g.add_edge("a", "hub");
        g.add_edge("hub", "b");
        assert_eq!(g.neighbors("hub"), vec!["c", "a", "b"]);
    }

    #[test]
    fn neighbours_are_a_copy() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("a", "b");
        let mut friends = g.neighbors("a");
        friends.push("intruder".to_string());
        assert_eq!(g.neighbors("a"), vec!["b"]);
    }

    #[test]
    fn self_loop_listed_once() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("me", "me");
        g.add_edge("me", "me");
        assert_eq!(g.neighbors("me"), vec!["me"]);
        assert!(g.are_adjacent("me", "me"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn add_person_registers_isolated_node() {
        let mut g = AcquaintanceGraph::new();
        g.add_person("loner");
        g.add_person("loner");
        assert!(g.contains("loner"));
        assert_eq!(g.person_count(), 1);
        assert!(g.neighbors("loner").is_empty());
    }

    #[test]
    fn people_in_first_seen_order() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("b", "a");
        g.add_edge("c", "a");
        assert_eq!(g.people(), vec!["b", "a", "c"]);
    }

    #[test]
    fn component_count_includes_isolated() {
        let mut g = AcquaintanceGraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "d");
        g.add_person("e");
        assert_eq!(g.component_count(), 3);
    }
}
