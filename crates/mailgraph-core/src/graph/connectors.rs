//! Connector (articulation point) search via discovery-time / low-link DFS.
//!
//! Each connected component is traversed from its first-seen person. Within a
//! component, discovery numbers start at 1 and increase monotonically. A
//! non-root vertex `v` is recorded every time a tree child `w` finishes with
//! `disc[v] <= low[w]`, so a person separating several subtrees appears once
//! per subtree. Visited neighbours, the DFS parent included, all count as back
//! edges in the low-link update.
//!
//! The root of each DFS tree is handled by [`RootRule`]: under
//! [`RootRule::Omit`] it is never reported; under [`RootRule::Textbook`] it is
//! reported once the component is finished if it has two or more tree children.

use petgraph::graph::NodeIndex;

use crate::config::RootRule;
use crate::graph::acquaintance::AcquaintanceGraph;

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeIndex,
    neighbours: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &AcquaintanceGraph, node: NodeIndex) -> Self {
        Self {
            node,
            neighbours: graph.neighbor_indices(node),
            cursor: 0,
        }
    }
}

/// Compute the connector sequence for the whole graph.
///
/// The explicit stack keeps deep chains of acquaintances from exhausting the
/// thread stack; the visiting order is that of the recursive formulation.
pub fn find_connectors(graph: &AcquaintanceGraph, root_rule: RootRule) -> Vec<String> {
    let inner = graph.inner_graph();
    let n = inner.node_count();
    // 0 = not yet visited
    let mut disc = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut found: Vec<NodeIndex> = Vec::new();

    for root in inner.node_indices() {
        if disc[root.index()] != 0 {
            continue;
        }

        let mut counter = 1;
        disc[root.index()] = counter;
        low[root.index()] = counter;
        let mut root_children = 0usize;
        let mut stack = vec![Frame::new(graph, root)];

        while let Some(frame) = stack.last_mut() {
            let v = frame.node;
            let next = frame.neighbours.get(frame.cursor).copied();
            if let Some(w) = next {
                frame.cursor += 1;
                if disc[w.index()] == 0 {
                    if v == root {
                        root_children += 1;
                    }
                    counter += 1;
                    disc[w.index()] = counter;
                    low[w.index()] = counter;
                    stack.push(Frame::new(graph, w));
                } else {
                    low[v.index()] = low[v.index()].min(disc[w.index()]);
                }
                continue;
            }

            // v is finished: fold its low-link into the parent
            stack.pop();
            if let Some(parent) = stack.last() {
                let p = parent.node;
                low[p.index()] = low[p.index()].min(low[v.index()]);
                if disc[p.index()] <= low[v.index()] && p != root {
                    found.push(p);
                }
            }
        }

        if root_rule == RootRule::Textbook && root_children >= 2 {
            found.push(root);
        }

        log::debug!(
            "Component rooted at {} traversed: {} people, {} root children",
            inner[root],
            counter,
            root_children
        );
    }

    found.into_iter().map(|idx| inner[idx].clone()).collect()
}

/// Drop repeated connectors, keeping the first occurrence of each.
pub fn dedup_connectors(connectors: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    connectors
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
