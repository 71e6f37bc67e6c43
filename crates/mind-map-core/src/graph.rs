//! The undirected word graph.

use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use serde::{Deserialize, Serialize};

/// An undirected link between two words, stored in canonical (sorted) order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordEdge {
    /// The lexicographically smaller endpoint.
    pub a: String,
    /// The lexicographically larger endpoint.
    pub b: String,
}

impl WordEdge {
    /// Create an edge, ordering the endpoints canonically.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        let (x, y) = (x.into(), y.into());
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }
}

/// Graph of words where an edge means "adjacent inside some phrase".
///
/// Nodes and edges have set semantics: inserting an existing word or edge is
/// a no-op. Iteration follows insertion order, which keeps downstream layout
/// deterministic for a given phrase sequence.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    graph: StableUnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl ConceptGraph {
    /// Creates an empty graph with no nodes or edges.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Add a word if missing and return its index.
    pub(crate) fn ensure_node(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(word.to_string());
        self.index.insert(word.to_string(), idx);
        idx
    }

    /// Add an undirected edge between two words.
    ///
    /// Returns `true` when the edge is new.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn contains_node(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Whether `x` and `y` are linked, regardless of argument order.
    pub fn contains_edge(&self, x: &str, y: &str) -> bool {
        match (self.index.get(x), self.index.get(y)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Index of a word, if present.
    pub fn node_index(&self, word: &str) -> Option<NodeIndex> {
        self.index.get(word).copied()
    }

    /// Word stored at an index.
    pub fn word(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Words in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(String::as_str))
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Edges in insertion order, as `(first_word, second_word)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edge_indices().filter_map(move |(a, b)| Some((self.word(a)?, self.word(b)?)))
    }

    /// Edge endpoints as node indices, in insertion order.
    pub fn edge_indices(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(move |e| self.graph.edge_endpoints(e))
    }

    /// Distinct neighbours of a word, sorted.
    pub fn neighbors(&self, word: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(word) else {
            return Vec::new();
        };
        let unique: BTreeSet<&str> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.word(n))
            .collect();
        unique.into_iter().collect()
    }

    /// Number of distinct neighbours of a word.
    pub fn degree(&self, word: &str) -> usize {
        self.neighbors(word).len()
    }

    /// Canonical, order-independent view of the graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut nodes: Vec<String> = self.nodes().map(str::to_string).collect();
        nodes.sort();

        let mut edges: Vec<WordEdge> = self.edges().map(|(a, b)| WordEdge::new(a, b)).collect();
        edges.sort();

        GraphSnapshot { nodes, edges }
    }

    /// Borrow the underlying petgraph structure for analysis.
    pub fn as_petgraph(&self) -> &StableUnGraph<String, ()> {
        &self.graph
    }
}

/// Sorted node and edge lists, independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Distinct words, sorted.
    pub nodes: Vec<String>,
    /// Distinct edges, each canonically ordered, sorted.
    pub edges: Vec<WordEdge>,
}

impl GraphSnapshot {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
