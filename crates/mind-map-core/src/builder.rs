//! Builds a [`ConceptGraph`] from extracted phrases.

use tracing::debug;

use crate::graph::ConceptGraph;
use crate::phrase::Phrase;

/// Incremental builder linking consecutive words of each phrase.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: ConceptGraph,
    phrases_seen: usize,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a phrase sequence in one go.
    pub fn from_phrases<'a, I>(phrases: I) -> Self
    where
        I: IntoIterator<Item = &'a Phrase>,
    {
        let mut builder = Self::new();
        for phrase in phrases {
            builder.add_phrase(phrase);
        }
        builder
    }

    /// Link every adjacent word pair of `phrase`.
    ///
    /// Returns the number of edges that were new to the graph.
    pub fn add_phrase(&mut self, phrase: &Phrase) -> usize {
        self.phrases_seen += 1;
        let added = phrase
            .adjacent_pairs()
            .filter(|(left, right)| self.graph.add_edge(left, right))
            .count();
        debug!(phrase = %phrase, added, "Linked phrase words");
        added
    }

    /// Number of phrases passed to [`GraphBuilder::add_phrase`].
    pub fn phrases_seen(&self) -> usize {
        self.phrases_seen
    }

    /// Finish building and hand over the graph.
    pub fn build(self) -> ConceptGraph {
        debug!(
            phrases = self.phrases_seen,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Built concept graph"
        );
        self.graph
    }
}

/// Build the concept graph for a phrase sequence.
pub fn build_graph(phrases: &[Phrase]) -> ConceptGraph {
    GraphBuilder::from_phrases(phrases).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordEdge;

    fn phrases(texts: &[&str]) -> Vec<Phrase> {
        texts.iter().filter_map(Phrase::new).collect()
    }

    #[test]
    fn test_empty_input_gives_empty_graph() {
        let graph = build_graph(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_sentence_scenario() {
        let graph = build_graph(&phrases(&[
            "Artificial intelligence",
            "a branch",
            "computer science",
        ]));

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge("Artificial", "intelligence"));
        assert!(graph.contains_edge("a", "branch"));
        assert!(graph.contains_edge("computer", "science"));
    }

    #[test]
    fn test_n_words_add_n_minus_one_edges() {
        let mut builder = GraphBuilder::new();
        let phrase = Phrase::new("the quick brown fox jumps").unwrap();
        assert_eq!(builder.add_phrase(&phrase), phrase.word_count() - 1);
    }

    #[test]
    fn test_repeated_pairs_collapse() {
        let mut builder = GraphBuilder::new();
        let phrase = Phrase::new("data to data to data").unwrap();

        // data-to, to-data, data-to, to-data all collapse into one edge
        assert_eq!(builder.add_phrase(&phrase), 1);
        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_shared_words_join_phrases() {
        let graph = build_graph(&phrases(&["computer science", "computer vision"]));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.degree("computer"), 2);
    }

    #[test]
    fn test_building_twice_is_identical() {
        let input = phrases(&["natural language processing", "machine learning", "a branch"]);
        assert_eq!(build_graph(&input).snapshot(), build_graph(&input).snapshot());
    }

    #[test]
    fn test_edge_set_is_order_independent() {
        let mut input = phrases(&[
            "natural language processing",
            "computer vision",
            "computer science",
            "language models",
        ]);
        let forward = build_graph(&input).snapshot();
        input.reverse();
        let backward = build_graph(&input).snapshot();

        assert_eq!(forward.edges, backward.edges);
        assert_eq!(forward.nodes, backward.nodes);
    }

    #[test]
    fn test_every_edge_comes_from_an_adjacent_pair() {
        let input = phrases(&["intelligent machines", "machine learning", "a branch"]);
        let graph = build_graph(&input);

        let allowed: Vec<WordEdge> = input
            .iter()
            .flat_map(|p| p.adjacent_pairs().map(|(a, b)| WordEdge::new(a, b)).collect::<Vec<_>>())
            .collect();

        for edge in graph.snapshot().edges {
            assert!(allowed.contains(&edge), "unexpected edge {edge:?}");
        }
    }

    #[test]
    fn test_phrases_seen_counts_duplicates() {
        let input = phrases(&["machine learning", "machine learning"]);
        let builder = GraphBuilder::from_phrases(&input);
        assert_eq!(builder.phrases_seen(), 2);
        assert_eq!(builder.build().edge_count(), 1);
    }
}
