//! Seeded Fruchterman-Reingold spring layout.

use std::collections::HashMap;

use mind_map_core::ConceptGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{LayoutError, LayoutResult, Position, DEFAULT_SEED};

/// Closest two nodes are treated as being, to avoid infinite repulsion.
const MIN_DISTANCE: f64 = 0.01;

/// Configuration for the spring layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Seed for the initial positions.
    pub seed: u64,
    /// Maximum number of simulation steps.
    pub iterations: u32,
    /// Optimal distance between nodes; `1/sqrt(n)` when unset.
    pub k: Option<f64>,
    /// Half-width of the square the result is scaled into.
    pub scale: f64,
    /// Stop once the mean per-node move falls below this.
    pub threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            iterations: 50,
            k: None,
            scale: 1.0,
            threshold: 1e-4,
        }
    }
}

impl LayoutConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Check that every numeric parameter is usable.
    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if let Some(k) = self.k {
            if !(k.is_finite() && k > 0.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "k must be positive, got {k}"
                )));
            }
        }
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Current state of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutState {
    /// No graph loaded yet.
    Uninitialized,
    /// More steps are pending.
    Running,
    /// Moves fell below the threshold.
    Converged,
    /// The iteration budget ran out.
    Exhausted,
}

/// A word and where it was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub word: String,
    pub position: Position,
}

/// Final node coordinates, in graph insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    nodes: Vec<PlacedNode>,
    state: LayoutState,
    iterations: u32,
}

impl Layout {
    /// Position of a word, if it was laid out.
    pub fn position(&self, word: &str) -> Option<Position> {
        self.nodes
            .iter()
            .find(|n| n.word == word)
            .map(|n| n.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedNode> + '_ {
        self.nodes.iter()
    }

    /// Position lookup table keyed by word.
    pub fn positions(&self) -> HashMap<&str, Position> {
        self.nodes
            .iter()
            .map(|n| (n.word.as_str(), n.position))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How the simulation ended.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Number of steps actually run.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Smallest and largest corner of the bounding box.
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let first = self.nodes.first()?.position;
        let (min, max) = self
            .nodes
            .iter()
            .fold((first, first), |(min, max), n| {
                (
                    Position::new(min.x.min(n.position.x), min.y.min(n.position.y)),
                    Position::new(max.x.max(n.position.x), max.y.max(n.position.y)),
                )
            });
        Some((min, max))
    }
}

/// Stepwise spring layout engine.
#[derive(Debug, Clone)]
pub struct SpringLayout {
    config: LayoutConfig,
    state: LayoutState,
    iteration: u32,
    words: Vec<String>,
    positions: Vec<[f64; 2]>,
    /// Sorted neighbour indices per node, without self-loops.
    neighbors: Vec<Vec<usize>>,
    k: f64,
    temperature: f64,
    cooling: f64,
}

impl SpringLayout {
    /// Create a new layout engine.
    pub fn new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: LayoutState::Uninitialized,
            iteration: 0,
            words: Vec::new(),
            positions: Vec::new(),
            neighbors: Vec::new(),
            k: 0.0,
            temperature: 0.0,
            cooling: 0.0,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Get current state.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Get current iteration count.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Load a graph and draw seeded initial positions.
    pub fn init(&mut self, graph: &ConceptGraph) {
        let n = graph.node_count();
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut dense = HashMap::with_capacity(n);
        self.words.clear();
        self.positions.clear();
        for (i, idx) in graph.node_indices().enumerate() {
            dense.insert(idx, i);
            self.words
                .push(graph.word(idx).unwrap_or_default().to_string());
            self.positions.push([rng.gen::<f64>(), rng.gen::<f64>()]);
        }

        self.neighbors = vec![Vec::new(); n];
        for (a, b) in graph.edge_indices() {
            if let (Some(&i), Some(&j)) = (dense.get(&a), dense.get(&b)) {
                if i != j {
                    self.neighbors[i].push(j);
                    self.neighbors[j].push(i);
                }
            }
        }
        for list in &mut self.neighbors {
            list.sort_unstable();
            list.dedup();
        }

        self.k = self
            .config
            .k
            .unwrap_or_else(|| if n > 0 { (1.0 / n as f64).sqrt() } else { 1.0 });
        self.temperature = 0.1 * extent(&self.positions);
        self.cooling = self.temperature / (self.config.iterations as f64 + 1.0);
        self.iteration = 0;
        self.state = if n < 2 {
            LayoutState::Converged
        } else {
            LayoutState::Running
        };

        debug!(
            nodes = n,
            edges = graph.edge_count(),
            seed = self.config.seed,
            k = self.k,
            "Initialized spring layout"
        );
    }

    /// Run one simulation step and report the resulting state.
    pub fn step(&mut self) -> LayoutResult<LayoutState> {
        match self.state {
            LayoutState::Uninitialized => return Err(LayoutError::NotInitialized),
            LayoutState::Running => {}
            done => return Ok(done),
        }
        if self.iteration >= self.config.iterations {
            self.state = LayoutState::Exhausted;
            return Ok(self.state);
        }

        let n = self.positions.len();
        let k2 = self.k * self.k;
        let mut moves = vec![[0.0_f64; 2]; n];

        for (i, mv) in moves.iter_mut().enumerate() {
            let mut disp = [0.0_f64; 2];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (dx, dy, distance) = self.offset(i, j);
                let factor = k2 / (distance * distance);
                disp[0] += dx * factor;
                disp[1] += dy * factor;
            }
            for &j in &self.neighbors[i] {
                let (dx, dy, distance) = self.offset(i, j);
                let factor = distance / self.k;
                disp[0] -= dx * factor;
                disp[1] -= dy * factor;
            }
            let length = (disp[0] * disp[0] + disp[1] * disp[1])
                .sqrt()
                .max(MIN_DISTANCE);
            mv[0] = disp[0] * self.temperature / length;
            mv[1] = disp[1] * self.temperature / length;
        }

        let mut total = 0.0;
        for (pos, mv) in self.positions.iter_mut().zip(&moves) {
            pos[0] += mv[0];
            pos[1] += mv[1];
            total += mv[0] * mv[0] + mv[1] * mv[1];
        }
        self.temperature -= self.cooling;
        self.iteration += 1;

        if total.sqrt() / (n as f64) < self.config.threshold {
            self.state = LayoutState::Converged;
        } else if self.iteration >= self.config.iterations {
            self.state = LayoutState::Exhausted;
        }
        Ok(self.state)
    }

    /// Vector from node `j` to node `i` and its clamped length.
    fn offset(&self, i: usize, j: usize) -> (f64, f64, f64) {
        let dx = self.positions[i][0] - self.positions[j][0];
        let dy = self.positions[i][1] - self.positions[j][1];
        (dx, dy, (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE))
    }

    /// Current positions, centred and scaled.
    pub fn finish(&self) -> Layout {
        let scaled = rescale(&self.positions, self.config.scale);
        let nodes = self
            .words
            .iter()
            .zip(scaled)
            .map(|(word, [x, y])| PlacedNode {
                word: word.clone(),
                position: Position::new(x as f32, y as f32),
            })
            .collect();

        Layout {
            nodes,
            state: self.state,
            iterations: self.iteration,
        }
    }

    /// Lay out `graph` from scratch and run to completion.
    pub fn compute(&mut self, graph: &ConceptGraph) -> LayoutResult<Layout> {
        self.init(graph);
        while self.step()? == LayoutState::Running {}

        let layout = self.finish();
        info!(
            nodes = layout.len(),
            iterations = layout.iterations(),
            state = ?layout.state(),
            "Computed layout"
        );
        Ok(layout)
    }
}

/// Lay out a graph with the given configuration.
pub fn spring_layout(graph: &ConceptGraph, config: &LayoutConfig) -> LayoutResult<Layout> {
    SpringLayout::new(config.clone())?.compute(graph)
}

/// Larger side of the bounding box.
fn extent(positions: &[[f64; 2]]) -> f64 {
    let mut min = [f64::MAX; 2];
    let mut max = [f64::MIN; 2];
    for p in positions {
        for axis in 0..2 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    if positions.is_empty() {
        return 0.0;
    }
    (max[0] - min[0]).max(max[1] - min[1])
}

/// Centre on the origin and scale so the largest coordinate is `scale`.
fn rescale(positions: &[[f64; 2]], scale: f64) -> Vec<[f64; 2]> {
    if positions.is_empty() {
        return Vec::new();
    }
    let n = positions.len() as f64;
    let mean = [
        positions.iter().map(|p| p[0]).sum::<f64>() / n,
        positions.iter().map(|p| p[1]).sum::<f64>() / n,
    ];
    let centred: Vec<[f64; 2]> = positions
        .iter()
        .map(|p| [p[0] - mean[0], p[1] - mean[1]])
        .collect();
    let limit = centred
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0_f64, f64::max);
    if limit == 0.0 {
        return centred;
    }
    centred
        .into_iter()
        .map(|[x, y]| [x * scale / limit, y * scale / limit])
        .collect()
}
