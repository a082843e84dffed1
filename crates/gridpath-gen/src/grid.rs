//! Square-grid graph templates.

use gridpath_core::{Link, Node, Point};
use gridpath_paths::{GraphError, WeightedGraph};
use rand::{Rng, RngExt};

use crate::error::ConfigurationError;

/// Generation parameters for [`GridGen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Smallest edge weight (inclusive).
    pub min_weight: u32,
    /// Largest edge weight (inclusive).
    pub max_weight: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 10,
        }
    }
}

/// Nodes and links laid out on a `side`×`side` grid.
///
/// Node `i` sits at column `i % side`, row `i / side`. The last row may be
/// partially filled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTemplate {
    pub side: usize,
    pub nodes: Vec<Node<usize>>,
    pub links: Vec<Link<usize>>,
}

impl GridTemplate {
    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Grid position of node `id`.
    pub fn position(&self, id: usize) -> Option<Point> {
        if id >= self.len() || self.side == 0 {
            return None;
        }
        Some(Point::new((id % self.side) as i32, (id / self.side) as i32))
    }

    /// The node at grid position `p`, if any.
    pub fn id_at(&self, p: Point) -> Option<usize> {
        if !p.in_square(self.side as i32) {
            return None;
        }
        let id = p.y as usize * self.side + p.x as usize;
        (id < self.len()).then_some(id)
    }

    /// Number of grid rows actually occupied.
    pub fn rows(&self) -> usize {
        self.len().div_ceil(self.side.max(1))
    }

    /// Build the weighted graph described by this template.
    pub fn graph(&self) -> Result<WeightedGraph<usize>, GraphError> {
        WeightedGraph::new(&self.nodes, &self.links)
    }
}

/// Generator for [`GridTemplate`]s.
pub struct GridGen<R: Rng> {
    pub rng: R,
    pub config: GridConfig,
}

impl<R: Rng> GridGen<R> {
    /// Create a generator with the default weight range.
    pub fn new(rng: R) -> Self {
        Self::with_config(GridConfig::default(), rng)
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GridConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a template of `node_count` nodes.
    ///
    /// Each node is linked to its right neighbour and to the node below it
    /// whenever those exist, with a weight drawn uniformly from the
    /// configured range.
    pub fn generate(&mut self, node_count: usize) -> Result<GridTemplate, ConfigurationError> {
        let GridConfig {
            min_weight,
            max_weight,
        } = self.config;
        if node_count < 1 {
            return Err(ConfigurationError::TooFewNodes(0));
        }
        if min_weight > max_weight {
            return Err(ConfigurationError::InvalidWeightRange {
                min: min_weight,
                max: max_weight,
            });
        }

        let mut side = node_count.isqrt();
        if side * side < node_count {
            side += 1;
        }

        let mut tpl = GridTemplate {
            side,
            nodes: (0..node_count).map(Node::new).collect(),
            links: Vec::with_capacity(2 * node_count),
        };
        for id in 0..node_count {
            let Some(p) = tpl.position(id) else {
                continue;
            };
            for q in p.forward_neighbors() {
                if let Some(other) = tpl.id_at(q) {
                    let w = self.rng.random_range(min_weight..=max_weight);
                    tpl.links.push(Link::new(id, other, w));
                }
            }
        }

        log::debug!(
            "generated {side}x{side} grid: {} nodes, {} links",
            tpl.nodes.len(),
            tpl.links.len()
        );
        Ok(tpl)
    }
}
