//! The presentation-side owner of the current graph.

use std::fmt;

use gridpath_gen::{ConfigurationError, GridConfig, GridGen, GridTemplate, parse_node_count};
use gridpath_paths::{GraphError, Search, Visitor, WeightedGraph};
use rand::Rng;

use crate::animate::AnimationConfig;
use crate::selection::{Selection, Toggle};

/// Configuration for a [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid: GridConfig,
    pub animation: AnimationConfig,
}

/// Errors surfaced to the user by a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The generation input was rejected.
    Configuration(ConfigurationError),
    /// A node id was not found in the graph.
    Graph(GraphError),
    /// No graph has been generated yet.
    NoGraph,
    /// A search needs both a start and an end node.
    IncompleteSelection,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "invalid configuration: {e}"),
            Self::Graph(e) => fmt::Display::fmt(e, f),
            Self::NoGraph => f.write_str("no graph has been generated"),
            Self::IncompleteSelection => f.write_str("select a start and an end node first"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for SessionError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<GraphError> for SessionError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

struct Layout {
    template: GridTemplate,
    graph: WeightedGraph<usize>,
}

/// Holds the generated grid, its graph and the user's selection.
///
/// The selection lives here rather than in the engine: each search receives
/// only the two endpoint ids.
pub struct Session<R: Rng> {
    generator: GridGen<R>,
    animation: AnimationConfig,
    layout: Option<Layout>,
    selection: Selection<usize>,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(SessionConfig::default(), rng)
    }

    pub fn with_config(config: SessionConfig, rng: R) -> Self {
        Self {
            generator: GridGen::with_config(config.grid, rng),
            animation: config.animation,
            layout: None,
            selection: Selection::new(),
        }
    }

    /// Generate a new grid from the user's node-count input.
    ///
    /// On success the previous grid and selection are replaced. On error
    /// nothing changes.
    pub fn generate(&mut self, input: &str) -> Result<&GridTemplate, SessionError> {
        let count = parse_node_count(input).inspect_err(|e| log::warn!("generation blocked: {e}"))?;
        let template = self.generator.generate(count)?;
        let graph = template.graph()?;
        log::info!(
            "new {}x{} grid with {} nodes",
            template.side,
            template.side,
            template.len()
        );
        self.selection.clear();
        let layout = self.layout.insert(Layout { template, graph });
        Ok(&layout.template)
    }

    pub fn template(&self) -> Option<&GridTemplate> {
        self.layout.as_ref().map(|l| &l.template)
    }

    pub fn graph(&self) -> Option<&WeightedGraph<usize>> {
        self.layout.as_ref().map(|l| &l.graph)
    }

    pub fn selection(&self) -> &Selection<usize> {
        &self.selection
    }

    pub fn animation(&self) -> AnimationConfig {
        self.animation
    }

    /// Toggle `id` in the selection.
    pub fn click(&mut self, id: usize) -> Result<Toggle, SessionError> {
        self.require_node(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Set both endpoints directly.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), SessionError> {
        self.require_node(start)?;
        self.require_node(end)?;
        self.selection.set(start, end);
        Ok(())
    }

    fn require_node(&self, id: usize) -> Result<(), SessionError> {
        let graph = self.graph().ok_or(SessionError::NoGraph)?;
        if graph.contains(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id.to_string()).into())
        }
    }

    /// Begin a search between the selected endpoints.
    pub fn search(&self) -> Result<Search<'_, usize>, SessionError> {
        let (graph, start, end) = self.ready()?;
        Ok(graph.search(start, end)?)
    }

    /// The graph and both endpoints, or the reason a search cannot start.
    fn ready(&self) -> Result<(&WeightedGraph<usize>, &usize, &usize), SessionError> {
        let graph = self.graph().ok_or_else(|| {
            log::warn!("search requested before a graph was generated");
            SessionError::NoGraph
        })?;
        let (start, end) = self
            .selection
            .endpoints()
            .ok_or(SessionError::IncompleteSelection)?;
        Ok((graph, start, end))
    }

    /// Run a complete search between the selected endpoints, notifying
    /// `visitor` of each visited node.
    pub fn run<V: Visitor<usize>>(&self, visitor: &mut V) -> Result<Vec<usize>, SessionError> {
        let (graph, start, end) = self.ready()?;
        Ok(graph.dijkstra(start, end, visitor)?)
    }
}
