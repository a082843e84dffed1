//! Weighted graphs and an observable shortest-path search.
//!
//! This crate provides the algorithmic core of *gridpath*:
//!
//! - **[`MinPriorityQueue`]**: a min-ordered queue of `(element, priority)`
//!   pairs that tolerates duplicate elements.
//! - **[`WeightedGraph`]**: undirected weighted adjacency built from
//!   [`Node`](gridpath_core::Node) and [`Link`](gridpath_core::Link) records.
//! - **Dijkstra** search ([`WeightedGraph::search`], [`WeightedGraph::dijkstra`])
//!   whose node finalizations can be observed one at a time, so a caller can
//!   pace an animation between them.
//!
//! The graph is never mutated by a search. Every [`Search`] owns its own
//! distance/predecessor state and borrows the graph read-only, so any number
//! of searches may be run against one graph.
//!
//! # Observing a search
//!
//! | API | Suspension |
//! |---|---|
//! | [`Search`] as an [`Iterator`] | caller drives each step |
//! | [`WeightedGraph::dijkstra`] + [`Visitor`] | visitor is called inline |
//! | [`Search::finish`] | none, runs silently |

mod dijkstra;
mod error;
mod graph;
mod path;
mod queue;
mod traits;

pub use dijkstra::Search;
pub use error::GraphError;
pub use graph::{Neighbors, WeightedGraph};
pub use path::reconstruct_path;
pub use queue::MinPriorityQueue;
pub use traits::{NoVisit, NodeId, Visitor};

/// Sentinel distance for nodes the search has not reached.
pub const UNREACHABLE: u64 = u64::MAX;
