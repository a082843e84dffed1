//! Graph template generation for gridpath.
//!
//! [`GridGen`] lays `n` nodes out on the smallest square grid that holds
//! them and links every node to its right and bottom neighbours with a
//! random integer weight. The resulting [`GridTemplate`] carries the node
//! and link records plus enough geometry to place each node on screen.

pub mod error;
pub mod grid;

pub use error::{ConfigurationError, parse_node_count};
pub use grid::{GridConfig, GridGen, GridTemplate};
