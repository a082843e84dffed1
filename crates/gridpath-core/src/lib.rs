//! **gridpath-core**: value types shared across the *gridpath* workspace.
//!
//! This crate holds the plain data that flows between the grid generator,
//! the shortest-path engine and the presentation layer: grid positions and
//! the node/link records a weighted graph is built from.

pub mod geom;
pub mod records;

pub use geom::Point;
pub use records::{Link, Node, ParseWeightError, Weight};
