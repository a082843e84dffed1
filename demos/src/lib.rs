//! Presentation layer for gridpath.
//!
//! Owns everything the shortest-path engine deliberately does not: which
//! nodes the user has picked, the graph currently on screen, how fast the
//! search is animated, and how a frame is drawn.

pub mod animate;
pub mod render;
pub mod selection;
pub mod session;

pub use animate::{AnimationConfig, Animator};
pub use render::{Frame, Mark};
pub use selection::{Selection, Toggle};
pub use session::{Session, SessionConfig, SessionError};
