use std::fmt;

use gridpath_core::ParseWeightError;

/// Errors from building or querying a [`WeightedGraph`](crate::WeightedGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An id that was never declared as a node.
    UnknownNode(String),
    /// The same id was declared twice.
    DuplicateNode(String),
    /// A link weight could not be parsed.
    InvalidWeight {
        from: String,
        to: String,
        error: ParseWeightError,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "graph: unknown node {id}"),
            Self::DuplicateNode(id) => write!(f, "graph: node {id} declared twice"),
            Self::InvalidWeight { from, to, error } => {
                write!(f, "graph: link {from}-{to}: {error}")
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWeight { error, .. } => Some(error),
            _ => None,
        }
    }
}
