use std::fmt;

/// Invalid generation input. Nothing is generated when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The node count is not an integer.
    NotANumber(String),
    /// Fewer than one node was requested.
    TooFewNodes(i64),
    /// The weight range is empty.
    InvalidWeightRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => {
                write!(f, "node count \u{201c}{s}\u{201d} is not a number")
            }
            Self::TooFewNodes(n) => write!(f, "node count must be at least 1, got {n}"),
            Self::InvalidWeightRange { min, max } => {
                write!(f, "weight range {min}..={max} is empty")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Parse a user-supplied node count.
///
/// Surrounding whitespace is ignored. The count must be an integer of at
/// least 1.
pub fn parse_node_count(input: &str) -> Result<usize, ConfigurationError> {
    let s = input.trim();
    let n: i64 = s
        .parse()
        .map_err(|_| ConfigurationError::NotANumber(s.to_owned()))?;
    if n < 1 {
        return Err(ConfigurationError::TooFewNodes(n));
    }
    usize::try_from(n).map_err(|_| ConfigurationError::NotANumber(s.to_owned()))
}
