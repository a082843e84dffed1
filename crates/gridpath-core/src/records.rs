//! Construction records for weighted graphs.
//!
//! A graph is described by a list of [`Node`]s and a list of [`Link`]s.
//! Links name their endpoints by id and carry a [`Weight`], which may arrive
//! either as a number or as numeric text (e.g. from a form field or a JSON
//! document produced by a renderer).

use std::fmt;

/// A declared graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<N> {
    pub id: N,
}

impl<N> Node<N> {
    #[inline]
    pub const fn new(id: N) -> Self {
        Self { id }
    }
}

/// An undirected weighted connection between two declared nodes.
///
/// The `source`/`target` distinction only reflects how the link was written
/// down; graphs built from links treat it as traversable both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link<N> {
    pub source: N,
    pub target: N,
    pub weight: Weight,
}

impl<N> Link<N> {
    /// Create a link with a numeric weight.
    pub fn new(source: N, target: N, weight: u32) -> Self {
        Self {
            source,
            target,
            weight: Weight::Number(weight),
        }
    }

    /// Create a link whose weight is given as text.
    pub fn with_text(source: N, target: N, weight: impl Into<String>) -> Self {
        Self {
            source,
            target,
            weight: Weight::Text(weight.into()),
        }
    }
}

/// An edge weight, either already numeric or still in textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Weight {
    Number(u32),
    Text(String),
}

impl Weight {
    /// Resolve the weight to an integer.
    ///
    /// Text is trimmed and must be an unsigned decimal integer.
    pub fn value(&self) -> Result<u32, ParseWeightError> {
        match self {
            Self::Number(w) => Ok(*w),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ParseWeightError { text: s.clone() }),
        }
    }
}

impl From<u32> for Weight {
    fn from(w: u32) -> Self {
        Self::Number(w)
    }
}

impl From<&str> for Weight {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(w) => write!(f, "{w}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A textual weight that is not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWeightError {
    pub text: String,
}

impl fmt::Display for ParseWeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid edge weight \u{201c}{}\u{201d}", self.text)
    }
}

impl std::error::Error for ParseWeightError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn weight_accepts_number_or_text() {
        let links: Vec<Link<u32>> = serde_json::from_str(
            r#"[{"source":0,"target":1,"weight":3},{"source":1,"target":2,"weight":"8"}]"#,
        )
        .unwrap();
        assert_eq!(links[0].weight, Weight::Number(3));
        assert_eq!(links[1].weight, Weight::Text("8".into()));
        assert_eq!(links[1].weight.value(), Ok(8));
    }

    #[test]
    fn node_with_string_id() {
        let node: Node<String> = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(node, Node::new("a".to_string()));
    }
}
