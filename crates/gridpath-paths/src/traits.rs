use std::fmt::Display;
use std::hash::Hash;

/// Requirements on node identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Display` type, so
/// integers and strings both qualify.
pub trait NodeId: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> NodeId for T {}

/// Receives a notification each time a search finalizes a node other than
/// its start or end.
pub trait Visitor<N: ?Sized> {
    fn visit(&mut self, node: &N);
}

impl<N: ?Sized, F: FnMut(&N)> Visitor<N> for F {
    #[inline]
    fn visit(&mut self, node: &N) {
        self(node)
    }
}

/// A [`Visitor`] that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVisit;

impl<N: ?Sized> Visitor<N> for NoVisit {
    #[inline]
    fn visit(&mut self, _node: &N) {}
}
