//! Start/end node selection.

/// What a [`Selection::toggle`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    StartSet,
    StartCleared,
    EndSet,
    EndCleared,
    /// Both endpoints were already chosen; the end moved to the new node.
    EndMoved,
}

/// The user's choice of search endpoints.
///
/// Clicking a node runs [`toggle`](Self::toggle):
///
/// | clicked node | effect |
/// |---|---|
/// | current start | start cleared |
/// | current end | end cleared |
/// | other, no start | becomes start |
/// | other, start but no end | becomes end |
/// | other, both set | becomes end |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<N> {
    start: Option<N>,
    end: Option<N>,
}

impl<N> Default for Selection<N> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

impl<N: Clone + PartialEq> Selection<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&N> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&N> {
        self.end.as_ref()
    }

    /// Apply a click on `node`.
    pub fn toggle(&mut self, node: N) -> Toggle {
        if self.start.as_ref() == Some(&node) {
            self.start = None;
            Toggle::StartCleared
        } else if self.end.as_ref() == Some(&node) {
            self.end = None;
            Toggle::EndCleared
        } else if self.start.is_none() {
            self.start = Some(node);
            Toggle::StartSet
        } else if self.end.is_none() {
            self.end = Some(node);
            Toggle::EndSet
        } else {
            self.end = Some(node);
            Toggle::EndMoved
        }
    }

    /// Choose both endpoints at once. They may be the same node.
    pub fn set(&mut self, start: N, end: N) {
        self.start = Some(start);
        self.end = Some(end);
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Both endpoints, once both are chosen.
    pub fn endpoints(&self) -> Option<(&N, &N)> {
        self.start.as_ref().zip(self.end.as_ref())
    }
}
