//! Plain-text rendering of a grid template.
//!
//! Nodes are drawn as single glyphs on their grid positions, with the
//! weight of each horizontal link written along `-` and each vertical link
//! next to `|`:
//!
//! ```text
//! S--3--o
//! |1    |10
//! o--2--E
//! ```

use std::collections::HashMap;

use gridpath_core::Point;
use gridpath_gen::GridTemplate;

use crate::selection::Selection;

/// Column stride of one node plus its horizontal connector.
const STRIDE: usize = 6;

/// How a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Idle,
    Visited,
    Path,
    Start,
    End,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Self::Idle => '.',
            Self::Visited => 'o',
            Self::Path => '*',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// Per-node marks for one frame of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    marks: Vec<Mark>,
}

impl Frame {
    /// A frame of `len` idle nodes.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![Mark::Idle; len],
        }
    }

    /// A frame with the selected endpoints marked.
    pub fn with_selection(len: usize, selection: &Selection<usize>) -> Self {
        let mut frame = Self::new(len);
        if let Some(&s) = selection.start() {
            frame.set(s, Mark::Start);
        }
        if let Some(&e) = selection.end() {
            frame.set(e, Mark::End);
        }
        frame
    }

    pub fn mark(&self, id: usize) -> Option<Mark> {
        self.marks.get(id).copied()
    }

    /// Set the mark of `id`, ignoring ids outside the frame.
    pub fn set(&mut self, id: usize, mark: Mark) {
        if let Some(m) = self.marks.get_mut(id) {
            *m = mark;
        }
    }

    /// Mark `id` as visited unless it is an endpoint.
    pub fn visit(&mut self, id: usize) {
        self.overlay(id, Mark::Visited);
    }

    /// Mark every non-endpoint node of `path`.
    pub fn highlight_path(&mut self, path: &[usize]) {
        for &id in path {
            self.overlay(id, Mark::Path);
        }
    }

    fn overlay(&mut self, id: usize, mark: Mark) {
        if let Some(m) = self.marks.get_mut(id) {
            if !m.is_endpoint() {
                *m = mark;
            }
        }
    }

    /// Draw the frame over `tpl`.
    pub fn render(&self, tpl: &GridTemplate) -> String {
        let mut weights: HashMap<(usize, usize), String> = HashMap::new();
        for link in &tpl.links {
            let key = (link.source.min(link.target), link.source.max(link.target));
            weights.entry(key).or_insert_with(|| link.weight.to_string());
        }
        let weight = |a: usize, b: usize| weights.get(&(a.min(b), a.max(b)));

        let mut out = String::new();
        for y in 0..tpl.rows() {
            let mut nodes_line = String::new();
            let mut links_line = String::new();
            for x in 0..tpl.side {
                let p = Point::new(x as i32, y as i32);
                let Some(id) = tpl.id_at(p) else {
                    break;
                };
                nodes_line.push(self.mark(id).unwrap_or_default().glyph());
                let [right, down] = p.forward_neighbors();
                match tpl.id_at(right).and_then(|r| weight(id, r)) {
                    Some(w) => nodes_line.push_str(&format!("{w:-^width$}", width = STRIDE - 1)),
                    None => nodes_line.push_str(&" ".repeat(STRIDE - 1)),
                }
                match tpl.id_at(down).and_then(|d| weight(id, d)) {
                    Some(w) => links_line.push_str(&format!("{:<STRIDE$}", format!("|{w}"))),
                    None => links_line.push_str(&" ".repeat(STRIDE)),
                }
            }
            out.push_str(nodes_line.trim_end());
            out.push('\n');
            let links_line = links_line.trim_end();
            if !links_line.is_empty() {
                out.push_str(links_line);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Link, Node};

    fn square() -> GridTemplate {
        GridTemplate {
            side: 2,
            nodes: (0..4).map(Node::new).collect(),
            links: vec![
                Link::new(0, 1, 3),
                Link::new(0, 2, 1),
                Link::new(1, 3, 10),
                Link::new(2, 3, 2),
            ],
        }
    }

    #[test]
    fn renders_weights_between_nodes() {
        let mut sel = Selection::new();
        sel.set(0, 3);
        let frame = Frame::with_selection(4, &sel);
        assert_eq!(frame.render(&square()), "S--3--.\n|1    |10\n.--2--E\n");
    }

    #[test]
    fn partial_last_row() {
        let tpl = GridTemplate {
            side: 2,
            nodes: (0..3).map(Node::new).collect(),
            links: vec![Link::new(0, 1, 4), Link::new(0, 2, 5)],
        };
        assert_eq!(Frame::new(3).render(&tpl), ".--4--.\n|5\n.\n");
    }

    #[test]
    fn visits_and_path_spare_endpoints() {
        let mut sel = Selection::new();
        sel.set(0, 3);
        let mut frame = Frame::with_selection(4, &sel);
        frame.visit(1);
        frame.visit(0);
        frame.visit(2);
        assert_eq!(frame.mark(0), Some(Mark::Start));
        assert_eq!(frame.mark(1), Some(Mark::Visited));

        frame.highlight_path(&[0, 2, 3]);
        assert_eq!(frame.mark(2), Some(Mark::Path));
        assert_eq!(frame.mark(3), Some(Mark::End));
        assert_eq!(frame.render(&square()), "S--3--o\n|1    |10\n*--2--E\n");
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut frame = Frame::new(2);
        frame.set(5, Mark::Start);
        frame.visit(9);
        assert_eq!(frame.mark(5), None);
        assert_eq!(frame, Frame::new(2));
    }
}
