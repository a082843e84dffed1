use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use gridpath_core::{Link, Node};

use crate::error::GraphError;
use crate::traits::NodeId;

/// One traversable direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Arc {
    pub(crate) to: usize,
    pub(crate) weight: u32,
}

/// An undirected graph with non-negative integer edge weights.
///
/// Nodes are addressed by their ids externally and by dense indices
/// (declaration order) internally. Each link contributes one [`Arc`] to the
/// adjacency of both of its endpoints.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    pub(crate) ids: Vec<N>,
    pub(crate) index: HashMap<N, usize>,
    pub(crate) adj: Vec<Vec<Arc>>,
}

impl<N: NodeId> WeightedGraph<N> {
    /// Build a graph from node and link records.
    ///
    /// Fails if a node id is declared twice, if a link names an undeclared
    /// node, or if a link weight is not a non-negative integer.
    pub fn new(nodes: &[Node<N>], links: &[Link<N>]) -> Result<Self, GraphError> {
        let mut ids = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());
        for node in nodes {
            match index.entry(node.id.clone()) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateNode(node.id.to_string())),
                Entry::Vacant(slot) => {
                    slot.insert(ids.len());
                    ids.push(node.id.clone());
                }
            }
        }

        let mut graph = Self {
            adj: vec![Vec::new(); ids.len()],
            ids,
            index,
        };
        for link in links {
            graph.add_link(link)?;
        }
        log::debug!(
            "built graph: {} nodes, {} links",
            graph.ids.len(),
            links.len()
        );
        Ok(graph)
    }

    fn add_link(&mut self, link: &Link<N>) -> Result<(), GraphError> {
        let si = self.require(&link.source)?;
        let ti = self.require(&link.target)?;
        let weight = link
            .weight
            .value()
            .map_err(|error| GraphError::InvalidWeight {
                from: link.source.to_string(),
                to: link.target.to_string(),
                error,
            })?;
        self.adj[si].push(Arc { to: ti, weight });
        self.adj[ti].push(Arc { to: si, weight });
        Ok(())
    }

    /// Number of declared nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` was declared as a node.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(id)
    }

    /// All node ids, in declaration order.
    pub fn nodes(&self) -> &[N] {
        &self.ids
    }

    /// The `(neighbor, weight)` pairs adjacent to `id`.
    ///
    /// A link between `u` and `v` appears in the neighbors of both. Parallel
    /// links appear once each.
    pub fn neighbors<Q>(&self, id: &Q) -> Result<Neighbors<'_, N>, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let i = self.require(id)?;
        Ok(Neighbors {
            ids: &self.ids,
            arcs: self.adj[i].iter(),
        })
    }

    /// The lightest weight of any link directly joining `a` and `b`, or
    /// `None` if they are not adjacent.
    pub fn edge_weight<Q>(&self, a: &Q, b: &Q) -> Result<Option<u32>, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let ai = self.require(a)?;
        let bi = self.require(b)?;
        Ok(self.arc_weight(ai, bi))
    }

    /// Total weight of walking `path` hop by hop.
    ///
    /// Returns `None` if two consecutive nodes are not adjacent. Paths with
    /// fewer than two nodes weigh 0.
    pub fn path_weight(&self, path: &[N]) -> Result<Option<u64>, GraphError> {
        let mut prev: Option<usize> = None;
        let mut total = 0u64;
        for id in path {
            let cur = self.require(id)?;
            if let Some(p) = prev {
                match self.arc_weight(p, cur) {
                    Some(w) => total += u64::from(w),
                    None => return Ok(None),
                }
            }
            prev = Some(cur);
        }
        Ok(Some(total))
    }

    fn arc_weight(&self, from: usize, to: usize) -> Option<u32> {
        self.adj[from]
            .iter()
            .filter(|a| a.to == to)
            .map(|a| a.weight)
            .min()
    }

    /// Resolve `id` to its dense index.
    pub(crate) fn require<Q>(&self, id: &Q) -> Result<usize, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}

/// Iterator over the `(neighbor, weight)` pairs of one node.
///
/// Returned by [`WeightedGraph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a, N> {
    ids: &'a [N],
    arcs: std::slice::Iter<'a, Arc>,
}

impl<'a, N> Iterator for Neighbors<'a, N> {
    type Item = (&'a N, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.arcs.next().map(|a| (&self.ids[a.to], a.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.arcs.size_hint()
    }
}

impl<N> ExactSizeIterator for Neighbors<'_, N> {}
