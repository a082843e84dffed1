use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

use crate::UNREACHABLE;
use crate::error::GraphError;
use crate::graph::WeightedGraph;
use crate::path::walk_back;
use crate::queue::MinPriorityQueue;
use crate::traits::{NodeId, Visitor};

impl<N: NodeId> WeightedGraph<N> {
    /// Start a step-by-step shortest-path search from `start` to `end`.
    ///
    /// Nothing is computed until the returned [`Search`] is driven. Fails
    /// with [`GraphError::UnknownNode`] if either endpoint is not in the
    /// graph.
    pub fn search<Q>(&self, start: &Q, end: &Q) -> Result<Search<'_, N>, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let si = self.require(start)?;
        let ei = self.require(end)?;
        Ok(Search::new(self, si, ei))
    }

    /// Compute a minimum-weight path from `start` to `end` using Dijkstra's
    /// algorithm.
    ///
    /// `visitor` is called once for every node the search finalizes, in
    /// finalization order, except `start` and `end` themselves. Returns the
    /// path including both endpoints, `[start]` when `start == end`, or an
    /// empty path if `end` is unreachable.
    pub fn dijkstra<Q, V>(
        &self,
        start: &Q,
        end: &Q,
        visitor: &mut V,
    ) -> Result<Vec<N>, GraphError>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
        V: Visitor<N>,
    {
        let mut search = self.search(start, end)?;
        for node in search.by_ref() {
            visitor.visit(node);
        }
        Ok(search.path())
    }
}

/// A Dijkstra search in progress.
///
/// Each call to [`Iterator::next`] runs the search up to the next node it
/// finalizes other than the endpoints and yields that node's id. The search
/// is paused in between, so the caller can render or wait before resuming.
/// Once `next` returns `None` the search is over and [`path`](Self::path)
/// holds the result.
///
/// Dropping a `Search` abandons it; the graph is only borrowed.
#[derive(Debug)]
pub struct Search<'g, N> {
    graph: &'g WeightedGraph<N>,
    start: usize,
    end: usize,
    dist: Vec<u64>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
    frontier: MinPriorityQueue<usize, u64>,
    // finalized and yielded, neighbours not relaxed yet
    pending: Option<usize>,
    finished: bool,
    visits: usize,
}

impl<'g, N: NodeId> Search<'g, N> {
    fn new(graph: &'g WeightedGraph<N>, start: usize, end: usize) -> Self {
        let len = graph.len();
        let mut dist = vec![UNREACHABLE; len];
        dist[start] = 0;
        let mut frontier = MinPriorityQueue::with_capacity(len);
        frontier.enqueue(start, 0);
        Self {
            graph,
            start,
            end,
            dist,
            prev: vec![None; len],
            visited: vec![false; len],
            frontier,
            pending: None,
            finished: false,
            visits: 0,
        }
    }

    /// Run until the next non-endpoint finalization, returning its index.
    fn advance(&mut self) -> Option<usize> {
        if let Some(ci) = self.pending.take() {
            self.relax(ci);
        }
        if self.finished {
            return None;
        }

        while let Some((ci, _)) = self.frontier.dequeue() {
            if self.visited[ci] {
                // Stale entry, superseded by a shorter distance.
                continue;
            }
            self.visited[ci] = true;
            log::trace!(
                "finalized {} at distance {}",
                self.graph.ids[ci],
                self.dist[ci]
            );

            if ci == self.end {
                break;
            }
            if ci != self.start {
                self.visits += 1;
                self.pending = Some(ci);
                return Some(ci);
            }
            self.relax(ci);
        }

        self.finished = true;
        log::debug!(
            "search {} -> {} done: {} visited, end {}",
            self.graph.ids[self.start],
            self.graph.ids[self.end],
            self.visits,
            if self.visited[self.end] { "reached" } else { "unreachable" }
        );
        None
    }

    fn relax(&mut self, ci: usize) {
        let current = self.dist[ci];
        for arc in &self.graph.adj[ci] {
            let candidate = current.saturating_add(u64::from(arc.weight));
            if candidate < self.dist[arc.to] {
                self.dist[arc.to] = candidate;
                self.prev[arc.to] = Some(ci);
                self.frontier.enqueue(arc.to, candidate);
            }
        }
    }

    /// Run the rest of the search without yielding and return the path.
    pub fn finish(mut self) -> Vec<N> {
        while self.advance().is_some() {}
        self.path()
    }

    /// Reconstruct the path from the current predecessor links.
    ///
    /// After the search is over this is the shortest path (or empty if
    /// `end` is unreachable). Before that, it is the best path found so far,
    /// which may be empty or not yet optimal.
    pub fn path(&self) -> Vec<N> {
        walk_back(self.end, &self.start, self.graph.len(), |&i| self.prev[i])
            .into_iter()
            .map(|i| self.graph.ids[i].clone())
            .collect()
    }

    /// Best distance from the start to `id` known so far.
    ///
    /// Final for nodes that are [visited](Self::is_visited). `None` if `id`
    /// is unknown or not reached yet.
    pub fn distance<Q>(&self, id: &Q) -> Option<u64>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = *self.graph.index.get(id)?;
        Some(self.dist[i]).filter(|&d| d != UNREACHABLE)
    }

    /// Whether the search has finalized `id`.
    pub fn is_visited<Q>(&self, id: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.graph
            .index
            .get(id)
            .is_some_and(|&i| self.visited[i])
    }

    /// Whether the search has terminated.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of non-endpoint nodes finalized so far.
    #[inline]
    pub fn visit_count(&self) -> usize {
        self.visits
    }

    /// The start node.
    pub fn start(&self) -> &'g N {
        &self.graph.ids[self.start]
    }

    /// The end node.
    pub fn end(&self) -> &'g N {
        &self.graph.ids[self.end]
    }
}

impl<'g, N: NodeId> Iterator for Search<'g, N> {
    type Item = &'g N;

    fn next(&mut self) -> Option<&'g N> {
        let graph = self.graph;
        self.advance().map(|i| &graph.ids[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoVisit;
    use gridpath_core::{Link, Node};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn graph(n: usize, links: &[(usize, usize, u32)]) -> WeightedGraph<usize> {
        let nodes: Vec<_> = (0..n).map(Node::new).collect();
        let links: Vec<_> = links.iter().map(|&(s, t, w)| Link::new(s, t, w)).collect();
        WeightedGraph::new(&nodes, &links).unwrap()
    }

    fn shortest(g: &WeightedGraph<usize>, start: usize, end: usize) -> Vec<usize> {
        g.dijkstra(&start, &end, &mut NoVisit).unwrap()
    }

    /// Minimum weight over all simple paths, by exhaustive DFS.
    fn brute_force(g: &WeightedGraph<usize>, start: usize, end: usize) -> Option<u64> {
        fn dfs(
            g: &WeightedGraph<usize>,
            cur: usize,
            end: usize,
            on_path: &mut Vec<bool>,
            cost: u64,
            best: &mut Option<u64>,
        ) {
            if cur == end {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            on_path[cur] = true;
            let next: Vec<(usize, u32)> =
                g.neighbors(&cur).unwrap().map(|(&n, w)| (n, w)).collect();
            for (n, w) in next {
                if !on_path[n] {
                    dfs(g, n, end, on_path, cost + u64::from(w), best);
                }
            }
            on_path[cur] = false;
        }
        let mut best = None;
        dfs(g, start, end, &mut vec![false; g.len()], 0, &mut best);
        best
    }

    #[test]
    fn square_grid_two_equal_paths() {
        let g = graph(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let path = shortest(&g, 0, 3);
        assert!(path == vec![0, 1, 3] || path == vec![0, 2, 3], "got {path:?}");
        assert_eq!(g.path_weight(&path), Ok(Some(2)));
    }

    #[test]
    fn triangle_prefers_lighter_detour() {
        let g = graph(3, &[(0, 1, 5), (1, 2, 1), (0, 2, 10)]);
        let path = shortest(&g, 0, 2);
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(g.path_weight(&path), Ok(Some(6)));
    }

    #[test]
    fn single_node() {
        let g = graph(1, &[]);
        assert_eq!(shortest(&g, 0, 0), vec![0]);
        assert_eq!(
            g.dijkstra(&0, &99, &mut NoVisit),
            Err(GraphError::UnknownNode("99".into()))
        );
        assert!(g.search(&42, &0).is_err());
    }

    #[test]
    fn missing_endpoint_with_string_ids() {
        let g = WeightedGraph::new(&[Node::new("0".to_string())], &[]).unwrap();
        assert_eq!(g.dijkstra("0", "0", &mut NoVisit), Ok(vec!["0".to_string()]));
        assert_eq!(
            g.dijkstra("0", "missing", &mut NoVisit),
            Err(GraphError::UnknownNode("missing".into()))
        );
    }

    #[test]
    fn same_start_and_end_visits_nothing() {
        let g = graph(3, &[(0, 1, 1), (1, 2, 1)]);
        let mut visits = Vec::new();
        let path = g.dijkstra(&1, &1, &mut |n: &usize| visits.push(*n)).unwrap();
        assert_eq!(path, vec![1]);
        assert!(visits.is_empty());
    }

    #[test]
    fn disconnected_is_empty() {
        let g = graph(4, &[(0, 1, 3), (2, 3, 3)]);
        assert!(shortest(&g, 0, 3).is_empty());
        assert!(shortest(&g, 3, 1).is_empty());
        assert_eq!(shortest(&g, 3, 2), vec![3, 2]);
    }

    #[test]
    fn unreachable_end_finalizes_whole_component() {
        let g = graph(5, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);
        let mut visits = Vec::new();
        let path = g.dijkstra(&0, &4, &mut |n: &usize| visits.push(*n)).unwrap();
        assert!(path.is_empty());
        assert_eq!(visits, vec![1, 2]);
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(4, &[(0, 1, 0), (1, 2, 0), (0, 2, 1), (2, 3, 0)]);
        let path = shortest(&g, 0, 3);
        assert_eq!(g.path_weight(&path), Ok(Some(0)));
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn visits_skip_endpoints_in_distance_order() {
        // 0 -1- 1 -1- 2 -1- 3, plus a heavy shortcut 0 -9- 3 and a spur 1 -2- 4.
        let g = graph(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 9), (1, 4, 2)]);
        let mut search = g.search(&0, &3).unwrap();
        let mut order = Vec::new();
        let mut last = 0;
        while let Some(&n) = search.next() {
            let d = search.distance(&n).unwrap();
            assert!(d >= last);
            last = d;
            order.push(n);
        }
        assert_eq!(order, vec![1, 2, 4]);
        assert_eq!(search.path(), vec![0, 1, 2, 3]);
        assert_eq!(search.distance(&3), Some(3));
        assert_eq!(search.visit_count(), 3);
        assert!(search.is_finished());
    }

    #[test]
    fn ties_are_visited_in_discovery_order() {
        // Star around 0: all leaves at distance 1, discovered in link order.
        let g = graph(5, &[(0, 3, 1), (0, 1, 1), (0, 2, 1), (2, 4, 5)]);
        let mut visits = Vec::new();
        g.dijkstra(&0, &4, &mut |n: &usize| visits.push(*n)).unwrap();
        assert_eq!(visits, vec![3, 1, 2]);
    }

    #[test]
    fn stepping_exposes_state_between_visits() {
        let g = graph(4, &[(0, 1, 2), (1, 2, 2), (2, 3, 2)]);
        let mut search = g.search(&0, &3).unwrap();
        assert_eq!(search.start(), &0);
        assert_eq!(search.end(), &3);

        assert_eq!(search.next(), Some(&1));
        assert!(search.is_visited(&1));
        // 1's neighbours are relaxed on resume, not before.
        assert_eq!(search.distance(&2), None);
        assert!(!search.is_finished());

        assert_eq!(search.next(), Some(&2));
        assert_eq!(search.distance(&2), Some(4));
        assert_eq!(search.next(), None);
        assert_eq!(search.next(), None);
        assert_eq!(search.path(), vec![0, 1, 2, 3]);
        assert!(search.is_visited(&3));
        assert!(!search.is_visited(&99));
    }

    #[test]
    fn finish_runs_silently() {
        let g = graph(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let mut search = g.search(&3, &0).unwrap();
        assert_eq!(search.next(), Some(&2));
        assert_eq!(search.finish(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn stale_entries_are_discarded() {
        // 2 is first reached through the heavy edge, then improved via 1.
        let g = graph(4, &[(0, 2, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let mut visits = Vec::new();
        let path = g.dijkstra(&0, &3, &mut |n: &usize| visits.push(*n)).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(visits, vec![1, 2]);
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let n = rng.random_range(1..=6usize);
            let m = rng.random_range(0..=n * 2);
            let links: Vec<_> = (0..m)
                .map(|_| {
                    (
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(0..=10u32),
                    )
                })
                .collect();
            let g = graph(n, &links);
            for start in 0..n {
                for end in 0..n {
                    let path = shortest(&g, start, end);
                    match brute_force(&g, start, end) {
                        None => assert!(path.is_empty(), "{start}->{end} in {links:?}"),
                        Some(best) => {
                            assert_eq!(path.first(), Some(&start));
                            assert_eq!(path.last(), Some(&end));
                            assert_eq!(
                                g.path_weight(&path),
                                Ok(Some(best)),
                                "{start}->{end} in {links:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn visitor_sees_every_non_endpoint_finalization_once() {
        let g = graph(
            9,
            &[
                (0, 1, 3),
                (1, 2, 3),
                (3, 4, 3),
                (4, 5, 3),
                (6, 7, 3),
                (7, 8, 3),
                (0, 3, 1),
                (3, 6, 1),
                (1, 4, 1),
                (4, 7, 1),
                (2, 5, 1),
                (5, 8, 1),
            ],
        );
        let mut visits = Vec::new();
        g.dijkstra(&0, &8, &mut |n: &usize| visits.push(*n)).unwrap();
        let mut sorted = visits.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), visits.len());
        assert!(!visits.contains(&0));
        assert!(!visits.contains(&8));
    }
}
