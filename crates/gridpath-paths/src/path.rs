use std::collections::HashMap;
use std::hash::Hash;

/// Rebuild the path ending at `end` from a predecessor map.
///
/// Follows `previous` backwards from `end` until a node with no predecessor
/// is reached. If that node is `start`, returns the chain in forward order
/// (`start` first, `end` last); otherwise returns an empty path. A cyclic
/// predecessor map also yields an empty path.
pub fn reconstruct_path<N>(previous: &HashMap<N, N>, start: &N, end: &N) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    walk_back(end.clone(), start, previous.len(), |n| previous.get(n).cloned())
}

/// Walk predecessor links from `end`, allowing at most `max_links` hops
/// before declaring the chain cyclic.
pub(crate) fn walk_back<T, F>(end: T, start: &T, max_links: usize, mut prev: F) -> Vec<T>
where
    T: PartialEq,
    F: FnMut(&T) -> Option<T>,
{
    let mut path = vec![end];
    while let Some(p) = path.last().and_then(&mut prev) {
        if path.len() > max_links {
            return Vec::new();
        }
        path.push(p);
    }
    path.reverse();
    if path.first() == Some(start) {
        path
    } else {
        Vec::new()
    }
}
