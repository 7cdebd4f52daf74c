use std::collections::VecDeque;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::Distance;

/// Single-source breadth-first search.
///
/// Returns one entry per vertex index: the hop count from `source`, or
/// [`Distance::Unreachable`] for vertices in other components. Each vertex is
/// settled the first time it is discovered, which in an unweighted graph is
/// along a shortest path.
pub fn bfs_distances(provider: &dyn GraphProvider, source: usize) -> Vec<Distance> {
    let mut distances = vec![Distance::Unreachable; provider.vertex_count()];
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();

    match distances.get_mut(source) {
        Some(slot) => *slot = Distance::Reachable(0),
        None => return distances,
    }
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        tracing::trace!(vertex = provider.vertex_name(current), hops, "bfs_visit");

        for &neighbor in provider.neighbor_indices(current) {
            if let Some(slot) = distances.get_mut(neighbor) {
                if *slot == Distance::Unreachable {
                    *slot = Distance::Reachable(hops + 1);
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }
    }

    distances
}
