//! Pathfinding algorithms
//!
//! Breadth-first search (unweighted shortest path) and Dijkstra (weighted
//! shortest path) over an [`AdjacencyStore`].

use super::common::{AdjacencyStore, NodeId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Node indices from source to target inclusive
    pub path: Vec<NodeId>,
    /// Hop count for BFS, summed edge weight for Dijkstra
    pub cost: f64,
}

/// Walk predecessor links back from `target` and reverse.
fn reconstruct(parent: &[Option<NodeId>], target: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut curr = Some(target);
    while let Some(idx) = curr {
        path.push(idx);
        curr = parent[idx];
    }
    path.reverse();
    path
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Edge weights are ignored. Neighbors are discovered in adjacency order, so
/// among equal-length paths the one through the earlier-listed neighbor wins.
/// The search stops once `target` is dequeued.
pub fn bfs(store: &AdjacencyStore, source: NodeId, target: NodeId) -> Option<PathResult> {
    let n = store.node_count();
    if source >= n || target >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            break;
        }

        for edge in store.neighbors(current) {
            if !visited[edge.node] {
                visited[edge.node] = true;
                parent[edge.node] = Some(current);
                queue.push_back(edge.node);
            }
        }
    }

    if !visited[target] {
        return None;
    }

    let path = reconstruct(&parent, target);
    Some(PathResult {
        source,
        target,
        cost: (path.len() - 1) as f64,
        path,
    })
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; equal costs pop the lower index first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Weights must be non-negative. A neighbor's distance and predecessor only
/// change on a strict improvement, and heap entries older than the node's best
/// known distance are skipped.
pub fn dijkstra(store: &AdjacencyStore, source: NodeId, target: NodeId) -> Option<PathResult> {
    let n = store.node_count();
    if source >= n || target >= n {
        return None;
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if cost > dist[node_idx] {
            continue;
        }

        if node_idx == target {
            break;
        }

        for edge in store.neighbors(node_idx) {
            let next_cost = cost + edge.weight;

            if next_cost < dist[edge.node] {
                dist[edge.node] = next_cost;
                parent[edge.node] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: edge.node });
            }
        }
    }

    if dist[target] == f64::INFINITY {
        return None;
    }

    Some(PathResult {
        source,
        target,
        path: reconstruct(&parent, target),
        cost: dist[target],
    })
}
