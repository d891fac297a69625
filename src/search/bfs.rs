//! Bounded breadth-first search.
//!
//! Both entry points share the same frontier discipline: a FIFO queue seeded
//! with the start node, and a visited set updated at enqueue time so that a
//! node enters the queue at most once per call. One iteration of the budget
//! is one dequeue-and-expand step. All working state is allocated fresh per
//! call and dropped at return, so independent calls are safe to run
//! concurrently against the same graph.

use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use super::traits::Graph;

/// Every node reachable from `start`, in discovery order.
///
/// Discovery order is breadth-first: nodes appear in non-decreasing graph
/// distance from `start`, and `start` itself is always the first entry,
/// budget or not. When the frontier drains before the budget is spent the
/// region is complete; otherwise the result is the partial region discovered
/// within `max_iterations` expansion steps. A partial region is an ordinary
/// result, not an error, and growing the budget only ever extends it.
pub fn reachable<G: Graph>(graph: &G, start: G::Node, max_iterations: usize) -> Vec<G::Node> {
    trace!("[Bfs] reachable: budget {}", max_iterations);

    let mut discovered = vec![start.clone()];
    let mut visited = HashSet::new();
    visited.insert(start.clone());

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    let mut expansions = 0;
    while let Some(focus) = frontier.pop_front() {
        if expansions >= max_iterations {
            debug!(
                "[Bfs] reachable: budget {} exhausted, {} nodes discovered",
                max_iterations,
                discovered.len()
            );
            break;
        }
        expansions += 1;

        for neighbor in graph.neighbors(&focus) {
            if visited.insert(neighbor.clone()) {
                discovered.push(neighbor.clone());
                frontier.push_back(neighbor);
            }
        }
    }

    discovered
}

/// Shortest unit-cost path from `start` to `goal`, both inclusive.
///
/// Breadth-first expansion guarantees the first edge to discover a node lies
/// on a shortest path to it, so each newly discovered node records its
/// discoverer and the path is rebuilt by walking those links back from the
/// goal once the goal is dequeued.
///
/// Returns the empty vector when the goal is not dequeued within
/// `max_iterations` expansion steps. A genuinely unreachable goal and an
/// exhausted budget are indistinguishable by design: the engine discards its
/// state on return and cannot tell one from the other. `start == goal`
/// yields the one-node path even with a zero budget, since the goal test
/// runs on every dequeued node before any expansion is spent.
pub fn shortest_path<G: Graph>(
    graph: &G,
    start: G::Node,
    goal: G::Node,
    max_iterations: usize,
) -> Vec<G::Node> {
    trace!("[Bfs] shortest_path: budget {}", max_iterations);

    let mut visited = HashSet::new();
    visited.insert(start.clone());

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    // node -> the node that first discovered it; no entry for the start
    let mut previous: HashMap<G::Node, G::Node> = HashMap::new();

    let mut expansions = 0;
    while let Some(focus) = frontier.pop_front() {
        if focus == goal {
            return rebuild_path(&previous, focus);
        }

        if expansions >= max_iterations {
            debug!(
                "[Bfs] shortest_path: budget {} exhausted before reaching goal",
                max_iterations
            );
            return Vec::new();
        }
        expansions += 1;

        for neighbor in graph.neighbors(&focus) {
            if visited.insert(neighbor.clone()) {
                previous.insert(neighbor.clone(), focus.clone());
                frontier.push_back(neighbor);
            }
        }
    }

    debug!(
        "[Bfs] shortest_path: frontier drained after {} expansions, goal unreachable",
        expansions
    );
    Vec::new()
}

/// Walk first-discoverer links from the goal back to the start, then flip.
fn rebuild_path<N: Clone + Eq + Hash>(previous: &HashMap<N, N>, goal: N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut focus = goal;
    while let Some(prev) = previous.get(&focus) {
        path.push(prev.clone());
        focus = prev.clone();
    }
    path.reverse();
    path
}
