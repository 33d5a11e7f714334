//! Held–Karp dynamic programming for the decision TSP.
//!
//! `cost[mask][last]` is the cheapest walk that starts at node 0, visits
//! exactly the nodes of `mask` and ends at `last`. The table has
//! `2^N * N` entries, which bounds the supported instance size.

use log::debug;

use crate::certificate::{Path, Solution, Tour};
use crate::tsp::{TspInstance, INFINITY};

/// Largest number of nodes the solver accepts.
pub const MAX_TSP_NODES: usize = 20;

const NO_PARENT: u8 = u8::MAX;

/// Finds a minimum-weight tour and accepts it iff its weight is at most the
/// bound.
///
/// Ties keep the smallest-index predecessor. A single node forms a tour only
/// through a self-loop.
///
/// # Panics
///
/// Panics if the graph is empty or has more than [`MAX_TSP_NODES`] nodes.
pub fn solve(tsp: &TspInstance) -> Solution<Tour> {
    let n = tsp.graph.num_nodes();
    assert!(n > 0, "Cannot search an empty graph");
    assert!(
        n <= MAX_TSP_NODES,
        "TSP instances are limited to {} nodes, got {}",
        MAX_TSP_NODES,
        n
    );
    debug!("held-karp: {} nodes, bound {}", n, tsp.max_cost);

    let dist = tsp.distances();
    let full = (1usize << n) - 1;
    let mut cost = vec![INFINITY; (full + 1) * n];
    let mut parent = vec![NO_PARENT; (full + 1) * n];
    let at = |mask: usize, last: usize| mask * n + last;

    cost[at(1, 0)] = 0;
    // Every useful mask contains the start node, so only odd masks are visited.
    for mask in (1..=full).step_by(2) {
        for last in 1..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let prev_mask = mask ^ (1 << last);
            let mut best = INFINITY;
            let mut best_prev = NO_PARENT;
            for prev in 0..n {
                if prev_mask & (1 << prev) == 0 {
                    continue;
                }
                let base = cost[at(prev_mask, prev)];
                if base == INFINITY || dist[prev][last] == INFINITY {
                    continue;
                }
                let candidate = base.saturating_add(dist[prev][last]);
                if candidate < best {
                    best = candidate;
                    best_prev = prev as u8;
                }
            }
            cost[at(mask, last)] = best;
            parent[at(mask, last)] = best_prev;
        }
    }

    // Close the tour back to node 0.
    let mut best = INFINITY;
    let mut best_last = 0;
    for last in 0..n {
        let base = cost[at(full, last)];
        if base == INFINITY || dist[last][0] == INFINITY {
            continue;
        }
        let candidate = base.saturating_add(dist[last][0]);
        if candidate < best {
            best = candidate;
            best_last = last;
        }
    }

    if best == INFINITY || best > tsp.max_cost {
        debug!("held-karp: optimum {} exceeds bound", best);
        return Solution::Unsolvable;
    }

    let mut order = Vec::with_capacity(n + 1);
    let mut mask = full;
    let mut last = best_last;
    while last != 0 {
        order.push(last);
        let prev = parent[at(mask, last)];
        assert_ne!(prev, NO_PARENT, "Every reachable state has a predecessor");
        mask ^= 1 << last;
        last = prev as usize;
    }
    order.push(0);
    order.reverse();
    order.push(0);

    let nodes = tsp.graph.nodes();
    let path = Path(order.into_iter().map(|i| nodes[i].id.clone()).collect());
    debug!("held-karp: tour of cost {}", best);
    Solution::Certificate(Tour { path, cost: best })
}
