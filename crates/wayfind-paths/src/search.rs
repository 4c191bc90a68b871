//! The traversal skeleton shared by every algorithm and every spatial model.

use crate::algorithm::Algorithm;
use crate::frontier::Frontier;
use crate::options::SearchOptions;
use crate::route::{Outcome, SearchTree};
use crate::traits::{Heuristic, Pather};

/// Why the expansion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Reached,
    Cutoff,
    Exhausted,
}

/// Search from `start` towards `goal` over any [`Pather`].
///
/// Every call owns its frontier, predecessor tree and loop counter, so
/// concurrent calls over the same pather are independent. The heuristic
/// orders the greedy and A* frontiers, and picks the fallback node for every
/// algorithm when the goal is not reached.
pub fn search<P, H>(
    pather: &P,
    heuristic: &H,
    algorithm: Algorithm,
    start: P::Node,
    goal: P::Node,
    options: &SearchOptions,
) -> Outcome<P::Node>
where
    P: Pather,
    H: Heuristic<P::Node>,
{
    if start == goal {
        return Outcome::Trivial;
    }

    let cost_aware = algorithm.is_cost_aware();
    let scale = options.heuristic_scale();
    let max_loops = options.max_loops();

    let mut frontier = Frontier::new(algorithm.frontier_kind());
    let mut tree = SearchTree::new(start);
    let start_priority = match algorithm {
        Algorithm::Heuristic => heuristic.estimate(start, goal),
        _ => 0.0,
    };
    frontier.push(start, 0.0, start_priority);

    let mut steps = Vec::with_capacity(8);
    let mut loops = 0usize;

    let stop = loop {
        if frontier.is_empty() {
            break Stop::Exhausted;
        }
        if loops >= max_loops {
            break Stop::Cutoff;
        }
        let Some(entry) = frontier.pop() else {
            break Stop::Exhausted;
        };
        loops += 1;
        let current = entry.node;
        let current_cost = tree.cost(current).unwrap_or(entry.cost);

        // A cheaper route was pushed after this entry; it has been or will
        // be expanded on its own. The pop still counts against the budget.
        if cost_aware && entry.cost > current_cost {
            continue;
        }

        if current == goal {
            break Stop::Reached;
        }

        steps.clear();
        pather.successors(current, &mut steps);
        log::trace!(
            "{algorithm}: expanding node {} with {} successors",
            loops,
            steps.len()
        );

        for step in steps.iter() {
            let new_cost = current_cost + step.cost;
            let improves = match tree.cost(step.to) {
                None => true,
                Some(known) => cost_aware && new_cost < known,
            };
            if !improves {
                continue;
            }
            tree.record(step.to, current, new_cost);
            let priority = match algorithm {
                Algorithm::AStar => new_cost + heuristic.estimate(step.to, goal) * scale,
                Algorithm::Dijkstra => new_cost,
                Algorithm::Heuristic => heuristic.estimate(step.to, goal),
                Algorithm::BreadthFirst | Algorithm::DepthFirst => 0.0,
            };
            frontier.push(step.to, new_cost, priority);
        }
    };

    let outcome = match stop {
        Stop::Reached => Outcome::Reached(tree.route_to(goal)),
        Stop::Cutoff => Outcome::Cutoff(tree.route_to(tree.closest(goal, heuristic))),
        Stop::Exhausted => Outcome::Unreachable(tree.route_to(tree.closest(goal, heuristic))),
    };

    log::debug!(
        "{algorithm}: {} after {} loops, {} nodes discovered, {} left in frontier, route of {}",
        outcome.kind(),
        loops,
        tree.len(),
        frontier.len(),
        outcome.nodes().len()
    );

    outcome
}
