//! Generic A* over any hashable node type, in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Best-known costs and predecessors share one insertion-ordered map, so both are always
//! updated together, and superseded heap entries are skipped when popped instead of
//! being decreased in place.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

/// Why a search ended without a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    Exhausted,
    Limit(usize),
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimate first, then largest cost (deepest node), then the node that
        // was discovered first. The last key makes the order total.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Follows parent indices from `goal` back to the node without a parent and returns the
/// nodes in start to goal order.
pub(crate) fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, goal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(goal), |&i| {
        parents
            .get_index(i)
            .map(|(_, &(parent, _))| parent)
            .filter(|&parent| parent != NO_PARENT)
    })
    .filter_map(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` holds for a popped node.
///
/// `successors` yields neighbours with their move cost, `heuristic` estimates the remaining
/// cost from a node. At most `max_expansions` nodes are expanded. Returns the path and its
/// cost, or why no path was produced.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: usize,
) -> Result<(Vec<N>, C), Stop>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut expanded = 0;
    let mut stale = 0;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents
                .get_index(index)
                .ok_or(Stop::Exhausted)?;
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Only the entry carrying the best cost is expanded.
            if cost > c {
                stale += 1;
                continue;
            }
            if success(node) {
                debug!(
                    "Goal reached after {} expansions ({} stale entries, {} nodes seen)",
                    expanded,
                    stale,
                    parents.len()
                );
                return Ok((reverse_path(&parents, index), cost));
            }
            if expanded >= max_expansions {
                debug!("Expansion limit of {} reached", max_expansions);
                return Err(Stop::Limit(max_expansions));
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Open set exhausted after {} expansions ({} nodes seen)",
        expanded,
        parents.len()
    );
    Err(Stop::Exhausted)
}
