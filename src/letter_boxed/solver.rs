use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, trace};
use rand::Rng;

use super::game::Game;
use super::solution::Solution;
use super::state::{Priority, SearchState, StateKey};
use super::strategy::Strategy;

/// A state waiting in the queue
struct Pending {
    priority: Priority,
    /// Insertion order, breaks ties between equal priorities
    seq: u64,
    state: SearchState,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // BinaryHeap is a max heap, so the comparison is flipped to pop the
    // lowest priority and then the oldest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Counters describing how much work the search has done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub queued: usize,
    pub solutions: usize,
}

/// Best first search over [`SearchState`]s.
///
/// Solutions are produced lazily: every call to `next` does just enough work
/// to find one more, and dropping the solver stops the search.
pub struct Solver<'g, R> {
    game: &'g Game,
    strategy: Strategy,
    rng: R,
    queue: BinaryHeap<Pending>,
    seen: HashSet<StateKey>,
    /// Last solution returned. Its children are queued on the next call.
    deferred: Option<SearchState>,
    next_seq: u64,
    stats: SearchStats,
    /// Every state taken off the queue, in order
    #[cfg(test)]
    dequeued: Vec<SearchState>,
}

impl<'g, R: Rng> Solver<'g, R> {
    pub fn new(game: &'g Game, strategy: Strategy, rng: R) -> Self {
        let mut solver = Self {
            game,
            strategy,
            rng,
            queue: BinaryHeap::new(),
            seen: HashSet::new(),
            deferred: None,
            next_seq: 0,
            stats: SearchStats::default(),
            #[cfg(test)]
            dequeued: Vec::new(),
        };
        let initial = game.initial_state();
        solver.seen.insert(initial.key());
        solver.push(initial);
        debug!(
            "Searching {} with the {} strategy over {} words",
            game.board(),
            strategy,
            game.dictionary().len()
        );
        solver
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of states waiting to be explored
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    fn push(&mut self, state: SearchState) {
        let priority = state.priority(self.game);
        self.queue.push(Pending {
            priority,
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
        self.stats.queued += 1;
    }

    fn expand(&mut self, state: &SearchState) {
        let children = self.strategy.expand(self.game, state, &mut self.rng);
        self.stats.expanded += 1;
        for child in children {
            if self.strategy.deduplicates() && !self.seen.insert(child.key()) {
                continue;
            }
            self.push(child);
        }
    }
}

impl<'g, R: Rng> Iterator for Solver<'g, R> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(state) = self.deferred.take() {
            self.expand(&state);
        }

        while let Some(Pending { state, .. }) = self.queue.pop() {
            #[cfg(test)]
            self.dequeued.push(state.clone());
            if state.is_final_state(self.game) {
                self.stats.solutions += 1;
                let solution = Solution::new(&state, self.game.board());
                debug!(
                    "Solution #{} found after expanding {} states: {}",
                    self.stats.solutions, self.stats.expanded, solution
                );
                self.deferred = Some(state);
                return Some(solution);
            }
            self.expand(&state);
            if self.stats.expanded % 100_000 == 0 {
                trace!(
                    "Expanded {} states, {} waiting",
                    self.stats.expanded,
                    self.queue.len()
                );
            }
        }

        debug!(
            "Search exhausted after expanding {} states",
            self.stats.expanded
        );
        None
    }
}
