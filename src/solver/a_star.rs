use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

/// Per-depth counts of what the search touched. `created` counts frontier
/// insertions, `visited` counts non-stale pops, `duplicates` counts popped
/// entries that a cheaper path had already superseded.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<i32>, node: &SearchNode) -> bool {
        let mut new_depth = false;

        // while because some depths might be skipped
        while node.dist as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[node.dist as usize] += 1;
        new_depth
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "{:<10}{:<10}{:<10}{}", "Depth", "Created", "Unique", "Duplicates")?;
        // created_states is always the longest vec
        for i in 0..self.created_states.len() {
            let visited = self.visited_states.get(i).copied().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).copied().unwrap_or(0);
            writeln!(
                f,
                "{:<10}{:<10}{:<10}{}",
                i, self.created_states[i], visited, duplicates
            )?;
        }
        Ok(())
    }
}

/// A frontier entry - the state plus the path cost it was discovered with.
/// Stale entries (the state was later reached more cheaply) stay in the heap
/// and are skipped on pop.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) dist: i32,
    pub(crate) h: i32,
}

impl SearchNode {
    pub(crate) fn new(state: State, dist: i32, h: i32) -> Self {
        SearchNode { state, dist, h }
    }

    fn cost(&self) -> i32 {
        self.dist + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // equal costs fall back to cell order so pops are deterministic
        self.cost()
            .cmp(&other.cost())
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(cells: &[u8], dist: i32, h: i32) -> SearchNode {
        SearchNode::new(State::new(cells.to_vec(), 2).unwrap(), dist, h)
    }

    #[test]
    fn orders_by_total_cost_then_cells() {
        let cheap = node(&[1, 2, 3, 0], 1, 1);
        let expensive = node(&[1, 2, 3, 0], 2, 3);
        assert!(cheap < expensive);

        // same cost - lexicographically smaller cells win
        let a = node(&[0, 1, 2, 3], 2, 1);
        let b = node(&[1, 0, 2, 3], 1, 2);
        assert!(a < b);
    }

    #[test]
    fn stats_track_depths() {
        let mut stats = Stats::new();
        let start = node(&[1, 2, 3, 0], 0, 0);
        let next = node(&[1, 2, 0, 3], 1, 2);

        assert!(stats.add_created(&start));
        assert!(stats.add_created(&next));
        assert!(!stats.add_created(&next));
        assert!(stats.add_unique_visited(&start));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 0);
    }
}
