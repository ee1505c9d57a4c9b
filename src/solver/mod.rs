pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::level::Level;
use crate::state::State;
use crate::Solve;

use self::a_star::{SearchNode, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    SizeMismatch(u8, u8),
    // defensive - can't happen for two validated states of the same size
    UnknownTile(u8),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::SizeMismatch(a, b) => {
                write!(f, "Puzzle sizes do not match: {} and {}", a, b)
            }
            SolverErr::UnknownTile(tile) => {
                write!(f, "Tile {} not found in the goal state", tile)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// States from the first move to the goal, excluding the initial state -
    /// empty when the initial state already is the goal, `None` when the
    /// frontier was exhausted without reaching it.
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path_states: Option<Vec<State>>, stats: Stats) -> Self {
        Self { path_states, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "Moves: {}", states.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(&self.initial, &self.goal, print_status)
    }
}

/// A* over the blank-move graph. Expects the caller to have checked
/// `is_solvable` - an unsolvable initial state exhausts its parity class and
/// comes back as no path.
pub fn solve(initial: &State, goal: &State, print_status: bool) -> Result<SolverOk, SolverErr> {
    if initial.size() != goal.size() {
        return Err(SolverErr::SizeMismatch(initial.size(), goal.size()));
    }

    debug!("search called");

    let mut stats = Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut g_score = FnvHashMap::default();
    let mut came_from = FnvHashMap::default();

    let h = manhattan(initial, goal)?;
    let start = SearchNode::new(initial.clone(), 0, h);
    g_score.insert(initial.clone(), 0);
    stats.add_created(&start);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        // a cheaper path to this state was found after this entry was pushed
        if g_score[&cur_node.state] < cur_node.dist {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.state == *goal {
            debug!("solved, backtracking path");
            let path = backtrack_path(&came_from, initial, &cur_node.state);
            return Ok(SolverOk::new(Some(path), stats));
        }

        for neighbor in cur_node.state.neighbors() {
            let tentative = cur_node.dist + 1;
            if let Some(&best) = g_score.get(&neighbor) {
                if best <= tentative {
                    continue;
                }
            }
            came_from.insert(neighbor.clone(), cur_node.state.clone());
            g_score.insert(neighbor.clone(), tentative);
            let h = manhattan(&neighbor, goal)?;
            let next_node = SearchNode::new(neighbor, tentative, h);
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    Ok(SolverOk::new(None, stats))
}

/// Sum over all non-blank tiles of the distance to their goal position.
/// Admissible and consistent for the blank-move graph.
pub fn manhattan(state: &State, goal: &State) -> Result<i32, SolverErr> {
    if state.size() != goal.size() {
        return Err(SolverErr::SizeMismatch(state.size(), goal.size()));
    }

    let n = usize::from(goal.size());
    let mut goal_positions = vec![None; n * n];
    for (i, &tile) in goal.cells().iter().enumerate() {
        if tile != 0 {
            goal_positions[usize::from(tile)] = Some(goal.pos_of(i));
        }
    }

    let mut dist = 0;
    for (i, &tile) in state.cells().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let target = goal_positions
            .get(usize::from(tile))
            .copied()
            .flatten()
            .ok_or(SolverErr::UnknownTile(tile))?;
        dist += state.pos_of(i).dist(target);
    }
    Ok(dist)
}

/// Closed-form parity test - no search. The goal is always the canonical
/// ascending arrangement with the blank last.
pub fn is_solvable(state: &State) -> bool {
    let cells = state.cells();
    let mut inversions = 0;
    for i in 0..cells.len() {
        for j in i + 1..cells.len() {
            if cells[i] != 0 && cells[j] != 0 && cells[i] > cells[j] {
                inversions += 1;
            }
        }
    }

    let size = usize::from(state.size());
    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        let row_from_bottom = size - state.blank_index() / size;
        (inversions + row_from_bottom) % 2 == 1
    }
}

fn backtrack_path(
    came_from: &FnvHashMap<State, State>,
    initial: &State,
    final_state: &State,
) -> Vec<State> {
    let mut ret = Vec::new();
    let mut state = final_state;
    while state != initial {
        ret.push(state.clone());
        state = &came_from[state];
    }
    ret.reverse();
    ret
}
