use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::state::State;

/// A puzzle to solve - the parsed initial state plus the canonical goal of
/// the same size.
#[derive(Clone)]
pub struct Level {
    pub initial: State,
    pub goal: State,
}

impl Level {
    pub fn new(initial: State) -> Self {
        let goal = State::goal(initial.size());
        Level { initial, goal }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_matches_initial_size() {
        let initial = State::from_grid(&[vec![1, 0], vec![3, 2]]).unwrap();
        let level = Level::new(initial);
        assert_eq!(level.goal, State::goal(2));
        assert_eq!(level.goal.size(), level.initial.size());
    }

    #[test]
    fn formatting_level() {
        let initial = State::from_grid(&[vec![1, 0], vec![3, 2]]).unwrap();
        let level = Level::new(initial);
        assert_eq!(level.to_string(), "1 0\n3 2\n");
        assert_eq!(format!("{:?}", level), "1 0\n3 2\n");
    }
}
