use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Pos, DIRECTIONS, MAX_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGrid {
    Empty,
    TooLarge(usize),
    NotSquare { rows: usize, cols: usize },
    WrongLength { expected: usize, found: usize },
    TileOutOfRange(u8),
    DuplicateTile(u8),
    NoBlank,
}

impl Display for InvalidGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidGrid::Empty => write!(f, "Empty grid"),
            InvalidGrid::TooLarge(size) => {
                write!(f, "Grid larger than {} rows/columns: {}", MAX_SIZE, size)
            }
            InvalidGrid::NotSquare { rows, cols } => {
                write!(f, "Grid is not square: {} rows but a row of {} cells", rows, cols)
            }
            InvalidGrid::WrongLength { expected, found } => {
                write!(f, "Expected {} cells, found {}", expected, found)
            }
            InvalidGrid::TileOutOfRange(tile) => write!(f, "Tile {} is out of range", tile),
            InvalidGrid::DuplicateTile(tile) => write!(f, "Duplicate tile {}", tile),
            InvalidGrid::NoBlank => write!(f, "No blank (0) tile"),
        }
    }
}

impl Error for InvalidGrid {}

/// One board configuration - a permutation of `0..size*size` in row-major
/// order, 0 being the blank. Never mutated after construction; moves always
/// produce a new `State`.
///
/// The derives compare `cells` first, so equality, hashing and ordering are
/// structural over the flattened board (`size` and `blank` are functions of
/// `cells` and can't disagree between equal boards).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    cells: Vec<u8>,
    size: u8,
    blank: u8,
}

impl State {
    /// Validates that `cells` is a `size`*`size` permutation of `0..size*size`.
    ///
    /// The parser already checks shape and range, but the core re-validates so
    /// it can never hold a malformed board.
    pub fn new(cells: Vec<u8>, size: u8) -> Result<State, InvalidGrid> {
        let n = usize::from(size);
        if n == 0 {
            return Err(InvalidGrid::Empty);
        }
        if n > MAX_SIZE {
            return Err(InvalidGrid::TooLarge(n));
        }
        if cells.len() != n * n {
            return Err(InvalidGrid::WrongLength {
                expected: n * n,
                found: cells.len(),
            });
        }

        let mut seen = vec![false; n * n];
        for &tile in &cells {
            let tile_index = usize::from(tile);
            if tile_index >= n * n {
                return Err(InvalidGrid::TileOutOfRange(tile));
            }
            if seen[tile_index] {
                return Err(InvalidGrid::DuplicateTile(tile));
            }
            seen[tile_index] = true;
        }

        // a full permutation always contains 0 but don't rely on it
        let blank = cells
            .iter()
            .position(|&tile| tile == 0)
            .ok_or(InvalidGrid::NoBlank)?;
        Ok(State {
            cells,
            size,
            blank: blank as u8,
        })
    }

    /// Flattens a square grid of rows into a `State`.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<State, InvalidGrid> {
        let rows = grid.len();
        if rows == 0 {
            return Err(InvalidGrid::Empty);
        }
        if rows > MAX_SIZE {
            return Err(InvalidGrid::TooLarge(rows));
        }
        for row in grid {
            if row.len() != rows {
                return Err(InvalidGrid::NotSquare {
                    rows,
                    cols: row.len(),
                });
            }
        }

        let cells = grid.iter().flatten().copied().collect();
        State::new(cells, rows as u8)
    }

    /// The canonical goal - ascending tiles with the blank last.
    pub fn goal(size: u8) -> State {
        let n = usize::from(size);
        assert!(n >= 1 && n <= MAX_SIZE);

        let mut cells: Vec<u8> = (1..n * n).map(|tile| tile as u8).collect();
        cells.push(0);
        State {
            cells,
            size,
            blank: (n * n - 1) as u8,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn blank_index(&self) -> usize {
        usize::from(self.blank)
    }

    pub fn blank_pos(&self) -> Pos {
        self.pos_of(self.blank_index())
    }

    /// The board as rows, for display by callers.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(usize::from(self.size))
            .map(<[u8]>::to_vec)
            .collect()
    }

    pub(crate) fn pos_of(&self, index: usize) -> Pos {
        let n = usize::from(self.size);
        Pos::new(index / n, index % n)
    }

    fn index_of(&self, pos: Pos) -> usize {
        (pos.r * i32::from(self.size) + pos.c) as usize
    }

    fn contains(&self, pos: Pos) -> bool {
        let n = i32::from(self.size);
        pos.r >= 0 && pos.r < n && pos.c >= 0 && pos.c < n
    }

    /// All states one blank move away - between 2 (corner) and 4 (interior).
    /// Follows `DIRECTIONS` order.
    pub fn neighbors(&self) -> Vec<State> {
        let blank_pos = self.blank_pos();

        let mut new_states = Vec::with_capacity(4);
        for &dir in &DIRECTIONS {
            let new_pos = blank_pos + dir;
            if !self.contains(new_pos) {
                continue;
            }

            let new_blank = self.index_of(new_pos);
            let mut cells = self.cells.clone();
            cells.swap(self.blank_index(), new_blank);
            new_states.push(State {
                cells,
                size: self.size,
                blank: new_blank as u8,
            });
        }
        new_states
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = usize::from(self.size);
        let width = (n * n - 1).to_string().len();
        for row in self.cells.chunks(n) {
            let mut first = true;
            for &tile in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                write!(f, "{:>width$}", tile, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_3x3(cells: &[u8]) -> State {
        State::new(cells.to_vec(), 3).unwrap()
    }

    #[test]
    fn grid_round_trips() {
        let grid = vec![vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]];
        let state = State::from_grid(&grid).unwrap();
        assert_eq!(state.grid(), grid);
        assert_eq!(state.size(), 3);
        assert_eq!(state.blank_index(), 4);
        assert_eq!(state.blank_pos(), Pos::new(1, 1));
    }

    #[test]
    fn goal_has_blank_last() {
        assert_eq!(State::goal(1).cells(), [0]);
        assert_eq!(State::goal(2).cells(), [1, 2, 3, 0]);
        assert_eq!(State::goal(3).cells(), [1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(State::goal(3).blank_index(), 8);
    }

    #[test]
    fn rejects_malformed_grids() {
        assert_eq!(
            State::new(vec![1, 2, 3], 3).unwrap_err(),
            InvalidGrid::WrongLength {
                expected: 9,
                found: 3
            }
        );
        assert_eq!(
            State::new(vec![1, 2, 3, 9], 2).unwrap_err(),
            InvalidGrid::TileOutOfRange(9)
        );
        assert_eq!(
            State::new(vec![1, 2, 3, 3], 2).unwrap_err(),
            InvalidGrid::DuplicateTile(3)
        );
        assert_eq!(State::new(vec![], 0).unwrap_err(), InvalidGrid::Empty);
        assert_eq!(
            State::from_grid(&[vec![0, 1], vec![2]]).unwrap_err(),
            InvalidGrid::NotSquare { rows: 2, cols: 1 }
        );
    }

    #[test]
    fn equality_is_structural() {
        let a = state_3x3(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let b = state_3x3(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let c = state_3x3(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        // lexicographic on cells
        assert!(a < c);
    }

    #[test]
    fn neighbors_of_interior_blank() {
        // blank in the center - all four moves, in up/down/left/right order
        let state = state_3x3(&[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        let neighbors = state.neighbors();
        assert_eq!(neighbors.len(), 4);
        assert_eq!(neighbors[0].cells(), [1, 0, 3, 4, 2, 5, 7, 8, 6]); // up
        assert_eq!(neighbors[1].cells(), [1, 2, 3, 4, 8, 5, 7, 0, 6]); // down
        assert_eq!(neighbors[2].cells(), [1, 2, 3, 0, 4, 5, 7, 8, 6]); // left
        assert_eq!(neighbors[3].cells(), [1, 2, 3, 4, 5, 0, 7, 8, 6]); // right
    }

    #[test]
    fn neighbors_of_corner_and_edge_blank() {
        let corner = state_3x3(&[0, 1, 3, 4, 2, 5, 7, 8, 6]);
        assert_eq!(corner.neighbors().len(), 2);

        let edge = state_3x3(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(edge.neighbors().len(), 3);
    }

    #[test]
    fn neighbors_are_permutations_one_swap_away() {
        let state = state_3x3(&[3, 1, 2, 0, 4, 5, 6, 7, 8]);
        for neighbor in state.neighbors() {
            let differing = state
                .cells()
                .iter()
                .zip(neighbor.cells())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
            assert_ne!(neighbor.cells()[state.blank_index()], 0);
            assert_eq!(neighbor.cells()[neighbor.blank_index()], 0);
            // still a valid permutation
            State::new(neighbor.cells().to_vec(), neighbor.size()).unwrap();
        }
    }

    #[test]
    fn neighbors_do_not_mutate_the_input() {
        let state = state_3x3(&[1, 2, 3, 4, 0, 5, 7, 8, 6]);
        let copy = state.clone();
        state.neighbors();
        assert_eq!(state, copy);
    }

    #[test]
    fn display_pads_to_widest_tile() {
        let state = state_3x3(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(state.to_string(), "1 2 3\n4 5 6\n7 8 0\n");

        let goal = State::goal(4);
        assert!(goal.to_string().starts_with(" 1  2  3  4\n"));
    }
}
