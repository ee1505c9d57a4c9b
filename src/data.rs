use std::ops::Add;

/// Boards are limited so that every tile value and cell index fits in a `u8`
/// (16*16 - 1 == 255).
pub const MAX_SIZE: usize = 16;

pub const UP: Dir = Dir { r: -1, c: 0 };
pub const DOWN: Dir = Dir { r: 1, c: 0 };
pub const LEFT: Dir = Dir { r: 0, c: -1 };
pub const RIGHT: Dir = Dir { r: 0, c: 1 };

/// Order matters - neighbor generation follows it so searches are reproducible.
pub const DIRECTIONS: [Dir; 4] = [UP, DOWN, LEFT, RIGHT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    /// Manhattan distance between two positions.
    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dir {
    pub r: i32,
    pub c: i32,
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}
