use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::MAX_SIZE;
use crate::level::Level;
use crate::state::{InvalidGrid, State};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    MissingSize,
    BadSize(String),
    TooLarge(usize),
    BadToken { line: usize, token: String },
    ValueOutOfRange { line: usize, value: u32 },
    RowLength { line: usize, expected: usize, found: usize },
    RowCount { expected: usize, found: usize },
    Grid(InvalidGrid),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::MissingSize => write!(f, "Missing puzzle size"),
            ParserErr::BadSize(ref line) => write!(f, "Invalid size value: {}", line),
            ParserErr::TooLarge(size) => {
                write!(f, "Size {} is larger than the maximum of {}", size, MAX_SIZE)
            }
            ParserErr::BadToken { line, ref token } => {
                write!(f, "Non-numerical value {} on line {}", token, line)
            }
            ParserErr::ValueOutOfRange { line, value } => {
                write!(f, "Value {} on line {} is out of range", value, line)
            }
            ParserErr::RowLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "Row on line {} has {} values, expected {}",
                line, found, expected
            ),
            ParserErr::RowCount { expected, found } => {
                write!(f, "Found {} rows, expected {}", found, expected)
            }
            ParserErr::Grid(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<InvalidGrid> for ParserErr {
    fn from(err: InvalidGrid) -> Self {
        ParserErr::Grid(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the original text format: `#` starts a comment, blank lines are
/// skipped, the first significant line is the size N, then N rows of N
/// integers.
pub fn parse(text: &str) -> Result<Level, ParserErr> {
    let mut size = None;
    let mut grid = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap().trim();
        if line.is_empty() {
            continue;
        }

        let n = match size {
            None => {
                let n: usize = line
                    .parse()
                    .map_err(|_| ParserErr::BadSize(line.to_string()))?;
                if n == 0 {
                    return Err(ParserErr::BadSize(line.to_string()));
                }
                if n > MAX_SIZE {
                    return Err(ParserErr::TooLarge(n));
                }
                size = Some(n);
                continue;
            }
            Some(n) => n,
        };

        if grid.len() == n {
            return Err(ParserErr::RowCount {
                expected: n,
                found: grid.len() + 1,
            });
        }

        let mut row = Vec::with_capacity(n);
        for token in line.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| ParserErr::BadToken {
                line: i + 1,
                token: token.to_string(),
            })?;
            if value >= (n * n) as u32 {
                return Err(ParserErr::ValueOutOfRange { line: i + 1, value });
            }
            row.push(value as u8);
        }
        if row.len() != n {
            return Err(ParserErr::RowLength {
                line: i + 1,
                expected: n,
                found: row.len(),
            });
        }
        grid.push(row);
    }

    let n = size.ok_or(ParserErr::MissingSize)?;
    if grid.len() != n {
        return Err(ParserErr::RowCount {
            expected: n,
            found: grid.len(),
        });
    }

    let initial = State::from_grid(&grid)?;
    Ok(Level::new(initial))
}
