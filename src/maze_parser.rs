use error_chain::bail;
use log::debug;
use std::str::FromStr;

use crate::errors::*;
use crate::maze::Maze;
use crate::maze_displays::{EMPTY_WALL, HORIZONTAL_WALL, ROW_DIVIDER, VERTICAL_WALL};
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

impl Maze {
    /// Build a maze from its ASCII form, the format `Display` renders.
    ///
    /// Whitespace around the text and around each line is ignored. The maze geometry comes from
    /// the text: one row per line after the northern border, one column per two characters.
    /// Fails with `MalformedMaze` if the text is empty, the lines disagree on the column count,
    /// or any part of the outer border is missing.
    pub fn from_ascii(ascii_maze: &str) -> Result<Maze> {
        let trimmed = ascii_maze.trim();
        if trimmed.is_empty() {
            bail!(malformed("the text is empty".to_owned()));
        }

        let mut lines = trimmed.split(ROW_DIVIDER)
                               .map(|line| line.trim().chars().collect::<Vec<char>>())
                               .collect::<Vec<_>>();
        // Trimming took the space in front of the first northern wall marker
        lines[0].insert(0, EMPTY_WALL);

        let row_count = lines.len() - 1;
        let column_count = (lines[0].len() + 1) / 2;
        if row_count < 1 {
            bail!(malformed("there are no maze rows below the northern border".to_owned()));
        }

        let row_width = 2 * column_count + 1;
        for (i, line) in lines.iter().enumerate().skip(1) {
            if line.len() != row_width {
                bail!(malformed(format!("row {} has a different number of columns than the others", i)));
            }
        }

        let northern_border = &lines[0];
        for j in 0..column_count {
            if northern_border.get(2 * j + 1) != Some(&HORIZONTAL_WALL) {
                bail!(malformed(format!("invalid northern border at row 0, column {}", j)));
            }
        }

        let mut maze = Maze::bordered(RowsCount(row_count), ColumnsCount(column_count));
        for (i, line) in lines[1..].iter().enumerate() {
            if line[0] != VERTICAL_WALL {
                bail!(malformed(format!("invalid western border at row {}, column 0", i)));
            }
            for j in 0..column_count {
                let south = line[2 * j + 1];
                let east = line[2 * (j + 1)];
                if j == column_count - 1 && east != VERTICAL_WALL {
                    bail!(malformed(format!("invalid eastern border at row {}, column {}", i, j)));
                }
                if i == row_count - 1 && south != HORIZONTAL_WALL {
                    bail!(malformed(format!("invalid southern border at row {}, column {}", i, j)));
                }

                let (row, column) = (RowIndex(i), ColumnIndex(j));
                if east == VERTICAL_WALL {
                    maze.add_eastern_wall(row, column)?;
                }
                if south == HORIZONTAL_WALL {
                    maze.add_southern_wall(row, column)?;
                }
            }
        }

        debug!("parsed {}x{} maze", row_count, column_count);
        Ok(maze)
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Maze> {
        Maze::from_ascii(s)
    }
}

fn malformed(reason: String) -> ErrorKind {
    ErrorKind::MalformedMaze(reason)
}
