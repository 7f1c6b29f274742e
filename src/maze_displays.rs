use itertools::Itertools;
use std::fmt;
use std::iter;

use crate::cells::Cell;
use crate::maze::Maze;

pub const HORIZONTAL_WALL: char = '_';
pub const VERTICAL_WALL: char = '|';
pub const EMPTY_WALL: char = ' ';
pub const ROW_DIVIDER: char = '\n';

#[inline]
fn horizontal(present: bool) -> char {
    if present { HORIZONTAL_WALL } else { EMPTY_WALL }
}

#[inline]
fn vertical(present: bool) -> char {
    if present { VERTICAL_WALL } else { EMPTY_WALL }
}

fn render_northern_border(row: &[Cell]) -> String {
    row.iter()
       .flat_map(|cell| iter::once(EMPTY_WALL).chain(iter::once(horizontal(cell.north))))
       .collect()
}

fn render_row(row: &[Cell]) -> String {
    let west = row.first().map_or(false, |cell| cell.west);
    iter::once(vertical(west))
        .chain(row.iter()
                  .flat_map(|cell| iter::once(horizontal(cell.south)).chain(iter::once(vertical(cell.east)))))
        .collect()
}

/// The ASCII form of the maze: a northern border line then one line per row, each cell drawn as
/// its southern wall followed by its eastern wall. There is no trailing newline.
///
/// ```text
///  _ _
/// |  _|
/// |_ _|
/// ```
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let northern_border = self.iter_row()
                                  .next()
                                  .map(render_northern_border)
                                  .unwrap_or_default();
        let text = iter::once(northern_border)
            .chain(self.iter_row().map(render_row))
            .join(&ROW_DIVIDER.to_string());

        write!(f, "{}", text)
    }
}
