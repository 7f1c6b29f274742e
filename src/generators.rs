use log::debug;
use rand::Rng;

use crate::cells::CompassPrimary;
use crate::maze::{Maze, WallUpdate};
use crate::units::{ColumnIndex, RowIndex};

/// Randomly add up to `count` interior walls to the maze.
///
/// Only walls that do not exist yet are candidates, so every wall added is new. Each wall is
/// added through the maze's own mutation API, one eastern or southern wall at a time.
/// Returns the number of walls actually added, which is less than `count` when the maze runs out
/// of open interior walls and zero for a finalized maze.
pub fn scatter_walls<R: Rng>(maze: &mut Maze, count: usize, rng: &mut R) -> usize {
    if maze.is_finalized() {
        return 0;
    }

    let mut open_walls = open_interior_walls(maze);
    rng.shuffle(&mut open_walls);

    let mut added = 0;
    for (row, column, dir) in open_walls.into_iter().take(count) {
        match maze.add_wall(row, column, dir) {
            Ok(WallUpdate::Applied) => added += 1,
            _ => break,
        }
    }

    debug!("scattered {} of {} requested walls", added, count);
    added
}

/// Every missing interior wall, named once from the cell on its western or northern side.
fn open_interior_walls(maze: &Maze) -> Vec<(RowIndex, ColumnIndex, CompassPrimary)> {
    maze.iter()
        .flat_map(|(row, column, cell)| {
            [CompassPrimary::East, CompassPrimary::South]
                .iter()
                .filter(|&&dir| !cell.has_wall(dir) && !maze.is_border(row, column, dir))
                .map(|&dir| (row, column, dir))
                .collect::<Vec<_>>()
        })
        .collect()
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn maze(rows: usize, columns: usize) -> Maze {
        Maze::with_dimensions(RowsCount(rows), ColumnsCount(columns))
            .expect("valid maze dimensions")
    }

    fn interior_walls_count(m: &Maze) -> usize {
        m.iter()
         .map(|(row, column, cell)| {
             [CompassPrimary::East, CompassPrimary::South]
                 .iter()
                 .filter(|&&dir| cell.has_wall(dir) && !m.is_border(row, column, dir))
                 .count()
         })
         .sum()
    }

    #[test]
    fn open_walls_of_a_new_maze() {
        // (columns - 1) * rows vertical plus (rows - 1) * columns horizontal
        assert_eq!(open_interior_walls(&maze(3, 4)).len(), 3 * 3 + 2 * 4);
        assert!(open_interior_walls(&maze(1, 1)).is_empty());
    }

    #[test]
    fn scatters_requested_number_of_walls() {
        let mut rng = rand::weak_rng();
        let mut m = maze(5, 5);
        assert_eq!(scatter_walls(&mut m, 7, &mut rng), 7);
        assert_eq!(interior_walls_count(&m), 7);

        assert_eq!(scatter_walls(&mut m, 3, &mut rng), 3);
        assert_eq!(interior_walls_count(&m), 10);
    }

    #[test]
    fn scatter_stops_when_maze_is_full() {
        let mut rng = rand::weak_rng();
        let mut m = maze(3, 3);
        let all_walls = open_interior_walls(&m).len();
        assert_eq!(scatter_walls(&mut m, 1000, &mut rng), all_walls);
        assert!(open_interior_walls(&m).is_empty());
        assert_eq!(scatter_walls(&mut m, 1, &mut rng), 0);
    }

    #[test]
    fn scatter_leaves_finalized_maze_alone() {
        let mut rng = rand::weak_rng();
        let mut m = maze(4, 4);
        m.finalize_maze();
        assert_eq!(scatter_walls(&mut m, 5, &mut rng), 0);
        assert_eq!(m, maze(4, 4));
    }
}
