#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Clockwise order starting from North, the order wall flags are listed in.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                         CompassPrimary::East,
                                         CompassPrimary::South,
                                         CompassPrimary::West];

    /// The direction a neighbouring cell sees the same wall from.
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// The wall state of one maze cell.
///
/// A `Cell` is a plain value; the maze owns the grid and is responsible for keeping a cell and
/// its neighbours in agreement about the walls they share.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Default)]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Cell {
    pub fn new(north: bool, east: bool, south: bool, west: bool) -> Cell {
        Cell {
            north: north,
            east: east,
            south: south,
            west: west,
        }
    }

    /// A cell with no walls on any side.
    pub fn open() -> Cell {
        Cell::default()
    }

    /// A cell walled in on all four sides.
    pub fn closed() -> Cell {
        Cell::new(true, true, true, true)
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        match dir {
            CompassPrimary::North => self.north,
            CompassPrimary::East => self.east,
            CompassPrimary::South => self.south,
            CompassPrimary::West => self.west,
        }
    }

    /// Copy of this cell with the wall at `dir` set to `present`.
    #[inline]
    pub fn with_wall(self, dir: CompassPrimary, present: bool) -> Cell {
        let mut cell = self;
        match dir {
            CompassPrimary::North => cell.north = present,
            CompassPrimary::East => cell.east = present,
            CompassPrimary::South => cell.south = present,
            CompassPrimary::West => cell.west = present,
        }
        cell
    }

    pub fn walls_count(&self) -> usize {
        CompassPrimary::ALL.iter().filter(|&&dir| self.has_wall(dir)).count()
    }
}
