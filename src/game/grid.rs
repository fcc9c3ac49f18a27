use crate::consts;
use rand::Rng;
use thiserror::Error;

/// A position on the board, in pixels.  Positions of things on the board are
/// always multiples of the grid's cell size; positions just off the board
/// (one cell past an edge) show up transiently while moving.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub(crate) fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The board's coordinate space: `width` by `height` pixels, divided into
/// square cells of `cell_size` pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    pub(crate) const DEFAULT: Grid = Grid {
        width: consts::BOARD_WIDTH,
        height: consts::BOARD_HEIGHT,
        cell_size: consts::CELL_SIZE,
    };

    /// Create a grid, checking that both dimensions are whole multiples of
    /// the cell size and that the board is large enough for the starting
    /// snake.
    pub(crate) fn new(width: u16, height: u16, cell_size: u16) -> Result<Grid, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        for (dimension, value) in [("width", width), ("height", height)] {
            if value % cell_size != 0 {
                return Err(GridError::Misaligned {
                    dimension,
                    value,
                    cell_size,
                });
            }
        }
        let grid = Grid {
            width,
            height,
            cell_size,
        };
        if grid.columns() < consts::MIN_BOARD_COLUMNS || grid.rows() < consts::MIN_BOARD_ROWS
        {
            return Err(GridError::TooSmall {
                columns: grid.columns(),
                rows: grid.rows(),
            });
        }
        Ok(grid)
    }

    pub(crate) fn width(self) -> i32 {
        i32::from(self.width)
    }

    pub(crate) fn height(self) -> i32 {
        i32::from(self.height)
    }

    pub(crate) fn cell_size(self) -> i32 {
        i32::from(self.cell_size)
    }

    /// Number of cells across
    pub(crate) fn columns(self) -> u16 {
        self.width / self.cell_size
    }

    /// Number of cells down
    pub(crate) fn rows(self) -> u16 {
        self.height / self.cell_size
    }

    pub(crate) fn in_bounds(self, p: Point) -> bool {
        (0..self.width()).contains(&p.x) && (0..self.height()).contains(&p.y)
    }

    /// The cell-aligned center of the board.  For boards with an even number
    /// of cells along an axis, this is exactly half the board's extent along
    /// that axis.
    pub(crate) fn center(self) -> Point {
        let cs = self.cell_size();
        Point::new(
            i32::from(self.columns() / 2) * cs,
            i32::from(self.rows() / 2) * cs,
        )
    }

    /// Bring a point that has stepped off the board back in on the opposite
    /// side.  Each axis is handled independently.
    pub(crate) fn wrap(self, p: Point) -> Point {
        let wrap_axis = |v: i32, extent: i32| {
            if v < 0 {
                extent - self.cell_size()
            } else if v >= extent {
                0
            } else {
                v
            }
        };
        Point::new(wrap_axis(p.x, self.width()), wrap_axis(p.y, self.height()))
    }

    /// Return a uniformly random cell on the board
    pub(crate) fn random_point<R: Rng>(self, rng: &mut R) -> Point {
        let cs = self.cell_size();
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Point::new(i32::from(col) * cs, i32::from(row) * cs)
    }

    /// Convert an on-board point to `(column, row)` cell indices
    pub(crate) fn to_cell(self, p: Point) -> Option<(u16, u16)> {
        if !self.in_bounds(p) {
            return None;
        }
        let col = u16::try_from(p.x / self.cell_size()).ok()?;
        let row = u16::try_from(p.y / self.cell_size()).ok()?;
        Some((col, row))
    }

    /// Whether `a` and `b` are neighboring cells.  If `wrap` is true, cells
    /// on opposite edges of the same row or column also count as neighbors.
    pub(crate) fn adjacent(self, a: Point, b: Point, wrap: bool) -> bool {
        let axis_gap = |d: i32, extent: i32| {
            let d = d.abs();
            if wrap {
                d.min(extent - d)
            } else {
                d
            }
        };
        let dx = axis_gap(a.x - b.x, self.width());
        let dy = axis_gap(a.y - b.y, self.height());
        (dx, dy) == (self.cell_size(), 0) || (dx, dy) == (0, self.cell_size())
    }

    /// Iterate over every cell on the board, row by row
    #[cfg(test)]
    pub(crate) fn cells(self) -> impl Iterator<Item = Point> {
        let cs = self.cell_size();
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |col| Point::new(i32::from(col) * cs, i32::from(row) * cs))
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("board {dimension} ({value}) is not a multiple of the cell size ({cell_size})")]
    Misaligned {
        dimension: &'static str,
        value: u16,
        cell_size: u16,
    },
    #[error(
        "board of {columns}x{rows} cells is too small; need at least {} columns and {} rows",
        consts::MIN_BOARD_COLUMNS,
        consts::MIN_BOARD_ROWS
    )]
    TooSmall { columns: u16, rows: u16 },
}
