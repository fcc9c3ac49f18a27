use super::grid::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the point one cell of `cell_size` pixels away from `pos` in
    /// this direction.  The result may lie off the board.
    pub(crate) fn advance(self, pos: Point, cell_size: i32) -> Point {
        let (dx, dy) = self.unit_vector();
        pos.offset(dx * cell_size, dy * cell_size)
    }

    pub(crate) fn unit_vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_reversal_of(self, other: Direction) -> bool {
        self == other.reverse()
    }
}
