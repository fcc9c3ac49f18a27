use super::direction::Direction;
use super::grid::{Grid, Point};
use std::collections::VecDeque;

/// The cells occupied by the snake.
///
/// The snake always has a head; `body` holds the remaining segments ordered
/// from the neck to the tip of the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Point,

    /// The positions of all other cells of the snake, nearest the head first
    body: VecDeque<Point>,
}

impl Snake {
    /// Create a straight snake of `length` segments with its head at `head`,
    /// facing in `heading`, with the rest of its body trailing behind it one
    /// cell of `cell_size` pixels apart.
    pub(crate) fn new(head: Point, heading: Direction, length: usize, cell_size: i32) -> Snake {
        let behind = heading.reverse();
        let body = std::iter::successors(Some(head), |&p| Some(behind.advance(p, cell_size)))
            .skip(1)
            .take(length.saturating_sub(1))
            .collect();
        Snake { head, body }
    }

    /// Build a snake from explicit segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments<I: IntoIterator<Item = Point>>(segments: I) -> Option<Snake> {
        let mut iter = segments.into_iter();
        let head = iter.next()?;
        Some(Snake {
            head,
            body: iter.collect(),
        })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        self.head
    }

    /// Return the number of cells the snake occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the snake's cells, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the positions of the cells behind the head
    pub(crate) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Move the head to `new_head`.  The tail stays in place if `grew` is
    /// true and otherwise follows along.
    pub(crate) fn advance(&mut self, new_head: Point, grew: bool) {
        self.body.push_front(self.head);
        self.head = new_head;
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Would a head arriving at `p` run into the snake?  Only the cells
    /// behind the current head are considered.
    pub(crate) fn collides_at(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Is every pair of consecutive segments exactly one cell apart along a
    /// single axis?  With `wrap`, segments may also neighbor each other
    /// across opposite edges of the board.
    pub(crate) fn is_contiguous(&self, grid: Grid, wrap: bool) -> bool {
        self.segments()
            .zip(self.segments().skip(1))
            .all(|(a, b)| grid.adjacent(a, b, wrap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CELL: i32 = 20;

    fn grid() -> Grid {
        Grid::new(640, 480, 20).expect("grid should be valid")
    }

    #[test]
    fn new_trails_behind_head() {
        let snake = Snake::new(Point::new(320, 240), Direction::Right, 3, CELL);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Point::new(320, 240),
                Point::new(300, 240),
                Point::new(280, 240)
            ]
        );
        assert_eq!(snake.len(), 3);
        assert!(snake.is_contiguous(grid(), false));
    }

    #[test]
    fn new_facing_up() {
        let snake = Snake::new(Point::new(100, 100), Direction::Up, 4, CELL);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Point::new(100, 100),
                Point::new(100, 120),
                Point::new(100, 140),
                Point::new(100, 160)
            ]
        );
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Point::new(320, 240), Direction::Right, 3, CELL);
        snake.advance(Point::new(340, 240), false);
        assert_eq!(snake.head(), Point::new(340, 240));
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Point::new(340, 240),
                Point::new(320, 240),
                Point::new(300, 240)
            ]
        );
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Point::new(320, 240), Direction::Right, 3, CELL);
        snake.advance(Point::new(320, 220), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Point::new(320, 220),
                Point::new(320, 240),
                Point::new(300, 240),
                Point::new(280, 240)
            ]
        );
        assert!(snake.is_contiguous(grid(), false));
    }

    #[test]
    fn collides_at_ignores_head() {
        let snake = Snake::new(Point::new(320, 240), Direction::Right, 3, CELL);
        assert!(!snake.collides_at(Point::new(320, 240)));
        assert!(snake.collides_at(Point::new(300, 240)));
        assert!(snake.collides_at(Point::new(280, 240)));
        assert!(!snake.collides_at(Point::new(260, 240)));
    }

    #[test]
    fn collision_with_body_loop() {
        let snake = Snake::from_segments([
            Point::new(100, 100),
            Point::new(100, 120),
            Point::new(100, 140),
            Point::new(120, 140),
            Point::new(140, 140),
            Point::new(140, 120),
            Point::new(140, 100),
            Point::new(120, 100),
        ])
        .expect("segments should be nonempty");
        assert!(snake.collides_at(Point::new(100, 120)));
        assert!(snake.collides_at(Point::new(120, 100)));
        assert!(!snake.collides_at(Point::new(120, 120)));
    }

    #[test]
    fn gaps_are_not_contiguous() {
        let snake = Snake::from_segments([
            Point::new(100, 100),
            Point::new(120, 100),
            Point::new(160, 100),
        ])
        .expect("segments should be nonempty");
        assert!(!snake.is_contiguous(grid(), false));
        let diagonal = Snake::from_segments([Point::new(100, 100), Point::new(120, 120)])
            .expect("segments should be nonempty");
        assert!(!diagonal.is_contiguous(grid(), true));
    }

    #[test]
    fn wrapped_snake_is_contiguous_only_when_wrapping() {
        let snake = Snake::from_segments([
            Point::new(0, 240),
            Point::new(620, 240),
            Point::new(600, 240),
        ])
        .expect("segments should be nonempty");
        assert!(snake.is_contiguous(grid(), true));
        assert!(!snake.is_contiguous(grid(), false));
    }
}
