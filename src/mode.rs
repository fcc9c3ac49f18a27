use crate::game::grid::{Grid, Point};
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule variant in effect for a round
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GameMode {
    /// Leaving the board kills the snake
    #[default]
    Classic,
    /// Leaving the board brings the snake back in on the opposite edge
    Fun,
}

impl GameMode {
    /// The key under which the mode's high score is stored
    pub(crate) fn key(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Fun => "fun",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Fun => "Fun",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            GameMode::Classic => "Game ends when hitting walls",
            GameMode::Fun => "Snake wraps around walls",
        }
    }

    /// Does the snake pass through the edges of the board in this mode?
    pub(crate) fn wraps(self) -> bool {
        match self {
            GameMode::Classic => false,
            GameMode::Fun => true,
        }
    }

    /// Apply the mode's boundary policy to a head that has just moved to
    /// `p`.  Returns `None` if leaving the board at `p` is fatal.
    pub(crate) fn confine(self, grid: Grid, p: Point) -> Option<Point> {
        match self {
            GameMode::Classic => grid.in_bounds(p).then_some(p),
            GameMode::Fun => Some(grid.wrap(p)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid() -> Grid {
        Grid::new(640, 480, 20).expect("grid should be valid")
    }

    #[rstest]
    #[case(GameMode::Classic, Point::new(320, 240), Some(Point::new(320, 240)))]
    #[case(GameMode::Classic, Point::new(640, 240), None)]
    #[case(GameMode::Classic, Point::new(-20, 240), None)]
    #[case(GameMode::Classic, Point::new(320, 480), None)]
    #[case(GameMode::Classic, Point::new(320, -20), None)]
    #[case(GameMode::Fun, Point::new(320, 240), Some(Point::new(320, 240)))]
    #[case(GameMode::Fun, Point::new(640, 240), Some(Point::new(0, 240)))]
    #[case(GameMode::Fun, Point::new(-20, 240), Some(Point::new(620, 240)))]
    #[case(GameMode::Fun, Point::new(320, 480), Some(Point::new(320, 0)))]
    #[case(GameMode::Fun, Point::new(320, -20), Some(Point::new(320, 460)))]
    fn confine(#[case] mode: GameMode, #[case] p: Point, #[case] r: Option<Point>) {
        assert_eq!(mode.confine(grid(), p), r);
    }

    #[test]
    fn serde_names_match_keys() {
        for mode in [GameMode::Classic, GameMode::Fun] {
            assert_eq!(
                serde_json::to_string(&mode).expect("mode should serialize"),
                format!("\"{}\"", mode.key())
            );
        }
    }

    #[test]
    fn fmt_width() {
        assert_eq!(format!("{:8}", GameMode::Fun), "Fun     ");
    }
}
