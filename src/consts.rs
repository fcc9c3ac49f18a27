//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default board width, in pixels
pub(crate) const BOARD_WIDTH: u16 = 640;

/// Default board height, in pixels
pub(crate) const BOARD_HEIGHT: u16 = 360;

/// Default size of one grid cell, in pixels.  All positions on the board are
/// multiples of this.
pub(crate) const CELL_SIZE: u16 = 20;

/// The narrowest board (in cells) that still fits the starting snake to the
/// left of the center
pub(crate) const MIN_BOARD_COLUMNS: u16 = 4;

/// The shortest board (in cells).  With a single row, a vertical move in
/// Fun mode would wrap the head back onto itself.
pub(crate) const MIN_BOARD_ROWS: u16 = 2;

/// Default number of food items kept on the board
pub(crate) const FOOD_TARGET: usize = 8;

/// Upper limit for the configurable number of food items
pub(crate) const MAX_FOOD: usize = 64;

/// Number of random cells tried when placing a single food item before
/// giving up until the next tick
pub(crate) const PLACEMENT_ATTEMPTS: usize = 100;

/// Length of the snake at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default simulation rate
pub(crate) const TICKS_PER_SECOND: u32 = 10;

/// Upper limit for the configurable simulation rate
pub(crate) const MAX_TICKS_PER_SECOND: u32 = 60;

/// Terminal columns used to draw one grid cell, so that cells look roughly
/// square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw everything inside a rectangle at least this large in the center of
/// the terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "/\\";

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "\\/";

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "<:";

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = ":>";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "><";

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Food styles, cycled through by position so that neighboring items differ
pub(crate) const FOOD_STYLES: [Style; 4] = [
    Style::new().fg(Color::LightRed),
    Style::new().fg(Color::Rgb(255, 165, 0)),
    Style::new().fg(Color::Yellow),
    Style::new().fg(Color::LightBlue),
];

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for high scores
pub(crate) const HIGH_SCORE_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the game title on the menu
pub(crate) const TITLE_STYLE: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Style for the name of the currently-selected mode in the menu
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for mode descriptions in the menu
pub(crate) const DESCRIPTION_STYLE: Style = Style::new().fg(Color::Gray);
