pub(crate) mod direction;
pub(crate) mod engine;
pub(crate) mod food;
pub(crate) mod grid;
pub(crate) mod snake;
use self::direction::Direction;
use self::engine::{Engine, EngineState, StepOutcome};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::menu::ModeMenu;
use crate::mode::GameMode;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::time::{Duration, Instant};

/// The in-play screen: feeds key presses and clock ticks to an [`Engine`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameScreen {
    /// Direction requested since the last tick
    pending: Option<Direction>,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl GameScreen {
    pub(crate) fn new(tick_period: Duration) -> GameScreen {
        GameScreen {
            pending: None,
            tick_period,
            next_tick: None,
        }
    }

    /// Wait for either the next tick or a terminal event, whichever comes
    /// first, and act on it.  Once the round is over, only events are
    /// waited for.
    pub(crate) fn process_input<R: Rng>(
        &mut self,
        engine: &mut Engine<R>,
    ) -> std::io::Result<Option<Screen>> {
        if engine.is_running() {
            let period = self.tick_period;
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.tick(engine);
                Ok(None)
            } else {
                Ok(self.handle_event(engine, read()?))
            }
        } else {
            Ok(self.handle_event(engine, read()?))
        }
    }

    fn tick<R: Rng>(&mut self, engine: &mut Engine<R>) {
        let outcome = engine.step(self.pending.take());
        if matches!(outcome, StepOutcome::GameOver(_)) {
            log::debug!("Round ended with a final score of {}", outcome.score());
        }
    }

    fn handle_event<R: Rng>(&mut self, engine: &mut Engine<R>, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match cmd {
            Command::Quit => return Some(Screen::Quit),
            Command::Esc => {
                return Some(Screen::Menu(ModeMenu::new(engine.mode(), self.tick_period)));
            }
            Command::Space => self.restart(engine),
            Command::Q if !engine.is_running() => return Some(Screen::Quit),
            Command::Up => self.request(engine, Direction::Up),
            Command::Down => self.request(engine, Direction::Down),
            Command::Left => self.request(engine, Direction::Left),
            Command::Right => self.request(engine, Direction::Right),
            _ => (),
        }
        None
    }

    /// Queue a turn for the next tick.  A reversal would be dropped by the
    /// engine anyway, so it doesn't displace an earlier valid request.
    fn request<R>(&mut self, engine: &Engine<R>, d: Direction) {
        if engine.is_running() && !d.is_reversal_of(engine.direction()) {
            self.pending = Some(d);
        }
    }

    fn restart<R: Rng>(&mut self, engine: &mut Engine<R>) {
        engine.reset();
        self.pending = None;
        self.next_tick = None;
    }
}

impl<R> Widget for &Engine<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.grid();
        let block_size = Size {
            width: grid
                .columns()
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: grid.rows().saturating_add(2),
        };
        let display = get_display_area(
            area,
            Size {
                width: block_size.width,
                height: block_size.height.saturating_add(3),
            },
        );
        let [status_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}  High Score: {}  Mode: {}",
                self.score(),
                self.high_score(),
                self.mode()
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let block_area = center_rect(block_area, block_size);
        match self.mode() {
            GameMode::Classic => Block::bordered().render(block_area, buf),
            GameMode::Fun => DottedBorder.render(block_area, buf),
        }

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &p in self.snake().body() {
            if let Some(cell) = grid.to_cell(p) {
                board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
            }
        }
        for p in self.food().iter() {
            if let Some(cell @ (col, row)) = grid.to_cell(p) {
                let style = consts::FOOD_STYLES
                    [(usize::from(col) + usize::from(row)) % consts::FOOD_STYLES.len()];
                board.draw_cell(cell, consts::FOOD_SYMBOL, style);
            }
        }
        // Draw the head last so that a collision overwrites whatever was hit
        let head = grid.to_cell(self.head());
        match self.state() {
            EngineState::Running => {
                if let Some(cell) = head {
                    board.draw_cell(
                        cell,
                        head_symbol(self.direction()),
                        consts::SNAKE_HEAD_STYLE,
                    );
                }
            }
            EngineState::GameOver { score, crash } => {
                // A crash into a wall lies off the board; mark the head instead.
                if let Some(cell) = grid.to_cell(crash).or(head) {
                    board.draw_cell(cell, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
                }
                Line::raw(format!(" GAME OVER  Final score: {score}")).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("SPACE", consts::KEY_STYLE),
                    Span::raw(" to restart or "),
                    Span::styled("ESC", consts::KEY_STYLE),
                    Span::raw(" for menu"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Drawing surface for the inside of the board's border
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    /// Draw `symbol`, which should be [`CELL_WIDTH`][consts::CELL_WIDTH]
    /// characters long, at the given board cell
    fn draw_cell(&mut self, (col, row): (u16, u16), symbol: &str, style: Style) {
        let Some(x) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|dx| self.area.x.checked_add(dx))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (x, ch) in (x..=u16::MAX).zip(symbol.chars()) {
            if !self.area.contains(Position::new(x, y)) {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Border drawn around the board when the snake wraps at the edges
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}
