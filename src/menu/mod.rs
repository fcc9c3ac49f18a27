use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::{engine::Engine, GameScreen};
use crate::highscores::HighScores;
use crate::mode::GameMode;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect, Size},
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::time::Duration;

/// The start screen, on which the player picks a game mode
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ModeMenu {
    selection: GameMode,
    /// Passed on to the game screen once play starts
    tick_period: Duration,
}

impl ModeMenu {
    const ENTRY_HEIGHT: u16 = 3;

    pub(crate) fn new(selection: GameMode, tick_period: Duration) -> ModeMenu {
        ModeMenu {
            selection,
            tick_period,
        }
    }

    pub(crate) fn draw(&self, high_scores: &HighScores, frame: &mut Frame<'_>) {
        frame.render_widget(
            MenuView {
                menu: self,
                high_scores,
            },
            frame.area(),
        );
    }

    pub(crate) fn process_input<R: Rng>(
        &mut self,
        engine: &mut Engine<R>,
    ) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(engine, read()?))
    }

    fn handle_event<R: Rng>(&mut self, engine: &mut Engine<R>, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::Up | Command::Prev => {
                self.selection = self.selection.prev().unwrap_or_else(GameMode::max);
            }
            Command::Down | Command::Next => {
                self.selection = self.selection.next().unwrap_or_else(GameMode::min);
            }
            Command::Home => self.selection = GameMode::min(),
            Command::End => self.selection = GameMode::max(),
            Command::Enter | Command::Space => {
                log::info!("Starting a game in {} mode", self.selection);
                engine.set_mode(self.selection);
                return Some(Screen::Game(GameScreen::new(self.tick_period)));
            }
            _ => (),
        }
        None
    }
}

/// A [`ModeMenu`] together with the high scores it lists
#[derive(Clone, Copy, Debug)]
struct MenuView<'a> {
    menu: &'a ModeMenu,
    high_scores: &'a HighScores,
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area, Size::new(0, 0));
        let [title_area, instructions_area, classic_area, fun_area, quit_area] =
            Layout::vertical([1, 1, ModeMenu::ENTRY_HEIGHT, ModeMenu::ENTRY_HEIGHT, 1])
                .flex(Flex::Start)
                .spacing(1)
                .vertical_margin(2)
                .areas(display);

        Line::from(Span::styled("SNAKE GAME", consts::TITLE_STYLE))
            .centered()
            .render(title_area, buf);

        Line::from_iter([
            Span::raw("Use "),
            Span::styled("UP", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("DOWN", consts::KEY_STYLE),
            Span::raw(" arrows to select, "),
            Span::styled("ENTER", consts::KEY_STYLE),
            Span::raw(" to start"),
        ])
        .centered()
        .render(instructions_area, buf);

        for (mode, entry_area) in GameMode::iter().zip([classic_area, fun_area]) {
            let [name_area, desc_area, score_area] =
                Layout::vertical([1, 1, 1]).areas(entry_area);
            let name = if mode == self.menu.selection {
                Span::styled(format!("» {mode} Mode «"), consts::MENU_SELECTION_STYLE)
            } else {
                Span::raw(format!("{mode} Mode"))
            };
            Line::from(name).centered().render(name_area, buf);
            Line::from(Span::styled(mode.description(), consts::DESCRIPTION_STYLE))
                .centered()
                .render(desc_area, buf);
            Line::from(Span::styled(
                format!("High Score: {}", self.high_scores.get(mode)),
                consts::HIGH_SCORE_STYLE,
            ))
            .centered()
            .render(score_area, buf);
        }

        Line::from_iter([
            Span::raw("[Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(quit_area, buf);
    }
}
