use crate::config::Config;
use crate::game::{engine::Engine, GameScreen};
use crate::menu::ModeMenu;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The terminal front end: one engine, shown through whichever screen is
/// current
#[derive(Clone, Debug)]
pub(crate) struct App {
    engine: Engine,
    screen: Screen,
}

impl App {
    pub(crate) fn new(config: &Config) -> App {
        let engine = Engine::new(config.engine_settings(), config.high_score_store());
        let screen = Screen::Menu(ModeMenu::new(
            config.game.mode,
            config.game.tick_period(),
        ));
        App { engine, screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(self.engine.high_scores(), frame))?;
            }
            Screen::Game(_) => {
                terminal.draw(|frame| frame.render_widget(&self.engine, frame.area()))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Menu(ref mut menu) => menu.process_input(&mut self.engine)?,
            Screen::Game(ref mut game) => game.process_input(&mut self.engine)?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Screen {
    Menu(ModeMenu),
    Game(GameScreen),
    Quit,
}
