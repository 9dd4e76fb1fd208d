use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::time::interval;

use crate::controller::GameController;
use crate::game::GameConfig;
use crate::input::KeyAction;
use crate::render::TerminalRenderer;

pub struct HumanMode {
    controller: GameController<TerminalRenderer>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            controller: GameController::new(config, TerminalRenderer::new()),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = open_terminal()?;
        let played = self.run_game_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        played
    }

    async fn run_game_loop(&mut self, terminal: &mut Screen) -> Result<()> {
        let mut event_stream = EventStream::new();

        // ~30 fps
        let mut render_timer = interval(Duration::from_millis(33));

        self.controller.start();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = self.controller.wait_for_tick() => {
                    self.controller.tick();
                }

                // Present whatever the controller last drew
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.controller.renderer().draw(frame);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        let state = self.controller.state();
        info!("quitting with score {} after {} steps", state.score, state.steps);

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Repeats and releases would double-apply turns
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.controller.on_key(key) {
                KeyAction::Turn(_) | KeyAction::None => {}
                KeyAction::Restart => self.controller.restart(),
                KeyAction::Quit => self.should_quit = true,
            }
        }
    }
}

type Screen = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus the alternate screen on stdout; stderr stays free for logs
fn open_terminal() -> Result<Screen> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let mut terminal =
        Terminal::new(CrosstermBackend::new(out)).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Screen) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert!(!mode.controller.state().game_over);
        assert_eq!(mode.controller.state().score, 0);
        assert!(!mode.controller.is_running());
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(press(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut mode = HumanMode::new(GameConfig::default());
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        mode.handle_event(Event::Key(release));

        assert_eq!(
            mode.controller.state().direction,
            crate::game::Direction::Right
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_key_restarts_game() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(press(KeyCode::Left));
        mode.controller.tick();
        assert!(mode.controller.state().game_over);

        mode.handle_event(press(KeyCode::Char('r')));

        assert!(!mode.controller.state().game_over);
        assert!(mode.controller.is_running());
        assert!(!mode.controller.renderer().view().game_over);
    }
}
