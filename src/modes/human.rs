use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// The interactive game: owns the tick cadence and the terminal, drives the
/// engine through `set_direction` and `tick` from a single task.
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
    restart_requested: bool,
    end_recorded: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let renderer = Renderer::new(config.tile_count);
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let engine = GameEngine::new(config);

        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
            restart_requested: false,
            end_recorded: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.restart_requested {
                self.restart_requested = false;
                self.reset_game();
                // The old cadence must not bleed into the new game
                tick_timer.reset();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // The engine rejects 180-degree reversals itself
                    self.engine.set_direction(direction);
                }
                KeyAction::Restart => {
                    self.restart_requested = true;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();

        if !outcome.status.is_running() && !self.end_recorded {
            self.metrics.on_game_over(self.engine.score());
            self.end_recorded = true;
        }
    }

    fn reset_game(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.end_recorded = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.engine.status(), GameStatus::Running);
        assert_eq!(mode.engine.score(), 0);
        assert_eq!(mode.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_reset_starts_a_fresh_game() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.end_recorded = true;
        mode.reset_game();

        assert_eq!(mode.engine.status(), GameStatus::Running);
        assert!(!mode.end_recorded);
    }

    #[test]
    fn test_game_over_recorded_once() {
        let config = GameConfig {
            start_x: 19,
            ..GameConfig::default()
        };
        let mut mode = HumanMode::new(config);

        // Heading right from the last column: first tick ends the game
        mode.update_game();
        assert_eq!(mode.engine.status(), GameStatus::GameOver);
        assert_eq!(mode.metrics.games_played, 1);

        mode.update_game();
        assert_eq!(mode.metrics.games_played, 1);
    }
}
