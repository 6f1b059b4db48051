use anyhow::{Context, Result, ensure};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, Game, GameConfig};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Render at roughly 30 frames per second
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Keyboard-driven game in the terminal
pub struct HumanMode {
    config: GameConfig,
    tick_interval: Duration,
    /// Seeds one fresh `StdRng` per game so a fixed `--seed` replays a session
    seeds: StdRng,
    game: Game,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    started: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig, tick_interval: Duration, seed: Option<u64>) -> Result<Self> {
        ensure!(!tick_interval.is_zero(), "tick interval must be greater than zero");

        let mut seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::with_rng(config.clone(), StdRng::seed_from_u64(seeds.gen()))
            .context("Failed to set up the game")?;

        Ok(Self {
            config,
            tick_interval,
            seeds,
            game,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            started: false,
            pending_direction: None,
        })
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

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                _ = tick_timer.tick() => {
                    self.tick();
                }

                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.stats);
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

        info!("leaving after {} games", self.stats.games_played);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.pending_direction = Some(direction),
                KeyAction::Restart => self.reset_game()?,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    /// Advance the game by one tick. The snake sits still until the first
    /// steering key of a game.
    fn tick(&mut self) {
        if self.game.is_game_over() {
            return;
        }

        let action = Action::from(self.pending_direction.take());
        if !self.started {
            if action == Action::Continue {
                return;
            }
            self.started = true;
            self.stats.start_clock();
        }

        let result = self.game.update(action);
        if result.terminated {
            self.stats.on_game_over(result.info.end_reason);
        }
    }

    /// Throw the current game away and start a fresh one
    fn reset_game(&mut self) -> Result<()> {
        self.game = Game::with_rng(self.config.clone(), StdRng::seed_from_u64(self.seeds.gen()))
            .context("Failed to set up a new game")?;
        self.stats.on_game_start();
        self.started = false;
        self.pending_direction = None;
        Ok(())
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
