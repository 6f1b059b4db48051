use std::time::{Duration, Instant};

use crate::game::EndReason;

/// Play clock and tallies for one terminal session.
///
/// The clock only runs while a snake is moving: it starts on the first
/// steering key of a game and freezes when the game ends.
pub struct SessionStats {
    started_at: Option<Instant>,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub last_end: Option<EndReason>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started_at: None,
            elapsed_time: Duration::ZERO,
            games_played: 0,
            last_end: None,
        }
    }

    /// Refresh the elapsed time of a running clock
    pub fn update(&mut self) {
        if let Some(start) = self.started_at {
            self.elapsed_time = start.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start_clock(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// A fresh game was set up; it waits for its first key
    pub fn on_game_start(&mut self) {
        self.started_at = None;
        self.elapsed_time = Duration::ZERO;
        self.last_end = None;
    }

    pub fn on_game_over(&mut self, reason: Option<EndReason>) {
        self.update();
        self.started_at = None;
        self.games_played += 1;
        self.last_end = reason;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
