use std::time::{Duration, Instant};

/// Session-level bookkeeping across restarts: wall-clock time of the current
/// game, games played and the best score seen. Lives outside the engine so a
/// reset never clears the high score.
pub struct GameMetrics {
    start_time: Instant,
    elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Elapsed time of the current game as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_high_score_survives_restarts() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(30);
        metrics.on_game_start();
        metrics.on_game_over(10);

        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 2);
    }
}
