//! Session-lifetime high scores
//!
//! Lives only in memory for the life of the process: created once at
//! startup, lent to the simulation, and written only when a session ends.

/// Maximum number of finished runs kept on the leaderboard
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: u64,
    pub bricks_broken: u32,
    /// 1-based index of the session within this process
    pub session: u32,
}

/// Best score plus a leaderboard of the top runs, sorted descending
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    best: u64,
    sessions: u32,
    entries: Vec<HighScoreEntry>,
}

/// Outcome of recording a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    /// The run beat the previous best
    pub new_high_score: bool,
    /// Leaderboard place (1-indexed), if the run made the board
    pub rank: Option<usize>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known best score (e.g. in tests)
    pub fn with_best(best: u64) -> Self {
        Self {
            best,
            ..Self::default()
        }
    }

    /// The high score shown on screen
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Number of sessions finished so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Ranked runs, best first
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Record a finished session. The best score only moves when beaten.
    pub fn record(&mut self, score: u64, bricks_broken: u32) -> Recorded {
        self.sessions += 1;
        let new_high_score = score > self.best;
        if new_high_score {
            self.best = score;
        }
        Recorded {
            new_high_score,
            rank: self.rank_run(score, bricks_broken),
        }
    }

    /// Slot a run into the board. Scoreless runs never place; ties rank
    /// below the earlier run.
    fn rank_run(&mut self, score: u64, bricks_broken: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let index = self.entries.partition_point(|e| e.score >= score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(
            index,
            HighScoreEntry {
                score,
                bricks_broken,
                session: self.sessions,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_only_moves_up() {
        let mut scores = HighScores::new();
        assert_eq!(scores.best(), 0);

        assert!(scores.record(120, 1).new_high_score);
        assert_eq!(scores.best(), 120);

        assert!(!scores.record(40, 0).new_high_score);
        assert_eq!(scores.best(), 120);

        // Equal is not a new high score
        assert!(!scores.record(120, 1).new_high_score);
        assert_eq!(scores.sessions(), 3);
    }

    #[test]
    fn test_injected_best() {
        let mut scores = HighScores::with_best(1000);
        let recorded = scores.record(500, 5);
        assert!(!recorded.new_high_score);
        assert_eq!(recorded.rank, Some(1));
        assert_eq!(scores.best(), 1000);
    }

    #[test]
    fn test_zero_score_not_ranked() {
        let mut scores = HighScores::new();
        let recorded = scores.record(0, 0);
        assert_eq!(recorded.rank, None);
        assert!(scores.entries().is_empty());
        assert_eq!(scores.sessions(), 1);
    }

    #[test]
    fn test_leaderboard_sorted_and_trimmed() {
        let mut scores = HighScores::new();
        for s in 1..=15u64 {
            scores.record(s * 5, 0);
        }
        let entries = scores.entries();
        assert_eq!(entries.len(), MAX_HIGH_SCORES);
        assert_eq!(entries[0].score, 75);
        assert_eq!(entries[0].session, 15);
        assert_eq!(entries[MAX_HIGH_SCORES - 1].score, 30);
        assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));

        // Full board: a run that only ties the last place doesn't make it
        assert_eq!(scores.record(30, 0).rank, None);
        assert_eq!(scores.record(31, 0).rank, Some(10));
        assert_eq!(scores.record(100, 2).rank, Some(1));
        assert_eq!(scores.entries().len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_ties_rank_after_earlier_run() {
        let mut scores = HighScores::new();
        scores.record(200, 2);
        assert_eq!(scores.record(200, 1).rank, Some(2));
        assert_eq!(scores.entries()[0].session, 1);
        assert_eq!(scores.entries()[1].session, 2);
    }
}
