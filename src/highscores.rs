//! High score leaderboard
//!
//! In-memory only: scores live for the process lifetime and are surfaced on
//! the game-over screen and the exit log.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Points earned in the run
    pub score: u64,
    /// Run length in seconds
    pub duration_secs: f32,
    /// Game speed reached when the run ended
    pub top_speed: f32,
}

/// Session leaderboard, sorted descending by score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a finished run; returns the rank achieved (1-indexed) or None if
    /// it didn't qualify.
    pub fn add_score(&mut self, score: u64, duration_secs: f32, top_speed: f32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            duration_secs,
            top_speed,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn entries_sorted_and_ranked() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(100, 10.0, 1.4), Some(1));
        assert_eq!(scores.add_score(300, 30.0, 2.2), Some(1));
        assert_eq!(scores.add_score(200, 20.0, 1.8), Some(2));
        assert_eq!(scores.top_score(), Some(300));
        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![300, 200, 100]);
    }

    #[test]
    fn leaderboard_truncates_at_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 + 5 {
            scores.add_score(i * 10, i as f32, 1.0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest surviving entry is the 10th best
        assert_eq!(scores.entries.last().unwrap().score, 60);
        // A score below the floor no longer qualifies
        assert_eq!(scores.add_score(50, 5.0, 1.0), None);
    }
}
