use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a board instance, allocated from a process-wide counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(u64);

impl BoardId {
    pub fn next() -> Self {
        static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board-{}", self.0)
    }
}

/// Copy of a board's active match, taken at event time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchSnapshot {
    pub fn total_score(&self) -> u32 {
        self.home_score + self.away_score
    }
}

/// Lifecycle notification delivered to board observers.
///
/// Events carry the match state by value, so observers never hold a
/// reference into the emitting board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    MatchStarted(MatchSnapshot),
    ScoreUpdated(MatchSnapshot),
    MatchFinished,
}

/// Externally supplied replay instruction, addressing a board by a
/// caller-chosen key. Scores arrive as `i64` so that negative input is
/// representable and rejected by validation instead of deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    StartMatch {
        board: String,
        home_team: String,
        away_team: String,
    },
    UpdateScore {
        board: String,
        home_score: i64,
        away_score: i64,
    },
    FinishMatch {
        board: String,
    },
}

impl MatchEvent {
    /// Key of the board this event addresses.
    pub fn board_key(&self) -> &str {
        match self {
            Self::StartMatch { board, .. }
            | Self::UpdateScore { board, .. }
            | Self::FinishMatch { board } => board,
        }
    }
}

/// One line of the ranked summary. `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub position: usize,
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl SummaryEntry {
    pub fn total_score(&self) -> u32 {
        self.home_score + self.away_score
    }
}

/// Ranked view over all matches in progress: descending total score,
/// ties broken by the most recently started match first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output of one matchday replay.
#[derive(Debug, Clone)]
pub struct MatchdayReport {
    pub summary: Summary,
    pub text_output: String,
    pub csv_output: String,
    pub json_output: String,
    pub events_applied: usize,
    pub events_skipped: usize,
    pub generated_at: DateTime<Utc>,
}
