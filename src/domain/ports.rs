use crate::domain::model::{BoardEvent, BoardId, MatchEvent, MatchSnapshot, Summary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A live scoreboard carrying at most one active match.
pub trait ScoreBoard {
    /// Starts a new match with a 0-0 score.
    ///
    /// Fails with `MatchAlreadyStarted` while a match is active, and with
    /// `InvalidTeamName` when either name is blank or unprintable.
    fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()>;

    /// Replaces the score of the active match with absolute values.
    ///
    /// Fails with `NoActiveMatch` when the board is idle.
    fn update_score(&mut self, home_score: u32, away_score: u32) -> Result<()>;

    /// Finishes the active match and clears the board.
    ///
    /// Fails with `NoActiveMatch` when the board is idle.
    fn finish_match(&mut self) -> Result<()>;

    /// Home team name, `None` when no match is active.
    fn home_team(&self) -> Option<&str>;
    /// Away team name, `None` when no match is active.
    fn away_team(&self) -> Option<&str>;
    /// Home score, `None` when no match is active.
    fn home_score(&self) -> Option<u32>;
    /// Away score, `None` when no match is active.
    fn away_score(&self) -> Option<u32>;

    /// Copy of the active match, `None` when the board is idle.
    fn snapshot(&self) -> Option<MatchSnapshot> {
        Some(MatchSnapshot {
            home_team: self.home_team()?.to_string(),
            away_team: self.away_team()?.to_string(),
            home_score: self.home_score()?,
            away_score: self.away_score()?,
        })
    }
}

/// Receives lifecycle events from the boards it is registered on.
pub trait BoardObserver {
    fn on_board_event(&mut self, board: BoardId, event: &BoardEvent);
}

/// Handle under which observers are registered and removed. Removal
/// matches by `Arc` identity, so the caller keeps the handle it passed in.
pub type SharedObserver = Arc<Mutex<dyn BoardObserver + Send>>;

/// A scoreboard that can be monitored by observers.
pub trait ObservableScoreBoard: ScoreBoard {
    fn add_observer(&mut self, observer: SharedObserver);
    fn remove_observer(&mut self, observer: &SharedObserver);
}

/// Renders a ranked summary into some output representation.
pub trait SummaryGenerator {
    type Output;

    fn generate_summary(&self, summary: &Summary) -> Result<Self::Output>;
}

/// Source of match events for a replay.
#[async_trait]
pub trait EventFeed: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<MatchEvent>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn lenient_replay(&self) -> bool;

    fn compress_report(&self) -> bool {
        true
    }

    fn archive_name(&self) -> &str {
        "matchday_report.zip"
    }
}
