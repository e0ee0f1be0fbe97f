pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::MatchdayConfig};

pub use core::{
    board::SimpleScoreBoard, broadcast::BroadcastScoreBoard, engine::MatchdayEngine,
    feed::HttpEventFeed, summary::LiveSummary,
};
pub use domain::model::{BoardEvent, BoardId, MatchEvent, MatchSnapshot, Summary, SummaryEntry};
pub use domain::ports::{
    BoardObserver, ObservableScoreBoard, ScoreBoard, SharedObserver, SummaryGenerator,
};
pub use utils::error::{Result, ScoreboardError};
