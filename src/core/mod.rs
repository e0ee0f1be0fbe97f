pub mod board;
pub mod broadcast;
pub mod engine;
pub mod feed;
pub mod render;
pub mod summary;

pub use crate::domain::model::{
    BoardEvent, BoardId, MatchEvent, MatchSnapshot, MatchdayReport, Summary, SummaryEntry,
};
pub use crate::domain::ports::{
    BoardObserver, ConfigProvider, EventFeed, ObservableScoreBoard, ScoreBoard, SharedObserver,
    Storage, SummaryGenerator,
};
pub use crate::utils::error::Result;
