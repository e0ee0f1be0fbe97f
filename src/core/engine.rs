use crate::core::broadcast::BroadcastScoreBoard;
use crate::core::render::{CsvSummaryGenerator, JsonSummaryGenerator, TextSummaryGenerator};
use crate::core::summary::LiveSummary;
use crate::domain::model::{MatchEvent, MatchdayReport};
use crate::domain::ports::{
    ConfigProvider, EventFeed, ObservableScoreBoard, ScoreBoard, SharedObserver, Storage,
    SummaryGenerator,
};
use crate::utils::error::{Result, ScoreboardError};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use zip::write::{FileOptions, ZipWriter};

/// Replays a matchday: fetch events, run them through live boards and
/// write the ranked summary as a report.
pub struct MatchdayEngine<F: EventFeed, S: Storage, C: ConfigProvider> {
    feed: F,
    storage: S,
    config: C,
    monitor: SystemMonitor,
}

impl<F: EventFeed, S: Storage, C: ConfigProvider> MatchdayEngine<F, S, C> {
    pub fn new(feed: F, storage: S, config: C) -> Self {
        Self {
            feed,
            storage,
            config,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(feed: F, storage: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            feed,
            storage,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting matchday run...");

        tracing::info!("Fetching match events...");
        let events = self.feed.fetch_events().await?;
        tracing::info!("Fetched {} events", events.len());
        self.monitor.log_stats("Fetch");

        tracing::info!("Replaying events...");
        let report = self.replay(&events)?;
        tracing::info!(
            "Replayed {} events ({} skipped), {} matches in progress",
            report.events_applied,
            report.events_skipped,
            report.summary.len()
        );
        self.monitor.log_stats("Replay");

        tracing::info!("Writing report...");
        let output_path = self.write_report(&report).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }

    fn replay(&self, events: &[MatchEvent]) -> Result<MatchdayReport> {
        let live = Arc::new(Mutex::new(LiveSummary::new()));
        let mut boards: HashMap<String, BroadcastScoreBoard> = HashMap::new();
        let mut applied = 0usize;
        let mut skipped = 0usize;

        for event in events {
            match Self::apply_event(&live, &mut boards, event) {
                Ok(()) => applied += 1,
                Err(error) if self.config.lenient_replay() => {
                    tracing::warn!("Skipping event for {}: {}", event.board_key(), error);
                    skipped += 1;
                }
                Err(error) => return Err(error),
            }
        }

        let summary = live
            .lock()
            .map_err(|_| ScoreboardError::ProcessingError {
                message: "live summary lock poisoned".to_string(),
            })?
            .summary();

        Ok(MatchdayReport {
            text_output: TextSummaryGenerator.generate_summary(&summary)?,
            csv_output: CsvSummaryGenerator.generate_summary(&summary)?,
            json_output: JsonSummaryGenerator.generate_summary(&summary)?,
            summary,
            events_applied: applied,
            events_skipped: skipped,
            generated_at: Utc::now(),
        })
    }

    fn apply_event(
        live: &Arc<Mutex<LiveSummary>>,
        boards: &mut HashMap<String, BroadcastScoreBoard>,
        event: &MatchEvent,
    ) -> Result<()> {
        match event {
            MatchEvent::StartMatch {
                board: key,
                home_team,
                away_team,
            } => {
                let board = boards.entry(key.clone()).or_insert_with(|| {
                    let mut new_board = BroadcastScoreBoard::new();
                    let observer: SharedObserver = live.clone();
                    new_board.add_observer(observer);
                    new_board
                });
                board.start_match(home_team, away_team)
            }
            MatchEvent::UpdateScore {
                board: key,
                home_score,
                away_score,
            } => {
                let home_score = validation::validate_score_value("home_score", *home_score)?;
                let away_score = validation::validate_score_value("away_score", *away_score)?;
                match boards.get_mut(key) {
                    Some(board) => board.update_score(home_score, away_score),
                    None => Err(unknown_board(key)),
                }
            }
            MatchEvent::FinishMatch { board: key } => match boards.get_mut(key) {
                Some(board) => board.finish_match(),
                None => Err(unknown_board(key)),
            },
        }
    }

    async fn write_report(&self, report: &MatchdayReport) -> Result<String> {
        let formats = self.config.output_formats();
        let selected: Vec<(&str, &str)> = [
            ("txt", report.text_output.as_str()),
            ("csv", report.csv_output.as_str()),
            ("json", report.json_output.as_str()),
        ]
        .into_iter()
        .filter(|(format, _)| formats.iter().any(|f| f == format))
        .collect();

        if self.config.compress_report() {
            // 將所有格式打包成一個壓縮檔
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for (format, content) in &selected {
                    let file_name = format!("summary.{}", format);
                    zip.start_file::<_, ()>(file_name, FileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let archive_name = self.config.archive_name();
            tracing::debug!(
                "Writing report archive ({} bytes, {} files) to storage",
                zip_data.len(),
                selected.len()
            );
            self.storage.write_file(archive_name, &zip_data).await?;

            Ok(format!("{}/{}", self.config.output_path(), archive_name))
        } else {
            for (format, content) in &selected {
                let file_name = format!("summary.{}", format);
                self.storage
                    .write_file(&file_name, content.as_bytes())
                    .await?;
            }

            Ok(self.config.output_path().to_string())
        }
    }
}

fn unknown_board(key: &str) -> ScoreboardError {
    ScoreboardError::ReplayError {
        message: format!("No board named '{}' has been started", key),
    }
}
