use crate::domain::model::{Summary, SummaryEntry};
use crate::domain::ports::SummaryGenerator;
use crate::utils::error::{Result, ScoreboardError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Renders the classic scoreboard listing:
///
/// ```text
/// 1. Uruguay 6 - Italy 6
/// 2. Spain 10 - Brazil 2
/// ```
pub struct TextSummaryGenerator;

impl SummaryGenerator for TextSummaryGenerator {
    type Output = String;

    fn generate_summary(&self, summary: &Summary) -> Result<String> {
        let lines: Vec<String> = summary
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "{}. {} {} - {} {}",
                    entry.position,
                    entry.home_team,
                    entry.home_score,
                    entry.away_team,
                    entry.away_score
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

pub struct CsvSummaryGenerator;

impl SummaryGenerator for CsvSummaryGenerator {
    type Output = String;

    fn generate_summary(&self, summary: &Summary) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "position",
            "home_team",
            "home_score",
            "away_team",
            "away_score",
            "total",
        ])?;

        for entry in &summary.entries {
            writer.write_record([
                entry.position.to_string(),
                entry.home_team.clone(),
                entry.home_score.to_string(),
                entry.away_team.clone(),
                entry.away_score.to_string(),
                entry.total_score().to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ScoreboardError::ProcessingError {
                message: format!("CSV buffer error: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| ScoreboardError::ProcessingError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    generated_at: DateTime<Utc>,
    matches: &'a [SummaryEntry],
}

pub struct JsonSummaryGenerator;

impl SummaryGenerator for JsonSummaryGenerator {
    type Output = String;

    fn generate_summary(&self, summary: &Summary) -> Result<String> {
        let document = JsonSummary {
            generated_at: Utc::now(),
            matches: &summary.entries,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
