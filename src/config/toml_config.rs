use crate::domain::model::MatchEvent;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScoreboardError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A matchday fixture: where the events come from, how strictly they are
/// replayed and what the report looks like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchdayConfig {
    pub matchday: MatchdayInfo,
    pub feed: FeedConfig,
    pub replay: Option<ReplayConfig>,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchdayInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// "inline" 使用 [[events]]，"http" 使用 endpoint
    pub r#type: String,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// "fail" 或 "skip"
    pub on_event_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl MatchdayConfig {
    /// 從 TOML 檔案載入比賽日配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoreboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoreboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEED_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().is_some_and(|m| m.enabled)
    }

    pub fn is_http_feed(&self) -> bool {
        self.feed.r#type == "http"
    }
}

impl ConfigProvider for MatchdayConfig {
    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.report.output_formats
    }

    fn lenient_replay(&self) -> bool {
        self.replay
            .as_ref()
            .and_then(|r| r.on_event_error.as_deref())
            == Some("skip")
    }

    fn compress_report(&self) -> bool {
        self.report
            .compression
            .as_ref()
            .map_or(true, |c| c.enabled)
    }

    fn archive_name(&self) -> &str {
        self.report
            .compression
            .as_ref()
            .and_then(|c| c.filename.as_deref())
            .unwrap_or("matchday_report.zip")
    }
}

impl Validate for MatchdayConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("matchday.name", &self.matchday.name)?;

        match self.feed.r#type.as_str() {
            "inline" => {
                if self.events.is_empty() {
                    return Err(ScoreboardError::MissingConfigError {
                        field: "events".to_string(),
                    });
                }
            }
            "http" => {
                let endpoint = self.feed.endpoint.as_deref().ok_or_else(|| {
                    ScoreboardError::MissingConfigError {
                        field: "feed.endpoint".to_string(),
                    }
                })?;
                validation::validate_url("feed.endpoint", endpoint)?;
            }
            other => {
                return Err(ScoreboardError::InvalidConfigValueError {
                    field: "feed.type".to_string(),
                    value: other.to_string(),
                    reason: "supported feed types: inline, http".to_string(),
                })
            }
        }

        if let Some(mode) = self
            .replay
            .as_ref()
            .and_then(|r| r.on_event_error.as_deref())
        {
            if mode != "fail" && mode != "skip" {
                return Err(ScoreboardError::InvalidConfigValueError {
                    field: "replay.on_event_error".to_string(),
                    value: mode.to_string(),
                    reason: "supported modes: fail, skip".to_string(),
                });
            }
        }

        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_output_formats("report.output_formats", &self.report.output_formats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INLINE_FIXTURE: &str = r#"
[matchday]
name = "demo"

[feed]
type = "inline"

[replay]
on_event_error = "skip"

[report]
output_path = "./output"
output_formats = ["txt", "json"]

[[events]]
type = "start_match"
board = "A"
home_team = "Mexico"
away_team = "Canada"

[[events]]
type = "update_score"
board = "A"
home_score = 0
away_score = 5
"#;

    #[test]
    fn parses_an_inline_fixture() {
        let config = MatchdayConfig::from_toml_str(INLINE_FIXTURE).unwrap();

        assert_eq!(config.matchday.name, "demo");
        assert_eq!(config.events.len(), 2);
        assert!(config.lenient_replay());
        assert!(config.compress_report());
        assert_eq!(config.archive_name(), "matchday_report.zip");
        assert!(config.validate().is_ok());

        assert_eq!(
            config.events[1],
            MatchEvent::UpdateScore {
                board: "A".to_string(),
                home_score: 0,
                away_score: 5,
            }
        );
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("SCOREBOARD_TEST_ENDPOINT", "https://feeds.example.com/cup");
        let fixture = r#"
[matchday]
name = "env demo"

[feed]
type = "http"
endpoint = "${SCOREBOARD_TEST_ENDPOINT}"

[report]
output_path = "./output"
output_formats = ["txt"]
"#;

        let config = MatchdayConfig::from_toml_str(fixture).unwrap();

        assert_eq!(
            config.feed.endpoint.as_deref(),
            Some("https://feeds.example.com/cup")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_environment_variables_are_left_in_place() {
        let fixture = "[matchday]\nname = \"${NOPE_DOES_NOT_EXIST}\"\n\n[feed]\ntype = \"inline\"\n\n[report]\noutput_path = \"./output\"\noutput_formats = [\"txt\"]\n";

        let config = MatchdayConfig::from_toml_str(fixture).unwrap();

        assert_eq!(config.matchday.name, "${NOPE_DOES_NOT_EXIST}");
    }

    #[test]
    fn inline_feed_requires_events() {
        let fixture = r#"
[matchday]
name = "no events"

[feed]
type = "inline"

[report]
output_path = "./output"
output_formats = ["txt"]
"#;

        let config = MatchdayConfig::from_toml_str(fixture).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ScoreboardError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn rejects_unknown_feed_type() {
        let mut config = MatchdayConfig::from_toml_str(INLINE_FIXTURE).unwrap();
        config.feed.r#type = "carrier-pigeon".to_string();

        assert!(matches!(
            config.validate(),
            Err(ScoreboardError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn rejects_unknown_replay_mode() {
        let mut config = MatchdayConfig::from_toml_str(INLINE_FIXTURE).unwrap();
        config.replay = Some(ReplayConfig {
            on_event_error: Some("retry".to_string()),
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn compression_section_overrides_archive_name() {
        let mut config = MatchdayConfig::from_toml_str(INLINE_FIXTURE).unwrap();
        config.report.compression = Some(CompressionConfig {
            enabled: true,
            filename: Some("cup_day_one.zip".to_string()),
        });

        assert_eq!(config.archive_name(), "cup_day_one.zip");

        config.report.compression = Some(CompressionConfig {
            enabled: false,
            filename: None,
        });
        assert!(!config.compress_report());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = MatchdayConfig::from_toml_str("[matchday\nname = nope");

        assert!(matches!(
            result,
            Err(ScoreboardError::ConfigValidationError { .. })
        ));
    }
}
