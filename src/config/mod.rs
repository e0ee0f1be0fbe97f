pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, ScoreboardError};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-scoreboard")]
#[command(about = "A small live-football scoreboard tool")]
pub struct CliConfig {
    #[arg(long, help = "Fetch match events from this JSON endpoint")]
    pub feed_endpoint: Option<String>,

    #[arg(long, help = "Replay a matchday fixture from a TOML file")]
    pub fixture: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "txt,csv,json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Skip invalid events instead of aborting the replay")]
    pub lenient: bool,

    #[arg(long, help = "Write plain report files instead of a zip archive")]
    pub no_archive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn lenient_replay(&self) -> bool {
        self.lenient
    }

    fn compress_report(&self) -> bool {
        !self.no_archive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.feed_endpoint, &self.fixture) {
            (None, None) => {
                return Err(ScoreboardError::MissingConfigError {
                    field: "feed_endpoint or fixture".to_string(),
                })
            }
            (Some(_), Some(_)) => {
                return Err(ScoreboardError::ConfigValidationError {
                    field: "feed_endpoint".to_string(),
                    message: "choose either a feed endpoint or a fixture file, not both"
                        .to_string(),
                })
            }
            (Some(endpoint), None) => validation::validate_url("feed_endpoint", endpoint)?,
            (None, Some(fixture)) => validation::validate_path("fixture", fixture)?,
        }

        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        Ok(())
    }
}
