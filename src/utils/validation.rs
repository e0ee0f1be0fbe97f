use crate::utils::error::{Result, ScoreboardError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Letters (any script), digits, spaces and common name punctuation.
fn team_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}\p{N} .'\-]+$").unwrap())
}

pub fn validate_team_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ScoreboardError::InvalidTeamName {
            name: name.to_string(),
            reason: "name must not be blank".to_string(),
        });
    }

    if !team_name_pattern().is_match(name) {
        return Err(ScoreboardError::InvalidTeamName {
            name: name.to_string(),
            reason: "name contains unsupported characters".to_string(),
        });
    }

    Ok(())
}

/// Converts an externally supplied score into the domain representation.
pub fn validate_score_value(field_name: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ScoreboardError::InvalidScore { value });
    }

    u32::try_from(value).map_err(|_| ScoreboardError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "score is out of range".to_string(),
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScoreboardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(ScoreboardError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let valid_formats = ["txt", "csv", "json"];
    for format in formats {
        if !valid_formats.contains(&format.as_str()) {
            return Err(ScoreboardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
