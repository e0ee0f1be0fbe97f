use crate::domain::ports::ScoreBoard;
use crate::utils::error::{Result, ScoreboardError};
use crate::utils::validation;

/// Plain in-memory scoreboard for a single match.
///
/// Not observable on its own; `BroadcastScoreBoard` wraps it when
/// observers are needed. Single-owner by design.
#[derive(Debug, Clone, Default)]
pub struct SimpleScoreBoard {
    active: Option<ActiveMatch>,
}

#[derive(Debug, Clone)]
struct ActiveMatch {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
}

impl SimpleScoreBoard {
    pub fn new() -> Self {
        Self { active: None }
    }
}

impl ScoreBoard for SimpleScoreBoard {
    fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        if self.active.is_some() {
            return Err(ScoreboardError::MatchAlreadyStarted);
        }

        validation::validate_team_name(home_team)?;
        validation::validate_team_name(away_team)?;

        self.active = Some(ActiveMatch {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: 0,
            away_score: 0,
        });
        Ok(())
    }

    fn update_score(&mut self, home_score: u32, away_score: u32) -> Result<()> {
        match self.active.as_mut() {
            Some(current) => {
                current.home_score = home_score;
                current.away_score = away_score;
                Ok(())
            }
            None => Err(ScoreboardError::NoActiveMatch),
        }
    }

    fn finish_match(&mut self) -> Result<()> {
        if self.active.take().is_none() {
            return Err(ScoreboardError::NoActiveMatch);
        }
        Ok(())
    }

    fn home_team(&self) -> Option<&str> {
        self.active.as_ref().map(|m| m.home_team.as_str())
    }

    fn away_team(&self) -> Option<&str> {
        self.active.as_ref().map(|m| m.away_team.as_str())
    }

    fn home_score(&self) -> Option<u32> {
        self.active.as_ref().map(|m| m.home_score)
    }

    fn away_score(&self) -> Option<u32> {
        self.active.as_ref().map(|m| m.away_score)
    }
}
