use crate::domain::model::{BoardEvent, BoardId, MatchSnapshot, Summary, SummaryEntry};
use crate::domain::ports::BoardObserver;
use std::cmp::Reverse;

/// Observer that tracks every match in progress across the boards it is
/// registered on.
///
/// `summary()` ranks matches by total score, descending; matches with the
/// same total are ordered by the most recently started first. Finished
/// matches drop out, and boards this observer was never registered on are
/// invisible to it.
#[derive(Debug, Default)]
pub struct LiveSummary {
    tracked: Vec<TrackedMatch>,
    // monotonic, so ordering survives removals
    starts_seen: u64,
}

#[derive(Debug)]
struct TrackedMatch {
    board: BoardId,
    started_seq: u64,
    snapshot: MatchSnapshot,
}

impl LiveSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked_matches(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut ranked: Vec<&TrackedMatch> = self.tracked.iter().collect();
        ranked.sort_by_key(|m| (Reverse(m.snapshot.total_score()), Reverse(m.started_seq)));

        Summary {
            entries: ranked
                .iter()
                .enumerate()
                .map(|(index, m)| SummaryEntry {
                    position: index + 1,
                    home_team: m.snapshot.home_team.clone(),
                    home_score: m.snapshot.home_score,
                    away_team: m.snapshot.away_team.clone(),
                    away_score: m.snapshot.away_score,
                })
                .collect(),
        }
    }
}

impl BoardObserver for LiveSummary {
    fn on_board_event(&mut self, board: BoardId, event: &BoardEvent) {
        match event {
            BoardEvent::MatchStarted(snapshot) => {
                self.starts_seen += 1;
                self.tracked.push(TrackedMatch {
                    board,
                    started_seq: self.starts_seen,
                    snapshot: snapshot.clone(),
                });
            }
            BoardEvent::ScoreUpdated(snapshot) => {
                if let Some(tracked) = self.tracked.iter_mut().find(|m| m.board == board) {
                    tracked.snapshot = snapshot.clone();
                }
            }
            BoardEvent::MatchFinished => {
                self.tracked.retain(|m| m.board != board);
            }
        }
    }
}
