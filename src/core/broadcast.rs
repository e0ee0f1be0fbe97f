use crate::core::board::SimpleScoreBoard;
use crate::domain::model::{BoardEvent, BoardId};
use crate::domain::ports::{ObservableScoreBoard, ScoreBoard, SharedObserver};
use crate::utils::error::Result;
use std::sync::Arc;

/// Scoreboard decorator that broadcasts lifecycle events to observers.
///
/// Observers receive events only for mutations that succeeded; a rejected
/// `start_match` or `update_score` notifies nobody. One observer can be
/// registered on many boards, which is how a live summary tracks a whole
/// matchday.
pub struct BroadcastScoreBoard {
    id: BoardId,
    inner: SimpleScoreBoard,
    observers: Vec<SharedObserver>,
}

impl BroadcastScoreBoard {
    pub fn new() -> Self {
        Self {
            id: BoardId::next(),
            inner: SimpleScoreBoard::new(),
            observers: Vec::new(),
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    fn notify(&self, event: &BoardEvent) {
        for observer in &self.observers {
            if let Ok(mut observer) = observer.lock() {
                observer.on_board_event(self.id, event);
            }
        }
    }
}

impl Default for BroadcastScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard for BroadcastScoreBoard {
    fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        self.inner.start_match(home_team, away_team)?;
        if let Some(snapshot) = self.inner.snapshot() {
            self.notify(&BoardEvent::MatchStarted(snapshot));
        }
        Ok(())
    }

    fn update_score(&mut self, home_score: u32, away_score: u32) -> Result<()> {
        self.inner.update_score(home_score, away_score)?;
        if let Some(snapshot) = self.inner.snapshot() {
            self.notify(&BoardEvent::ScoreUpdated(snapshot));
        }
        Ok(())
    }

    fn finish_match(&mut self) -> Result<()> {
        self.inner.finish_match()?;
        self.notify(&BoardEvent::MatchFinished);
        Ok(())
    }

    fn home_team(&self) -> Option<&str> {
        self.inner.home_team()
    }

    fn away_team(&self) -> Option<&str> {
        self.inner.away_team()
    }

    fn home_score(&self) -> Option<u32> {
        self.inner.home_score()
    }

    fn away_score(&self) -> Option<u32> {
        self.inner.away_score()
    }
}

impl ObservableScoreBoard for BroadcastScoreBoard {
    fn add_observer(&mut self, observer: SharedObserver) {
        // registering the same handle twice must not double-deliver
        if !self
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer))
        {
            self.observers.push(observer);
        }
    }

    fn remove_observer(&mut self, observer: &SharedObserver) {
        self.observers
            .retain(|existing| !Arc::ptr_eq(existing, observer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::BoardObserver;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<(BoardId, BoardEvent)>,
    }

    impl BoardObserver for RecordingObserver {
        fn on_board_event(&mut self, board: BoardId, event: &BoardEvent) {
            self.events.push((board, event.clone()));
        }
    }

    fn recording_observer() -> Arc<Mutex<RecordingObserver>> {
        Arc::new(Mutex::new(RecordingObserver::default()))
    }

    #[test]
    fn notifies_observers_of_lifecycle_events() {
        let recorder = recording_observer();
        let mut board = BroadcastScoreBoard::new();
        let shared: SharedObserver = recorder.clone();
        board.add_observer(shared);

        board.start_match("Mexico", "Canada").unwrap();
        board.update_score(0, 5).unwrap();
        board.finish_match().unwrap();

        let recorded = recorder.lock().unwrap();
        let events = &recorded.events;
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|(id, _)| *id == board.id()));

        match &events[0].1 {
            BoardEvent::MatchStarted(snapshot) => {
                assert_eq!(snapshot.home_team, "Mexico");
                assert_eq!(snapshot.total_score(), 0);
            }
            other => panic!("expected MatchStarted, got {:?}", other),
        }
        match &events[1].1 {
            BoardEvent::ScoreUpdated(snapshot) => assert_eq!(snapshot.away_score, 5),
            other => panic!("expected ScoreUpdated, got {:?}", other),
        }
        assert_eq!(events[2].1, BoardEvent::MatchFinished);
    }

    #[test]
    fn removed_observer_stops_receiving_events() {
        let recorder = recording_observer();
        let mut board = BroadcastScoreBoard::new();
        let shared: SharedObserver = recorder.clone();
        board.add_observer(shared.clone());
        board.remove_observer(&shared);

        board.start_match("Spain", "Brazil").unwrap();

        assert!(recorder.lock().unwrap().events.is_empty());
    }

    #[test]
    fn failed_operations_do_not_notify() {
        let recorder = recording_observer();
        let mut board = BroadcastScoreBoard::new();
        let shared: SharedObserver = recorder.clone();
        board.add_observer(shared);

        assert!(board.start_match("", "Canada").is_err());
        assert!(board.update_score(1, 1).is_err());
        assert!(board.finish_match().is_err());

        assert!(recorder.lock().unwrap().events.is_empty());
    }

    #[test]
    fn same_observer_handle_is_registered_once() {
        let recorder = recording_observer();
        let mut board = BroadcastScoreBoard::new();
        let shared: SharedObserver = recorder.clone();
        board.add_observer(shared.clone());
        board.add_observer(shared);

        board.start_match("Germany", "France").unwrap();

        assert_eq!(recorder.lock().unwrap().events.len(), 1);
    }

    #[test]
    fn boards_have_distinct_ids() {
        let board_a = BroadcastScoreBoard::new();
        let board_b = BroadcastScoreBoard::new();

        assert_ne!(board_a.id(), board_b.id());
    }

    #[test]
    fn delegates_accessors_to_inner_board() {
        let mut board = BroadcastScoreBoard::new();
        board.start_match("Uruguay", "Italy").unwrap();
        board.update_score(6, 6).unwrap();

        assert_eq!(board.home_team(), Some("Uruguay"));
        assert_eq!(board.away_team(), Some("Italy"));
        assert_eq!(board.home_score(), Some(6));
        assert_eq!(board.away_score(), Some(6));
    }
}
