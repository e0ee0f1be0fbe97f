use crate::domain::model::MatchEvent;
use crate::domain::ports::EventFeed;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Fetches match events from a remote JSON endpoint.
pub struct HttpEventFeed {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct EventDocument {
    events: Vec<MatchEvent>,
}

impl HttpEventFeed {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EventFeed for HttpEventFeed {
    async fn fetch_events(&self) -> Result<Vec<MatchEvent>> {
        tracing::debug!("Fetching match events from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Feed response status: {}", response.status());

        let mut events = Vec::new();
        if response.status().is_success() {
            let payload: serde_json::Value = response.json().await?;

            // 支援裸陣列與 {"events": [...]} 兩種格式
            events = match payload {
                serde_json::Value::Array(_) => serde_json::from_value(payload)?,
                wrapped => serde_json::from_value::<EventDocument>(wrapped)?.events,
            };
        }

        // 如果沒有事件數據，改用示範比賽日
        if events.is_empty() {
            tracing::warn!("No events from feed, using the sample matchday");
            events = sample_events();
        }

        Ok(events)
    }
}

/// Serves events taken from a fixture file.
pub struct InlineEventFeed {
    events: Vec<MatchEvent>,
}

impl InlineEventFeed {
    pub fn new(events: Vec<MatchEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventFeed for InlineEventFeed {
    async fn fetch_events(&self) -> Result<Vec<MatchEvent>> {
        Ok(self.events.clone())
    }
}

/// Built-in demonstration matchday. Start order matters: matches with
/// equal totals rank by the most recently started first.
pub fn sample_events() -> Vec<MatchEvent> {
    let fixtures = [
        ("A", "Mexico", "Canada", 0, 5),
        ("B", "Spain", "Brazil", 10, 2),
        ("C", "Germany", "France", 2, 2),
        ("D", "Uruguay", "Italy", 6, 6),
        ("E", "Argentina", "Australia", 3, 1),
    ];

    let mut events = Vec::with_capacity(fixtures.len() * 2);
    for (board, home_team, away_team, _, _) in &fixtures {
        events.push(MatchEvent::StartMatch {
            board: (*board).to_string(),
            home_team: (*home_team).to_string(),
            away_team: (*away_team).to_string(),
        });
    }
    for (board, _, _, home_score, away_score) in &fixtures {
        events.push(MatchEvent::UpdateScore {
            board: (*board).to_string(),
            home_score: *home_score,
            away_score: *away_score,
        });
    }

    events
}
