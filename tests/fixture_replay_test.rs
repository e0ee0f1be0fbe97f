use small_scoreboard::core::feed::InlineEventFeed;
use small_scoreboard::domain::ports::ConfigProvider;
use small_scoreboard::utils::validation::Validate;
use small_scoreboard::{LocalStorage, MatchdayConfig, MatchdayEngine};
use std::io::Read;
use tempfile::TempDir;

fn fixture_toml(output_path: &str, compression: &str) -> String {
    format!(
        r#"
[matchday]
name = "cup day one"
description = "two boards, one finished early"

[feed]
type = "inline"

[replay]
on_event_error = "skip"

[report]
output_path = "{output_path}"
output_formats = ["txt", "json"]
{compression}

[[events]]
type = "start_match"
board = "A"
home_team = "Uruguay"
away_team = "Italy"

[[events]]
type = "start_match"
board = "B"
home_team = "Argentina"
away_team = "Australia"

[[events]]
type = "update_score"
board = "A"
home_score = 6
away_score = 6

[[events]]
type = "update_score"
board = "B"
home_score = 3
away_score = 1

[[events]]
type = "update_score"
board = "C"
home_score = 1
away_score = 1
"#
    )
}

#[tokio::test]
async fn replays_a_toml_fixture_into_an_archive() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let fixture_path = temp_dir.path().join("cup.toml");
    std::fs::write(&fixture_path, fixture_toml(&output_path, "")).unwrap();

    let matchday = MatchdayConfig::from_file(&fixture_path).unwrap();
    matchday.validate().unwrap();
    assert!(matchday.lenient_replay());

    let feed = InlineEventFeed::new(matchday.events.clone());
    let storage = LocalStorage::new(matchday.report.output_path.clone());
    let engine = MatchdayEngine::new(feed, storage, matchday);

    let report_path = engine.run().await.unwrap();
    assert!(report_path.ends_with("matchday_report.zip"));

    let archive_path = temp_dir.path().join("matchday_report.zip");
    let zip_data = std::fs::read(&archive_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    // txt 與 json，沒有 csv
    assert_eq!(archive.len(), 2);

    let mut text = String::new();
    archive
        .by_name("summary.txt")
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();

    // 未知看板 C 的事件已被跳過
    assert_eq!(
        text,
        "1. Uruguay 6 - Italy 6\n2. Argentina 3 - Australia 1"
    );
}

#[tokio::test]
async fn fixture_can_disable_compression() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let compression = "[report.compression]\nenabled = false";
    let fixture_path = temp_dir.path().join("cup_plain.toml");
    std::fs::write(&fixture_path, fixture_toml(&output_path, compression)).unwrap();

    let matchday = MatchdayConfig::from_file(&fixture_path).unwrap();
    matchday.validate().unwrap();

    let feed = InlineEventFeed::new(matchday.events.clone());
    let storage = LocalStorage::new(matchday.report.output_path.clone());
    let engine = MatchdayEngine::new(feed, storage, matchday);

    let report_path = engine.run().await.unwrap();
    assert_eq!(report_path, output_path);

    assert!(temp_dir.path().join("summary.txt").exists());
    assert!(temp_dir.path().join("summary.json").exists());
    assert!(!temp_dir.path().join("summary.csv").exists());
    assert!(!temp_dir.path().join("matchday_report.zip").exists());

    let text = std::fs::read_to_string(temp_dir.path().join("summary.txt")).unwrap();
    assert_eq!(
        text,
        "1. Uruguay 6 - Italy 6\n2. Argentina 3 - Australia 1"
    );
}
