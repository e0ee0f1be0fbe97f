use anyhow::Context;
use clap::Parser;
use small_scoreboard::core::feed::InlineEventFeed;
use small_scoreboard::domain::ports::{ConfigProvider, EventFeed, Storage};
use small_scoreboard::utils::error::ErrorSeverity;
use small_scoreboard::utils::{logger, validation::Validate};
use small_scoreboard::{
    CliConfig, HttpEventFeed, LocalStorage, MatchdayConfig, MatchdayEngine, ScoreboardError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-scoreboard CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let result = if let Some(fixture) = &config.fixture {
        // 以 TOML 比賽日腳本驅動
        tracing::info!("Loading matchday fixture: {}", fixture);
        let matchday = MatchdayConfig::from_file(fixture)
            .with_context(|| format!("failed to load fixture: {}", fixture))?;

        if let Err(e) = matchday.validate() {
            tracing::error!("❌ Fixture validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }

        let monitor_enabled = monitor_enabled || matchday.monitoring_enabled();
        let storage = LocalStorage::new(matchday.output_path());

        if matchday.is_http_feed() {
            // validate() 已確保 endpoint 存在
            let endpoint = matchday.feed.endpoint.clone().unwrap_or_default();
            run_matchday(HttpEventFeed::new(endpoint), storage, matchday, monitor_enabled).await
        } else {
            let feed = InlineEventFeed::new(matchday.events.clone());
            run_matchday(feed, storage, matchday, monitor_enabled).await
        }
    } else if let Some(endpoint) = config.feed_endpoint.clone() {
        let storage = LocalStorage::new(config.output_path.clone());
        run_matchday(HttpEventFeed::new(endpoint), storage, config, monitor_enabled).await
    } else {
        // validate() 已確保至少一種事件來源
        Err(ScoreboardError::MissingConfigError {
            field: "feed_endpoint or fixture".to_string(),
        })
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Matchday completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Matchday completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Matchday failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_matchday<F, S, C>(
    feed: F,
    storage: S,
    config: C,
    monitor_enabled: bool,
) -> small_scoreboard::Result<String>
where
    F: EventFeed,
    S: Storage,
    C: ConfigProvider,
{
    let engine = MatchdayEngine::new_with_monitoring(feed, storage, config, monitor_enabled);
    engine.run().await
}
