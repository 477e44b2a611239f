//! Print the stats, or the daily report, of a player as JSON.
//!
//! ```bash
//! RIOT_API_KEY=... game-report "Hide on bush#KR1" --matches 10 --report
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use game_report::riot::{Region, RiotClient};
use game_report::{AnalyzerRegistry, Config, DailyReport, GameType, LolService, RiotId};
use tracing::info;

#[derive(Parser)]
#[command(name = "game-report")]
#[command(about = "Performance reports from recent matches", long_about = None)]
#[command(version)]
struct Cli
{
    /// The player, as `GameName#TagLine`.
    #[arg(value_name = "RIOT_ID")]
    riot_id: RiotId,

    #[arg(long, default_value = "lol")]
    game: GameType,

    /// Number of recent matches to analyze, 1 to 10. Defaults to `MATCH_COUNT`.
    #[arg(long)]
    matches: Option<u8>,

    /// Platform region of the player. Defaults to `REGION`.
    #[arg(long)]
    region: Option<Region>,

    /// Print the daily report instead of the raw stats.
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()>
{
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("loading configuration")?;

    let registry = AnalyzerRegistry::with_defaults();
    registry.get(cli.game)?;

    let region = cli.region.unwrap_or(config.region);
    let client = RiotClient::new(config.api_key, region)?.with_retries(config.request_retries);
    let service = LolService::new(client);

    let count = cli.matches.unwrap_or(config.match_count);
    info!(riot_id = %cli.riot_id, game = %cli.game, count, "building report");

    let stats = service
        .player_stats(&cli.riot_id, count, &registry)
        .with_context(|| format!("collecting stats of {}", cli.riot_id))?;

    let json = if cli.report {
        DailyReport::new(stats, Utc::now()).to_json()
    }
    else {
        stats.to_json()
    };
    println!("{}", json::stringify_pretty(json, 2));

    Ok(())
}
