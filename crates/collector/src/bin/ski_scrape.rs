use clap::{Parser, Subcommand};
use collector::{CollectorConfig, FisCollector, fetch_page};
use records::dto::competition::{CompetitionFilter, DEFAULT_CATEGORY};
use records::models::{Discipline, Gender};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ski-scrape")]
#[command(about = "FIS alpine calendar and results scraper", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Season code, e.g. 2025 for the 2024/25 season.
    #[arg(long, env = "FIS_SEASON_CODE")]
    season: Option<String>,

    #[arg(long, env = "FIS_BASE_URL")]
    base_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the competitions of one calendar category.
    List {
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,

        #[arg(short, long)]
        gender: Option<Gender>,

        #[arg(short, long)]
        discipline: Option<Discipline>,

        #[arg(short, long)]
        location: Option<String>,
    },
    /// Races, results, delegates, broadcasters and documents of one event.
    Detail { event_id: String },
    /// Fetch a raw page with the retry policy and print it.
    Fetch { url: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ski_scrape={},collector={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CollectorConfig::from_env()?;
    if let Some(season) = cli.season {
        config.season_code = season;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.validate()?;

    match cli.command {
        Commands::List {
            category,
            gender,
            discipline,
            location,
        } => {
            let filter = CompetitionFilter {
                category: Some(category),
                gender: gender.map(|g| g.code().to_string()),
                discipline: discipline.map(|d| d.code().to_string()),
                location,
            };
            handle_list(config, filter).await?;
        }
        Commands::Detail { event_id } => {
            handle_detail(config, &event_id).await?;
        }
        Commands::Fetch { url } => {
            let body = fetch_page(&url, None, &config).await?;
            println!("{}", body);
        }
    }

    Ok(())
}

async fn handle_list(
    config: CollectorConfig,
    filter: CompetitionFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Listing {} competitions for season {}",
        filter.category(),
        config.season_code
    );

    let collector = FisCollector::new(config)?;
    let competitions = collector.list_competitions(filter.category()).await?;
    let total = competitions.len();
    let competitions = filter.apply(competitions);

    tracing::info!("{} of {} competitions match", competitions.len(), total);
    print_json(&competitions)
}

async fn handle_detail(
    config: CollectorConfig,
    event_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Fetching event {}", event_id);

    let collector = FisCollector::new(config)?;
    let detail = collector.competition_detail(event_id).await?;

    tracing::info!(
        "Event {}: {} races, {} delegates, {} documents",
        event_id,
        detail.races.len(),
        detail.technical_delegates.len(),
        detail.documents.len()
    );
    print_json(&detail)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
