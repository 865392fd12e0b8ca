use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gonogo_core::classify::TierPolicy;
use gonogo_core::ingest::client::HttpRecommendationSource;
use gonogo_core::ingest::RecommendationSource;
use gonogo_core::project;
use gonogo_core::time::utc_day;
use gonogo_core::view;

mod render;

#[derive(Debug, Parser)]
#[command(name = "gonogo_cli")]
struct Args {
    /// Treat this UTC date (YYYY-MM-DD) as "now". Defaults to the current UTC day.
    #[arg(long)]
    today: Option<String>,

    /// Drill into this date's recommendation in addition to the today banner.
    #[arg(long)]
    date: Option<String>,

    /// Emit the calendar model as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = gonogo_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let now = match args.today.as_deref() {
        Some(s) => utc_day::end_of_utc_day(utc_day::parse_utc_day(s).context("invalid --today")?),
        None => chrono::Utc::now(),
    };

    let source = HttpRecommendationSource::from_settings(&settings)?;

    let raws = match source.fetch_past_month().await {
        Ok(raws) => raws,
        Err(err) => {
            sentry::capture_error(&err);
            tracing::error!(error = %err, source = source.source_name(), "fetch failed; rendering an empty window");
            Vec::new()
        }
    };

    let policy = TierPolicy::from_env();
    let events = project::project_all(&raws, &policy);
    let model = view::build_calendar_model(events, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    print!("{}", render::render_window(&model.events));
    println!("{}", render::render_today_banner(&model.events, now));

    if let Some(s) = args.date.as_deref() {
        let selected = utc_day::parse_utc_day(s).context("invalid --date")?;
        println!("{}", render::render_selected_day(&model.events, selected));
    }

    Ok(())
}

fn init_sentry(settings: &gonogo_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
