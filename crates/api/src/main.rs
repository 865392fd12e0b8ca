use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gonogo_core::classify::TierPolicy;
use gonogo_core::detail::{self, DetailView};
use gonogo_core::domain::event::CalendarEvent;
use gonogo_core::ingest::client::HttpRecommendationSource;
use gonogo_core::ingest::RecommendationSource;
use gonogo_core::project;
use gonogo_core::today::{self, TodayStatus};
use gonogo_core::view::{self, CalendarModel};

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

    let source = match HttpRecommendationSource::from_settings(&settings) {
        Ok(source) => Some(Arc::new(source)),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "recommendation source not configured; starting API in degraded mode");
            None
        }
    };

    let state = AppState {
        source,
        policy: TierPolicy::from_env(),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/calendar", get(get_calendar))
        .route("/calendar/today", get(get_today))
        .route("/calendar/events/:id", get(get_event_detail))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    source: Option<Arc<HttpRecommendationSource>>,
    policy: TierPolicy,
}

/// Fetch the upstream window and project it. Any failure (including a
/// missing base URL) degrades to an empty collection: every day renders as
/// "no recommendation yet" instead of an error page.
async fn fetch_window(state: &AppState) -> Vec<CalendarEvent> {
    let Some(source) = &state.source else {
        tracing::error!("recommendation source not configured; serving an empty window");
        return Vec::new();
    };

    match source.fetch_past_month().await {
        Ok(raws) => project::project_all(&raws, &state.policy),
        Err(err) => {
            sentry::capture_error(&err);
            tracing::error!(error = %err, source = source.source_name(), "fetch failed; serving an empty window");
            Vec::new()
        }
    }
}

async fn get_calendar(State(state): State<AppState>) -> Json<CalendarModel> {
    let events = fetch_window(&state).await;
    Json(view::build_calendar_model(events, Utc::now()))
}

#[derive(Debug, Serialize)]
struct TodayResponse {
    status: &'static str,
    event: Option<CalendarEvent>,
    detail: Option<DetailView>,
}

async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let events = fetch_window(&state).await;

    let response = match today::today_status(&events, Utc::now()) {
        TodayStatus::Recommendation(event) => TodayResponse {
            status: "recommendation",
            detail: detail::has_detail(event).then(|| detail::build_detail_view(event)),
            event: Some(event.clone()),
        },
        TodayStatus::Weekend => TodayResponse {
            status: "weekend",
            event: None,
            detail: None,
        },
        TodayStatus::Pending => TodayResponse {
            status: "pending",
            event: None,
            detail: None,
        },
    };

    Json(response)
}

#[derive(Debug, Serialize)]
struct EventDetailResponse {
    event: CalendarEvent,
    has_detail: bool,
    detail: Option<DetailView>,
}

/// Selection-callback surface: the widget reports a clicked event id and
/// gets the drill-down payload back.
async fn get_event_detail(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Result<Json<EventDetailResponse>, StatusCode> {
    let events = fetch_window(&state).await;

    let event = events
        .into_iter()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let has_detail = detail::has_detail(&event);
    let detail = has_detail.then(|| detail::build_detail_view(&event));

    Ok(Json(EventDetailResponse {
        event,
        has_detail,
        detail,
    }))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
