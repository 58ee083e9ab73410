//! Travel Assistant server binary.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_assistant::adapters::events::{transcript_channel, DEFAULT_TRANSCRIPT_CAPACITY};
use travel_assistant::adapters::http::middleware::AuthState;
use travel_assistant::adapters::http::{api_router, with_http_layers, AppServices};
use travel_assistant::adapters::postgres::run_migrations;
use travel_assistant::adapters::{
    HttpTravelGateway, JwtSessionValidator, PostgresAccommodationRepository,
    PostgresChatHistoryRepository, PostgresDestinationRepository, RasaNluClient,
};
use travel_assistant::application::{
    AccommodationCatalogHandler, CompareDestinationsHandler, DestinationCatalogHandler, Dispatcher,
    GetChatHistoryHandler, HandleActionHandler, SendChatMessageHandler, SlotStore,
};
use travel_assistant::config::{AppConfig, ServerConfig};
use travel_assistant::domain::conversation::IntentTable;
use travel_assistant::ports::{ChatHistoryRepository, DestinationRepository};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// How long buffered turn events may take to flush after shutdown.
const TRANSCRIPT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }
    let addr = config.server.socket_addr()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let destinations: Arc<dyn DestinationRepository> =
        Arc::new(PostgresDestinationRepository::new(pool.clone()));
    let accommodations = Arc::new(PostgresAccommodationRepository::new(pool.clone()));
    let history: Arc<dyn ChatHistoryRepository> =
        Arc::new(PostgresChatHistoryRepository::new(pool.clone()));

    let (publisher, recorder) = transcript_channel(DEFAULT_TRANSCRIPT_CAPACITY, Arc::clone(&history));
    let recorder_task = tokio::spawn(recorder.run());

    let gateway = Arc::new(HttpTravelGateway::from_config(&config.gateway)?);
    let dispatcher = Dispatcher::new(Arc::new(IntentTable::standard()), gateway);
    let nlu = Arc::new(RasaNluClient::new(reqwest::Client::new(), &config.nlu));

    let services = AppServices {
        destinations: Arc::new(DestinationCatalogHandler::new(Arc::clone(&destinations))),
        accommodations: Arc::new(AccommodationCatalogHandler::new(accommodations)),
        compare: Arc::new(CompareDestinationsHandler::new(destinations)),
        actions: Arc::new(HandleActionHandler::new(
            Arc::new(SlotStore::new()),
            dispatcher,
            Arc::new(publisher),
        )),
        chat: Arc::new(SendChatMessageHandler::new(nlu, Arc::clone(&history))),
        chat_history: Arc::new(GetChatHistoryHandler::new(history)),
    };
    let validator: AuthState = Arc::new(JwtSessionValidator::new(&config.auth));
    let app = with_http_layers(api_router(services, validator), &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Travel assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last publisher, so the recorder now drains and stops.
    match tokio::time::timeout(TRANSCRIPT_DRAIN_TIMEOUT, recorder_task).await {
        Ok(Ok(stored)) => tracing::info!(stored, "Transcript recorder stopped"),
        Ok(Err(e)) => tracing::error!(error = %e, "Transcript recorder task failed"),
        Err(_) => tracing::warn!("Transcript recorder did not drain in time"),
    }

    pool.close().await;
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Development logs are
/// human-readable; other environments emit JSON lines.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.json_logs() {
        registry.with(fmt::layer().json().with_current_span(false)).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
