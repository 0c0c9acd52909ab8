use std::{sync::Arc, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use artfolio_backend::{
    background_task::start_notification_dispatcher,
    db::{document_store::DocumentStore, memory::InMemoryDocumentStore, postgres::PgDocumentStore},
    email::{
        outbound::Notifier,
        provider::{EmailProvider, LogOnlyProvider},
        resend::ResendProvider,
    },
    graceful_shutdown::shutdown_signal,
    middlewares::cors::cors,
    repositories::document_repo::DocumentRepo,
    routes::{configure_routes, json_error::config_extractors},
    settings::AppConfig,
    use_cases::seed::Seeder,
    AppState,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn email_provider(config: &AppConfig) -> Arc<dyn EmailProvider> {
    let Some(api_key) = config.resend_api_key.as_deref() else {
        tracing::warn!("APP_RESEND_API_KEY not set; outbound email will only be logged");
        return Arc::new(LogOnlyProvider);
    };

    match ResendProvider::new(api_key, &config.email_from, Duration::from_secs(config.email_timeout_secs)) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::error!("Could not build email client, falling back to log-only delivery: {}", e);
            Arc::new(LogOnlyProvider)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.is_production());
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn DocumentStore> = if config.uses_memory_store() {
        tracing::warn!("Using the in-memory document store; data is lost on restart");
        Arc::new(InMemoryDocumentStore::new())
    } else {
        Arc::new(PgDocumentStore::new(config.database_url.clone()))
    };

    // Requests reconnect lazily, so a database that is down at boot is not fatal
    match store.connect().await {
        Ok(()) if config.seed_on_startup => {
            if let Err(e) = Seeder::new(DocumentRepo::new(store.clone())).seed_if_empty().await {
                tracing::error!("Seeding sample data failed: {}", e);
            }
        }
        Ok(()) => {}
        Err(e) => tracing::error!("Document store unavailable at startup: {}", e),
    }

    let (notifier, notifications) = Notifier::channel(config.notification_queue_capacity, config.admin_email.clone());
    let dispatcher = tokio::spawn(start_notification_dispatcher(notifications, email_provider(&config)));

    let app_state = web::Data::new(AppState::new(store.clone(), notifier));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        let max_upload_bytes = server_config.max_upload_bytes;

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors(&server_config))
            .wrap(TracingLogger::default())
            .configure(|cfg| config_extractors(cfg, max_upload_bytes))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    let result = tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    };

    // Dropping the server drops the last Notifier, which lets the dispatcher drain and exit
    if tokio::time::timeout(Duration::from_secs(config.email_timeout_secs), dispatcher).await.is_err() {
        tracing::warn!("Notification dispatcher did not finish draining before shutdown");
    }
    store.close().await;

    result
}
