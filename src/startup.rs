//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::FileAccessService;
use crate::config::Settings;
use crate::domain::services::access::StrategyRegistry;
use crate::domain::FileRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgRepositories;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub registry: Arc<StrategyRegistry>,
    pub file_access: Arc<FileAccessService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Assemble state from already constructed collaborators.
    pub fn new(
        db: PgPool,
        files: Arc<dyn FileRepository>,
        registry: StrategyRegistry,
        settings: Settings,
    ) -> Self {
        let registry = Arc::new(registry);
        let file_access = Arc::new(FileAccessService::new(files, Arc::clone(&registry)));
        Self {
            db,
            registry,
            file_access,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with every middleware layer applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to connect to PostgreSQL")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let repos = PgRepositories::new(db.clone());
        let registry = StrategyRegistry::standard(repos.access_repositories());
        tracing::info!(?registry, "File access strategies registered");

        let addr: SocketAddr = settings.server.socket_addr()?;
        let state = AppState::new(db, repos.files.clone(), registry, settings);
        let router = build_router(state);

        handlers::health::init_server_start();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
