//! Todo list service entry point.
//!
//! Wires the layers together explicitly: configuration, tracing, the SQLite
//! pool and schema, the event dispatcher with its logging subscribers, the
//! repository, the handler state and the axum router, then serves with
//! graceful shutdown.

mod config;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use todolist_api::{AppState, build_router};
use todolist_application::{TodoItemCompletedSubscriber, TodoListCompletedSubscriber};
use todolist_domain::DomainEventKind;
use todolist_infrastructure::{DomainEventDispatcher, SqliteTodoListRepository, init_schema};
use tokio::signal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(database_url = %config.database.url, "configuration loaded");

    let options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    info!("database ready");

    let mut dispatcher = DomainEventDispatcher::new();
    dispatcher.subscribe(
        DomainEventKind::TodoItemCompleted,
        Arc::new(TodoItemCompletedSubscriber),
    );
    dispatcher.subscribe(
        DomainEventKind::TodoListCompleted,
        Arc::new(TodoListCompletedSubscriber),
    );

    let repository = Arc::new(SqliteTodoListRepository::with_dispatcher(
        pool,
        Arc::new(dispatcher),
    ));
    let app = build_router(AppState::new(repository));

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "todo list service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
