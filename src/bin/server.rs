use std::{
    fs::OpenOptions,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketledger::{
    AppState, SqliteFallbackQueue, SqliteTransactionStore, build_router, graceful_shutdown,
    initialize_db, reconcile_fallback_queue,
};

/// The web server for pocketledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let connection = Connection::open(&args.db_path).expect("Could not open database");
    initialize_db(&connection).expect("Could not create database tables");
    let connection = Arc::new(Mutex::new(connection));

    let mut transaction_store = SqliteTransactionStore::new(connection.clone());
    let mut fallback_queue = SqliteFallbackQueue::new(connection.clone());

    // Entries recorded while the store was unreachable are forwarded before
    // the server starts taking requests.
    match reconcile_fallback_queue(&mut transaction_store, &mut fallback_queue) {
        Ok(0) => {}
        Ok(count) => tracing::info!("forwarded {count} queued transaction(s) to the store"),
        Err(error) => {
            tracing::warn!("could not drain the fallback queue, will retry next start: {error}")
        }
    }

    let state = AppState::new(transaction_store, fallback_queue);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(stdout_filter)
                .and_then(debug_log.with_filter(filter::LevelFilter::DEBUG)),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
