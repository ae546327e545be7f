use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use poem::endpoint::StaticFilesEndpoint;
use poem::listener::TcpListener;
use poem::middleware::Tracing;
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::store::QuestionStore;
use crate::web::middleware::catch_errors;

mod middleware;
mod partials;
mod responses;
mod views;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the web application.
pub async fn run(opts: WebOpts) -> Result {
    info!(host = ?opts.host, port = opts.port, path = ?opts.store.questions, "starting…");

    let mut store = QuestionStore::new(opts.store.questions);
    if opts.cache_questions {
        store = store.cached();
    }
    let static_dir = if opts.static_dir.is_dir() {
        Some(opts.static_dir.as_path())
    } else {
        warn!(static_dir = ?opts.static_dir, "static directory does not exist, not serving it");
        None
    };
    let app = create_app(store, static_dir);

    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_TIMEOUT))
        .await
        .context("the web server has failed")?;
    info!("the web server has stopped");
    Ok(())
}

pub fn create_app(store: QuestionStore, static_dir: Option<&Path>) -> impl Endpoint {
    let mut route = Route::new()
        .at("/", get(views::pages::get_index))
        .at("/questions", get(views::pages::get_questions))
        .at("/quiz", get(views::pages::get_quiz))
        .at("/explanation", get(views::pages::get_explanation))
        .at("/stats", get(views::pages::get_stats))
        .at("/api/questions", get(views::api::get_questions))
        .at("/api/questions/:id", get(views::api::get_question))
        .at("/api/health", get(views::api::get_health));
    if let Some(static_dir) = static_dir {
        route = route.nest("/static", StaticFilesEndpoint::new(static_dir));
    }
    catch_errors(route.data(store)).with(Tracing)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
        std::future::pending::<()>().await;
    }
    info!("shutting down…");
}
