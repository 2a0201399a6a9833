// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// HTTP endpoint exposing the latest snapshot to pull-based scrapers.
///
/// The handler only reads the store; scrapes never trigger a poll.
use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{error::Error, snapshot::SnapshotStore};

/// Path serving the exposition text.
pub const METRICS_PATH: &str = "/metrics";

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Builds the router serving [`METRICS_PATH`].
pub fn router(store: Arc<SnapshotStore,>,) -> Router
{
    Router::new().route(METRICS_PATH, get(metrics,),).with_state(store,)
}

/// Serves the metrics endpoint on `address` until the server fails.
///
/// # Errors
///
/// Returns [`Error::Bind`] when the listener cannot be bound and
/// [`Error::Serve`] when the server stops with an I/O error.
pub async fn serve(address: SocketAddr, store: Arc<SnapshotStore,>,) -> Result<(), Error,>
{
    let listener = TcpListener::bind(address,).await.map_err(|source| Error::Bind {
        address,
        source,
    },)?;
    info!(%address, path = METRICS_PATH, "metrics endpoint listening");

    axum::serve(listener, router(store,),).await.map_err(|source| Error::Serve {
        source,
    },)
}

async fn metrics(State(store,): State<Arc<SnapshotStore,>,>,) -> Response
{
    match store.render() {
        Ok(body,) => ([(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE,)], body,).into_response(),
        Err(e,) => {
            error!("metrics scrape failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(),).into_response()
        }
    }
}
