//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod history;
mod relay;
mod switch;

use std::sync::{Arc, MutexGuard, PoisonError};

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use rand::Rng;
use subtle::ConstantTimeEq;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use webgui_northbound::{Database, Store};
use webgui_utils::html::{self, BoxClass, CSRF_FIELD};

use crate::config::Config;
use crate::platform::SnapshotSwitchDriver;

// State shared by all request handlers.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub db: Database,
    // Anti-forgery token embedded in every form.
    pub csrf_token: String,
    pub switch: SnapshotSwitchDriver,
}

// ===== impl AppState =====

impl AppState {
    pub fn new(config: Config, db: Database) -> AppState {
        let switch = SnapshotSwitchDriver::new(
            &config.switch.state_path,
            config.switch.port_names.clone(),
        );
        AppState {
            config,
            db,
            csrf_token: csrf_token(),
            switch,
        }
    }

    pub fn lock_db(&self) -> MutexGuard<'_, Store> {
        // Changes are made on a candidate copy, so the running configuration
        // is consistent even if a previous holder panicked.
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Checks the anti-forgery token of a submitted form. Tokens are compared
    // in constant time.
    pub fn csrf_valid(&self, fields: &[(String, String)]) -> bool {
        let token = self.csrf_token.as_bytes();
        fields.iter().any(|(key, value)| {
            key == CSRF_FIELD && bool::from(value.as_bytes().ct_eq(token))
        })
    }
}

// ===== global functions =====

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            relay::PAGE,
            get(relay::get_handler).post(relay::post_handler),
        )
        .route(
            switch::PAGE,
            get(switch::get_handler).post(switch::post_handler),
        )
        .route(history::PAGE, get(history::get_handler))
        .with_state(state)
}

// Serves web clients until a termination signal arrives.
pub async fn run(
    config: Config,
    db: Database,
    mut signal_rx: mpsc::Receiver<()>,
) -> std::io::Result<()> {
    let address = config.http.address.clone();
    let state = Arc::new(AppState::new(config, db));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "listening for web clients");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = signal_rx.recv().await;
        })
        .await
}

// Runs a page handler on the blocking pool, as page handlers do blocking
// file and process I/O while holding the configuration lock.
async fn render_blocking<F>(page: F) -> Response
where
    F: FnOnce() -> String + Send + 'static,
{
    match tokio::task::spawn_blocking(page).await {
        Ok(body) => Html(body).into_response(),
        Err(error) => {
            error!(%error, "page handler failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn forbidden(page: &str) -> Response {
    warn!(%page, "rejected form without a valid anti-forgery token");
    let mut body = html::head(&["Error"]);
    body.push_str(&html::info_box(
        "The form could not be verified. Reload the page and try again.",
        BoxClass::Danger,
        false,
    ));
    body.push_str(&html::foot());
    (StatusCode::FORBIDDEN, Html(body)).into_response()
}

fn csrf_token() -> String {
    rand::rng()
        .random::<[u8; 16]>()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
