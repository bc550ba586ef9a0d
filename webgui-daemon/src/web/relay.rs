//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Response;
use webgui_northbound::ConfigRepository;
use webgui_relay::{RelayRequest, handle_request, render};

use crate::platform::{CommandServiceControl, ConfigInterfaces};
use crate::web::{AppState, forbidden, render_blocking};

pub const PAGE: &str = render::PAGE;

// ===== global functions =====

pub async fn get_handler(State(state): State<Arc<AppState>>) -> Response {
    run(state, RelayRequest::Get).await
}

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if !state.csrf_valid(&fields) {
        return forbidden(PAGE);
    }
    run(state, RelayRequest::Post(fields)).await
}

async fn run(state: Arc<AppState>, request: RelayRequest) -> Response {
    render_blocking(move || {
        let mut store = state.lock_db();
        let inventory = ConfigInterfaces::load(
            store.running(),
            &state.config.interfaces.pseudo_prefixes,
        );
        let mut service =
            CommandServiceControl::new(&state.config.relay.reconfigure_command);

        let view =
            handle_request(&mut *store, &inventory, &mut service, request);
        render::render(&view, &state.csrf_token)
    })
    .await
}
