//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Response;
use webgui_switch::{SwitchRequest, handle, render};

use crate::web::{AppState, forbidden, render_blocking};

pub const PAGE: &str = render::PAGE;

// ===== global functions =====

pub async fn get_handler(State(state): State<Arc<AppState>>) -> Response {
    run(state, SwitchRequest::default()).await
}

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if !state.csrf_valid(&fields) {
        return forbidden(PAGE);
    }
    run(state, SwitchRequest::from_form(&fields)).await
}

async fn run(state: Arc<AppState>, request: SwitchRequest) -> Response {
    render_blocking(move || {
        let mut store = state.lock_db();
        let page = handle(&mut *store, &state.switch, request);
        render::render(&page, &state.csrf_token)
    })
    .await
}
