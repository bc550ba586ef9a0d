//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::fmt::Write;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use webgui_northbound::Transaction;
use webgui_utils::html;

use crate::web::{AppState, render_blocking};

pub const PAGE: &str = "/diag_confbak.php";

// ===== global functions =====

pub async fn get_handler(State(state): State<Arc<AppState>>) -> Response {
    render_blocking(move || {
        let transactions = state.lock_db().transactions();
        render(&transactions)
    })
    .await
}

// Lists the recorded configuration changes, newest first.
fn render(transactions: &[Transaction]) -> String {
    let mut out = html::head(&["Diagnostics", "Configuration History"]);
    out.push_str(
        "<table class=\"table table-striped table-hover\">\n<thead>\n<tr>\
         <th>Version</th><th>Date</th><th>Description</th></tr>\n</thead>\n\
         <tbody>\n",
    );
    for transaction in transactions {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            transaction.id,
            transaction.date.format("%Y-%m-%d %H:%M:%S"),
            html::escape(&transaction.comment)
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out.push_str(&html::foot());
    out
}
