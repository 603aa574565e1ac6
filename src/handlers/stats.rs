use crate::app_state::AppState;
use crate::stats::{render_json, render_monitor, render_plain, resolve};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::time::SystemTime;

/// Requested output encoding, from the `format` query parameter.
///
/// Only `json` and `monitor` are recognized; anything else (or an absent
/// parameter) falls through to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Plain,
    Json,
    Monitor,
}

impl OutputFormat {
    fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("json") => OutputFormat::Json,
            Some("monitor") => OutputFormat::Monitor,
            _ => OutputFormat::Plain,
        }
    }
}

/// Query parameters of one `/stats` request.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    format: Option<String>,
    stats: Option<String>,
}

impl StatsQuery {
    /// Comma-separated stat names with empty entries dropped. An empty
    /// result means "all stats".
    fn filter(&self) -> Vec<String> {
        self.stats
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Handler for the `GET /stats` endpoint.
///
/// Resolves the requested stats against the registry and renders them in the
/// requested encoding. Non-GET methods never reach this handler; the method
/// router rejects them with 405 before any registry access happens.
#[tracing::instrument(skip(state, query))]
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Response, StatusCode> {
    let format = OutputFormat::from_param(query.format.as_deref());
    let filter = query.filter();

    let samples = resolve(state.registry().as_ref(), &filter);

    let response = match format {
        OutputFormat::Plain => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_plain(&samples),
        )
            .into_response(),
        OutputFormat::Json => {
            let body = render_json(&samples).map_err(|err| {
                tracing::error!("Failed to encode stats as JSON: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        OutputFormat::Monitor => {
            let body = render_monitor(&samples, state.identity(), SystemTime::now()).map_err(
                |err| {
                    tracing::error!("Failed to encode monitor datapoints: {err}");
                    StatusCode::INTERNAL_SERVER_ERROR
                },
            )?;
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
    };

    Ok(response)
}
