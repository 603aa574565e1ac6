use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Stats API 👋
Version: {version}

Available endpoints:
  - GET /stats                - All stats, one name=value line per stat
  - GET /stats?stats=a,b      - Only the named stats, in request order
  - GET /stats?format=json    - Pretty-printed JSON array
  - GET /stats?format=monitor - Push-monitoring datapoint array
  - GET /health               - Light health check

This endpoint is read-only; counters are maintained elsewhere in the process.
"#
    )
}
