// HTTP shell over the conversion core. Handlers stay one mapping deep:
// extract the query parameter, call the core, render the outcome as JSON.

pub mod config;

use axum::{
    extract::Query,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::convert::convert_measurement;
pub use config::ServerConfig;

/// Landing page with a small form for exercising the API by hand.
const INDEX_PAGE: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    input: Option<String>,
}

/// Build the JSON body for a conversion request. Malformed input is
/// ordinary traffic: every outcome is served as 200 with either the
/// conversion payload or an `error` field.
pub fn convert_response(input: Option<&str>) -> Value {
    let input = match input {
        Some(raw) if !raw.is_empty() => raw,
        _ => return json!({ "error": "No input provided" }),
    };

    match convert_measurement(input) {
        Ok(conversion) => {
            serde_json::to_value(&conversion).unwrap_or_else(|_| json!({ "error": "Server error" }))
        }
        Err(e) => json!({ "error": e.to_string() }),
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn api_convert(Query(params): Query<ConvertParams>) -> Json<Value> {
    info!(input = ?params.input, "convert request");
    Json(convert_response(params.input.as_deref()))
}

/// Application router: the HTML test page and the conversion API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/convert", get(api_convert))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig) -> Result<(), std::io::Error> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, router()).await
}
