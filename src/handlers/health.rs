// GET /health handler

use std::convert::Infallible;

use tracing::debug;

pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    debug!("GET /health");
    Ok(warp::reply::json(&serde_json::json!({ "status": "ok" })))
}
