use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::server::{app::AppState, extract::Json};

use super::ApiResponse;

#[derive(Serialize)]
struct Health {
    success: bool,
    status: &'static str,
}

async fn health(State(pool): State<SqlitePool>) -> ApiResponse<Json<Health>> {
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(Json(Health {
        success: true,
        status: "ok",
    }))
}

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
