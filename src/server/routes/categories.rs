use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{Json, Path, Query},
        pagination::{paginate, PageQuery},
    },
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = categories::get_category_map(&pool).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    let category = categories::get_category(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = questions::get_questions_for_category(&pool, category.id).await?;
    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(questions, query.page()),
        total_questions,
        current_category: category.kind,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
}
