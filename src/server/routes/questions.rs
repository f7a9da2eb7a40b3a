use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{Json, Path, Query},
        pagination::{paginate, PageQuery},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::ApiResponse;

/// The listing always reports this category as current, whatever is shown.
const LISTING_CATEGORY_ID: i64 = 1;

// the add form posts category and difficulty as select values, i.e. strings
#[derive(Deserialize)]
struct CreateQuestion {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    question: Question,
}

#[derive(Serialize)]
struct DeletedQuestion {
    success: bool,
    deleted_question: Question,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let categories = categories::get_category_map(&pool).await?;
    let current_category = categories
        .get(&LISTING_CATEGORY_ID)
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Category {LISTING_CATEGORY_ID} is missing, cannot list questions");
            ApiError::Unprocessable
        })?;

    let questions = questions::get_all_questions(&pool).await?;
    let total_questions = questions.len();

    Ok(Json(QuestionsPage {
        success: true,
        questions: paginate(questions, query.page()),
        total_questions,
        current_category,
        categories,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(new_question): Json<CreateQuestion>,
) -> ApiResponse<Json<CreatedQuestion>> {
    let id = questions::create_question(
        &pool,
        &NewQuestion {
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        },
    )
    .await?;
    QUESTIONS_CREATED.inc();
    tracing::info!(question_id = id, "Question created");

    let question = questions::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::Unprocessable)?;
    Ok(Json(CreatedQuestion {
        success: true,
        question,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<DeletedQuestion>> {
    let question = questions::delete_question(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    QUESTIONS_DELETED.inc();
    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(DeletedQuestion {
        success: true,
        deleted_question: question,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchRequest>,
) -> ApiResponse<Json<SearchResults>> {
    let term = body.search_term.unwrap_or_default();
    let questions = questions::search_questions(&pool, &term).await?;
    Ok(Json(SearchResults {
        success: true,
        questions,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}
