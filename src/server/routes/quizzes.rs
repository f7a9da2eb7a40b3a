use axum::{extract::State, routing::post, Router};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{app::AppState, extract::Json},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

// `id` must be present; null, "" and 0 all mean every category
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

impl QuizCategory {
    fn filter(&self) -> Option<i64> {
        self.id.filter(|&id| id != 0)
    }
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

/// Uniform choice over `candidates`, `None` when there are none.
fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuizRequest>,
) -> ApiResponse<Json<QuizQuestion>> {
    let category = request.quiz_category.filter();
    let candidates =
        questions::get_quiz_candidates(&pool, category, &request.previous_questions).await?;
    let question = pick_question(&candidates, &mut rand::thread_rng());

    match &question {
        Some(q) => {
            let label = q.category.to_string();
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
        }
        None => tracing::debug!(?category, "Quiz has no questions left"),
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_quiz_question))
}
