use poem::http::StatusCode;
use poem::web::{Data, Json, Path};
use poem::{handler, IntoResponse, Response};
use serde::Serialize;

use crate::prelude::*;
use crate::store::{QuestionStore, StoreError};

const CACHE_CONTROL: &str = "no-cache";

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

const HEALTH: Health = Health {
    status: "ok",
    message: "2級建築施工管理技士 過去問題集 API",
    version: env!("CARGO_PKG_VERSION"),
};

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_questions(store: Data<&QuestionStore>) -> Response {
    match store.list_all().await {
        Ok(questions) => {
            info!(n_questions = questions.len());
            Json(questions.as_slice())
                .with_header("Cache-Control", CACHE_CONTROL)
                .into_response()
        }
        Err(error) => log_store_error(error).into_response(),
    }
}

#[handler]
#[instrument(skip_all, level = "info", fields(id = %id))]
pub async fn get_question(store: Data<&QuestionStore>, Path(id): Path<String>) -> Response {
    match store.get_by_id(&id).await {
        Ok(question) => Json(question)
            .with_header("Cache-Control", CACHE_CONTROL)
            .into_response(),
        Err(error) => log_store_error(error).into_response(),
    }
}

#[handler]
pub async fn get_health() -> impl IntoResponse {
    Json(HEALTH).with_header("Cache-Control", CACHE_CONTROL)
}

fn log_store_error(error: StoreError) -> StoreError {
    if error.is_not_found() {
        info!("{:#}", error);
    } else {
        error!("{:#}", error);
    }
    error
}
