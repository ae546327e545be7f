use maud::Markup;
use poem::http::StatusCode;
use poem::web::{Html, Json};
use poem::{IntoResponse, Response};
use serde::Serialize;

use crate::store::StoreError;

/// JSON body of the API errors.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn into_response(self, status: StatusCode) -> Response {
        Json(self).with_status(status).into_response()
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        ErrorBody {
            error: self.to_string(),
        }
        .into_response(status)
    }
}

pub fn html(status: StatusCode, markup: Markup) -> Response {
    Html(markup.into_string()).with_status(status).into_response()
}
