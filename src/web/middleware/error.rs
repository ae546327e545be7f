use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::prelude::*;
use crate::web::responses::ErrorBody;
use crate::web::views::pages::render_index;

/// Converts the errors left unhandled by the routes.
///
/// Unknown paths get the home page with `404 Not Found`, other client errors keep
/// their status, everything else becomes the generic JSON `500` body.
pub struct ErrorMiddleware;

impl<E: Endpoint> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Ok(response) => Ok(response.into_response()),
            Err(error) if error.status() == StatusCode::NOT_FOUND => {
                info!(?method, ?uri, "{:#}", error);
                Ok(render_index(StatusCode::NOT_FOUND))
            }
            Err(error) if error.status().is_client_error() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(error.status().into_response())
            }
            Err(error) => {
                error!(?method, ?uri, "{:#}", error);
                Ok(internal_server_error())
            }
        }
    }
}

pub fn internal_server_error() -> Response {
    ErrorBody {
        error: "Internal Server Error".to_string(),
    }
    .into_response(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use poem::test::TestClient;
    use poem::{get, handler, Route};
    use serde_json::json;

    use super::*;
    use crate::web::middleware::catch_errors;
    use crate::web::test::read_json;

    #[handler]
    async fn fail() -> Result<&'static str> {
        Err(anyhow!("the questions file is locked").into())
    }

    #[handler]
    async fn panicking() -> &'static str {
        panic!("the handler has panicked")
    }

    #[handler]
    async fn teapot() -> Result<&'static str> {
        Err(poem::Error::from_status(StatusCode::IM_A_TEAPOT))
    }

    fn create_client() -> TestClient<impl Endpoint> {
        TestClient::new(catch_errors(
            Route::new()
                .at("/fail", get(fail))
                .at("/panic", get(panicking))
                .at("/teapot", get(teapot)),
        ))
    }

    #[tokio::test]
    async fn unhandled_errors_are_internal_server_errors() -> crate::Result {
        let client = create_client();
        for uri in ["/fail", "/panic"] {
            let response = client.get(uri).send().await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_content_type("application/json; charset=utf-8");
            assert_eq!(read_json(response).await?, json!({"error": "Internal Server Error"}));
        }
        Ok(())
    }

    #[tokio::test]
    async fn client_errors_keep_status() {
        create_client()
            .get("/teapot")
            .send()
            .await
            .assert_status(StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn not_found_renders_index() -> crate::Result {
        let response = create_client().get("/missing").send().await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body = response.0.into_body().into_string().await?;
        assert!(body.contains(r#"id="answeredCount""#), "{}", body);
        Ok(())
    }
}
