use std::any::Any;

use poem::middleware::CatchPanic;
use poem::{Endpoint, EndpointExt};

pub use self::error::{internal_server_error, ErrorMiddleware};

mod error;

/// Wraps the endpoint so that errors and panics never leave it unconverted.
pub fn catch_errors(ep: impl Endpoint + 'static) -> impl Endpoint {
    ep.with(ErrorMiddleware)
        .with(CatchPanic::new().with_handler(|_: Box<dyn Any + Send>| internal_server_error()))
}
