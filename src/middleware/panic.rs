use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::{AppError, INTERNAL_ERROR_MESSAGE};

/// Turns a handler panic into the standard 500 body. Panic details are only
/// exposed to clients when running in debug mode.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    pub expose_details: bool,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, panic: Box<dyn Any + Send + 'static>) -> Response {
        let details = if let Some(message) = panic.downcast_ref::<String>() {
            message.as_str()
        } else if let Some(message) = panic.downcast_ref::<&str>() {
            message
        } else {
            "unknown panic"
        };

        let message = if self.expose_details {
            format!("{INTERNAL_ERROR_MESSAGE}: {details}")
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        AppError::internal(message).into_response()
    }
}

pub fn catch_panic_layer(expose_details: bool) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder { expose_details })
}
