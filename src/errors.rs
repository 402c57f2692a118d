use std::{any::Any, backtrace::Backtrace, sync::Arc};

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not_found")]
    NotFound(String),
    #[error("conflict")]
    Conflict(String),
    #[error("unexpected")]
    Unexpected(String),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorResponse {
    NotFound { message: String },
    Conflict { message: String },
    Unexpected { message: String },
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        match error {
            Error::NotFound(message) => Self::NotFound {
                message: message.clone(),
            },
            Error::Conflict(message) => Self::Conflict {
                message: message.clone(),
            },
            Error::Unexpected(_) => Self::Unexpected {
                message: "Unexpected error".into(),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = Arc::new(self);

        let mut res = axum::Json(ErrorResponse::from(error.as_ref())).into_response();
        *res.status_mut() = status;
        res.extensions_mut().insert(error);
        res
    }
}

pub async fn on_error(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if let Some(error) = response.extensions().get::<Arc<Error>>().map(Arc::as_ref) {
        match error {
            Error::Unexpected(_) => tracing::error!("{:?}", error),
            error => tracing::debug!("{:?}", error),
        }
    }

    response
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(details) = err.downcast_ref::<String>() {
        details.clone()
    } else if let Some(details) = err.downcast_ref::<&str>() {
        details.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    let backtrace = Backtrace::force_capture();
    tracing::error!("panic: {details}\n{backtrace}");

    let body = ErrorResponse::from(&Error::Unexpected(details));
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
