use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use tracing::error;

/// The one message every uncaught failure surfaces as, matching the global
/// error handler's flat taxonomy.
pub const GENERIC_ERROR: &str = "Something broke!";

/// Collapses any internal failure into a generic 500 after logging the cause.
pub fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    error!(error = %e, "unhandled internal error");
    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
}

/// JSON extractor whose rejection is the generic 500 rather than axum's
/// default 4xx. A malformed body is indistinguishable on the wire from any
/// other uncaught failure.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(internal(rejection)),
        }
    }
}
