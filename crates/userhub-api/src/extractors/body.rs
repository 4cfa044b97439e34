//! Request body validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::error::ErrorBody;

/// JSON body extractor that rejects absent or unparseable payloads with
/// 400 and the message `invalid request body`, before the handler runs.
///
/// No field-level validation happens here: empty strings and unset
/// optional fields pass through unchanged. The store is never invoked
/// for a rejected request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "Rejected request body");
                Err(ErrorBody::bad_request("invalid request body").into_response())
            }
        }
    }
}
