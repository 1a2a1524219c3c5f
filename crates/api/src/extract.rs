//! Request body extraction accepting either JSON or URL-encoded forms.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Body extractor that decodes `T` from `application/json` or
/// `application/x-www-form-urlencoded`, chosen by the `Content-Type` header.
///
/// ```ignore
/// async fn my_handler(JsonOrForm(input): JsonOrForm<CityLookup>) -> AppResult<Json<()>> {
///     tracing::info!(?input, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

/// Body encodings understood by [`JsonOrForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
}

impl BodyKind {
    /// Detect the body encoding from the `Content-Type` header, ignoring
    /// parameters such as `charset`.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json"
            || (essence.starts_with("application/") && essence.ends_with("+json"))
        {
            Some(BodyKind::Json)
        } else if essence == "application/x-www-form-urlencoded" {
            Some(BodyKind::Form)
        } else {
            None
        }
    }
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::from_headers(req.headers()) {
            Some(BodyKind::Json) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
            Some(BodyKind::Form) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
            None => Err(AppError::UnsupportedMediaType(
                "Expected `application/json` or `application/x-www-form-urlencoded`".into(),
            )),
        }
    }
}
