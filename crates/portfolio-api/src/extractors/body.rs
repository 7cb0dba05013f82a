//! Body extractors that reject with the standard envelope.

use axum::Form;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use portfolio_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::error::ApiError;

/// JSON body whose decoding failures become 400 validation errors.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Login credentials from either a urlencoded form or a JSON body.
#[derive(Debug, Clone)]
pub struct LoginBody(pub LoginRequest);

impl<S> FromRequest<S> for LoginBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));

        if is_json {
            let JsonBody(login) = JsonBody::<LoginRequest>::from_request(req, state).await?;
            return Ok(Self(login));
        }

        let Form(login) = Form::<LoginRequest>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(login))
    }
}
