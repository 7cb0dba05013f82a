//! Query parameter extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use portfolio_core::error::AppError;
use portfolio_core::types::Language;

use crate::dto::request::{ConfirmParams, LangParams};
use crate::error::ApiError;
use crate::state::AppState;

/// Requested response language, validated against the supported set.
///
/// Falls back to the configured default language when `?lang` is absent.
#[derive(Debug, Clone)]
pub struct Lang(pub String);

impl FromRequestParts<AppState> for Lang {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LangParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        match params.lang {
            Some(raw) => {
                let lang: Language = raw.parse()?;
                Ok(Self(lang.as_str().to_string()))
            }
            None => Ok(Self(state.resolver.default_language().to_string())),
        }
    }
}

/// `?confirm=true` flag required by bulk deletes.
#[derive(Debug, Clone, Copy)]
pub struct Confirm(pub bool);

impl<S> FromRequestParts<S> for Confirm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ConfirmParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(params.confirmed()))
    }
}
