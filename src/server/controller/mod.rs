//! HTTP handlers.
//!
//! Handlers check access through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! validate request DTOs into params, call a service and assemble the returned domain
//! models into HAL-FORMS representations for the [`Caller`](crate::server::middleware::auth::Caller).

pub mod api;
pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;

#[cfg(test)]
mod test;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    hypermedia::{page::PageRequest, representation::HAL_FORMS_MEDIA_TYPE},
};

/// Upper bound applied to the requested page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// SQLite stores `LIMIT`/`OFFSET` as signed 64-bit integers.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Serializes a representation with the HAL-FORMS media type.
pub struct HalForms<T>(pub T);

impl<T: Serialize> IntoResponse for HalForms<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(HAL_FORMS_MEDIA_TYPE),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize representation: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Paging query of collection endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_size")]
    pub size: u64,
    /// Sort order as `field[,asc|desc]`
    pub sort: Option<String>,
}

fn default_size() -> u64 {
    PageRequest::DEFAULT_SIZE
}

impl PageParams {
    /// Converts the query into a page request.
    ///
    /// # Returns
    /// - `Ok(PageRequest)`: Size clamped to [`MAX_PAGE_SIZE`]
    /// - `Err(AppError::BadRequest)`: Size is zero, or the page starts beyond the largest
    ///   offset a database query accepts
    pub fn into_request(self) -> Result<PageRequest, AppError> {
        if self.size == 0 {
            return Err(AppError::BadRequest(
                "Page size must be greater than zero".to_string(),
            ));
        }

        let size = self.size.min(MAX_PAGE_SIZE);
        let offset_in_range = self
            .page
            .checked_mul(size)
            .is_some_and(|offset| offset <= MAX_OFFSET);
        if !offset_in_range {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range for page size {}",
                self.page, size
            )));
        }

        let request = PageRequest::new(self.page, size);
        Ok(match self.sort {
            Some(sort) if !sort.trim().is_empty() => request.with_sort(sort),
            _ => request,
        })
    }
}
