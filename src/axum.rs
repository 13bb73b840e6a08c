//! Functionality for using `queryoptions` with `axum`.
//!
//! Enable with the `axum` feature.

use axum_framework as axum;

use std::fmt;
use std::ops::{Deref, DerefMut};

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{Config, Error, Options};

/// Extract [`Options`] from the request's querystring.
///
/// The querystring is decoded with the [`Config`] found in the request
/// extensions, or the default one.
///
/// ## Example
///
/// ```rust
/// # extern crate axum_framework as axum;
/// use queryoptions::axum::OptionsQuery;
///
/// async fn list(OptionsQuery(options): OptionsQuery) -> String {
///     format!("next page: {}", options.next())
/// }
///
/// fn main() {
///     let app: axum::Router = axum::Router::new().route("/items", axum::routing::get(list));
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsQuery(pub Options);

impl OptionsQuery {
    /// Unwrap into the inner `Options` value
    pub fn into_inner(self) -> Options {
        self.0
    }
}

impl Deref for OptionsQuery {
    type Target = Options;

    fn deref(&self) -> &Options {
        &self.0
    }
}

impl DerefMut for OptionsQuery {
    fn deref_mut(&mut self) -> &mut Options {
        &mut self.0
    }
}

impl<S> FromRequestParts<S> for OptionsQuery
where
    S: Send + Sync,
{
    type Rejection = OptionsQueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts.extensions.get::<Config>().copied().unwrap_or_default();
        let query = parts.uri.query().unwrap_or_default();
        config
            .decode(query)
            .map(OptionsQuery)
            .map_err(OptionsQueryRejection::new)
    }
}

/// Rejection for [`OptionsQuery`], responding with `400 Bad Request` by
/// default.
#[derive(Debug)]
pub struct OptionsQueryRejection {
    error: Error,
    status: StatusCode,
}

impl OptionsQueryRejection {
    pub fn new(error: Error) -> Self {
        OptionsQueryRejection {
            error,
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Responds with `status` instead of `400 Bad Request`.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl fmt::Display for OptionsQueryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse query options. Error: {}", self.error)
    }
}

impl std::error::Error for OptionsQueryRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl IntoResponse for OptionsQueryRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.error, "rejecting request query options");
        (self.status, self.to_string()).into_response()
    }
}
