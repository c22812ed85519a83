use forge_core::ProviderError;
use forge_core::error::BoxError;

use crate::api::{ApiError, ApiResult, Response};

/// Maps a failed call to a normalized provider error.
///
/// A 404 always becomes [`ProviderError::NotFound`], whatever the error text.
/// Everything else, including failures that never produced a response, is
/// wrapped as [`ProviderError::Request`] with the original error as source.
pub fn translate(response: Option<&Response>, err: impl Into<BoxError>) -> ProviderError {
    match response {
        Some(response) if response.status == 404 => ProviderError::NotFound,
        Some(response) => ProviderError::request(Some(response.status), err),
        None => ProviderError::request(None, err),
    }
}

/// Passes successful results through and translates failures.
pub fn handle_http_error<T>(result: ApiResult<T>) -> forge_core::Result<(T, Response)> {
    result.map_err(ProviderError::from)
}

impl From<ApiError> for ProviderError {
    fn from(err: ApiError) -> Self {
        let ApiError { response, error } = err;
        translate(response.as_ref(), error)
    }
}
