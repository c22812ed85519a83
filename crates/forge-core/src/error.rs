use thiserror::Error;

/// Boxed error kept as the source of a failed provider request.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Normalized errors returned by every provider client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The remote service answered 404.
    #[error("the requested resource was not found")]
    NotFound,

    /// A destructive call was attempted without opting in.
    #[error("cannot {operation}: destructive call was blocked, disallowed by client")]
    DestructiveCallDisallowed { operation: &'static str },

    /// The server returned an object missing required fields.
    #[error("invalid server data: {object} is missing {}", .missing.join(", "))]
    InvalidServerData {
        object: &'static str,
        missing: Vec<&'static str>,
    },

    /// Any other transport or remote failure.
    #[error("provider request failed: {source}")]
    Request {
        status: Option<u16>,
        #[source]
        source: BoxError,
    },

    /// Pagination stopped at an explicit page ceiling.
    #[error("pagination exceeded the configured limit of {limit} pages")]
    PageLimitExceeded { limit: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProviderError {
    #[inline]
    pub fn request(status: Option<u16>, source: impl Into<BoxError>) -> Self {
        Self::Request {
            status,
            source: source.into(),
        }
    }

    #[inline]
    pub fn invalid_server_data(object: &'static str, missing: Vec<&'static str>) -> Self {
        Self::InvalidServerData { object, missing }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[inline]
    pub fn is_destructive_call_disallowed(&self) -> bool {
        matches!(self, Self::DestructiveCallDisallowed { .. })
    }

    /// HTTP status of a failed request, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
