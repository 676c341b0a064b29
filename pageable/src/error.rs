//! Error types and status mapping
//!
//! Every failure in this crate is synchronous and raised at the point of
//! construction or derivation. Errors produced by a data-access layer are
//! never wrapped here.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for page and sort construction
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated a construction invariant (blank sort property,
    /// missing page content, non-positive default page size, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested page number lies before the first page
    ///
    /// Kept apart from [`Error::InvalidArgument`] because it is driven by
    /// caller input and usually surfaces as a client-facing bad request.
    #[error("Invalid page request: {0}")]
    PageRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a page request error
    pub fn page_request(message: impl Into<String>) -> Self {
        Self::PageRequest(message.into())
    }

    /// Whether this error was caused by an out-of-range page request
    #[must_use]
    pub fn is_page_request(&self) -> bool {
        matches!(self, Self::PageRequest(_))
    }

    /// HTTP status a transport layer should answer with
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::page_request("page number must not be less than 1");
    /// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::PageRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::PageRequest(_) => "PAGE_REQUEST_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Build the serializable body for this error
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::with_code(self.status_code(), self.code(), self.to_string())
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}
