// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No bearer token was available. Requests are never sent anonymously.
    #[error("Authentication required")]
    AuthenticationRequired,
    /// No response was received at all.
    #[error("Network error: {msg}")]
    Network { msg: String },
    /// HTTP 429.
    #[error("Too many requests")]
    TooManyRequests,
    /// The server reported a failure, either via a non-2xx status or a
    /// `success: false` envelope. `message` carries the server-supplied
    /// text when present, otherwise `HTTP <status>`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error("Request error: {msg}")]
    Generic { msg: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::ParseError(value.into())
    }
}

impl RequestError {
    pub fn is_too_many_requests_err(&self) -> bool {
        matches!(self, RequestError::TooManyRequests)
    }

    pub fn is_authentication_err(&self) -> bool {
        matches!(self, RequestError::AuthenticationRequired)
    }
}
