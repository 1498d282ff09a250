//! Failures of API calls.
use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An API call failed, either at the transport level or while decoding the
/// response.
///
/// Carries a human-readable message, a numeric code and the URL that was
/// requested. The query string (and with it the API key) is never part of
/// the URL.
#[derive(Debug, thiserror::Error)]
#[error("{message} (code {code}, {url})")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    code: i32,
    url: String,
    #[source]
    source: Option<BoxError>,
}

/// The classes of failures an API call can run into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The connection to the server could not be established.
    Connect,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// Any other transport failure, like a broken body or a bad request setup.
    Request,
    /// The transport succeeded, but the body was not valid JSON of the
    /// expected shape.
    Decode,
}

impl ErrorKind {
    /// Numeric code of this kind. Transport failures follow curl's numbering,
    /// decoding failures use `0` as the transport itself succeeded.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::Connect => 7,
            ErrorKind::Status(_) => 22,
            ErrorKind::Timeout => 28,
            ErrorKind::Request => 56,
            ErrorKind::Decode => 0,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Connect => f.write_str("connection failed"),
            ErrorKind::Timeout => f.write_str("operation timed out"),
            ErrorKind::Status(status) => write!(f, "HTTP status {}", status),
            ErrorKind::Request => f.write_str("request failed"),
            ErrorKind::Decode => f.write_str("malformed response body"),
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>, url: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            code: kind.code(),
            url: url.into(),
            source: None,
        }
    }

    pub(crate) fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn from_status(status: u16, url: impl Into<String>) -> Self {
        Error::new(
            ErrorKind::Status(status),
            format!("The requested URL returned error: {}", status),
            url,
        )
    }

    pub(crate) fn decode(err: serde_json::Error, url: impl Into<String>) -> Self {
        Error::new(ErrorKind::Decode, err.to_string(), url).with_source(err)
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, url: impl Into<String>) -> Self {
        // the URL reqwest would print carries the API key in its query
        let err = err.without_url();
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connect
        } else if let Some(status) = err.status() {
            ErrorKind::Status(status.as_u16())
        } else {
            ErrorKind::Request
        };
        Error::new(kind, err.to_string(), url).with_source(err)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// The URL the failed request was sent to, without its query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns `true` if the server could not be reached.
    pub fn is_connect(&self) -> bool {
        self.kind == ErrorKind::Connect
    }

    /// Returns `true` if the request has not completed in time.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// Returns `true` if the server has answered with a non-2xx status.
    pub fn is_status(&self) -> bool {
        self.status().is_some()
    }

    /// Returns `true` if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        self.kind == ErrorKind::Decode
    }

    /// The HTTP status of the response, if the failure was caused by one.
    pub fn status(&self) -> Option<u16> {
        if let ErrorKind::Status(status) = self.kind {
            Some(status)
        } else {
            None
        }
    }
}
