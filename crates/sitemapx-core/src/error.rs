//! Error types for the fetch-and-parse stage.
//!
//! Every failure before the URL list exists is a `SitemapError`; the pipeline
//! reports it once and skips the remaining stages. Clipboard failures have
//! their own type in [`crate::clipboard`] because they never abort a run.

use thiserror::Error;

/// Coarse classification used for logging and the CLI exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// DNS, connect, TLS, timeout, non-2xx status, undecodable body.
    Network,
    /// Body is not a well-formed XML document.
    Parse,
}

#[derive(Debug, Error)]
pub enum SitemapError {
    /// The normalized sitemap URL could not be parsed.
    #[error("invalid sitemap URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// libcurl reported an error (DNS, connection refused, timeout, TLS, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// Response body is not UTF-8 text.
    #[error("response from {url} is not valid UTF-8: {source}")]
    Encoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Malformed sitemap XML.
    #[error("malformed sitemap XML: {0}")]
    Parse(String),
}

impl SitemapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SitemapError::Parse(_) => ErrorKind::Parse,
            SitemapError::InvalidUrl { .. }
            | SitemapError::Transport { .. }
            | SitemapError::HttpStatus { .. }
            | SitemapError::Encoding { .. } => ErrorKind::Network,
        }
    }

    /// True when the request never completed (as opposed to a bad status or body).
    pub fn is_timeout(&self) -> bool {
        matches!(self, SitemapError::Transport { source, .. } if source.is_operation_timedout())
    }
}
