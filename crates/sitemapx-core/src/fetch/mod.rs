//! Sitemap download: one HTTP GET through libcurl.
//!
//! No retries. Any transport failure, non-2xx status or undecodable body is a
//! single [`SitemapError`] and the caller gets no partial result.

mod handle;

use std::time::Duration;
use url::Url;

use crate::error::SitemapError;
use crate::proxy::ProxyConfig;

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Request settings for [`fetch_sitemap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound for the whole transfer (connect + headers + body).
    pub timeout: Duration,
    /// Proxies by scheme; `None` sends the request directly.
    pub proxy: Option<ProxyConfig>,
    /// When false, certificate and host-name checks are skipped for this request only.
    pub verify_tls: bool,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            verify_tls: false,
            user_agent: None,
        }
    }
}

/// Downloads `url` and returns the body as text.
///
/// Follows redirects. Runs in the current thread and blocks for at most
/// `opts.timeout`.
pub fn fetch_sitemap(url: &str, opts: &FetchOptions) -> Result<String, SitemapError> {
    let parsed = parse_url(url)?;
    let proxy = opts
        .proxy
        .as_ref()
        .and_then(|p| p.for_scheme(parsed.scheme()));
    let transport = |source: curl::Error| SitemapError::Transport {
        url: url.to_string(),
        source,
    };

    tracing::debug!(
        "GET {} (timeout={:?}, proxy={}, verify_tls={})",
        url,
        opts.timeout,
        proxy.unwrap_or("none"),
        opts.verify_tls
    );

    let mut easy = handle::configure(parsed.as_str(), opts, proxy).map_err(transport)?;
    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&status) {
        return Err(SitemapError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, status, body.len());

    String::from_utf8(body).map_err(|source| SitemapError::Encoding {
        url: url.to_string(),
        source,
    })
}

/// Parses `url`, rejecting an empty authority (`https:///x`) that the WHATWG
/// parser would otherwise repair by promoting the first path segment to a host.
fn parse_url(url: &str) -> Result<Url, SitemapError> {
    let invalid = |source| SitemapError::InvalidUrl {
        url: url.to_string(),
        source,
    };
    if let Some((_, rest)) = url.split_once("://") {
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            return Err(invalid(url::ParseError::EmptyHost));
        }
    }
    Url::parse(url).map_err(invalid)
}
