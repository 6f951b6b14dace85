//! libcurl handle setup for the sitemap GET.

use curl::easy::Easy;

use super::FetchOptions;

const MAX_REDIRECTS: u32 = 10;

/// Builds a GET handle for `url`. `proxy` is the entry already chosen for the URL's scheme.
pub(super) fn configure(
    url: &str,
    opts: &FetchOptions,
    proxy: Option<&str>,
) -> Result<Easy, curl::Error> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.timeout(opts.timeout)?;
    // Empty string: no proxy, and libcurl must not pick one up from the environment itself.
    easy.proxy(proxy.unwrap_or(""))?;
    // Empty string: offer every encoding this libcurl can decode.
    easy.accept_encoding("")?;

    if !opts.verify_tls {
        tracing::debug!("TLS verification disabled for {}", url);
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }
    if let Some(agent) = &opts.user_agent {
        easy.useragent(agent)?;
    }

    Ok(easy)
}
