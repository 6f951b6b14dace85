//! End-to-end run: normalize, fetch, parse, filter, print, copy.

use std::io::{self, Write};

use crate::clipboard::{copy_with_fallback, ClipboardBackend, ClipboardError};
use crate::error::{ErrorKind, SitemapError};
use crate::fetch::{fetch_sitemap, FetchOptions};
use crate::filter::filter_urls;
use crate::report::write_report;
use crate::sitemap::parse_sitemap;
use crate::target::normalize_sitemap_url;

/// URLs extracted from one sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The URL actually requested (after normalization).
    pub sitemap_url: String,
    /// `<loc>` values in document order, after filtering.
    pub urls: Vec<String>,
}

/// Fetches the sitemap for `target` and returns its (optionally filtered) URLs.
///
/// Any failure aborts the extraction; there is no partial result.
pub fn extract(
    target: &str,
    include: Option<&str>,
    opts: &FetchOptions,
) -> Result<Extraction, SitemapError> {
    let sitemap_url = normalize_sitemap_url(target);
    tracing::info!("extracting {} (target={:?})", sitemap_url, target);

    let body = fetch_sitemap(&sitemap_url, opts)?;
    let urls = parse_sitemap(&body)?;
    let total = urls.len();
    let urls = filter_urls(urls, include);
    tracing::info!(
        "kept {} of {} URLs from {} (include={:?})",
        urls.len(),
        total,
        sitemap_url,
        include
    );

    Ok(Extraction { sitemap_url, urls })
}

/// Inputs for [`run`].
#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    /// Domain or URL as the user typed it.
    pub target: &'a str,
    /// Keep only URLs containing this substring.
    pub include: Option<&'a str>,
    pub fetch: FetchOptions,
    /// Copy the list to the clipboard after printing it.
    pub copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The list was printed. `copied_with` names the clipboard helper that took it, if any.
    Extracted {
        count: usize,
        copied_with: Option<String>,
    },
    /// Fetch or parse failed; nothing was printed to `out` and nothing was copied.
    Failed(ErrorKind),
}

/// Runs the whole flow, printing results to `out` and problems to `err`.
///
/// Extraction failures are reported on `err` and returned as
/// [`RunOutcome::Failed`]; clipboard failures are reported and otherwise
/// ignored. The only `Err` is a failure to write to `out` or `err`.
pub fn run<O, E>(
    req: &RunRequest<'_>,
    out: &mut O,
    err: &mut E,
    backends: &[Box<dyn ClipboardBackend>],
) -> io::Result<RunOutcome>
where
    O: Write,
    E: Write,
{
    let extraction = match extract(req.target, req.include, &req.fetch) {
        Ok(extraction) => extraction,
        Err(e) => {
            tracing::error!("sitemap extraction failed: {}", e);
            writeln!(err, "Sitemap extraction failed. {}", e)?;
            return Ok(RunOutcome::Failed(e.kind()));
        }
    };

    write_report(out, req.target, &extraction.urls)?;

    let copied_with = if extraction.urls.is_empty() || !req.copy {
        None
    } else {
        match copy_with_fallback(backends, &extraction.urls.join("\n")) {
            Ok(name) => {
                writeln!(out, "URLs copied to clipboard.")?;
                Some(name.to_string())
            }
            Err(e @ ClipboardError::Unavailable { .. }) => {
                writeln!(err, "{}", e)?;
                None
            }
            Err(e) => {
                writeln!(err, "Failed to copy to clipboard: {}", e)?;
                None
            }
        }
    };

    Ok(RunOutcome::Extracted {
        count: extraction.urls.len(),
        copied_with,
    })
}
