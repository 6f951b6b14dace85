//! Human-readable listing of the extracted URLs.

use std::io::{self, Write};

/// Frame line printed above and below the URL list.
pub const SEPARATOR_LINE: &str = "**************************************************";

/// Writes the URL list between two separator lines, then a one-line summary.
///
/// An empty list prints only the summary. `target` is shown as the user typed it.
pub fn write_report<W: Write>(out: &mut W, target: &str, urls: &[String]) -> io::Result<()> {
    if !urls.is_empty() {
        writeln!(out, "{}", SEPARATOR_LINE)?;
        for url in urls {
            writeln!(out, "{}", url)?;
        }
        writeln!(out, "{}", SEPARATOR_LINE)?;
    }
    writeln!(
        out,
        "Sitemap of '{}' successfully extracted ({} URLs).",
        target,
        urls.len()
    )?;
    out.flush()
}
