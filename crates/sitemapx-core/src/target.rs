//! Target normalization: bare domain or URL in, fully qualified sitemap URL out.

const SITEMAP_FILE: &str = "sitemap.xml";
const DEFAULT_SCHEME: &str = "https://";

/// Turns a user-supplied target into the URL of its sitemap.
///
/// - Surrounding whitespace is trimmed.
/// - Without an `http://` or `https://` prefix, `https://` is prepended.
/// - Without a `sitemap.xml` suffix, trailing slashes are stripped and
///   `/sitemap.xml` is appended.
///
/// Never fails; nonsense in gives a (nonsense) URL out, which the fetch stage
/// then rejects. Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// - `normalize_sitemap_url("example.com")` → `"https://example.com/sitemap.xml"`
/// - `normalize_sitemap_url("http://example.com/blog/")` → `"http://example.com/blog/sitemap.xml"`
/// - `normalize_sitemap_url("https://example.com/news-sitemap.xml")` → unchanged
pub fn normalize_sitemap_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let (scheme, rest) = split_scheme(trimmed);
    let mut url = format!("{}{}", scheme, rest);

    if !url.ends_with(SITEMAP_FILE) {
        // Only the part after the scheme is stripped, so "https://" keeps its slashes.
        url.truncate(scheme.len() + rest.trim_end_matches('/').len());
        url.push('/');
        url.push_str(SITEMAP_FILE);
    }

    url
}

fn split_scheme(s: &str) -> (&str, &str) {
    for scheme in ["http://", "https://"] {
        if let Some(rest) = s.strip_prefix(scheme) {
            return (scheme, rest);
        }
    }
    (DEFAULT_SCHEME, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_gets_scheme_and_path() {
        assert_eq!(
            normalize_sitemap_url("example.com"),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(
            normalize_sitemap_url("  example.com/ \n"),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(
            normalize_sitemap_url("http://example.com"),
            "http://example.com/sitemap.xml"
        );
        assert_eq!(
            normalize_sitemap_url("https://example.com/"),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn trailing_slashes_are_collapsed() {
        assert_eq!(
            normalize_sitemap_url("https://example.com/docs//"),
            "https://example.com/docs/sitemap.xml"
        );
    }

    #[test]
    fn sitemap_suffix_not_duplicated() {
        assert_eq!(
            normalize_sitemap_url("example.com/sitemap.xml"),
            "https://example.com/sitemap.xml"
        );
        assert_eq!(
            normalize_sitemap_url("https://example.com/post-sitemap.xml"),
            "https://example.com/post-sitemap.xml"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "example.com",
            "http://example.com/",
            "https://example.com/a/b/",
            " example.com/sitemap.xml ",
            "",
            "/",
        ] {
            let once = normalize_sitemap_url(raw);
            assert_eq!(normalize_sitemap_url(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn schemeless_inputs_start_with_https() {
        for raw in ["example.com", "www.example.org/path", "localhost:8080", ""] {
            assert!(normalize_sitemap_url(raw).starts_with("https://"));
        }
    }

    #[test]
    fn empty_input_still_produces_a_url() {
        assert_eq!(normalize_sitemap_url(""), "https:///sitemap.xml");
    }
}
