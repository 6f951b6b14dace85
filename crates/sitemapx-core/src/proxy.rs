//! Proxy settings from the conventional `*_PROXY` environment variables.

/// Variables consulted per scheme, in priority order (uppercase first).
const HTTP_VARS: [&str; 2] = ["HTTP_PROXY", "http_proxy"];
const HTTPS_VARS: [&str; 2] = ["HTTPS_PROXY", "https_proxy"];

/// Proxy URLs keyed by the scheme of the request they apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub http: Option<String>,
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Reads the process environment. `None` when no proxy is configured for either scheme.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same resolution as [`ProxyConfig::from_env`] over an arbitrary variable lookup.
    /// The first non-empty value per scheme wins.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.is_empty())
        };

        let http = first_set(&HTTP_VARS);
        let https = first_set(&HTTPS_VARS);

        if http.is_none() && https.is_none() {
            return None;
        }
        Some(Self { http, https })
    }

    /// Proxy for a request with the given URL scheme (`"http"` or `"https"`).
    pub fn for_scheme(&self, scheme: &str) -> Option<&str> {
        if scheme.eq_ignore_ascii_case("https") {
            self.https.as_deref()
        } else if scheme.eq_ignore_ascii_case("http") {
            self.http.as_deref()
        } else {
            None
        }
    }
}
