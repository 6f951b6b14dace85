//! Sitemap protocol parsing.
//!
//! Both `<urlset>` documents and `<sitemapindex>` documents keep their URLs in
//! `<loc>` elements of the same namespace, so one query covers both:
//!
//! ```xml
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/page</loc>
//!     <lastmod>2024-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

mod parse;

pub use parse::parse_sitemap;

/// XML namespace of the Sitemap protocol.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
