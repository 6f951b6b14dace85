pub mod config;
pub mod error;
pub mod logging;
mod paths;

// Pipeline stages, in the order they run.
pub mod target;
pub mod proxy;
pub mod fetch;
pub mod sitemap;
pub mod filter;
pub mod report;
pub mod clipboard;
pub mod pipeline;
