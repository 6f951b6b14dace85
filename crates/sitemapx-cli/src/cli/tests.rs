//! CLI parse and exit-code tests.

use super::{finish_prompted, Cli, Exit};
use std::io::Cursor;
use clap::Parser;
use sitemapx_core::error::ErrorKind;
use sitemapx_core::pipeline::RunOutcome;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_target_only() {
    let cli = parse(&["sitemapx", "example.com"]);
    assert_eq!(cli.target.as_deref(), Some("example.com"));
    assert!(cli.include_string.is_none());
    assert!(!cli.no_copy);
}

#[test]
fn cli_parse_include_string() {
    let cli = parse(&["sitemapx", "https://example.com", "--include-string", "/blog/"]);
    assert_eq!(cli.target.as_deref(), Some("https://example.com"));
    assert_eq!(cli.include_string.as_deref(), Some("/blog/"));
}

#[test]
fn cli_parse_flag_before_target() {
    let cli = parse(&["sitemapx", "--include-string=docs", "--no-copy", "example.com"]);
    assert_eq!(cli.target.as_deref(), Some("example.com"));
    assert_eq!(cli.include_string.as_deref(), Some("docs"));
    assert!(cli.no_copy);
}

#[test]
fn cli_parse_without_target() {
    let cli = parse(&["sitemapx"]);
    assert!(cli.target.is_none());

    let cli = parse(&["sitemapx", "--no-copy"]);
    assert!(cli.target.is_none());
    assert!(cli.no_copy);
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["sitemapx", "--bogus"]).is_err());
}

#[test]
fn cli_include_string_requires_value() {
    assert!(Cli::try_parse_from(["sitemapx", "example.com", "--include-string"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn exit_codes() {
    assert_eq!(Exit::Success.code(), 0);
    assert_eq!(Exit::MissingTarget.code(), 1);
    assert_eq!(Exit::ExtractionFailed.code(), 2);
}

#[test]
fn exit_from_outcome() {
    let extracted = RunOutcome::Extracted {
        count: 0,
        copied_with: None,
    };
    assert_eq!(Exit::from(&extracted), Exit::Success);
    assert_eq!(
        Exit::from(&RunOutcome::Failed(ErrorKind::Parse)),
        Exit::ExtractionFailed
    );
}

#[test]
fn prompted_session_pauses_after_failed_extraction() {
    let mut out = Vec::new();
    let exit = finish_prompted(Ok(Exit::ExtractionFailed), &mut Cursor::new("\n"), &mut out).unwrap();
    assert_eq!(exit, Exit::ExtractionFailed);
    assert_eq!(String::from_utf8(out).unwrap(), "\nPress Enter to exit...");
}

#[test]
fn prompted_session_pauses_after_error() {
    let mut out = Vec::new();
    let result = Err(anyhow::anyhow!("stdout closed"));
    let exit = finish_prompted(result, &mut Cursor::new("\n"), &mut out).unwrap();
    assert_eq!(exit, Exit::Error);
    assert_eq!(exit.code(), 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sitemapx error: stdout closed\n\nPress Enter to exit..."
    );
}
