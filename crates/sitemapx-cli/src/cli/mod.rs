//! CLI for sitemapx.

mod prompt;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use sitemapx_core::clipboard;
use sitemapx_core::config::{self, SitemapxConfig};
use sitemapx_core::pipeline::{self, RunOutcome, RunRequest};
use sitemapx_core::proxy::ProxyConfig;
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Top-level CLI for sitemapx.
#[derive(Debug, Parser)]
#[command(name = "sitemapx", version)]
#[command(about = "Extract URLs from a sitemap.xml and copy them to the clipboard", long_about = None)]
pub struct Cli {
    /// Target URL or domain (e.g. example.com or https://example.com/post-sitemap.xml).
    pub target: Option<String>,

    /// Only include URLs containing this string (case-sensitive).
    #[arg(long, value_name = "STRING")]
    pub include_string: Option<String>,

    /// Print the URLs without copying them to the clipboard.
    #[arg(long)]
    pub no_copy: bool,
}

/// How the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// URLs printed (clipboard outcome does not matter).
    Success,
    /// No target on the command line and none entered at the prompt.
    MissingTarget,
    /// Fetching or parsing the sitemap failed.
    ExtractionFailed,
    /// Anything else, already reported to the user.
    Error,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::MissingTarget | Exit::Error => 1,
            Exit::ExtractionFailed => 2,
        }
    }
}

impl From<&RunOutcome> for Exit {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Extracted { .. } => Exit::Success,
            RunOutcome::Failed(_) => Exit::ExtractionFailed,
        }
    }
}

pub fn run_from_args() -> Result<Exit> {
    let had_args = std::env::args_os().len() > 1;
    let cli = Cli::parse();

    let given = cli.target.clone().filter(|t| !t.trim().is_empty());
    let (target, prompted) = match given {
        Some(target) => (target, false),
        // Prompt only for a bare invocation from a terminal (e.g. a double-clicked binary).
        None if had_args || !io::stdin().is_terminal() => {
            Cli::command().print_help()?;
            return Ok(Exit::MissingTarget);
        }
        None => {
            Cli::command().print_help()?;
            let answer = prompt::ask_target(&mut io::stdin().lock(), &mut io::stdout())?;
            match answer {
                Some(target) => (target, true),
                None => {
                    println!("No input provided.");
                    prompt::wait_for_exit(&mut io::stdin().lock(), &mut io::stdout())?;
                    return Ok(Exit::MissingTarget);
                }
            }
        }
    };

    let result = run_target(&cli, &target);
    if prompted {
        return Ok(finish_prompted(result, &mut io::stdin().lock(), &mut io::stdout())?);
    }
    result
}

/// Ends a prompted session: any error is shown before the pause so the console
/// window does not close on it.
fn finish_prompted<R, W>(result: Result<Exit>, input: &mut R, output: &mut W) -> io::Result<Exit>
where
    R: io::BufRead,
    W: io::Write,
{
    let exit = match result {
        Ok(exit) => exit,
        Err(e) => {
            writeln!(output, "sitemapx error: {:#}", e)?;
            Exit::Error
        }
    };
    prompt::wait_for_exit(input, output)?;
    Ok(exit)
}

fn run_target(cli: &Cli, target: &str) -> Result<Exit> {
    let cfg = config::load_or_init().unwrap_or_else(|e| {
        tracing::warn!("config unavailable, using defaults: {:#}", e);
        SitemapxConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);

    let clipboard_cfg = cfg.clipboard();
    let request = RunRequest {
        target,
        include: cli.include_string.as_deref(),
        fetch: cfg.fetch_options(ProxyConfig::from_env()),
        copy: clipboard_cfg.enabled && !cli.no_copy,
    };
    let backends = clipboard::platform_backends(Duration::from_secs(clipboard_cfg.timeout_secs));

    let outcome = pipeline::run(
        &request,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &backends,
    )?;
    tracing::debug!("run finished: {:?}", outcome);

    Ok(Exit::from(&outcome))
}

#[cfg(test)]
mod tests;
