use sitemapx_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop the tool.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    let code = match cli::run_from_args() {
        Ok(exit) => exit.code(),
        Err(err) => {
            eprintln!("sitemapx error: {:#}", err);
            1
        }
    };
    std::process::exit(code);
}
