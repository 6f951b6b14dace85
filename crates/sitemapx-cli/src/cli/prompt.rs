//! Interactive fallback when the binary is started without arguments from a terminal.

use sitemapx_core::report::SEPARATOR_LINE;
use std::io::{self, BufRead, Write};

/// Asks for a target. `None` on empty input or end of input.
pub fn ask_target<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    writeln!(out, "\n{}\n", SEPARATOR_LINE)?;
    write!(out, "Enter domain or URL: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    let target = line.trim();
    Ok((!target.is_empty()).then(|| target.to_string()))
}

/// Keeps a console window open until the user presses Enter.
pub fn wait_for_exit<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    write!(out, "\nPress Enter to exit...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
