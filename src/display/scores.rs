//! Coloured output for the top-scorer form.

use std::io::{self, BufRead, Write};

use crossterm::{
    style::{self, Color, Print},
    QueueableCommand,
};
use tracing::{debug, info, warn};

use super::C_BANNER;
use crate::scores::{evaluate, unexpected_error_message};

const C_PLAIN: Color = Color::White;
const C_ERROR: Color = Color::Rgb { r: 0xFF, g: 0x57, b: 0x33 };

pub const TITLE: &str = "🏆 TOP SCORER";
pub const PROMPT: &str = "Enter scores (e.g., John:98, Jane:92): ";

fn print_line<W: Write>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.queue(style::SetForegroundColor(color))?
        .queue(Print(text))?
        .queue(style::ResetColor)?
        .queue(Print("\n"))?;
    out.flush()
}

/// Evaluate one line and print the verdict or the reason it was rejected.
pub fn report<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    debug!(input = line, "evaluating scores");
    match evaluate(line) {
        Ok(verdict) => {
            info!(
                winner = verdict.name(),
                outstanding = verdict.is_outstanding(),
                "top scorer found"
            );
            let color = if verdict.is_outstanding() { C_BANNER } else { C_PLAIN };
            print_line(out, &verdict.to_string(), color)
        }
        Err(err) => {
            debug!(%err, "rejected scores");
            print_line(out, &err.to_string(), C_ERROR)
        }
    }
}

/// Report an error that is not a parse failure.
pub fn report_unexpected<W: Write>(out: &mut W, err: &dyn std::fmt::Display) -> io::Result<()> {
    print_line(out, &unexpected_error_message(err), C_ERROR)
}

/// The form loop: prompt, read a line, report, repeat until end of input.
///
/// A line that cannot be read is reported and skipped; only end of input or
/// a failed write ends the loop.
pub fn run_form<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<()> {
    print_line(out, TITLE, C_BANNER)?;
    loop {
        out.queue(style::SetForegroundColor(C_PLAIN))?
            .queue(Print(PROMPT))?
            .queue(style::ResetColor)?;
        out.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(()),
            Ok(_) => report(out, line.trim_end_matches(['\r', '\n']))?,
            Err(err) => {
                warn!(%err, "could not read scores line");
                report_unexpected(out, &err)?;
            }
        }
    }
}
