use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;

use canvas_arcade::display::scores::{report, run_form};
use canvas_arcade::logging;
use canvas_arcade::scores::unexpected_error_message;

#[derive(Parser)]
#[command(name = "top_scorer")]
#[command(about = "Find the highest score in a list like \"John:98, Jane:92\"")]
struct Args {
    /// Scores to evaluate; without it, lines are read from stdin
    scores: Option<String>,
}

fn main() -> Result<()> {
    logging::init_stderr();
    let args = Args::parse();
    let mut out = stdout();

    let result = match args.scores {
        Some(line) => report(&mut out, &line),
        None => run_form(stdin().lock(), &mut out),
    };
    if let Err(err) = result {
        eprintln!("{}", unexpected_error_message(&err));
        return Err(err.into());
    }
    Ok(())
}
