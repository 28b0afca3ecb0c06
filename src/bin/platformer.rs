use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal;
use tracing::info;

use canvas_arcade::compute::platformer::{init_state, start_round, tick};
use canvas_arcade::config::{PlatformerConfig, FRAME_CADENCE};
use canvas_arcade::display;
use canvas_arcade::input::{collect_frame_input, GameKey, PressedKeys};
use canvas_arcade::logging;
use canvas_arcade::scheduler::FrameScheduler;
use canvas_arcade::terminal::{spawn_event_reader, TerminalSession};

#[derive(Parser)]
#[command(name = "platformer")]
#[command(about = "Jump across the ledges to the flag without touching a hazard")]
struct Args {
    /// Milliseconds per frame
    #[arg(long, default_value_t = FRAME_CADENCE.as_millis() as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    cadence_ms: u64,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_file(args.log_file.as_deref())?;

    let scheduler = FrameScheduler::new(Duration::from_millis(args.cadence_ms));
    let stop = scheduler.stop_flag();
    let mut keys = PressedKeys::for_cadence(scheduler.cadence());
    let mut state = init_state(PlatformerConfig::default());

    let mut session =
        TerminalSession::enter(BufWriter::new(stdout())).context("failed to set up terminal")?;
    let rx = spawn_event_reader();

    let frames = scheduler
        .run(|frame| -> std::io::Result<()> {
            let input = collect_frame_input(&rx, &mut keys, frame.index);
            if input.wants(GameKey::Quit) {
                stop.stop();
                return Ok(());
            }
            if input.wants(GameKey::Start) {
                state = start_round(&state);
            }

            state = tick(&state, input.held, frame.delta);

            let (cols, rows) = terminal::size()?;
            display::platformer::render(session.out(), &state, cols, rows)
        })
        .context("platformer frame loop failed")?;

    drop(session);
    info!(frames, "platformer exited");
    Ok(())
}
