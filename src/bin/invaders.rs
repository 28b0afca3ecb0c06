use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal;
use tracing::info;

use canvas_arcade::compute::invaders::{
    fire, init_state, move_ship_left, move_ship_right, start_round, tick,
};
use canvas_arcade::config::{InvadersConfig, FRAME_CADENCE};
use canvas_arcade::display;
use canvas_arcade::input::{collect_frame_input, GameKey, PressedKeys};
use canvas_arcade::logging;
use canvas_arcade::scheduler::FrameScheduler;
use canvas_arcade::terminal::{spawn_event_reader, TerminalSession};

#[derive(Parser)]
#[command(name = "invaders")]
#[command(about = "Shoot down the descending formation before it reaches your ship")]
struct Args {
    /// Milliseconds per frame
    #[arg(long, default_value_t = FRAME_CADENCE.as_millis() as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    cadence_ms: u64,

    /// Lives at the start of each round
    #[arg(long, default_value_t = InvadersConfig::default().lives,
          value_parser = clap::value_parser!(u32).range(1..))]
    lives: u32,

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
    let mut state = init_state(InvadersConfig {
        lives: args.lives,
        ..InvadersConfig::for_cadence(scheduler.cadence())
    });

    let mut session =
        TerminalSession::enter(BufWriter::new(stdout())).context("failed to set up terminal")?;
    let rx = spawn_event_reader();

    let frames = scheduler
        .run(|frame| -> std::io::Result<()> {
            // One-shot actions, applied in the order the keys arrived.
            let input = collect_frame_input(&rx, &mut keys, frame.index);
            for key in &input.pressed {
                state = match key {
                    GameKey::Left => move_ship_left(&state),
                    GameKey::Right => move_ship_right(&state),
                    GameKey::Fire => fire(&state),
                    GameKey::Start => start_round(&state),
                    GameKey::Quit => {
                        stop.stop();
                        return Ok(());
                    }
                    GameKey::Up => continue,
                };
            }

            state = tick(&state);

            let (cols, rows) = terminal::size()?;
            display::invaders::render(session.out(), &state, cols, rows)
        })
        .context("invaders frame loop failed")?;

    drop(session);
    info!(frames, score = state.score, "invaders exited");
    Ok(())
}
