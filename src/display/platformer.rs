use std::io::Write;

use crossterm::style::Color;

use super::{
    begin_frame, draw_border, draw_centered, draw_hint, draw_hud, fill_rect, finish_frame,
    Viewport, C_BANNER, C_MESSAGE,
};
use crate::entities::PlatformerState;
use crate::round::{Outcome, RoundStatus};

const C_PLATFORM: Color = Color::Green;
const C_PLAYER: Color = Color::Yellow;
const C_GOAL: Color = Color::Red;
const C_ENEMY: Color = Color::Rgb { r: 0xFF, g: 0x57, b: 0x33 };

const HINT: &str = "← → / A D : Move   ↑ / W : Jump   ENTER : Start   Q : Quit";

/// `Time: 1.23s`
pub fn timer_text(state: &PlatformerState) -> String {
    format!("Time: {:.2}s", state.elapsed.as_secs_f64())
}

/// Render one complete frame for a terminal of `cols` × `rows`.
pub fn render<W: Write>(
    out: &mut W,
    state: &PlatformerState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let vp = Viewport::new(cols, rows, state.config.world_width, state.config.world_height);

    begin_frame(out)?;
    draw_border(out, &vp)?;
    draw_hud(out, &vp, &timer_text(state))?;

    match state.status {
        RoundStatus::Ended(outcome) => {
            // The canvas is wiped at the end of a round; only the banner stays.
            let banner = match outcome {
                Outcome::Won => "You Win!",
                Outcome::Lost => "Game Over!",
            };
            draw_centered(
                out,
                &vp,
                &[(banner, C_BANNER), ("", C_MESSAGE), ("Press ENTER to Play Again", C_MESSAGE)],
            )?;
        }
        RoundStatus::Idle | RoundStatus::Running => {
            for platform in &state.level.platforms {
                fill_rect(out, &vp, platform, '▀', C_PLATFORM)?;
            }
            for enemy in &state.level.enemies {
                fill_rect(out, &vp, enemy, '▲', C_ENEMY)?;
            }
            fill_rect(out, &vp, &state.level.goal, '⚑', C_GOAL)?;
            if let Some(player) = &state.player {
                fill_rect(out, &vp, &player.rect, '●', C_PLAYER)?;
            }
            if state.status == RoundStatus::Idle {
                draw_centered(out, &vp, &[("Press ENTER to Start", C_MESSAGE)])?;
            }
        }
    }

    draw_hint(out, &vp, HINT)?;
    finish_frame(out, &vp)
}
