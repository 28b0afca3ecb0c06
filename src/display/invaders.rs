use std::io::Write;

use crossterm::style::Color;

use super::{
    begin_frame, draw_border, draw_centered, draw_hint, draw_hud, fill_rect, finish_frame,
    Viewport, C_BANNER, C_MESSAGE,
};
use crate::compute::invaders::accepts_start;
use crate::entities::InvadersState;
use crate::round::{Outcome, RoundStatus};

const C_SHIP: Color = Color::Green;
const C_ENEMY: Color = Color::Magenta;
const C_BULLET: Color = Color::Cyan;

const HINT: &str = "← → / A D : Move   SPACE : Shoot   ENTER : Start   Q : Quit";

/// `Score: 30 | Lives: 3`
pub fn score_text(state: &InvadersState) -> String {
    format!("Score: {} | Lives: {}", state.score, state.lives)
}

/// Render one complete frame for a terminal of `cols` × `rows`.
pub fn render<W: Write>(
    out: &mut W,
    state: &InvadersState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let vp = Viewport::new(cols, rows, state.config.world_width, state.config.world_height);

    begin_frame(out)?;
    draw_border(out, &vp)?;
    draw_hud(out, &vp, &score_text(state))?;

    match state.status {
        RoundStatus::Idle => {
            draw_centered(out, &vp, &[("Press ENTER to Start", C_MESSAGE)])?;
        }
        RoundStatus::Running => {
            for enemy in &state.formation.enemies {
                fill_rect(out, &vp, enemy, '◉', C_ENEMY)?;
            }
            for bullet in &state.bullets {
                fill_rect(out, &vp, &bullet.rect, '║', C_BULLET)?;
            }
            if let Some(ship) = &state.ship {
                fill_rect(out, &vp, &ship.rect, '█', C_SHIP)?;
            }
        }
        RoundStatus::Ended(outcome) => {
            let banner = match outcome {
                Outcome::Won => "You Win!",
                Outcome::Lost => "Game Over!",
            };
            let final_score = format!("Final Score: {}", state.score);
            let restart = if accepts_start(state) {
                "Press ENTER to Play Again"
            } else {
                ""
            };
            draw_centered(
                out,
                &vp,
                &[
                    (banner, C_BANNER),
                    (final_score.as_str(), C_BANNER),
                    ("", C_MESSAGE),
                    (restart, C_MESSAGE),
                ],
            )?;
        }
    }

    draw_hint(out, &vp, HINT)?;
    finish_frame(out, &vp)
}
