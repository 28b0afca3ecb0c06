//! Jump-and-run game logic.
//!
//! Same shape as the shooter: pure functions that take the current
//! `PlatformerState` and return a new one.  The only external inputs are the
//! held-key snapshot and the wall-clock time the frame covered.

use std::time::Duration;

use tracing::{info, trace};

use crate::config::PlatformerConfig;
use crate::entities::{Jumper, Level, PlatformerState};
use crate::geometry::Rect;
use crate::input::HeldKeys;
use crate::round::{Outcome, RoundStatus};

// ── Level data ───────────────────────────────────────────────────────────────

/// The hand-built level: a full-width floor, five ledges climbing to the
/// upper right, two hazards on the way and the goal flag on the last ledge.
pub fn default_level(config: &PlatformerConfig) -> Level {
    let e = config.enemy_size;
    Level {
        platforms: vec![
            Rect::new(0, 480, config.world_width, 500), // floor
            Rect::new(150, 400, 250, 420),
            Rect::new(200, 300, 300, 320),
            Rect::new(350, 250, 450, 270),
            Rect::new(500, 200, 600, 220),
            Rect::new(650, 100, 700, 120),
        ],
        enemies: vec![
            Rect::from_origin(220, 280, e, e),
            Rect::from_origin(550, 180, e, e),
        ],
        goal: Rect::new(660, 50, 690, 100),
    }
}

pub fn spawn_player(config: &PlatformerConfig) -> Jumper {
    let (x, y) = config.spawn;
    Jumper {
        rect: Rect::from_origin(x, y, config.player_size, config.player_size),
        velocity_y: 0,
        on_ground: false,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Lay out the level and park the player at the spawn point, waiting for start.
pub fn init_state(config: PlatformerConfig) -> PlatformerState {
    PlatformerState {
        player: Some(spawn_player(&config)),
        level: default_level(&config),
        status: RoundStatus::Idle,
        elapsed: Duration::ZERO,
        frame: 0,
        config,
    }
}

/// Handle the start signal.  Ignored while a round is running; otherwise the
/// level, player and timer are rebuilt from scratch.
pub fn start_round(state: &PlatformerState) -> PlatformerState {
    if !state.status.accepts_start() {
        return state.clone();
    }
    info!("platformer round started");
    PlatformerState {
        status: RoundStatus::Running,
        ..init_state(state.config.clone())
    }
}

// ── Motion steps ─────────────────────────────────────────────────────────────

/// Apply held Left/Right and keep the player inside the world.
pub fn move_horizontal(player: &mut Jumper, held: HeldKeys, config: &PlatformerConfig) {
    let mut dx = 0;
    if held.left {
        dx -= config.player_speed;
    }
    if held.right {
        dx += config.player_speed;
    }
    player.rect.translate(dx, 0);
    player.rect.clamp_x(0, config.world_width);
}

/// Only honoured while standing on something.
pub fn jump(player: &mut Jumper, jump_strength: i32) {
    if player.on_ground {
        player.velocity_y = jump_strength;
        player.on_ground = false;
    }
}

pub fn apply_gravity(player: &mut Jumper, gravity: i32) {
    if !player.on_ground {
        player.velocity_y += gravity;
        player.rect.translate(0, player.velocity_y);
    }
}

/// Resolve landings.  Only a player moving down (or at rest) that overlaps a
/// platform is snapped onto its top; sides and undersides pass through.
pub fn land_on_platforms(player: &mut Jumper, platforms: &[Rect]) {
    player.on_ground = false;
    for platform in platforms {
        if player.rect.overlaps(platform) && player.velocity_y >= 0 {
            player.rect.set_bottom(platform.top);
            player.velocity_y = 0;
            player.on_ground = true;
        }
    }
}

pub fn reached_goal(player: &Rect, level: &Level) -> bool {
    player.overlaps(&level.goal)
}

pub fn touched_enemy(player: &Rect, level: &Level) -> bool {
    level.enemies.iter().any(|enemy| player.overlaps(enemy))
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  A no-op unless the round is running.
pub fn tick(state: &PlatformerState, held: HeldKeys, dt: Duration) -> PlatformerState {
    let mut next = state.clone();
    if !state.status.is_running() {
        return next;
    }
    let Some(mut player) = next.player.take() else {
        return next;
    };
    let config = &state.config;
    next.frame += 1;

    // ── 1. Input ─────────────────────────────────────────────────────────────
    move_horizontal(&mut player, held, config);
    if held.up {
        jump(&mut player, config.jump_strength);
    }

    // ── 2. Physics ───────────────────────────────────────────────────────────
    apply_gravity(&mut player, config.gravity);
    land_on_platforms(&mut player, &state.level.platforms);

    next.elapsed += dt;

    // ── 3. Win / death ───────────────────────────────────────────────────────
    let outcome = if reached_goal(&player.rect, &state.level) {
        Some(Outcome::Won)
    } else if touched_enemy(&player.rect, &state.level) {
        Some(Outcome::Lost)
    } else {
        None
    };

    match outcome {
        Some(outcome) => {
            info!(
                ?outcome,
                elapsed_secs = next.elapsed.as_secs_f64(),
                "platformer round ended"
            );
            next.status = RoundStatus::Ended(outcome);
        }
        None => {
            trace!(
                x = player.rect.left,
                y = player.rect.top,
                velocity_y = player.velocity_y,
                on_ground = player.on_ground,
                "player moved"
            );
            next.player = Some(player);
        }
    }
    next
}
