//! Shooter game logic.
//!
//! Every public function takes an immutable reference to the current
//! `InvadersState` and returns a brand-new one.  Nothing here is random:
//! the formation layout is fixed and all motion is constant-speed.

use tracing::{debug, info, trace};

use crate::config::InvadersConfig;
use crate::entities::{Bullet, Direction, Formation, InvadersState, Ship};
use crate::geometry::Rect;
use crate::round::{Outcome, RoundStatus};

// ── Layout ───────────────────────────────────────────────────────────────────

pub fn spawn_ship(config: &InvadersConfig) -> Ship {
    let (cx, top) = config.ship_spawn;
    let half = config.ship_width / 2;
    Ship {
        rect: Rect::new(cx - half, top, cx + half, top + half),
    }
}

/// Row-major grid of enemies, marching right to begin with.
pub fn spawn_formation(config: &InvadersConfig) -> Formation {
    let (ox, oy) = config.formation_origin;
    let (sx, sy) = config.formation_spacing;
    let size = config.enemy_size;
    let enemies = (0..config.enemy_rows)
        .flat_map(|row| {
            (0..config.enemy_cols)
                .map(move |col| Rect::from_origin(ox + col * sx, oy + row * sy, size, size))
        })
        .collect();
    Formation {
        enemies,
        direction: Direction::Right,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// An idle, empty board waiting for the start signal.
pub fn init_state(config: InvadersConfig) -> InvadersState {
    InvadersState {
        ship: None,
        formation: Formation {
            enemies: Vec::new(),
            direction: Direction::Right,
        },
        bullets: Vec::new(),
        score: 0,
        lives: config.lives,
        status: RoundStatus::Idle,
        frame: 0,
        ended_frames: 0,
        config,
    }
}

/// Whether a start signal would be honoured right now.  An ended round has
/// to sit out the restart delay first.
pub fn accepts_start(state: &InvadersState) -> bool {
    match state.status {
        RoundStatus::Idle => true,
        RoundStatus::Running => false,
        RoundStatus::Ended(_) => state.ended_frames >= state.config.restart_delay_frames,
    }
}

/// Reset score, lives, ship, bullets and formation, and start running.
pub fn start_round(state: &InvadersState) -> InvadersState {
    if !accepts_start(state) {
        return state.clone();
    }
    let config = state.config.clone();
    info!(lives = config.lives, "invaders round started");
    InvadersState {
        ship: Some(spawn_ship(&config)),
        formation: spawn_formation(&config),
        status: RoundStatus::Running,
        ..init_state(config)
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn shift_ship(state: &InvadersState, dx: i32) -> InvadersState {
    let mut next = state.clone();
    if !state.status.is_running() {
        return next;
    }
    if let Some(ship) = next.ship.as_mut() {
        ship.rect.translate(dx, 0);
        ship.rect.clamp_x(0, state.config.world_width);
    }
    next
}

pub fn move_ship_left(state: &InvadersState) -> InvadersState {
    shift_ship(state, -state.config.player_speed)
}

pub fn move_ship_right(state: &InvadersState) -> InvadersState {
    shift_ship(state, state.config.player_speed)
}

/// Launch a bullet from the middle of the ship's nose.
pub fn fire(state: &InvadersState) -> InvadersState {
    let mut next = state.clone();
    if !state.status.is_running() {
        return next;
    }
    let Some(ship) = &state.ship else {
        return next;
    };
    let x = ship.rect.center_x();
    let y = ship.rect.top;
    let half = state.config.bullet_size / 2;
    next.bullets.push(Bullet {
        rect: Rect::new(x - half, y - state.config.bullet_size, x + half, y),
        velocity_y: state.config.bullet_speed,
    });
    next
}

// ── Per-frame steps ──────────────────────────────────────────────────────────

/// Move every bullet and drop the ones that have left the top of the canvas.
pub fn advance_bullets(bullets: &[Bullet], world_height: i32) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            rect: b.rect.translated(0, b.velocity_y),
            ..b.clone()
        })
        .filter(|b| b.rect.bottom > 0 && b.rect.top < world_height)
        .collect()
}

/// March the formation one step.  If any enemy is already at the wall it is
/// heading for, the whole group drops instead and turns around.
pub fn advance_formation(formation: &Formation, config: &InvadersConfig) -> Formation {
    let direction = formation.direction;
    let at_wall = formation.enemies.iter().any(|e| match direction {
        Direction::Left => e.left <= 0,
        Direction::Right => e.right >= config.world_width,
    });

    let (dx, dy, direction) = if at_wall {
        trace!(?direction, "formation reached wall");
        (0, config.enemy_drop, direction.reversed())
    } else {
        (config.enemy_speed * direction.sign(), 0, direction)
    };

    Formation {
        enemies: formation
            .enemies
            .iter()
            .map(|e| e.translated(dx, dy))
            .collect(),
        direction,
    }
}

/// Survivors of one bullet-vs-enemy pass.
#[derive(Clone, Debug, PartialEq)]
pub struct HitPass {
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Rect>,
    /// Number of bullet/enemy pairs destroyed.
    pub hits: u32,
}

/// Pair each bullet with the first still-alive enemy it overlaps, then drop
/// every paired bullet and enemy.  A bullet kills at most one enemy and an
/// enemy absorbs at most one bullet.
pub fn resolve_bullet_hits(bullets: &[Bullet], enemies: &[Rect]) -> HitPass {
    let mut bullet_spent = vec![false; bullets.len()];
    let mut enemy_dead = vec![false; enemies.len()];
    let mut hits = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !enemy_dead[*ei] && bullet.rect.overlaps(enemy))
            .map(|(ei, _)| ei);
        if let Some(ei) = target {
            bullet_spent[bi] = true;
            enemy_dead[ei] = true;
            hits += 1;
        }
    }

    HitPass {
        bullets: bullets
            .iter()
            .zip(&bullet_spent)
            .filter(|(_, spent)| !**spent)
            .map(|(b, _)| b.clone())
            .collect(),
        enemies: enemies
            .iter()
            .zip(&enemy_dead)
            .filter(|(_, dead)| !**dead)
            .map(|(e, _)| *e)
            .collect(),
        hits,
    }
}

pub fn ship_hit(ship: &Ship, enemies: &[Rect]) -> bool {
    enemies.iter().any(|e| ship.rect.overlaps(e))
}

/// Clear every per-frame entity and park the round in `Ended`.
fn end_round(mut state: InvadersState, outcome: Outcome) -> InvadersState {
    info!(?outcome, score = state.score, lives = state.lives, "invaders round ended");
    state.ship = None;
    state.bullets.clear();
    state.formation.enemies.clear();
    state.status = RoundStatus::Ended(outcome);
    state.ended_frames = 0;
    state
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: bullets, formation, bullet hits, ship contact, then the terminal
/// checks with the loss (no lives left) taking precedence over the win
/// (formation wiped out).  Outside a running round only the ended-frame
/// counter moves.
pub fn tick(state: &InvadersState) -> InvadersState {
    let mut next = state.clone();
    match state.status {
        RoundStatus::Running => {}
        RoundStatus::Ended(_) => {
            next.ended_frames = next.ended_frames.saturating_add(1);
            return next;
        }
        RoundStatus::Idle => return next,
    }
    let config = &state.config;
    next.frame += 1;

    // ── 1. Bullets and formation move ────────────────────────────────────────
    let bullets = advance_bullets(&state.bullets, config.world_height);
    let formation = advance_formation(&state.formation, config);

    // ── 2. Bullets ↔ enemies ─────────────────────────────────────────────────
    let pass = resolve_bullet_hits(&bullets, &formation.enemies);
    if pass.hits > 0 {
        debug!(hits = pass.hits, remaining = pass.enemies.len(), "enemies destroyed");
    }
    next.score += pass.hits * config.kill_reward;
    next.bullets = pass.bullets;
    next.formation = Formation {
        enemies: pass.enemies,
        direction: formation.direction,
    };

    // ── 3. Ship ↔ enemies ────────────────────────────────────────────────────
    let contact = next
        .ship
        .as_ref()
        .is_some_and(|ship| ship_hit(ship, &next.formation.enemies));
    if contact {
        next.lives = next.lives.saturating_sub(1);
        return end_round(next, Outcome::Lost);
    }

    // ── 4. Terminal conditions ───────────────────────────────────────────────
    if next.lives == 0 {
        return end_round(next, Outcome::Lost);
    }
    if next.formation.enemies.is_empty() {
        return end_round(next, Outcome::Won);
    }
    next
}
