//! All game entity types — pure data, no logic.

use std::time::Duration;

use crate::config::{InvadersConfig, PlatformerConfig};
use crate::geometry::Rect;
use crate::round::RoundStatus;

// ── Platformer ────────────────────────────────────────────────────────────────

/// The platformer's player: a box with vertical velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Jumper {
    pub rect: Rect,
    /// Positive is falling.
    pub velocity_y: i32,
    pub on_ground: bool,
}

/// Hand-placed level geometry.  Never changes during a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub platforms: Vec<Rect>,
    /// Static hazards; touching one loses the round.
    pub enemies: Vec<Rect>,
    pub goal: Rect,
}

#[derive(Clone, Debug)]
pub struct PlatformerState {
    /// `None` once the round has ended.
    pub player: Option<Jumper>,
    pub level: Level,
    pub status: RoundStatus,
    /// Time spent in the running round.
    pub elapsed: Duration,
    pub frame: u64,
    pub config: PlatformerConfig,
}

// ── Invaders ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The shooter's player.  Moves horizontally only.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    /// Constant per-frame vertical displacement.
    pub velocity_y: i32,
}

/// Enemies that march together: one shared direction for the whole group.
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub enemies: Vec<Rect>,
    pub direction: Direction,
}

/// The entire shooter state.  Cloneable so update functions can return a
/// fresh copy without mutating the original.
#[derive(Clone, Debug)]
pub struct InvadersState {
    /// `None` unless a round is running.
    pub ship: Option<Ship>,
    pub formation: Formation,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub lives: u32,
    pub status: RoundStatus,
    pub frame: u64,
    /// Frames spent in the `Ended` state, gating the restart prompt.
    pub ended_frames: u32,
    pub config: InvadersConfig,
}
