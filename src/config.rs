//! Tunable constants for both games.
//!
//! `Default` holds the values the games ship with; tests and CLI flags
//! override single fields with struct-update syntax.

use std::time::Duration;

/// Width and height of the simulated canvas, in world units.
pub const WORLD_WIDTH: i32 = 700;
pub const WORLD_HEIGHT: i32 = 500;

/// Default frame cadence (~50 FPS).
pub const FRAME_CADENCE: Duration = Duration::from_millis(20);

/// How long an ended shooter round waits before it accepts a restart.
pub const RESTART_DELAY: Duration = Duration::from_secs(2);

/// Whole frames needed to cover `span` at `cadence`, rounded up, at least one.
pub fn frames_for(span: Duration, cadence: Duration) -> u32 {
    let cadence_ms = cadence.as_millis().max(1);
    let frames = span.as_millis().div_ceil(cadence_ms).max(1);
    u32::try_from(frames).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformerConfig {
    pub world_width: i32,
    pub world_height: i32,
    pub player_size: i32,
    /// Top-left corner the player spawns at.
    pub spawn: (i32, i32),
    pub gravity: i32,
    /// Vertical velocity set by a jump; negative is upward.
    pub jump_strength: i32,
    pub player_speed: i32,
    pub enemy_size: i32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        PlatformerConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_size: 20,
            spawn: (50, 450),
            gravity: 1,
            jump_strength: -20,
            player_speed: 8,
            enemy_size: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvadersConfig {
    pub world_width: i32,
    pub world_height: i32,
    /// Ship is `ship_width` wide and half as tall.
    pub ship_width: i32,
    /// Horizontal centre and top edge of a freshly spawned ship.
    pub ship_spawn: (i32, i32),
    pub player_speed: i32,
    pub bullet_size: i32,
    /// Per-frame vertical bullet displacement; negative is upward.
    pub bullet_speed: i32,
    pub enemy_size: i32,
    pub enemy_rows: i32,
    pub enemy_cols: i32,
    /// Top-left corner of the first enemy and the grid pitch.
    pub formation_origin: (i32, i32),
    pub formation_spacing: (i32, i32),
    pub enemy_speed: i32,
    pub enemy_drop: i32,
    pub kill_reward: u32,
    pub lives: u32,
    /// Frames an ended round waits before it accepts a restart.
    pub restart_delay_frames: u32,
}

impl Default for InvadersConfig {
    fn default() -> Self {
        InvadersConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ship_width: 40,
            ship_spawn: (350, 450),
            player_speed: 10,
            bullet_size: 10,
            bullet_speed: -10,
            enemy_size: 30,
            enemy_rows: 5,
            enemy_cols: 6,
            formation_origin: (100, 50),
            formation_spacing: (70, 40),
            enemy_speed: 1,
            enemy_drop: 20,
            kill_reward: 10,
            lives: 3,
            restart_delay_frames: frames_for(RESTART_DELAY, FRAME_CADENCE),
        }
    }
}

impl InvadersConfig {
    /// Defaults with the restart delay counted in frames of `cadence`.
    pub fn for_cadence(cadence: Duration) -> Self {
        InvadersConfig {
            restart_delay_frames: frames_for(RESTART_DELAY, cadence),
            ..InvadersConfig::default()
        }
    }
}
