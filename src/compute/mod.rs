//! Pure game logic, one module per game.

pub mod invaders;
pub mod platformer;
