//! Two canvas toy games (a jump-and-run platformer and a formation shooter)
//! and a top-scorer utility, sharing one AABB collision core and one
//! fixed-cadence frame loop.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod round;
pub mod scheduler;
pub mod scores;
pub mod terminal;
