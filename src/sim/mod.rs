//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` call per period)
//! - Stable iteration order (projectiles in insertion order)
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Boss, Disposition, Frame, GamePhase, GameState, LifeTracker, Projectile, Ship};
pub use tick::{GameEvent, TickInput, tick};
