//! Boss Blitz - a pointer-driven boss-duel arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Abstract sprite/surface output boundary
//! - `session`: Session lifecycle, shared input cell, periodic tick driver

pub mod render;
pub mod session;
pub mod sim;

pub use render::{NullSurface, Sprite, Surface};
pub use session::{InputHandle, Session};
pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants (fixed, not runtime-configurable)
pub mod consts {
    use glam::Vec2;

    /// Fixed tick period of the game loop
    pub const TICK_PERIOD_MS: u64 = 20;
    /// Ticks between ship shots while the pointer is held
    pub const SHIP_FIRE_INTERVAL: i32 = 75;
    /// Ticks between boss shots; the boss fires unconditionally
    pub const BOSS_FIRE_INTERVAL: i32 = 50;
    /// Vertical projectile speed, px per tick
    pub const SHOT_SPEED: f32 = 12.0;
    /// Horizontal boss patrol speed, px per tick
    pub const BOSS_PATROL_SPEED: f32 = 12.0;
    /// Score awarded per boss hit
    pub const SCORE_PER_HIT: u32 = 10;
    /// Life slots per session
    pub const LIFE_SLOTS: u8 = 3;
    /// Ship spawn height as a fraction of frame height
    pub const SHIP_SPAWN_Y_FRAC: f32 = 0.8;

    /// Sprite pixel sizes; entity bounding boxes derive from these
    pub const SHIP_SIZE: Vec2 = Vec2::new(96.0, 96.0);
    pub const BOSS_SIZE: Vec2 = Vec2::new(160.0, 120.0);
    pub const SHIP_SHOT_SIZE: Vec2 = Vec2::new(16.0, 48.0);
    pub const BOSS_SHOT_SIZE: Vec2 = Vec2::new(24.0, 24.0);
}
