//! Game state and core simulation types
//!
//! Everything the session mutates per tick lives here: the ship, the boss,
//! their projectiles, the life tracker and the score. All of it is
//! serde-serializable and owned by a single `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session's simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance entities and run hit checks
    Running,
    /// Terminal: lives depleted, no further ticks are processed
    Over,
}

/// Frame dimensions in pixels, captured once at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
}

/// Outcome of advancing a projectile by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Still at least partially inside the frame
    Alive,
    /// Wholly above or below the frame; the owner drops it
    OffScreen,
}

/// A projectile moving vertically at a fixed speed
///
/// Owned exclusively by the entity that fired it. The owner advances it once
/// per tick and removes it when `advance` reports `OffScreen` or when it
/// registers a hit; those are the only two ways out of the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Signed vertical velocity, px per tick (negative = upward)
    pub vel_y: f32,
}

impl Projectile {
    /// Spawn centered horizontally on `cx`, flush against the firer's edge at
    /// `edge_y`. An upward shot is offset by its own height so it starts
    /// fully on-screen at the barrel tip; a downward shot starts with its top
    /// at the firer's bottom edge.
    pub fn new(size: Vec2, cx: f32, edge_y: f32, vel_y: f32) -> Self {
        let x = cx - size.x / 2.0;
        let y = if vel_y < 0.0 { edge_y - size.y } else { edge_y };
        Self {
            rect: Rect::new(Vec2::new(x, y), size),
            vel_y,
        }
    }

    /// Move one tick's worth. Off-screen only when the box has wholly left
    /// the frame vertically: bottom above 0, or top strictly below the frame.
    pub fn advance(&mut self, frame: &Frame) -> Disposition {
        self.rect.pos.y += self.vel_y;
        if self.rect.bottom() < 0.0 || self.rect.top() > frame.height {
            Disposition::OffScreen
        } else {
            Disposition::Alive
        }
    }
}

/// Remove the first projectile (insertion order) whose box intersects
/// `target`. At most one is consumed per call even if several overlap.
fn remove_first_intersecting(projectiles: &mut Vec<Projectile>, target: &Rect) -> bool {
    match projectiles.iter().position(|shot| shot.rect.intersects(target)) {
        Some(index) => {
            projectiles.remove(index);
            true
        }
        None => false,
    }
}

/// The player's ship
///
/// Tracks the pointer target instantaneously (no easing) and fires upward on
/// a cooldown, but only while a target is held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    /// Ticks until the next shot is allowed; held at zero while idle
    pub cooldown: i32,
    pub projectiles: Vec<Projectile>,
}

impl Ship {
    /// Spawn centered horizontally on `cx` with the top edge at `top_y`
    pub fn new(cx: f32, top_y: f32) -> Self {
        Self {
            rect: Rect::new(Vec2::new(cx - SHIP_SIZE.x / 2.0, top_y), SHIP_SIZE),
            cooldown: 0,
            projectiles: Vec::new(),
        }
    }

    /// One tick: snap to the target if held, advance and cull owned shots,
    /// then fire if the cooldown allows and a target is present.
    ///
    /// The cooldown only counts down while above zero; at zero with no target
    /// it stays put, so the first held tick after idling fires immediately.
    pub fn advance(&mut self, target: Option<Vec2>, frame: &Frame) {
        if let Some(point) = target {
            self.rect.center_on(point);
        }

        self.projectiles
            .retain_mut(|shot| shot.advance(frame) == Disposition::Alive);

        if self.cooldown <= 0 {
            if target.is_some() {
                self.cooldown = SHIP_FIRE_INTERVAL;
                self.fire();
            }
        } else {
            self.cooldown -= 1;
        }
    }

    /// Launch an upward shot, barrel at the top edge
    pub fn fire(&mut self) {
        self.projectiles.push(Projectile::new(
            SHIP_SHOT_SIZE,
            self.rect.center().x,
            self.rect.top(),
            -SHOT_SPEED,
        ));
    }

    /// Consume the first owned projectile intersecting `target`, if any
    pub fn projectiles_hit(&mut self, target: &Rect) -> bool {
        remove_first_intersecting(&mut self.projectiles, target)
    }
}

/// The patrolling boss
///
/// Sweeps horizontally, reversing at the frame edges, and fires downward on
/// a fixed cadence; unlike the ship it needs no target to fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub rect: Rect,
    /// Signed horizontal patrol velocity, px per tick
    pub vel_x: f32,
    /// Pre-decremented each tick; fires when it reaches zero or below
    pub cooldown: i32,
    pub projectiles: Vec<Projectile>,
}

impl Boss {
    /// Spawn at the top-left corner, patrolling rightward
    pub fn new() -> Self {
        Self {
            rect: Rect::new(Vec2::ZERO, BOSS_SIZE),
            vel_x: BOSS_PATROL_SPEED,
            cooldown: 0,
            projectiles: Vec::new(),
        }
    }

    /// One tick: patrol, bounce off frame edges, advance and cull owned
    /// shots, then fire on cadence.
    ///
    /// The bounce flips velocity without re-clamping position, so the box may
    /// overshoot an edge by up to one tick's displacement on the flip tick.
    pub fn advance(&mut self, frame: &Frame) {
        self.rect.pos.x += self.vel_x;
        if self.rect.left() < 0.0 || frame.width <= self.rect.right() {
            self.vel_x = -self.vel_x;
        }

        self.projectiles
            .retain_mut(|shot| shot.advance(frame) == Disposition::Alive);

        self.cooldown -= 1;
        if self.cooldown <= 0 {
            self.cooldown = BOSS_FIRE_INTERVAL;
            self.fire();
        }
    }

    /// Launch a downward shot, barrel at the bottom edge
    pub fn fire(&mut self) {
        self.projectiles.push(Projectile::new(
            BOSS_SHOT_SIZE,
            self.rect.center().x,
            self.rect.bottom(),
            SHOT_SPEED,
        ));
    }

    /// Consume the first owned projectile intersecting `target`, if any
    pub fn projectiles_hit(&mut self, target: &Rect) -> bool {
        remove_first_intersecting(&mut self.projectiles, target)
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-capacity hit counter with slot-indexed depletion
///
/// Slots empty from the last to the first and never refill. The fields are
/// private: the remaining count can only go down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeTracker {
    slots: u8,
    remaining: u8,
}

impl LifeTracker {
    pub fn new(slots: u8) -> Self {
        Self {
            slots,
            remaining: slots,
        }
    }

    /// Consume the next slot from the end. Returns true when no lives remain;
    /// at zero this is a no-op that keeps reporting depleted.
    pub fn decrement(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        self.remaining == 0
    }

    #[inline]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    #[inline]
    pub fn slot_count(&self) -> u8 {
        self.slots
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.remaining == 0
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Frame dimensions, fixed for the session
    pub frame: Frame,
    pub ship: Ship,
    pub boss: Boss,
    pub life: LifeTracker,
    /// Monotonically increasing; +SCORE_PER_HIT per boss hit
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build the starting state for the given frame dimensions: ship centered
    /// horizontally at 80% of frame height, boss at the top-left corner,
    /// full lives, zero score.
    pub fn new(frame_width: f32, frame_height: f32) -> Self {
        Self {
            frame: Frame {
                width: frame_width,
                height: frame_height,
            },
            ship: Ship::new(frame_width / 2.0, frame_height * SHIP_SPAWN_Y_FRAC),
            boss: Boss::new(),
            life: LifeTracker::new(LIFE_SLOTS),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
        }
    }
}
