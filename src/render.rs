//! Abstract output boundary
//!
//! The simulation never draws; once per tick the session walks the state and
//! emits "sprite at top-left" calls against a [`Surface`] the embedder
//! provides. Decoding real images and presenting the surface are platform
//! concerns outside this crate; here a sprite is just a handle with a fixed
//! pixel size.

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// Handle into the sprite atlas the embedder renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Boss,
    ShipShot,
    BossShot,
}

impl Sprite {
    /// Pixel dimensions of the sprite; entity bounding boxes use these
    pub fn size(self) -> Vec2 {
        match self {
            Sprite::Ship => SHIP_SIZE,
            Sprite::Boss => BOSS_SIZE,
            Sprite::ShipShot => SHIP_SHOT_SIZE,
            Sprite::BossShot => BOSS_SHOT_SIZE,
        }
    }
}

/// One frame's drawing target
///
/// Implementations are expected to be synchronous and fast; the tick loop
/// calls them on the driver thread.
pub trait Surface {
    /// Wipe the frame before redrawing
    fn clear(&mut self);
    /// Draw a sprite with its top-left corner at `top_left`
    fn draw(&mut self, sprite: Sprite, top_left: Vec2);
}

/// Draw the whole scene: clear, then the ship and its shots, then the boss
/// and its shots
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear();

    surface.draw(Sprite::Ship, state.ship.rect.pos);
    for shot in &state.ship.projectiles {
        surface.draw(Sprite::ShipShot, shot.rect.pos);
    }

    surface.draw(Sprite::Boss, state.boss.rect.pos);
    for shot in &state.boss.projectiles {
        surface.draw(Sprite::BossShot, shot.rect.pos);
    }
}

/// Surface that discards everything; for headless runs and tests
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn draw(&mut self, _sprite: Sprite, _top_left: Vec2) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls in order
    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        draws: Vec<(Sprite, Vec2)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn draw(&mut self, sprite: Sprite, top_left: Vec2) {
            self.draws.push((sprite, top_left));
        }
    }

    #[test]
    fn test_draw_order_and_positions() {
        let mut state = GameState::new(1000.0, 1600.0);
        state.ship.fire();
        state.boss.fire();

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        assert_eq!(surface.clears, 1);
        let sprites: Vec<Sprite> = surface.draws.iter().map(|(sprite, _)| *sprite).collect();
        assert_eq!(
            sprites,
            vec![
                Sprite::Ship,
                Sprite::ShipShot,
                Sprite::Boss,
                Sprite::BossShot
            ]
        );
        assert_eq!(surface.draws[0].1, state.ship.rect.pos);
        assert_eq!(surface.draws[2].1, state.boss.rect.pos);
    }

    #[test]
    fn test_sprite_sizes_match_entity_boxes() {
        let state = GameState::new(1000.0, 1600.0);
        assert_eq!(Sprite::Ship.size(), state.ship.rect.size);
        assert_eq!(Sprite::Boss.size(), state.boss.rect.size);
    }
}
