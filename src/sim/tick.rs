//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically: ship, then
//! boss, then the hit check. The driver calls this exactly once per period.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::consts::SCORE_PER_HIT;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Most recent pointer position while held; `None` when released.
    /// The ship centers on it and only fires while it is present.
    pub target: Option<Vec2>,
}

/// Observable outcome of a tick, delivered over the session's event channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Current score, published every tick while running
    Score { value: u32 },
    /// A life slot was emptied (slots deplete last-to-first)
    LifeLost { slot: usize },
    /// Lives depleted; the session is over and ticks cease
    GameOver { score: u32 },
}

/// Advance the game state by one fixed timestep
///
/// Returns the tick's state-change events (life loss, game over). On an
/// `Over` state this is a no-op returning no events.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Over {
        return events;
    }

    state.time_ticks += 1;

    state.ship.advance(input.target, &state.frame);
    state.boss.advance(&state.frame);

    // Ship shots vs boss: each consumed shot scores
    let boss_box = state.boss.rect;
    if state.ship.projectiles_hit(&boss_box) {
        state.score += SCORE_PER_HIT;
    }

    // Boss shots vs ship: each consumed shot costs a life
    let ship_box = state.ship.rect;
    if state.boss.projectiles_hit(&ship_box) {
        let depleted = state.life.decrement();
        events.push(GameEvent::LifeLost {
            slot: state.life.remaining() as usize,
        });
        if depleted {
            state.phase = GamePhase::Over;
            events.push(GameEvent::GameOver { score: state.score });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Projectile;

    fn held(x: f32, y: f32) -> TickInput {
        TickInput {
            target: Some(Vec2::new(x, y)),
        }
    }

    /// Drop a boss shot directly on top of the ship
    fn plant_boss_shot(state: &mut GameState) {
        let ship_center = state.ship.rect.center();
        state.boss.projectiles.push(Projectile::new(
            BOSS_SHOT_SIZE,
            ship_center.x,
            // advance() moves it down once before the hit check
            ship_center.y - SHOT_SPEED,
            SHOT_SPEED,
        ));
    }

    #[test]
    fn test_held_target_yields_one_shot_after_75_ticks() {
        let mut state = GameState::new(1000.0, 1600.0);
        let input = held(500.0, 1280.0);
        for _ in 0..SHIP_FIRE_INTERVAL as usize {
            tick(&mut state, &input);
        }
        assert_eq!(state.ship.projectiles.len(), 1);
        // Fired on tick 1 at the barrel tip, then moved up 12 px on each of
        // the remaining 74 ticks
        let expected_bottom = (1280.0 - SHIP_SIZE.y / 2.0) - SHOT_SPEED * 74.0;
        assert_eq!(state.ship.projectiles[0].rect.bottom(), expected_bottom);
        assert_eq!(state.ship.projectiles[0].vel_y, -SHOT_SPEED);
    }

    #[test]
    fn test_no_target_means_no_shots() {
        let mut state = GameState::new(1000.0, 1600.0);
        let input = TickInput::default();
        for _ in 0..200 {
            tick(&mut state, &input);
        }
        assert!(state.ship.projectiles.is_empty());
        // The boss kept firing regardless
        assert!(!state.boss.projectiles.is_empty());
    }

    #[test]
    fn test_boss_patrol_flips_after_right_edge() {
        let mut state = GameState::new(1000.0, 1600.0);
        let input = TickInput::default();
        let mut saw_flip = false;
        for _ in 0..200 {
            tick(&mut state, &input);
            if state.boss.vel_x < 0.0 {
                saw_flip = true;
                break;
            }
        }
        assert!(saw_flip);
        assert!(state.boss.rect.right() >= 1000.0 - BOSS_PATROL_SPEED);
        // Direction persists on the way back
        tick(&mut state, &input);
        assert_eq!(state.boss.vel_x, -BOSS_PATROL_SPEED);
    }

    #[test]
    fn test_boss_hit_scores_ten() {
        let mut state = GameState::new(1000.0, 1600.0);
        // Park a ship shot inside the boss's path
        let boss_center = state.boss.rect.center();
        state.ship.projectiles.push(Projectile::new(
            SHIP_SHOT_SIZE,
            boss_center.x + BOSS_PATROL_SPEED,
            state.boss.rect.bottom() + SHOT_SPEED + 1.0,
            -SHOT_SPEED,
        ));
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.score, SCORE_PER_HIT);
        assert!(state.ship.projectiles.is_empty());
        // Scoring alone does not raise life or game-over events
        assert!(events.is_empty());
    }

    #[test]
    fn test_three_ship_hits_end_the_session() {
        let mut state = GameState::new(1000.0, 1600.0);
        let mut all_events = Vec::new();

        for _ in 0..LIFE_SLOTS {
            plant_boss_shot(&mut state);
            all_events.extend(tick(&mut state, &TickInput::default()));
        }

        // Slots depleted last-to-first: 2, 1, 0
        let lost: Vec<_> = all_events
            .iter()
            .filter_map(|event| match event {
                GameEvent::LifeLost { slot } => Some(*slot),
                _ => None,
            })
            .collect();
        assert_eq!(lost, vec![2, 1, 0]);
        assert!(
            all_events
                .iter()
                .any(|event| matches!(event, GameEvent::GameOver { .. }))
        );
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_over_state_is_inert() {
        let mut state = GameState::new(1000.0, 1600.0);
        for _ in 0..LIFE_SLOTS {
            plant_boss_shot(&mut state);
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Over);

        let frozen = state.clone();
        for _ in 0..10 {
            let events = tick(&mut state, &held(500.0, 1280.0));
            assert!(events.is_empty());
        }
        // No observable state change after the terminal transition
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert_eq!(state.score, frozen.score);
        assert_eq!(state.boss.rect, frozen.boss.rect);
        assert_eq!(state.ship.rect, frozen.ship.rect);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = GameState::new(1000.0, 1600.0);
        let input = held(500.0, 1280.0);
        let mut last_score = 0;
        for _ in 0..2000 {
            tick(&mut state, &input);
            assert!(state.score >= last_score);
            last_score = state.score;
        }
    }
}
