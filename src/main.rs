//! Boss Blitz headless demo
//!
//! Runs one session against a discarding surface: holds the pointer at the
//! ship's spawn point, drains the event stream, and logs the outcome. With a
//! held target the ship fires on cooldown while the boss sweeps overhead, so
//! the score climbs whenever the patrol crosses the shot column.

use std::time::{Duration, Instant};

use boss_blitz::render::NullSurface;
use boss_blitz::session::Session;
use boss_blitz::sim::GameEvent;

const FRAME_WIDTH: f32 = 1000.0;
const FRAME_HEIGHT: f32 = 1600.0;
const RUN_FOR: Duration = Duration::from_secs(60);

fn main() {
    env_logger::init();
    log::info!("boss-blitz headless demo starting");

    let (mut session, events) = Session::new(NullSurface);
    session.start(FRAME_WIDTH, FRAME_HEIGHT);
    session.pointer_down(FRAME_WIDTH / 2.0, FRAME_HEIGHT * 0.8);

    let deadline = Instant::now() + RUN_FOR;
    let mut last_score = 0;
    let mut game_over = false;

    while Instant::now() < deadline && !game_over {
        for event in events.try_iter() {
            match event {
                GameEvent::Score { value } if value != last_score => {
                    last_score = value;
                    log::info!("score: {value}");
                }
                GameEvent::LifeLost { slot } => log::info!("life slot {slot} emptied"),
                GameEvent::GameOver { score } => {
                    log::info!("game over, final score {score}");
                    game_over = true;
                }
                _ => {}
            }
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    if let Some(state) = session.shutdown() {
        log::info!(
            "session ended after {} ticks with score {}",
            state.time_ticks,
            state.score
        );
    }
}
