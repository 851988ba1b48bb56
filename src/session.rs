//! Session lifecycle and the periodic tick driver
//!
//! A [`Session`] is one play-through: NotStarted until the first `start`
//! call, Running while the driver thread ticks the simulation every 20 ms,
//! Over once lives are depleted. There is no restart path; a finished
//! session is torn down and a new one constructed.
//!
//! Single-writer rules: pointer callbacks write only the shared input cell;
//! the driver thread owns every other piece of state and mutates it inside
//! the tick. Cancellation is a flag checked at the top of each tick plus a
//! join, so teardown never races an in-flight tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, unbounded};
use glam::Vec2;
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::consts::TICK_PERIOD_MS;
use crate::render::{Surface, draw_frame};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Shared pointer cell
///
/// Pointer events replace the value asynchronously, last write wins, and the
/// driver reads it exactly once per tick. Clone freely into platform
/// callbacks; all clones share one cell.
#[derive(Debug, Clone, Default)]
pub struct InputHandle {
    point: Arc<Mutex<Option<Vec2>>>,
}

impl InputHandle {
    /// Pointer pressed or dragged: set the target point
    pub fn pointer_down(&self, x: f32, y: f32) {
        *self.point.lock() = Some(Vec2::new(x, y));
    }

    /// Pointer released: clear the target point
    pub fn pointer_up(&self) {
        *self.point.lock() = None;
    }

    /// Current target point, if the pointer is held
    pub fn current(&self) -> Option<Vec2> {
        *self.point.lock()
    }
}

/// Cancellable handle to the driver thread
struct Driver {
    cancelled: Arc<AtomicBool>,
    thread: JoinHandle<GameState>,
}

/// One play-through from start input to game over
pub struct Session<S> {
    input: InputHandle,
    events_tx: Sender<GameEvent>,
    surface: Option<S>,
    driver: Option<Driver>,
    started: bool,
}

impl<S: Surface + Send + 'static> Session<S> {
    /// Build a session around the surface it will render to. The returned
    /// receiver carries the per-tick event stream; dropping it never stops
    /// the loop.
    pub fn new(surface: S) -> (Self, Receiver<GameEvent>) {
        let (events_tx, events_rx) = unbounded();
        (
            Self {
                input: InputHandle::default(),
                events_tx,
                surface: Some(surface),
                driver: None,
                started: false,
            },
            events_rx,
        )
    }

    /// Shared input handle; clone it into the platform's pointer callbacks
    pub fn input(&self) -> InputHandle {
        self.input.clone()
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        self.input.pointer_down(x, y);
    }

    pub fn pointer_up(&self) {
        self.input.pointer_up();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// NotStarted → Running: capture the frame dimensions, spawn the
    /// entities and begin ticking. A no-op on every call after the first;
    /// a session runs at most once.
    pub fn start(&mut self, frame_width: f32, frame_height: f32) {
        if self.started {
            debug!("start ignored: session already started");
            return;
        }
        self.started = true;

        let Some(mut surface) = self.surface.take() else {
            return;
        };
        let input = self.input.clone();
        let events = self.events_tx.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancel_flag = cancelled.clone();

        info!("session started: frame {frame_width}x{frame_height}");

        let thread = thread::spawn(move || {
            run_loop(
                frame_width,
                frame_height,
                &mut surface,
                &input,
                &events,
                &cancel_flag,
            )
        });

        self.driver = Some(Driver { cancelled, thread });
    }

    /// Cancel the driver and join it. Returns the final state when the
    /// session had started.
    pub fn shutdown(mut self) -> Option<GameState> {
        self.stop_driver()
    }

    fn stop_driver(&mut self) -> Option<GameState> {
        let driver = self.driver.take()?;
        driver.cancelled.store(true, Ordering::Release);
        driver.thread.join().ok()
    }
}

impl<S> Drop for Session<S> {
    fn drop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.cancelled.store(true, Ordering::Release);
            let _ = driver.thread.join();
        }
    }
}

/// The driver loop: one tick per period until cancelled or game over
///
/// Per tick, in order: read the input cell once, advance the simulation,
/// draw the frame, forward the tick's events, publish the score. If a tick
/// overruns its period the missed ticks are dropped: the deadline is
/// rebased rather than bursting to catch up, so backlog stays bounded.
fn run_loop(
    frame_width: f32,
    frame_height: f32,
    surface: &mut dyn Surface,
    input: &InputHandle,
    events: &Sender<GameEvent>,
    cancelled: &AtomicBool,
) -> GameState {
    let period = Duration::from_millis(TICK_PERIOD_MS);
    let mut state = GameState::new(frame_width, frame_height);
    let mut deadline = Instant::now();

    loop {
        if cancelled.load(Ordering::Acquire) {
            debug!("session cancelled at tick {}", state.time_ticks);
            break;
        }

        let tick_input = TickInput {
            target: input.current(),
        };
        let tick_events = tick(&mut state, &tick_input);

        draw_frame(&state, surface);

        // A dropped receiver must not stop the loop
        for event in tick_events {
            let _ = events.send(event);
        }
        let _ = events.send(GameEvent::Score { value: state.score });

        if state.phase == GamePhase::Over {
            info!("game over: score {}", state.score);
            break;
        }

        deadline += period;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        } else {
            warn!("tick {} overran its period; dropping missed ticks", state.time_ticks);
            deadline = now;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;

    #[test]
    fn test_pointer_cell_last_write_wins() {
        let input = InputHandle::default();
        input.pointer_down(10.0, 20.0);
        input.pointer_down(30.0, 40.0);
        assert_eq!(input.current(), Some(Vec2::new(30.0, 40.0)));
        input.pointer_up();
        assert_eq!(input.current(), None);
    }

    #[test]
    fn test_clones_share_one_cell() {
        let input = InputHandle::default();
        let clone = input.clone();
        clone.pointer_down(5.0, 6.0);
        assert_eq!(input.current(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn test_session_runs_and_publishes_score() {
        let (mut session, events) = Session::new(NullSurface);
        session.start(1000.0, 1600.0);
        thread::sleep(Duration::from_millis(300));
        let state = session.shutdown().expect("session was started");
        assert!(state.time_ticks > 0);
        assert!(
            events
                .try_iter()
                .any(|event| matches!(event, GameEvent::Score { .. }))
        );
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut session, _events) = Session::new(NullSurface);
        session.start(1000.0, 1600.0);
        session.start(640.0, 480.0);
        thread::sleep(Duration::from_millis(50));
        let state = session.shutdown().expect("session was started");
        // The second start was ignored; the first frame capture stands
        assert_eq!(state.frame.width, 1000.0);
        assert_eq!(state.frame.height, 1600.0);
    }

    #[test]
    fn test_shutdown_before_start() {
        let (session, _events) = Session::new(NullSurface);
        assert!(session.shutdown().is_none());
    }

    #[test]
    fn test_held_pointer_steers_the_ship() {
        let (mut session, _events) = Session::new(NullSurface);
        session.pointer_down(300.0, 900.0);
        session.start(1000.0, 1600.0);
        thread::sleep(Duration::from_millis(100));
        let state = session.shutdown().expect("session was started");
        assert_eq!(state.ship.rect.center(), Vec2::new(300.0, 900.0));
    }
}
