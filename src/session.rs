//! Running a scene against real time.
//!
//! Three threads share one `Shutdown`:
//! - the caller's thread runs the fixed-tick simulation and renders;
//! - an input thread polls the `EventSource` and hands each event over a
//!   single-slot channel;
//! - a spawner thread feeds the obstacle stream on its own period.
//!
//! The input and spawner threads are scoped, so none of them outlives `run`.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::time::{Duration, Instant};

use crate::audio::Soundtrack;
use crate::config::GameConfig;
use crate::display::Canvas;
use crate::entities::InputEvent;
use crate::error::{GameError, Result};
use crate::input::EventSource;
use crate::obstacles::Spawner;
use crate::scene::Scene;
use crate::shutdown::Shutdown;

pub struct Session {
    cfg: GameConfig,
    spawner: Spawner,
}

impl Session {
    pub fn new(cfg: &GameConfig) -> Self {
        Self::with_spawner(cfg, Spawner::from_config(cfg))
    }

    pub fn with_spawner(cfg: &GameConfig, spawner: Spawner) -> Self {
        Session { cfg: cfg.clone(), spawner }
    }

    /// Play until a quit event, a closed event source, or the first error.
    pub fn run<C, E, S>(
        self,
        scene: &mut Scene,
        canvas: &mut C,
        mut events: E,
        soundtrack: &mut S,
    ) -> Result<()>
    where
        C: Canvas,
        E: EventSource + Send,
        S: Soundtrack,
    {
        soundtrack.start_loop()?;

        let Session { cfg, mut spawner } = self;
        let (poll, tick) = (cfg.input_poll, cfg.tick);
        let obstacles = scene.obstacles();
        let shutdown = Shutdown::new();
        let (tx, rx) = mpsc::sync_channel::<InputEvent>(1);

        log::info!("session started, tick {tick:?}, spawn period {:?}", cfg.spawn_period);

        thread::scope(|s| {
            let shutdown = &shutdown;
            let input = s.spawn(move || forward_input(&mut events, &tx, shutdown, poll));
            let producer = s.spawn(move || spawner.run(&obstacles, shutdown));

            let simulated = simulate(scene, canvas, &rx, shutdown, tick);
            if let Err(e) = &simulated {
                log::error!("simulation stopped: {e}");
            }
            shutdown.cancel();
            // Unblocks an input thread stuck handing over an event.
            drop(rx);

            let polled = input
                .join()
                .unwrap_or_else(|_| Err(GameError::Input(io::Error::other("input thread panicked"))));
            match producer.join() {
                Ok(spawned) => log::debug!("spawner joined, {spawned} obstacles produced"),
                Err(_) => log::error!("spawner thread panicked"),
            }

            log::info!("session ended, score {}", scene.score());
            simulated.and(polled)
        })
    }
}

/// Forward every poll result until shutdown, a quit event, or the receiver
/// going away.
fn forward_input<E: EventSource>(
    events: &mut E,
    tx: &SyncSender<InputEvent>,
    shutdown: &Shutdown,
    timeout: Duration,
) -> Result<()> {
    while !shutdown.is_cancelled() {
        let event = match events.poll(timeout) {
            Ok(event) => event,
            Err(e) => {
                log::error!("event source failed: {e}");
                shutdown.cancel();
                return Err(e);
            }
        };
        if tx.send(event).is_err() {
            break;
        }
        if event == InputEvent::Quit {
            log::info!("quit requested");
            shutdown.cancel();
            break;
        }
    }
    Ok(())
}

/// Fixed-period ticks interleaved with input.  Waiting for the next tick
/// and waiting for input are the same `recv_timeout`.
fn simulate<C: Canvas>(
    scene: &mut Scene,
    canvas: &mut C,
    rx: &Receiver<InputEvent>,
    shutdown: &Shutdown,
    tick: Duration,
) -> Result<()> {
    let mut next_tick = Instant::now() + tick;
    while !shutdown.is_cancelled() {
        let now = Instant::now();
        if now >= next_tick {
            scene.tick_at(canvas, now)?;
            next_tick += tick;
            if next_tick < now {
                // Fell behind; skip missed ticks rather than bursting.
                next_tick = now + tick;
            }
            continue;
        }
        match rx.recv_timeout(next_tick - now) {
            Ok(InputEvent::Jump) => scene.jump(),
            Ok(InputEvent::Resize { cols, rows }) => canvas.resize(cols, rows),
            Ok(InputEvent::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(InputEvent::Idle) | Err(RecvTimeoutError::Timeout) => {}
        }
    }
    Ok(())
}
