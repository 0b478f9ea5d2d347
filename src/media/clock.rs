// SPDX-License-Identifier: MPL-2.0
//! Transport-only media element.
//!
//! `ClockElement` behaves like a native audio element without producing any
//! sound: a driver thread advances the position in real time and emits the
//! usual lifecycle events. The total length is supplied up front since
//! nothing is decoded.

use super::{EventReceiver, MediaElement, MediaEvent, PlayFuture};
use crate::config::defaults::CLOCK_TICK_MS;
use crate::error::PlayError;
use futures_util::future::{self, FutureExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Commands sent from the element handle to its driver thread.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ClockCommand {
    Load { duration: f64 },
    Play,
    Pause,
    Seek(f64),
    Stop,
}

/// Position shared with the driver thread, stored as `f64` bits.
#[derive(Debug, Default)]
struct SharedPosition(AtomicU64);

impl SharedPosition {
    fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn set(&self, secs: f64) {
        self.0.store(secs.to_bits(), Ordering::Relaxed);
    }
}

/// A media element driven by the wall clock.
pub struct ClockElement {
    source: Option<String>,
    source_duration: f64,
    duration: f64,
    volume: f32,
    position: Arc<SharedPosition>,
    command_tx: mpsc::UnboundedSender<ClockCommand>,
    event_tx: mpsc::UnboundedSender<MediaEvent>,
    event_rx: Option<EventReceiver>,
    driver: Option<JoinHandle<()>>,
}

impl ClockElement {
    /// Creates an element whose sources all last `duration` seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self::with_tick(duration, Duration::from_millis(CLOCK_TICK_MS))
    }

    /// Creates an element emitting position updates every `tick`.
    #[must_use]
    pub fn with_tick(duration: f64, tick: Duration) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let position = Arc::new(SharedPosition::default());

        let driver = {
            let position = Arc::clone(&position);
            let event_tx = event_tx.clone();
            std::thread::Builder::new()
                .name("clock-element".into())
                .spawn(move || drive(command_rx, event_tx, position, tick))
        };
        let driver = match driver {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::error!("failed to spawn clock driver: {err}");
                None
            }
        };

        Self {
            source: None,
            source_duration: duration.max(0.0),
            duration: 0.0,
            volume: 1.0,
            position,
            command_tx,
            event_tx,
            event_rx: Some(event_rx),
            driver,
        }
    }

    /// Source currently loaded, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Last level written with [`MediaElement::set_volume`].
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Returns false when the driver thread has stopped.
    fn send(&self, command: ClockCommand) -> bool {
        let sent = self.command_tx.send(command).is_ok();
        if !sent {
            tracing::warn!(?command, "clock driver is not running");
        }
        sent
    }
}

impl std::fmt::Debug for ClockElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockElement")
            .field("source", &self.source)
            .field("duration", &self.duration)
            .field("position", &self.position.get())
            .field("volume", &self.volume)
            .finish()
    }
}

impl MediaElement for ClockElement {
    fn load(&mut self, source: &str) {
        tracing::debug!(source, "loading source");
        self.source = Some(source.to_owned());
        self.duration = self.source_duration;
        self.position.set(0.0);
        self.send(ClockCommand::Load {
            duration: self.duration,
        });
        let _ = self.event_tx.send(MediaEvent::LoadedMetadata {
            duration: self.duration,
        });
    }

    fn current_time(&self) -> f64 {
        self.position.get()
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_current_time(&mut self, secs: f64) {
        let secs = secs.clamp(0.0, self.duration);
        self.position.set(secs);
        self.send(ClockCommand::Seek(secs));
    }

    fn play(&mut self) -> PlayFuture {
        if self.source.is_none() {
            return future::ready(Err(PlayError::NoSource)).boxed();
        }
        let result = if self.send(ClockCommand::Play) {
            Ok(())
        } else {
            Err(PlayError::Aborted)
        };
        future::ready(result).boxed()
    }

    fn pause(&mut self) {
        self.send(ClockCommand::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn take_events(&mut self) -> Option<EventReceiver> {
        self.event_rx.take()
    }
}

impl Drop for ClockElement {
    fn drop(&mut self) {
        let _ = self.command_tx.send(ClockCommand::Stop);
        if let Some(handle) = self.driver.take() {
            let _ = handle.join();
        }
    }
}

/// Driver loop: drains pending commands, then advances the position once
/// per tick while playing. Returns when stopped or when the handle is gone.
fn drive(
    mut commands: mpsc::UnboundedReceiver<ClockCommand>,
    events: mpsc::UnboundedSender<MediaEvent>,
    position: Arc<SharedPosition>,
    tick: Duration,
) {
    let mut duration = 0.0_f64;
    let mut playing = false;
    let mut last_advance = Instant::now();

    loop {
        loop {
            match commands.try_recv() {
                Ok(ClockCommand::Load { duration: loaded }) => {
                    duration = loaded;
                    playing = false;
                    let _ = events.send(MediaEvent::TimeUpdate(0.0));
                }
                Ok(ClockCommand::Play) => {
                    if position.get() >= duration {
                        position.set(0.0);
                    }
                    playing = duration > 0.0;
                    last_advance = Instant::now();
                }
                Ok(ClockCommand::Pause) => {
                    if playing {
                        advance(&position, &mut last_advance, duration);
                    }
                    playing = false;
                }
                Ok(ClockCommand::Seek(secs)) => {
                    position.set(secs);
                    last_advance = Instant::now();
                    let _ = events.send(MediaEvent::TimeUpdate(secs));
                }
                Ok(ClockCommand::Stop) | Err(TryRecvError::Disconnected) => return,
                Err(TryRecvError::Empty) => break,
            }
        }

        if playing {
            let now = advance(&position, &mut last_advance, duration);
            if events.send(MediaEvent::TimeUpdate(now)).is_err() {
                return;
            }
            if now >= duration {
                playing = false;
                let _ = events.send(MediaEvent::Ended);
            }
        }

        std::thread::sleep(tick);
    }
}

fn advance(position: &SharedPosition, last_advance: &mut Instant, duration: f64) -> f64 {
    let now = Instant::now();
    let elapsed = now.duration_since(*last_advance).as_secs_f64();
    *last_advance = now;
    let next = (position.get() + elapsed).min(duration);
    position.set(next);
    next
}
