// SPDX-License-Identifier: MPL-2.0
//! Binding to the host's native media element.
//!
//! The player never decodes audio itself. It drives an element through the
//! [`MediaElement`] trait and mirrors the lifecycle events the element emits.
//! [`ClockElement`] is a transport-only implementation used by the demo host.

pub mod clock;
pub mod subscription;

use crate::error::PlayError;
use futures_util::future::BoxFuture;
use tokio::sync::mpsc;

pub use clock::ClockElement;
pub use subscription::{element_events, EventSource};

/// Deferred result of [`MediaElement::play`].
pub type PlayFuture = BoxFuture<'static, Result<(), PlayError>>;

/// Receiving end of an element's lifecycle events.
pub type EventReceiver = mpsc::UnboundedReceiver<MediaEvent>;

/// Lifecycle events observed on a media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position changed (seconds).
    TimeUpdate(f64),
    /// Metadata loaded; total length is now known.
    LoadedMetadata { duration: f64 },
    /// Playback reached the end of the source.
    Ended,
}

/// Control surface of a native playback primitive.
///
/// Implementations own decoding and output. Only the player container holds
/// an element; child widgets receive plain values.
pub trait MediaElement {
    /// Starts loading a new source. `LoadedMetadata` follows once the
    /// duration is known.
    fn load(&mut self, source: &str);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Total length in seconds, `0.0` until metadata has loaded.
    fn duration(&self) -> f64;

    /// Seeks to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Requests playback. The request may be rejected, e.g. by an autoplay
    /// policy; nothing should be assumed until the future resolves.
    fn play(&mut self) -> PlayFuture;

    fn pause(&mut self);

    /// Sets the output level in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Hands out the event stream. Returns `None` once it has been taken.
    fn take_events(&mut self) -> Option<EventReceiver>;
}
