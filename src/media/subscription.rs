// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for media element events.
//!
//! The element hands out its event receiver once. [`EventSource`] parks it
//! until the subscription starts, then the subscription drains it into the
//! UI event loop for as long as the element lives.

use super::{EventReceiver, MediaEvent};
use iced::futures::SinkExt;
use iced::stream;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Subscription ID for one element's event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventSourceId(u64);

/// Parked event receiver of a media element.
#[derive(Debug, Clone)]
pub struct EventSource {
    id: EventSourceId,
    receiver: Arc<Mutex<Option<EventReceiver>>>,
}

impl std::hash::Hash for EventSource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl EventSource {
    /// Wraps a receiver. `None` yields a source that never emits.
    #[must_use]
    pub fn new(receiver: Option<EventReceiver>) -> Self {
        Self {
            id: EventSourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed)),
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    #[must_use]
    pub fn id(&self) -> EventSourceId {
        self.id
    }

    /// Takes the parked receiver, leaving `None` behind.
    fn take(&self) -> Option<EventReceiver> {
        match self.receiver.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

/// Creates a subscription delivering the events of one media element.
///
/// The subscription is keyed by the source ID, so it keeps running across
/// view updates and ends when the element's sender side is dropped.
pub fn element_events(source: &EventSource) -> iced::Subscription<MediaEvent> {
    iced::Subscription::run_with(source.clone(), |source: &EventSource| {
        let parked = source.clone();
        stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<MediaEvent>| async move {
            let Some(mut receiver) = parked.take() else {
                tracing::debug!(id = ?parked.id(), "media events already taken");
                return;
            };

            while let Some(event) = receiver.recv().await {
                if output.send(event).await.is_err() {
                    break;
                }
            }
            tracing::debug!(id = ?parked.id(), "media event stream closed");
        })
    })
}
