// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window, pointer and keyboard events to the player.

use super::Message;
use crate::ui::player::{self, playback_controls, volume_controls};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, window, Subscription};

/// Creates the native event subscription.
///
/// - Window close requests go to the app for cleanup.
/// - Any pointer movement feeds the volume slider's inactivity timer.
/// - Keyboard shortcuts apply only when no widget captured the key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Mouse(mouse::Event::CursorMoved { .. }) => Some(Message::Player(
            player::Message::Volume(volume_controls::Message::PointerMoved),
        )),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored && modifiers.is_empty() =>
        {
            shortcut(&key).map(Message::Player)
        }
        _ => None,
    })
}

/// Maps a key to a player command.
///
/// Space toggles playback, arrows skip, `M` toggles mute.
#[must_use]
pub fn shortcut(key: &Key) -> Option<player::Message> {
    match key.as_ref() {
        Key::Named(Named::Space) => Some(player::Message::Controls(
            playback_controls::Message::TogglePlayPause,
        )),
        Key::Named(Named::ArrowLeft) => Some(player::Message::Controls(
            playback_controls::Message::SkipBackward,
        )),
        Key::Named(Named::ArrowRight) => Some(player::Message::Controls(
            playback_controls::Message::SkipForward,
        )),
        Key::Character("m" | "M") => Some(player::Message::Volume(
            volume_controls::Message::ToggleMute,
        )),
        _ => None,
    }
}
