// SPDX-License-Identifier: MPL-2.0
//! Audio player widget.
//!
//! [`Player`] owns the playback state and the only handle to the media
//! element. Child widgets receive plain values and report intents back as
//! messages; the player applies them to its state and then synchronizes the
//! element, so the element is always the last writer.
//!
//! # Components
//!
//! - [`progress_bar`] - Seek slider, time labels and marker lane
//! - [`playback_controls`] - Skip, play/pause and feedback buttons
//! - [`volume_controls`] - Mute button and auto-hiding volume slider

pub mod playback_controls;
pub mod progress_bar;
pub mod volume_controls;

use crate::domain::playback::{HideDelay, PlaybackState, SkipDirection, SkipStep, Volume};
use crate::domain::timeline::{Marker, MarkerId};
use crate::error::PlayError;
use crate::i18n::fluent::I18n;
use crate::media::{element_events, EventSource, MediaElement, MediaEvent, PlayFuture};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{column, container, row, Space};
use iced::{Alignment, Element, Length, Subscription, Task};

/// Preferences applied when a player is created.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub volume: Volume,
    pub muted: bool,
    pub skip_step: SkipStep,
    pub hide_delay: HideDelay,
}

/// Messages handled by the player.
#[derive(Debug, Clone)]
pub enum Message {
    /// Lifecycle event reported by the media element.
    Media(MediaEvent),
    Controls(playback_controls::Message),
    Progress(progress_bar::Message),
    Volume(volume_controls::Message),
    /// Outcome of a play request.
    PlayResolved(Result<(), PlayError>),
}

/// Events propagated to the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Position changed, as reported by the element (seconds).
    TimeUpdated(f64),
    /// A marker was clicked.
    MarkerActivated(MarkerId),
    /// The user asked to leave feedback at the current position.
    AddFeedback { at_secs: f64 },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Last values written to the element, per synchronized slice.
#[derive(Debug, Clone, Copy, Default)]
struct SyncedSlices {
    playing: bool,
    volume: Option<Volume>,
}

/// Player container.
pub struct Player {
    element: Box<dyn MediaElement>,
    events: EventSource,
    source: Option<String>,
    playback: PlaybackState,
    markers: Vec<Marker>,
    skip_step: SkipStep,
    volume_controls: volume_controls::State,
    synced: SyncedSlices,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("source", &self.source)
            .field("playback", &self.playback)
            .field("markers", &self.markers.len())
            .field("volume_controls", &self.volume_controls)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Creates a player driving `element` and writes the initial volume.
    pub fn new(mut element: Box<dyn MediaElement>, settings: Settings) -> Self {
        let events = EventSource::new(element.take_events());
        let mut player = Self {
            element,
            events,
            source: None,
            playback: PlaybackState {
                volume: settings.volume,
                is_muted: settings.muted,
                ..PlaybackState::default()
            },
            markers: Vec::new(),
            skip_step: settings.skip_step,
            volume_controls: volume_controls::State::new(settings.hide_delay),
            synced: SyncedSlices::default(),
        };
        // Nothing is playing yet, so no play request can come out of this.
        let _ = player.sync_element();
        player
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn volume_controls(&self) -> &volume_controls::State {
        &self.volume_controls
    }

    /// Replaces the marker snapshot.
    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    /// Loads a new source. Position, duration and playing flag start over.
    pub fn set_source(&mut self, source: impl Into<String>) -> Task<Message> {
        let source = source.into();
        tracing::info!(%source, "loading audio source");
        self.element.load(&source);
        self.source = Some(source);
        self.playback.reset_for_source();
        self.sync_element()
    }

    pub fn update(&mut self, message: Message) -> (Task<Message>, Event) {
        let event = match message {
            Message::Media(event) => self.handle_media_event(event),
            Message::Controls(message) => self.handle_controls(message),
            Message::Progress(progress_bar::Message::Seek(secs)) => {
                self.handle_seek(secs);
                Event::None
            }
            Message::Progress(progress_bar::Message::MarkerPressed(id)) => {
                Event::MarkerActivated(id)
            }
            Message::Volume(message) => {
                match self.volume_controls.handle(message) {
                    volume_controls::Effect::VolumeChanged(volume) => {
                        self.handle_volume_change(volume);
                    }
                    volume_controls::Effect::MuteToggled => self.toggle_mute(),
                    volume_controls::Effect::VisibilityChanged(_)
                    | volume_controls::Effect::None => {}
                }
                Event::None
            }
            Message::PlayResolved(Ok(())) => Event::None,
            Message::PlayResolved(Err(err)) => {
                tracing::warn!(error = %err, "play request rejected");
                self.playback.is_playing = false;
                Event::None
            }
        };

        (self.sync_element(), event)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            element_events(&self.events).map(Message::Media),
            self.volume_controls.subscription().map(Message::Volume),
        ])
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let progress = progress_bar::view(
            progress_bar::ViewContext { i18n: ctx.i18n },
            progress_bar::Props {
                current_time: self.playback.current_time,
                duration: self.playback.duration,
                markers: &self.markers,
            },
        )
        .map(Message::Progress);

        let controls = playback_controls::view(
            playback_controls::ViewContext { i18n: ctx.i18n },
            self.playback.is_playing,
            self.skip_step,
        )
        .map(Message::Controls);

        let volume = self
            .volume_controls
            .view(
                volume_controls::ViewContext { i18n: ctx.i18n },
                self.playback.volume,
                self.playback.is_muted,
            )
            .map(Message::Volume);

        let toolbar = row![controls, Space::new().width(Length::Fill), volume]
            .spacing(spacing::XS)
            .align_y(Alignment::Center);

        container(column![progress, toolbar].spacing(spacing::XS))
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }

    fn handle_media_event(&mut self, event: MediaEvent) -> Event {
        match event {
            MediaEvent::TimeUpdate(secs) => {
                self.playback.current_time = secs;
                Event::TimeUpdated(secs)
            }
            MediaEvent::LoadedMetadata { duration } => {
                tracing::debug!(duration, "metadata loaded");
                self.playback.duration = duration;
                Event::None
            }
            MediaEvent::Ended => {
                self.playback.is_playing = false;
                Event::None
            }
        }
    }

    fn handle_controls(&mut self, message: playback_controls::Message) -> Event {
        match message {
            playback_controls::Message::TogglePlayPause => self.playback.toggle_playing(),
            playback_controls::Message::SkipBackward => self.skip(SkipDirection::Backward),
            playback_controls::Message::SkipForward => self.skip(SkipDirection::Forward),
            playback_controls::Message::AddFeedback => {
                return Event::AddFeedback {
                    at_secs: self.playback.current_time,
                };
            }
        }
        Event::None
    }

    fn handle_seek(&mut self, secs: f64) {
        self.element.set_current_time(secs);
        self.playback.current_time = secs;
    }

    fn handle_volume_change(&mut self, volume: Volume) {
        self.playback.change_volume(volume);
    }

    fn toggle_mute(&mut self) {
        self.playback.toggle_muted();
    }

    fn skip(&mut self, direction: SkipDirection) {
        let target = self.playback.skip_target(self.skip_step, direction);
        self.handle_seek(target);
    }

    /// Writes every state slice that differs from what the element last saw.
    fn sync_element(&mut self) -> Task<Message> {
        match self.write_changed_slices() {
            Some(pending) => Task::perform(pending, Message::PlayResolved),
            None => Task::none(),
        }
    }

    /// Returns the element's pending play result when playback was requested.
    fn write_changed_slices(&mut self) -> Option<PlayFuture> {
        let mut pending = None;

        if self.playback.is_playing != self.synced.playing {
            self.synced.playing = self.playback.is_playing;
            if self.playback.is_playing {
                tracing::debug!("requesting playback");
                pending = Some(self.element.play());
            } else {
                tracing::debug!("pausing playback");
                self.element.pause();
            }
        }

        let volume = self.playback.effective_volume();
        if self.synced.volume != Some(volume) {
            self.element.set_volume(volume.value());
            self.synced.volume = Some(volume);
        }

        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::EventReceiver;
    use crate::test_utils::assert_abs_diff_eq;
    use futures_util::future::{self, FutureExt};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load(String),
        Seek(f64),
        Play,
        Pause,
        Volume(f32),
    }

    /// Records every command and reports a fixed duration. `play()` resolves
    /// to `play_result`.
    struct FakeElement {
        calls: Rc<RefCell<Vec<Call>>>,
        duration: f64,
        position: f64,
        play_result: Result<(), PlayError>,
    }

    impl MediaElement for FakeElement {
        fn load(&mut self, source: &str) {
            self.calls.borrow_mut().push(Call::Load(source.to_string()));
        }

        fn current_time(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn set_current_time(&mut self, secs: f64) {
            self.position = secs;
            self.calls.borrow_mut().push(Call::Seek(secs));
        }

        fn play(&mut self) -> PlayFuture {
            self.calls.borrow_mut().push(Call::Play);
            future::ready(self.play_result.clone()).boxed()
        }

        fn pause(&mut self) {
            self.calls.borrow_mut().push(Call::Pause);
        }

        fn set_volume(&mut self, volume: f32) {
            self.calls.borrow_mut().push(Call::Volume(volume));
        }

        fn take_events(&mut self) -> Option<EventReceiver> {
            None
        }
    }

    fn player_with(settings: Settings) -> (Player, Rc<RefCell<Vec<Call>>>) {
        loaded_player(settings, Ok(()))
    }

    fn loaded_player(
        settings: Settings,
        play_result: Result<(), PlayError>,
    ) -> (Player, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let element = FakeElement {
            calls: Rc::clone(&calls),
            duration: 120.0,
            position: 0.0,
            play_result,
        };
        let mut player = Player::new(Box::new(element), settings);
        let _ = player.set_source("track.ogg");
        let _ = player.update(Message::Media(MediaEvent::LoadedMetadata { duration: 120.0 }));
        calls.borrow_mut().clear();
        (player, calls)
    }

    fn player() -> (Player, Rc<RefCell<Vec<Call>>>) {
        player_with(Settings::default())
    }

    fn at(player: &mut Player, secs: f64) {
        let _ = player.update(Message::Media(MediaEvent::TimeUpdate(secs)));
    }

    fn controls(player: &mut Player, message: playback_controls::Message) -> Event {
        player.update(Message::Controls(message)).1
    }

    fn volume(player: &mut Player, message: volume_controls::Message) {
        let _ = player.update(Message::Volume(message));
    }

    #[test]
    fn initial_volume_is_written_on_creation() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let element = FakeElement {
            calls: Rc::clone(&calls),
            duration: 0.0,
            position: 0.0,
            play_result: Ok(()),
        };
        let _player = Player::new(
            Box::new(element),
            Settings {
                volume: Volume::new(0.5),
                muted: true,
                ..Settings::default()
            },
        );
        assert_eq!(*calls.borrow(), vec![Call::Volume(0.0)]);
    }

    #[test]
    fn time_update_is_mirrored_and_forwarded() {
        let (mut player, _) = player();
        let (_, event) = player.update(Message::Media(MediaEvent::TimeUpdate(12.5)));
        assert_abs_diff_eq!(player.playback().current_time, 12.5);
        assert_eq!(event, Event::TimeUpdated(12.5));
    }

    #[test]
    fn metadata_sets_duration() {
        let (mut player, _) = player();
        let _ = player.update(Message::Media(MediaEvent::LoadedMetadata { duration: 61.0 }));
        assert_abs_diff_eq!(player.playback().duration, 61.0);
    }

    #[test]
    fn toggle_play_pause_drives_element() {
        let (mut player, calls) = player();

        controls(&mut player, playback_controls::Message::TogglePlayPause);
        assert!(player.playback().is_playing);
        assert_eq!(*calls.borrow(), vec![Call::Play]);

        controls(&mut player, playback_controls::Message::TogglePlayPause);
        assert!(!player.playback().is_playing);
        assert_eq!(*calls.borrow(), vec![Call::Play, Call::Pause]);
    }

    #[test]
    fn ended_stops_playing() {
        let (mut player, _) = player();
        controls(&mut player, playback_controls::Message::TogglePlayPause);
        let _ = player.update(Message::Media(MediaEvent::Ended));
        assert!(!player.playback().is_playing);
    }

    #[test]
    fn rejected_play_resets_playing_flag() {
        let (mut player, calls) = player();
        controls(&mut player, playback_controls::Message::TogglePlayPause);
        assert!(player.playback().is_playing);

        let _ = player.update(Message::PlayResolved(Err(PlayError::NotAllowed(
            "autoplay blocked".into(),
        ))));
        assert!(!player.playback().is_playing);
        assert_eq!(*calls.borrow(), vec![Call::Play, Call::Pause]);
    }

    /// Toggles playback and returns what the element's play request resolved to.
    async fn request_play(player: &mut Player) -> Result<(), PlayError> {
        player.playback.toggle_playing();
        let pending = player
            .write_changed_slices()
            .expect("play request issued");
        pending.await
    }

    #[tokio::test]
    async fn element_rejection_flows_back_and_stops_playback() {
        let (mut player, calls) = loaded_player(
            Settings::default(),
            Err(PlayError::NotAllowed("autoplay blocked".into())),
        );

        let result = request_play(&mut player).await;
        assert!(player.playback().is_playing);
        assert_eq!(result, Err(PlayError::NotAllowed("autoplay blocked".into())));

        let _ = player.update(Message::PlayResolved(result));
        assert!(!player.playback().is_playing);
        assert_eq!(*calls.borrow(), vec![Call::Play, Call::Pause]);
    }

    #[tokio::test]
    async fn clock_element_without_source_rejects_play() {
        let mut player = Player::new(
            Box::new(crate::media::ClockElement::new(30.0)),
            Settings::default(),
        );

        let result = request_play(&mut player).await;
        assert_eq!(result, Err(PlayError::NoSource));

        let _ = player.update(Message::PlayResolved(result));
        assert!(!player.playback().is_playing);
    }

    #[tokio::test]
    async fn accepted_play_keeps_playing() {
        let (mut player, _) = player();
        let result = request_play(&mut player).await;
        let _ = player.update(Message::PlayResolved(result));
        assert!(player.playback().is_playing);
    }

    #[test]
    fn resolved_play_keeps_playing() {
        let (mut player, _) = player();
        controls(&mut player, playback_controls::Message::TogglePlayPause);
        let _ = player.update(Message::PlayResolved(Ok(())));
        assert!(player.playback().is_playing);
    }

    #[test]
    fn seek_writes_element_and_mirrors_immediately() {
        let (mut player, calls) = player();
        let _ = player.update(Message::Progress(progress_bar::Message::Seek(42.0)));
        assert_abs_diff_eq!(player.playback().current_time, 42.0);
        assert_eq!(*calls.borrow(), vec![Call::Seek(42.0)]);
    }

    #[test]
    fn skip_forward_near_end_clamps_to_duration() {
        let (mut player, calls) = player();
        at(&mut player, 115.0);
        controls(&mut player, playback_controls::Message::SkipForward);
        assert_abs_diff_eq!(player.playback().current_time, 120.0);
        assert_eq!(*calls.borrow(), vec![Call::Seek(120.0)]);
    }

    #[test]
    fn skip_backward_near_start_clamps_to_zero() {
        let (mut player, _) = player();
        at(&mut player, 5.0);
        controls(&mut player, playback_controls::Message::SkipBackward);
        assert_abs_diff_eq!(player.playback().current_time, 0.0);
    }

    #[test]
    fn skip_uses_configured_step() {
        let (mut player, _) = player_with(Settings {
            skip_step: SkipStep::new(30.0),
            ..Settings::default()
        });
        at(&mut player, 40.0);
        controls(&mut player, playback_controls::Message::SkipBackward);
        assert_abs_diff_eq!(player.playback().current_time, 10.0);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        let (mut player, calls) = player();
        volume(&mut player, volume_controls::Message::SetVolume(0.6));
        volume(&mut player, volume_controls::Message::ToggleMute);
        assert!(player.playback().is_muted);
        volume(&mut player, volume_controls::Message::ToggleMute);

        assert!(!player.playback().is_muted);
        assert_abs_diff_eq!(player.playback().volume.value(), 0.6);
        assert_eq!(
            *calls.borrow(),
            vec![Call::Volume(0.6), Call::Volume(0.0), Call::Volume(0.6)]
        );
    }

    #[test]
    fn raising_volume_while_muted_unmutes() {
        let (mut player, calls) = player_with(Settings {
            muted: true,
            ..Settings::default()
        });
        volume(&mut player, volume_controls::Message::SetVolume(0.3));
        assert!(!player.playback().is_muted);
        assert_abs_diff_eq!(player.playback().volume.value(), 0.3);
        assert_eq!(*calls.borrow(), vec![Call::Volume(0.3)]);
    }

    #[test]
    fn unchanged_slices_are_not_rewritten() {
        let (mut player, calls) = player();
        at(&mut player, 1.0);
        volume(&mut player, volume_controls::Message::PointerEntered);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn marker_press_is_forwarded() {
        let (mut player, _) = player();
        player.set_markers(vec![Marker::point("intro", 3.0)]);
        let (_, event) = player.update(Message::Progress(
            progress_bar::Message::MarkerPressed(MarkerId::new("intro")),
        ));
        assert_eq!(event, Event::MarkerActivated(MarkerId::new("intro")));
        assert_eq!(player.markers().len(), 1);
    }

    #[test]
    fn add_feedback_carries_position() {
        let (mut player, _) = player();
        at(&mut player, 33.0);
        let event = controls(&mut player, playback_controls::Message::AddFeedback);
        assert_eq!(event, Event::AddFeedback { at_secs: 33.0 });
    }

    #[test]
    fn new_source_resets_transport_and_pauses() {
        let (mut player, calls) = player();
        controls(&mut player, playback_controls::Message::TogglePlayPause);
        at(&mut player, 50.0);

        let _ = player.set_source("other.ogg");
        assert_eq!(player.source(), Some("other.ogg"));
        assert!(!player.playback().is_playing);
        assert_abs_diff_eq!(player.playback().current_time, 0.0);
        assert_abs_diff_eq!(player.playback().duration, 0.0);
        assert_eq!(
            *calls.borrow(),
            vec![Call::Play, Call::Load("other.ogg".into()), Call::Pause]
        );
    }
}
