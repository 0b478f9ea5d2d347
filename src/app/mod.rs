// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts a single audio player in a window.
//!
//! The `App` struct wires the player to localization and persisted
//! preferences. Player events that concern the host (marker clicks, feedback
//! requests) end up here and are logged; volume and mute are written back to
//! the config file when the window closes.

pub mod markers;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};
pub use subscription::shortcut;

use crate::config::{self, Config, PlayerConfig, DEFAULT_SOURCE_DURATION_SECS};
use crate::domain::playback::{HideDelay, SkipStep, Volume};
use crate::domain::timeline::format_time;
use crate::i18n::fluent::I18n;
use crate::media::ClockElement;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::player::{self, Player};
use crate::ui::theming::ThemeMode;
use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    player: Player,
    theme_mode: ThemeMode,
    config: Config,
    /// i18n key of a startup warning to show under the player.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("player", &self.player)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 180;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 140;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
///
/// Close requests are handled by the app so preferences can be saved first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Player preferences from the `[player]` config section, clamped to their
/// valid ranges.
pub fn player_settings(config: &PlayerConfig) -> player::Settings {
    let mut settings = player::Settings::default();
    if let Some(volume) = config.volume {
        settings.volume = Volume::new(volume);
    }
    if let Some(muted) = config.muted {
        settings.muted = muted;
    }
    if let Some(step) = config.skip_step_secs {
        settings.skip_step = SkipStep::new(step);
    }
    if let Some(millis) = config.volume_slider_hide_ms {
        settings.hide_delay = HideDelay::from_millis(millis);
    }
    settings
}

/// Short display name of a source: its file name when it has one.
fn source_label(source: &str) -> &str {
    Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source)
}

impl App {
    /// Loads config and translations, then mounts the player on the
    /// source and markers given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let duration = flags.duration_secs.unwrap_or(DEFAULT_SOURCE_DURATION_SECS);
        let mut player = Player::new(
            Box::new(ClockElement::new(duration)),
            player_settings(&config.player),
        );

        if let Some(path) = flags.markers_path.as_deref() {
            match markers::load_markers(Path::new(path)) {
                Ok(markers) => {
                    tracing::info!(count = markers.len(), path, "loaded markers");
                    player.set_markers(markers);
                }
                Err(err) => tracing::warn!(path, error = %err, "failed to load markers"),
            }
        }

        let mut task = Task::none();
        if let Some(source) = flags.source {
            task = player.set_source(source);
            if config.player.autoplay.unwrap_or(false) {
                let (play, _) = player.update(player::Message::Controls(
                    player::playback_controls::Message::TogglePlayPause,
                ));
                task = Task::batch([task, play]);
            }
        }

        let app = App {
            i18n,
            player,
            theme_mode: config.general.theme_mode,
            config,
            warning,
        };
        (app, task.map(Message::Player))
    }

    fn title(&self) -> String {
        match self.player.source() {
            Some(source) => self
                .i18n
                .tr_with_args("window-title-with-source", &[("source", source_label(source))]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.player.subscription().map(Message::Player),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => {
                let (task, event) = self.player.update(message);
                self.handle_player_event(event);
                task.map(Message::Player)
            }
            Message::WindowCloseRequested(id) => {
                self.persist_preferences();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column![self
            .player
            .view(player::ViewContext { i18n: &self.i18n })
            .map(Message::Player)]
        .spacing(spacing::XS);

        if self.player.source().is_none() {
            content = content.push(
                text(self.i18n.tr("player-no-source")).size(typography::CAPTION),
            );
        }
        if let Some(key) = &self.warning {
            content = content.push(text(self.i18n.tr(key)).size(typography::CAPTION));
        }

        container(content)
            .padding(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn handle_player_event(&self, event: player::Event) {
        match event {
            player::Event::None => {}
            player::Event::TimeUpdated(secs) => tracing::trace!(secs, "position"),
            player::Event::MarkerActivated(id) => {
                let marker = self.player.markers().iter().find(|marker| marker.id == id);
                tracing::info!(
                    marker = %id,
                    at = ?marker.map(|marker| format_time(marker.timestamp)),
                    "marker activated"
                );
            }
            player::Event::AddFeedback { at_secs } => {
                tracing::info!(at = %format_time(at_secs), "feedback requested");
            }
        }
    }

    /// Writes the current volume and mute state back to the config file.
    fn persist_preferences(&mut self) {
        let playback = self.player.playback();
        self.config.player.volume = Some(playback.volume.value());
        self.config.player.muted = Some(playback.is_muted);
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(error = %err, "failed to save preferences");
        }
    }
}
