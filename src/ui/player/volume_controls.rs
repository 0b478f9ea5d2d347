// SPDX-License-Identifier: MPL-2.0
//! Mute button and auto-hiding volume slider.
//!
//! The slider appears when the pointer enters the control and hides again
//! once the pointer has been idle for the configured delay. Visibility is
//! local to this component and never touches playback state; volume and
//! mute intents are forwarded as effects whether or not the slider shows.

use crate::config::VOLUME_SLIDER_STEP;
use crate::domain::playback::{HideDelay, Volume};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, mouse_area, row, slider, text, tooltip, Row};
use iced::{time, Alignment, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// How often an armed hide timer is checked.
const HIDE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Visibility of the volume slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Volume controls state.
#[derive(Debug, Clone, Default)]
pub struct State {
    visibility: Visibility,
    hide_delay: HideDelay,
    /// Armed hide timer: the slider hides once this instant has passed.
    hide_deadline: Option<Instant>,
}

/// Messages for the volume controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer entered the control's hit area.
    PointerEntered,
    /// Pointer left the control's hit area.
    PointerLeft,
    /// Pointer moved anywhere in the window.
    PointerMoved,
    /// Periodic check of the hide timer.
    Tick(Instant),
    /// Volume slider moved.
    SetVolume(f32),
    /// Mute button pressed.
    ToggleMute,
}

/// Effects produced by the volume controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    VolumeChanged(Volume),
    MuteToggled,
    VisibilityChanged(Visibility),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new(hide_delay: HideDelay) -> Self {
        Self {
            hide_delay,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_slider_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Returns true while a hide timer is armed.
    #[must_use]
    pub fn is_hide_pending(&self) -> bool {
        self.hide_deadline.is_some()
    }

    /// Handle a volume controls message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        self.handle_at(message, Instant::now())
    }

    /// Same as [`State::handle`], with an explicit notion of "now".
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::PointerEntered => {
                self.arm(now);
                self.set_visibility(Visibility::Visible)
            }
            Message::PointerLeft => {
                self.arm(now);
                Effect::None
            }
            Message::PointerMoved => {
                if self.is_slider_visible() {
                    self.arm(now);
                }
                Effect::None
            }
            Message::Tick(at) => match self.hide_deadline {
                Some(deadline) if at >= deadline => {
                    self.hide_deadline = None;
                    self.set_visibility(Visibility::Hidden)
                }
                _ => Effect::None,
            },
            Message::SetVolume(level) => Effect::VolumeChanged(Volume::new(level)),
            Message::ToggleMute => Effect::MuteToggled,
        }
    }

    /// Polls the hide timer while it is armed.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.hide_deadline.is_some() {
            time::every(HIDE_POLL_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the mute button and, while visible, the slider.
    pub fn view<'a>(
        &self,
        ctx: ViewContext<'a>,
        volume: Volume,
        is_muted: bool,
    ) -> Element<'a, Message> {
        let glyph = if is_muted || !volume.is_audible() {
            "🔇"
        } else {
            "🔊"
        };
        let hint = ctx
            .i18n
            .tr(if is_muted { "player-unmute" } else { "player-mute" });

        let mute = button(
            text(glyph)
                .size(typography::CONTROL_GLYPH)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .on_press(Message::ToggleMute)
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control);

        let mut controls: Row<'a, Message> =
            row![styles::tooltip::styled(mute, hint, tooltip::Position::Top)]
                .spacing(spacing::XS)
                .align_y(Alignment::Center);

        if self.is_slider_visible() {
            controls = controls.push(
                slider(0.0..=1.0, volume.value(), Message::SetVolume)
                    .step(VOLUME_SLIDER_STEP)
                    .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
                    .style(styles::slider::volume(is_muted)),
            );
        }

        mouse_area(controls)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerLeft)
            .into()
    }

    fn arm(&mut self, now: Instant) {
        self.hide_deadline = Some(now + self.hide_delay.as_duration());
    }

    fn set_visibility(&mut self, visibility: Visibility) -> Effect {
        if self.visibility == visibility {
            return Effect::None;
        }
        self.visibility = visibility;
        Effect::VisibilityChanged(visibility)
    }
}
