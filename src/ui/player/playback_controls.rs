// SPDX-License-Identifier: MPL-2.0
//! Skip, play/pause and feedback buttons.

use crate::domain::playback::SkipStep;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, row, text, tooltip};
use iced::{Alignment, Element, Length};

/// Intents emitted by the playback controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SkipBackward,
    TogglePlayPause,
    SkipForward,
    AddFeedback,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, is_playing: bool, skip_step: SkipStep) -> Element<'a, Message> {
    let seconds = format!("{}", skip_step.value().round());

    let play_pause = control(
        if is_playing { "⏸" } else { "▶" },
        ctx.i18n
            .tr(if is_playing { "player-pause" } else { "player-play" }),
        Message::TogglePlayPause,
        styles::button::primary,
    );
    let back = control(
        "«",
        ctx.i18n
            .tr_with_args("player-skip-backward-by", &[("seconds", seconds.as_str())]),
        Message::SkipBackward,
        styles::button::control,
    );
    let forward = control(
        "»",
        ctx.i18n
            .tr_with_args("player-skip-forward-by", &[("seconds", seconds.as_str())]),
        Message::SkipForward,
        styles::button::control,
    );
    let feedback = control(
        "+",
        ctx.i18n.tr("player-add-feedback"),
        Message::AddFeedback,
        styles::button::control,
    );

    row![back, play_pause, forward, feedback]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .into()
}

fn control<'a>(
    glyph: &'a str,
    hint: String,
    message: Message,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let content = text(glyph)
        .size(typography::CONTROL_GLYPH)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let pressable = button(content)
        .on_press(message)
        .padding(spacing::XXS)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(style);

    styles::tooltip::styled(pressable, hint, tooltip::Position::Top).into()
}
