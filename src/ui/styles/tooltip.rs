// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for control and marker hints.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Inverted surface so hints stand out against the player panel.
pub fn hint(theme: &Theme) -> container::Style {
    let (background, text) = if matches!(theme, Theme::Light) {
        (palette::GRAY_900, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::GRAY_400,
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a hint tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(hint);

    tooltip(content, tip, position).gap(spacing::XXS)
}
