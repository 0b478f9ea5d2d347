// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.
//!
//! Provides consistent styling for the seek and volume sliders.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style for the seek slider: brand-colored progress over a neutral rail.
pub fn seek(theme: &Theme, status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);
    let progress = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        slider::Status::Active => palette::PRIMARY_500,
    };
    let remaining = if is_light {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (Background::Color(progress), Background::Color(remaining)),
            width: sizing::TIMELINE_TRACK,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (sizing::TIMELINE_TRACK / 2.0).into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: sizing::SCRUBBER_THUMB / 2.0,
            },
            background: Background::Color(progress),
            border_width: 1.0,
            border_color: palette::PRIMARY_600,
        },
    }
}

/// Style for the volume slider. Grays out while muted.
pub fn volume(muted: bool) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, status: slider::Status| {
        let mut style = seek(theme, status);
        if muted {
            let faded = Background::Color(palette::GRAY_400);
            style.rail.backgrounds.0 = faded;
            style.handle.background = faded;
            style.handle.border_color = palette::GRAY_400;
        }
        style
    }
}
