// SPDX-License-Identifier: MPL-2.0
//! Seek bar with timeline markers.
//!
//! The progress bar owns no state. It renders the current position, the
//! total length and a lane of markers above the seek slider, and reports
//! seek requests and marker activations to the player.

use crate::config::{SEEK_FALLBACK_MAX_SECS, SEEK_SLIDER_STEP_SECS};
use crate::domain::timeline::{
    calculate_marker_position, calculate_range_width, format_time, Marker, MarkerId,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, slider, text, tooltip, Row, Space, Stack};
use iced::{Alignment, Element, Length};

/// Resolution of the marker lane: one portion per thousandth of the timeline.
const LANE_PORTIONS: f64 = 1000.0;

/// Messages emitted by the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Seek to the given position in seconds.
    Seek(f64),
    /// A marker was clicked.
    MarkerPressed(MarkerId),
}

/// View context for rendering the progress bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Values rendered by the progress bar.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub current_time: f64,
    pub duration: f64,
    pub markers: &'a [Marker],
}

/// How a marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerShape {
    /// Fixed-width indicator.
    Point,
    /// Translucent band of the given width (percent) with boundary indicators.
    Range { width: f64 },
}

/// Placement of one marker on the timeline, in percent of the band.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout<'a> {
    pub marker: &'a Marker,
    pub start: f64,
    pub shape: MarkerShape,
}

impl MarkerLayout<'_> {
    /// Portion of the marker that falls inside `[0, 100]`, as `(start, end)`.
    ///
    /// `None` when nothing is visible: the marker lies outside the band, or
    /// its range has zero or negative width.
    #[must_use]
    pub fn visible_span(&self) -> Option<(f64, f64)> {
        match self.shape {
            MarkerShape::Point => {
                (0.0..=100.0)
                    .contains(&self.start)
                    .then_some((self.start, self.start))
            }
            MarkerShape::Range { width } => {
                if width <= 0.0 {
                    return None;
                }
                let start = self.start.max(0.0);
                let end = (self.start + width).min(100.0);
                (start < end).then_some((start, end))
            }
        }
    }
}

/// Computes marker placement without rendering anything.
#[must_use]
pub fn layout_markers(markers: &[Marker], duration: f64) -> Vec<MarkerLayout<'_>> {
    markers
        .iter()
        .map(|marker| {
            let start = calculate_marker_position(marker.timestamp, duration);
            let shape = match marker.end_timestamp {
                Some(end) => MarkerShape::Range {
                    width: calculate_range_width(marker.timestamp, end, duration),
                },
                None => MarkerShape::Point,
            };
            MarkerLayout {
                marker,
                start,
                shape,
            }
        })
        .collect()
}

/// Upper bound of the seek slider.
///
/// Falls back to a fixed sentinel while the duration is unknown so the
/// slider stays usable before metadata loads.
#[must_use]
pub fn seek_max(duration: f64) -> f64 {
    if duration > 0.0 {
        duration
    } else {
        SEEK_FALLBACK_MAX_SECS
    }
}

/// Renders the marker lane, time labels and seek slider.
pub fn view<'a>(ctx: ViewContext<'a>, props: Props<'a>) -> Element<'a, Message> {
    let max = seek_max(props.duration);
    let seek = slider(0.0..=max, props.current_time.clamp(0.0, max), Message::Seek)
        .step(SEEK_SLIDER_STEP_SECS)
        .width(Length::Fill)
        .style(styles::slider::seek);

    let track = column![marker_lane(&ctx, props), seek]
        .spacing(spacing::XXS)
        .width(Length::Fill);

    row![
        time_label(props.current_time),
        track,
        time_label(props.duration),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center)
    .into()
}

fn time_label<'a>(secs: f64) -> Element<'a, Message> {
    container(text(format_time(secs.max(0.0))).size(typography::CAPTION))
        .width(Length::Fixed(sizing::TIME_LABEL_WIDTH))
        .align_x(Alignment::Center)
        .into()
}

fn marker_lane<'a>(ctx: &ViewContext<'a>, props: Props<'a>) -> Element<'a, Message> {
    let lane = layout_markers(props.markers, props.duration)
        .into_iter()
        .filter_map(|layout| {
            let (start, end) = layout.visible_span()?;
            Some(marker_layer(ctx, &layout, start, end))
        })
        .fold(Stack::new(), |lane, layer| lane.push(layer));

    lane.width(Length::Fill)
        .height(Length::Fixed(sizing::MARKER_LANE))
        .into()
}

/// One full-width layer holding a single marker at its offset.
fn marker_layer<'a>(
    ctx: &ViewContext<'a>,
    layout: &MarkerLayout<'a>,
    start: f64,
    end: f64,
) -> Element<'a, Message> {
    let marker = layout.marker;
    let start_label = format_time(marker.timestamp);
    let (content, hint): (Element<'a, Message>, String) = match layout.shape {
        MarkerShape::Point => (
            indicator().into(),
            ctx.i18n
                .tr_with_args("player-marker-at", &[("time", start_label.as_str())]),
        ),
        MarkerShape::Range { .. } => {
            let band = container(Space::new().width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::marker_band);
            let bounded = row![indicator(), band, indicator()]
                .width(Length::Fill)
                .height(Length::Fill);
            let end_label = format_time(marker.end_timestamp.unwrap_or(marker.timestamp));
            (
                bounded.into(),
                ctx.i18n.tr_with_args(
                    "player-marker-range",
                    &[("start", start_label.as_str()), ("end", end_label.as_str())],
                ),
            )
        }
    };

    let hit = button(content)
        .padding(0)
        .width(match layout.shape {
            MarkerShape::Point => Length::Fixed(sizing::MARKER_POINT_WIDTH),
            MarkerShape::Range { .. } => Length::FillPortion(portions(end - start)),
        })
        .height(Length::Fill)
        .style(styles::button::marker)
        .on_press(Message::MarkerPressed(marker.id.clone()));

    let hint = marker.label.clone().unwrap_or(hint);
    let hit = styles::tooltip::styled(hit, hint, tooltip::Position::Top);

    let mut layer = Row::new().width(Length::Fill).height(Length::Fill);
    if start > 0.0 {
        layer = layer.push(Space::new().width(Length::FillPortion(portions(start))));
    }
    layer = layer.push(hit);
    if end < 100.0 {
        layer = layer.push(Space::new().width(Length::FillPortion(portions(100.0 - end))));
    }
    layer.into()
}

fn indicator<'a>() -> container::Container<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(sizing::MARKER_POINT_WIDTH))
        .height(Length::Fill)
        .style(styles::container::marker_point)
}

/// Converts a percentage to lane portions, never returning zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn portions(percent: f64) -> u16 {
    let portions = (percent / 100.0 * LANE_PORTIONS).round();
    portions.clamp(1.0, LANE_PORTIONS) as u16
}
