// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::player;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional audio source to load on startup.
    pub source: Option<String>,
    /// Optional TOML file with timeline markers.
    pub markers_path: Option<String>,
    /// Length reported for every source, in seconds.
    pub duration_secs: Option<f64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CUE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
