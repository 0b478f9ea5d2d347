// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Markers Error: {0}")]
    Markers(String),
}

/// Reasons a media element can refuse to start playback.
///
/// The player only ever recovers from these locally; they are never
/// surfaced to the host application.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PlayError {
    /// Playback was blocked by the platform (e.g., autoplay policy).
    #[error("playback not allowed: {0}")]
    NotAllowed(String),

    /// No source has been loaded into the element.
    #[error("no media source loaded")]
    NoSource,

    /// The element stopped before the request reached it.
    #[error("play request aborted")]
    Aborted,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn play_error_messages() {
        assert_eq!(
            PlayError::NotAllowed("autoplay".into()).to_string(),
            "playback not allowed: autoplay"
        );
        assert_eq!(PlayError::Aborted.to_string(), "play request aborted");
    }
}
