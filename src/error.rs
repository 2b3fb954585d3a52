// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// Portfolio content could not be parsed or is inconsistent.
    #[error("Content Error: {0}")]
    Content(String),

    /// A gallery controller was requested for an empty item list.
    #[error("Gallery has no items")]
    EmptyGallery,
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Content(_) => "error-content",
            Error::EmptyGallery => "gallery-empty-title",
        }
    }
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
    fn toml_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml must fail").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_are_stable() {
        assert_eq!(Error::EmptyGallery.i18n_key(), "gallery-empty-title");
        assert_eq!(Error::Content("x".into()).i18n_key(), "error-content");
    }
}
