//! Errors raised while assembling a configuration bundle. Constructors fail
//! fast: an error means no configuration was produced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Positionally paired sequences were handed over with different lengths.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The inputs are well formed but outside what the current scheme supports.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),
}

impl ConfigError {
    pub(crate) fn length_mismatch(left: &str, left_len: usize, right: &str, right_len: usize) -> Self {
        ConfigError::InvalidArgument(format!(
            "length of {left} ({left_len}) should match length of {right} ({right_len})"
        ))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn mismatch_message_names_both_sides() {
        let err = ConfigError::length_mismatch("modules", 2, "pins", 1);
        assert_eq!(
            format!("{err}"),
            "invalid argument: length of modules (2) should match length of pins (1)"
        );
    }

    #[test]
    fn unsupported_message_is_prefixed() {
        let err = ConfigError::UnsupportedConfiguration("only one module".to_string());
        assert!(format!("{err}").starts_with("unsupported configuration:"));
    }
}
