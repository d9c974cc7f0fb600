use miette::Diagnostic;
use thiserror::Error;

/// Failures surfaced by the builder and by clock construction.
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    #[error("input must be non-negative, got {input}")]
    #[diagnostic(
        code(snapshot::build::negative_input),
        help("the input is used as a repeat count, pass 0 or a positive number")
    )]
    NegativeInput { input: i32 },

    #[error("invalid instant '{value}'")]
    #[diagnostic(
        code(snapshot::clock::invalid_instant),
        help("use an RFC 3339 timestamp such as 2022-10-01T10:30:00Z")
    )]
    InvalidInstant {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("UTC offset of {minutes} minutes is out of range")]
    #[diagnostic(
        code(snapshot::clock::invalid_offset),
        help("offsets must lie strictly between -24h and +24h")
    )]
    InvalidOffset { minutes: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_input_message() {
        let err = BuildError::NegativeInput { input: -4 };
        assert_eq!(err.to_string(), "input must be non-negative, got -4");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = BuildError::InvalidOffset { minutes: 1440 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("snapshot::clock::invalid_offset"));
        assert!(err.help().is_some());
    }
}
