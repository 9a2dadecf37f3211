//! Error types for schedmsg
//!
//! This module defines all error types used throughout the library.
//! The kinds mirror the failure boundaries of the message model: lexical
//! scalar failures, structural/semantic message violations, date/time
//! state unfit for output, and late interpretation of accepted raw values.

use std::fmt;
use thiserror::Error;

/// Result type alias using schedmsg Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schedmsg operations
#[derive(Error, Debug)]
pub enum Error {
    /// A scalar literal could not be parsed into its native type
    #[error("Failed to parse {type_name} from \"{input}\"")]
    Parse {
        /// Name of the attempted target type
        type_name: &'static str,
        /// The offending literal
        input: String,
    },

    /// Structural or semantic violation discovered while reading a message
    #[error(transparent)]
    InvalidMessage(#[from] InvalidMessage),

    /// Date/time state invariant violated when producing output
    #[error("{0}")]
    DateTime(String),

    /// Interpreting an already-accepted raw quantity string failed
    #[error("Failed to parse {type_name} from \"{input}\"")]
    Operation {
        /// Name of the attempted target type
        type_name: &'static str,
        /// The raw string that was interpreted
        input: String,
    },

    /// Low-level XML reading/writing error from the XML engine
    #[error("XML error: {0}")]
    Xml(String),
}

impl Error {
    /// Create a lexical parse error
    pub(crate) fn parse(type_name: &'static str, input: &str) -> Self {
        Error::Parse {
            type_name,
            input: input.to_string(),
        }
    }

    /// Create an invalid-message error without a cause
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Error::InvalidMessage(InvalidMessage::new(message))
    }

    /// Create an invalid-message error retaining the underlying cause
    pub fn invalid_message_with_cause(message: impl Into<String>, cause: Error) -> Self {
        Error::InvalidMessage(InvalidMessage::new(message).with_cause(cause))
    }

    /// Create a date/time state error
    pub fn date_time(message: impl Into<String>) -> Self {
        Error::DateTime(message.into())
    }

    /// Create a low-level XML error
    pub(crate) fn xml(message: impl Into<String>) -> Self {
        Error::Xml(message.into())
    }
}

/// Message-level error with an optional causal chain
///
/// Aggregate entities wrap child failures with contextual identification,
/// so the caller receives one error whose chain leads from the root message
/// down to the offending field.
#[derive(Debug)]
pub struct InvalidMessage {
    /// Human-readable error message
    message: String,
    /// Underlying cause, if any
    cause: Option<Box<Error>>,
}

impl InvalidMessage {
    /// Create a new invalid-message error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_cause(mut self, cause: Error) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The error message without the causal chain
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidMessage {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
