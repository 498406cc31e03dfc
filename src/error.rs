//! Error types for argument declaration and parsing.
//!
//! Every failure the engine can report is a variant of [`ArgumentError`].
//! The variants carry enough context (names, tokens, offending pieces) to
//! produce a message an end user can act on.

use thiserror::Error;

/// Errors raised while declaring, parsing or querying arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A name was empty, whitespace-only, or started with a dash.
    #[error("Invalid argument name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A name is already claimed by another argument of the same manager.
    #[error("Argument name '{name}' is already taken")]
    DuplicateName { name: String },

    /// A general-phase builder method was called after `finish_general`.
    #[error("The builder has already finished")]
    BuilderAlreadyFinished,

    /// The multi-value separator was a whitespace character.
    #[error("Separator {separator:?} cannot be a whitespace character")]
    InvalidSeparator { separator: char },

    /// A dash-prefixed token matched no declared name.
    #[error("Unknown argument name '{token}'")]
    UnknownOption { token: String },

    /// An option expecting a value was the last token.
    #[error("Argument '{token}' expects a parameter")]
    MissingParameter { token: String },

    /// A value piece could not be converted to the argument's type.
    #[error("Cannot convert '{piece}' to {expected}")]
    ConversionError {
        piece: String,
        expected: &'static str,
    },

    /// A converted value was rejected by the argument's validator.
    #[error("Validation failed with value '{piece}'")]
    ValidationError { piece: String },

    /// A required argument was not present after the whole scan.
    #[error("Required argument {argument} is not set")]
    MissingRequiredArgument { argument: String },

    /// A second explicit parse was requested.
    #[error("Only single parsing is allowed")]
    AlreadyParsed,

    /// The parse result was needed while the pass was still running, for
    /// instance from inside a validator.
    #[error("Arguments are being parsed")]
    ParseInProgress,

    /// A value index outside `0..count` was requested.
    #[error("Value index {index} is out of range (argument has {count} values)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The raw token vector could not be obtained.
    #[error("Arguments cannot be absent: {reason}")]
    NullTokenVector { reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArgumentError>;
