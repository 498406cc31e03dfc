//! Argument kinds and their value conversion.
//!
//! The set of kinds is closed: a flag carries no value, the parameter kinds
//! convert each raw piece into a [`Value`]. Typed handles project stored
//! values back out through [`ValueKind`].

use crate::error::{ArgumentError, Result};

/// Which kind of argument a specification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// No value; only presence is recorded.
    Flag,
    /// String-valued parameter.
    Text,
    /// 32-bit signed integer parameter.
    Integer,
}

/// One converted value piece.
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i32),
}

impl ArgumentKind {
    /// Whether a named occurrence consumes the following token.
    pub fn expects_value(self) -> bool {
        !matches!(self, ArgumentKind::Flag)
    }

    /// Convert one raw piece. Flags never hold values, so only the
    /// parameter kinds are converted.
    pub(crate) fn convert(self, piece: &str) -> Result<Value> {
        match self {
            ArgumentKind::Flag | ArgumentKind::Text => Ok(Value::Text(piece.to_string())),
            ArgumentKind::Integer => {
                piece
                    .parse::<i32>()
                    .map(Value::Integer)
                    .map_err(|_| ArgumentError::ConversionError {
                        piece: piece.to_string(),
                        expected: "an integer",
                    })
            }
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Text {}
    impl Sealed for super::Integer {}
}

/// A parameter kind with a concrete Rust value type.
///
/// Implemented by [`Text`] and [`Integer`]; the trait is sealed.
pub trait ValueKind: sealed::Sealed + Send + Sync + 'static {
    /// The type handed out by accessors and validators.
    type Value: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// The runtime tag matching this kind.
    const KIND: ArgumentKind;

    #[doc(hidden)]
    fn project(value: &Value) -> Option<&Self::Value>;
}

/// Marker for string-valued parameters.
#[derive(Debug, Clone, Copy)]
pub struct Text;

/// Marker for integer-valued parameters.
#[derive(Debug, Clone, Copy)]
pub struct Integer;

impl ValueKind for Text {
    type Value = String;
    const KIND: ArgumentKind = ArgumentKind::Text;

    fn project(value: &Value) -> Option<&String> {
        match value {
            Value::Text(s) => Some(s),
            Value::Integer(_) => None,
        }
    }
}

impl ValueKind for Integer {
    type Value = i32;
    const KIND: ArgumentKind = ArgumentKind::Integer;

    fn project(value: &Value) -> Option<&i32> {
        match value {
            Value::Integer(i) => Some(i),
            Value::Text(_) => None,
        }
    }
}
