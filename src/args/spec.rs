//! Argument specification — the declared shape of one argument plus its
//! parse result slot.

use crate::args::kind::{ArgumentKind, Value};
use crate::args::validator::ErasedValidator;
use crate::error::{ArgumentError, Result};

/// How many values one occurrence carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    /// Flag: presence only.
    NoValue,
    /// Exactly one value, never split.
    Single,
    /// One token split on the separator.
    Multi(char),
}

#[derive(Clone)]
pub(crate) struct ArgumentSpec {
    pub(crate) names: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) required: bool,
    pub(crate) arity: Arity,
    pub(crate) validator: Option<ErasedValidator>,
    pub(crate) kind: ArgumentKind,
    /// `None` until the parse pass assigns it.
    pub(crate) result: Option<Vec<Value>>,
}

impl ArgumentSpec {
    pub(crate) fn new(kind: ArgumentKind) -> Self {
        let arity = if kind.expects_value() {
            Arity::Single
        } else {
            Arity::NoValue
        };
        Self {
            names: Vec::new(),
            description: None,
            required: false,
            arity,
            validator: None,
            kind,
            result: None,
        }
    }

    pub(crate) fn is_positional(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.result.is_some()
    }

    pub(crate) fn value_count(&self) -> usize {
        self.result.as_ref().map_or(0, Vec::len)
    }

    pub(crate) fn answers_to(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names rendered as `[a, b]`.
    pub(crate) fn display_names(&self) -> String {
        format!("[{}]", self.names.join(", "))
    }

    pub(crate) fn set_separator(&mut self, separator: char) -> Result<()> {
        if separator.is_whitespace() {
            return Err(ArgumentError::InvalidSeparator { separator });
        }
        self.arity = Arity::Multi(separator);
        Ok(())
    }

    /// Mark the argument present without any value (flag occurrence).
    pub(crate) fn mark_present(&mut self) {
        self.result = Some(Vec::new());
    }

    /// Split, convert and validate `raw`, then replace the result.
    ///
    /// Nothing is written unless every piece converts and validates.
    pub(crate) fn assign(&mut self, raw: &str) -> Result<()> {
        if self.arity == Arity::NoValue {
            self.mark_present();
            return Ok(());
        }

        let pieces: Vec<&str> = match self.arity {
            Arity::Multi(separator) => raw.split(separator).collect(),
            Arity::Single | Arity::NoValue => vec![raw],
        };

        let values = pieces
            .iter()
            .map(|piece| self.kind.convert(piece))
            .collect::<Result<Vec<_>>>()?;

        if let Some(validator) = &self.validator {
            if let Some(index) = values.iter().position(|v| !validator(v)) {
                return Err(ArgumentError::ValidationError {
                    piece: pieces[index].to_string(),
                });
            }
        }

        self.result = Some(values);
        Ok(())
    }
}

impl std::fmt::Debug for ArgumentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentSpec")
            .field("names", &self.names)
            .field("description", &self.description)
            .field("required", &self.required)
            .field("arity", &self.arity)
            .field("has_validator", &self.validator.is_some())
            .field("kind", &self.kind)
            .field("result", &self.result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::kind::Integer;
    use crate::args::validator::erase;

    #[test]
    fn new_spec_arity_follows_kind() {
        assert_eq!(ArgumentSpec::new(ArgumentKind::Flag).arity, Arity::NoValue);
        assert_eq!(ArgumentSpec::new(ArgumentKind::Text).arity, Arity::Single);
    }

    #[test]
    fn whitespace_separator_rejected() {
        let mut spec = ArgumentSpec::new(ArgumentKind::Text);
        assert_eq!(
            spec.set_separator(' '),
            Err(ArgumentError::InvalidSeparator { separator: ' ' })
        );
        assert_eq!(
            spec.set_separator('\t'),
            Err(ArgumentError::InvalidSeparator { separator: '\t' })
        );
        assert_eq!(spec.arity, Arity::Single);
        spec.set_separator(':').unwrap();
        assert_eq!(spec.arity, Arity::Multi(':'));
    }

    #[test]
    fn single_value_is_not_split() {
        let mut spec = ArgumentSpec::new(ArgumentKind::Text);
        spec.assign("a:b").unwrap();
        assert_eq!(spec.result, Some(vec![Value::Text("a:b".into())]));
    }

    #[test]
    fn multi_value_keeps_empty_pieces() {
        let mut spec = ArgumentSpec::new(ArgumentKind::Text);
        spec.set_separator(':').unwrap();
        spec.assign(":a:").unwrap();
        assert_eq!(spec.value_count(), 3);
    }

    #[test]
    fn failed_assignment_keeps_previous_result() {
        let mut spec = ArgumentSpec::new(ArgumentKind::Integer);
        spec.set_separator(',').unwrap();
        spec.validator = Some(erase::<Integer, _>(|v: &i32| *v > 0));
        spec.assign("1,2").unwrap();

        assert_eq!(
            spec.assign("3,x"),
            Err(ArgumentError::ConversionError {
                piece: "x".into(),
                expected: "an integer"
            })
        );
        assert_eq!(
            spec.assign("3,-4,-5"),
            Err(ArgumentError::ValidationError { piece: "-4".into() })
        );
        assert_eq!(
            spec.result,
            Some(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn flag_assignment_records_presence_only() {
        let mut spec = ArgumentSpec::new(ArgumentKind::Flag);
        spec.assign("ignored").unwrap();
        assert!(spec.is_set());
        assert_eq!(spec.value_count(), 0);
    }
}
