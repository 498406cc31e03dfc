//! Value validators.

use std::sync::Arc;

use crate::args::kind::{Value, ValueKind};

/// A predicate over one converted value.
///
/// Any `Fn(&T) -> bool + Send + Sync` closure is a validator.
pub trait Validator<T>: Send + Sync {
    /// Returns `true` when `value` is acceptable.
    fn validate(&self, value: &T) -> bool;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}

/// Validator stored on a specification, independent of its kind.
pub(crate) type ErasedValidator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Wrap a typed validator so it can run over stored values.
///
/// A value of the wrong kind never passes.
pub(crate) fn erase<K, V>(validator: V) -> ErasedValidator
where
    K: ValueKind,
    V: Validator<K::Value> + 'static,
{
    Arc::new(move |value: &Value| K::project(value).is_some_and(|v| validator.validate(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::kind::{Integer, Text};

    struct OneOf(&'static [&'static str]);

    impl Validator<String> for OneOf {
        fn validate(&self, value: &String) -> bool {
            self.0.contains(&value.as_str())
        }
    }

    #[test]
    fn closures_are_validators() {
        let positive = erase::<Integer, _>(|v: &i32| *v > 0);
        assert!(positive(&Value::Integer(80)));
        assert!(!positive(&Value::Integer(-1)));
    }

    #[test]
    fn structs_are_validators() {
        let meridiem = erase::<Text, _>(OneOf(&["am", "pm"]));
        assert!(meridiem(&Value::Text("pm".into())));
        assert!(!meridiem(&Value::Text("noon".into())));
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let any = erase::<Text, _>(|_: &String| true);
        assert!(!any(&Value::Integer(1)));
    }
}
