//! Typed argument handles — the query and configuration surface of one
//! declared argument.
//!
//! Every query runs the manager's parse pass first if it has not run yet.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::args::kind::{ArgumentKind, Integer, Text, ValueKind};
use crate::args::spec::ArgumentSpec;
use crate::args::validator::{erase, Validator};
use crate::error::{ArgumentError, Result};
use crate::manager::Engine;

/// Link from a handle to its specification inside the shared engine.
#[derive(Clone)]
pub struct ArgumentRef {
    engine: Arc<Engine>,
    id: usize,
}

impl ArgumentRef {
    pub(crate) fn new(engine: Arc<Engine>, id: usize) -> Self {
        Self { engine, id }
    }

    /// Read the specification without triggering a parse.
    fn read<T>(&self, f: impl FnOnce(&ArgumentSpec) -> T) -> T {
        f(self.engine.lock().registry().get(self.id))
    }

    /// Change the specification; refused once the pass has started.
    pub(crate) fn configure<T>(&self, f: impl FnOnce(&mut ArgumentSpec) -> Result<T>) -> Result<T> {
        let mut state = self.engine.lock();
        state.ensure_configurable()?;
        f(state.registry_mut().get_mut(self.id))
    }

    /// Add `name` if no argument of the engine claims it yet.
    pub(crate) fn claim_name(&self, name: &str) -> Result<()> {
        let mut state = self.engine.lock();
        state.ensure_configurable()?;
        let registry = state.registry_mut();
        if !registry.is_name_unique(name) {
            return Err(ArgumentError::DuplicateName {
                name: name.to_string(),
            });
        }
        registry.get_mut(self.id).names.push(name.to_string());
        Ok(())
    }

    /// Read the specification after making sure the parse pass ran.
    fn parsed<T>(&self, f: impl FnOnce(&ArgumentSpec) -> Result<T>) -> Result<T> {
        self.engine.parsed(|registry, _| f(registry.get(self.id)))?
    }

    fn names(&self) -> Vec<String> {
        self.read(|spec| spec.names.clone())
    }

    fn help(&self) -> String {
        self.read(|spec| spec.description.clone().unwrap_or_default())
    }

    fn is_set(&self) -> Result<bool> {
        self.parsed(|spec| Ok(spec.is_set()))
    }
}

impl std::fmt::Debug for ArgumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentRef").field("id", &self.id).finish()
    }
}

pub(crate) mod sealed {
    use super::ArgumentRef;

    pub trait Sealed {
        fn attach(target: ArgumentRef) -> Self;
    }
}

/// An argument type that [`Manager::make_argument`](crate::Manager::make_argument)
/// can create.
pub trait Argument: sealed::Sealed + Clone {
    /// Kind of the specification backing this handle.
    const KIND: ArgumentKind;
}

/// Argument without a value; only its presence is recorded.
#[derive(Debug, Clone)]
pub struct FlagArgument {
    target: ArgumentRef,
}

impl sealed::Sealed for FlagArgument {
    fn attach(target: ArgumentRef) -> Self {
        Self { target }
    }
}

impl Argument for FlagArgument {
    const KIND: ArgumentKind = ArgumentKind::Flag;
}

impl FlagArgument {
    /// Whether the flag occurred on the command line.
    pub fn is_set(&self) -> Result<bool> {
        self.target.is_set()
    }

    /// Declared names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.target.names()
    }

    /// The description, or an empty string.
    pub fn argument_help(&self) -> String {
        self.target.help()
    }
}

/// Argument carrying one or more values of kind `K`.
pub struct ParamsArgument<K: ValueKind> {
    target: ArgumentRef,
    _kind: PhantomData<fn() -> K>,
}

/// String-valued argument.
pub type StringArgument = ParamsArgument<Text>;

/// Integer-valued argument.
pub type IntegerArgument = ParamsArgument<Integer>;

impl<K: ValueKind> Clone for ParamsArgument<K> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: ValueKind> std::fmt::Debug for ParamsArgument<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamsArgument")
            .field("kind", &K::KIND)
            .field("target", &self.target)
            .finish()
    }
}

impl<K: ValueKind> sealed::Sealed for ParamsArgument<K> {
    fn attach(target: ArgumentRef) -> Self {
        Self {
            target,
            _kind: PhantomData,
        }
    }
}

impl<K: ValueKind> Argument for ParamsArgument<K> {
    const KIND: ArgumentKind = K::KIND;
}

impl<K: ValueKind> ParamsArgument<K> {
    /// Check every parsed value with `validator`. Replaces any previous one.
    ///
    /// The validator may read help and names from the manager; asking for
    /// parse results from inside it fails with
    /// [`ArgumentError::ParseInProgress`].
    pub fn set_validator<V>(self, validator: V) -> Result<Self>
    where
        V: Validator<K::Value> + 'static,
    {
        self.target.configure(|spec| {
            spec.validator = Some(erase::<K, V>(validator));
            Ok(())
        })?;
        Ok(self)
    }

    /// Accept several values in one token, split on `separator`.
    pub fn set_separator(self, separator: char) -> Result<Self> {
        self.target.configure(|spec| spec.set_separator(separator))?;
        Ok(self)
    }

    /// Fail the parse when this argument is absent.
    pub fn required(self) -> Result<Self> {
        self.target.configure(|spec| {
            spec.required = true;
            Ok(())
        })?;
        Ok(self)
    }

    /// Whether the argument was marked required.
    pub fn is_required(&self) -> bool {
        self.target.read(|spec| spec.required)
    }

    /// Whether the argument received a value.
    pub fn is_set(&self) -> Result<bool> {
        self.target.is_set()
    }

    /// Number of values; zero when the argument is unset.
    pub fn number_of_values(&self) -> Result<usize> {
        self.target.parsed(|spec| Ok(spec.value_count()))
    }

    /// The value at `index`, zero-based.
    pub fn value(&self, index: usize) -> Result<K::Value> {
        self.target.parsed(|spec| {
            spec.result
                .as_ref()
                .and_then(|values| values.get(index))
                .and_then(K::project)
                .cloned()
                .ok_or(ArgumentError::IndexOutOfRange {
                    index,
                    count: spec.value_count(),
                })
        })
    }

    /// All values in order; empty when the argument is unset.
    pub fn values(&self) -> Result<Vec<K::Value>> {
        self.target.parsed(|spec| {
            Ok(spec
                .result
                .iter()
                .flatten()
                .filter_map(K::project)
                .cloned()
                .collect())
        })
    }

    /// Declared names in insertion order; empty for positional arguments.
    pub fn names(&self) -> Vec<String> {
        self.target.names()
    }

    /// The description, or an empty string.
    pub fn argument_help(&self) -> String {
        self.target.help()
    }
}
