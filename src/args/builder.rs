//! Argument builder — guided declaration of names and description.

use std::marker::PhantomData;

use crate::args::handle::{Argument, ArgumentRef};
use crate::error::{ArgumentError, Result};

/// Builder phase. Kind-specific configuration happens on the handle
/// returned by [`ArgumentBuilder::finish_general`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    CollectingNames,
    Finished,
}

/// Declares the general properties of one argument.
///
/// ```
/// use argdecl::{IntegerArgument, Manager};
///
/// let manager = Manager::new(["-P", "80,443"]);
/// let ports = manager
///     .make_argument::<IntegerArgument>()
///     .add_name("P")?
///     .add_name("port")?
///     .set_description("Available ports")?
///     .finish_general()?
///     .set_validator(|port: &i32| *port > 0)?
///     .set_separator(',')?
///     .required()?;
///
/// assert_eq!(ports.values()?, vec![80, 443]);
/// # Ok::<(), argdecl::ArgumentError>(())
/// ```
#[derive(Debug)]
pub struct ArgumentBuilder<A> {
    target: ArgumentRef,
    stage: Stage,
    _argument: PhantomData<fn() -> A>,
}

impl<A: Argument> ArgumentBuilder<A> {
    pub(crate) fn new(target: ArgumentRef) -> Self {
        Self {
            target,
            stage: Stage::CollectingNames,
            _argument: PhantomData,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        match self.stage {
            Stage::CollectingNames => Ok(()),
            Stage::Finished => Err(ArgumentError::BuilderAlreadyFinished),
        }
    }

    /// Add a name usable as `-name` or `--name`.
    ///
    /// Arguments without names are positional.
    pub fn add_name(&mut self, name: &str) -> Result<&mut Self> {
        self.ensure_open()?;
        check_name_format(name)?;
        self.target.claim_name(name)?;
        Ok(self)
    }

    /// Set the description shown in help output.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<&mut Self> {
        self.ensure_open()?;
        let description = description.into();
        self.target.configure(|spec| {
            spec.description = Some(description);
            Ok(())
        })?;
        Ok(self)
    }

    /// Lock names and description and return the typed argument.
    pub fn finish_general(&mut self) -> Result<A> {
        self.ensure_open()?;
        self.stage = Stage::Finished;
        Ok(A::attach(self.target.clone()))
    }
}

fn check_name_format(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "name cannot be empty or whitespace"
    } else if name.starts_with('-') {
        "name cannot start with a dash"
    } else {
        return Ok(());
    };
    Err(ArgumentError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
