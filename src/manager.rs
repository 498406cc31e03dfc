//! The manager owns every declared argument and the raw tokens, and runs
//! the parse pass at most once.
//!
//! Parsing is lazy: any accessor on the manager or on an argument handle
//! triggers the pass if it has not happened yet. The outcome, success or
//! failure, is stored and every later caller sees the same result.

use std::ffi::OsString;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::args::parser::{self, ParseOutput};
use crate::args::registry::Registry;
use crate::args::{Argument, ArgumentBuilder, ArgumentRef};
use crate::config::HelpConfig;
use crate::error::{ArgumentError, Result};
use crate::help::{self, HelpEntry};

/// Everything the engine lock protects.
#[derive(Debug)]
pub(crate) struct EngineState {
    registry: Registry,
    tokens: Vec<String>,
    /// `None` until the pass runs; a failure is terminal and replayed.
    outcome: Option<Result<ParseOutput>>,
    /// Thread running the pass while the lock is released.
    parsing: Option<thread::ThreadId>,
}

impl EngineState {
    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Fail once a pass has started; the declarations are frozen from then on.
    pub(crate) fn ensure_configurable(&self) -> Result<()> {
        if self.parsing.is_some() {
            Err(ArgumentError::ParseInProgress)
        } else if self.outcome.is_some() {
            Err(ArgumentError::AlreadyParsed)
        } else {
            Ok(())
        }
    }
}

/// Shared engine behind the manager and every argument handle.
///
/// The pass works on a snapshot of the specifications with the lock
/// released, so validators may call queries that do not need the parse
/// result (help, names, uniqueness). A query that does need it, made from
/// inside a validator, fails with [`ArgumentError::ParseInProgress`];
/// other threads wait for the pass to settle.
#[derive(Debug)]
pub(crate) struct Engine {
    state: Mutex<EngineState>,
    settled: Condvar,
}

impl Engine {
    fn new(tokens: Vec<String>) -> Self {
        Self {
            state: Mutex::new(EngineState {
                registry: Registry::default(),
                tokens,
                outcome: None,
                parsing: None,
            }),
            settled: Condvar::new(),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock()
    }

    /// Run the pass if it has not run yet, then read its result.
    pub(crate) fn parsed<T>(&self, read: impl FnOnce(&Registry, &ParseOutput) -> T) -> Result<T> {
        self.settle(false, read)
    }

    fn settle<T>(
        &self,
        explicit: bool,
        read: impl FnOnce(&Registry, &ParseOutput) -> T,
    ) -> Result<T> {
        let mut state = self.state.lock();
        loop {
            match &state.outcome {
                Some(Ok(_)) if explicit => return Err(ArgumentError::AlreadyParsed),
                Some(Ok(output)) => return Ok(read(&state.registry, output)),
                Some(Err(err)) => return Err(err.clone()),
                None => {}
            }
            let parsing = state.parsing;
            match parsing {
                Some(owner) if owner == thread::current().id() => {
                    return Err(ArgumentError::ParseInProgress)
                }
                Some(_) => self.settled.wait(&mut state),
                None => break,
            }
        }

        let mut specs = state.registry.specs().to_vec();
        let tokens = state.tokens.clone();
        state.parsing = Some(thread::current().id());

        let pass = MutexGuard::unlocked(&mut state, || {
            panic::catch_unwind(AssertUnwindSafe(|| parser::parse(&mut specs, &tokens)))
        });
        state.parsing = None;
        self.settled.notify_all();

        match pass {
            Ok(Ok(output)) => {
                state.registry.store_results(specs);
                let value = read(&state.registry, &output);
                state.outcome = Some(Ok(output));
                Ok(value)
            }
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "argument parsing failed");
                state.outcome = Some(Err(err.clone()));
                Err(err)
            }
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Declares arguments and answers queries about the parsed command line.
///
/// Cloning a manager yields another view of the same engine.
#[derive(Debug, Clone)]
pub struct Manager {
    engine: Arc<Engine>,
}

impl Manager {
    /// Create a manager over a fixed token vector (program name excluded).
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        tracing::debug!(tokens = tokens.len(), "argument manager created");
        Self {
            engine: Arc::new(Engine::new(tokens)),
        }
    }

    /// Create a manager over the current process arguments, skipping the
    /// program name.
    pub fn from_env() -> Result<Self> {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Create a manager from OS strings.
    ///
    /// Fails when a token is not valid Unicode, since such a vector cannot
    /// be represented.
    pub fn from_os_args<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                token.into_string().map_err(|raw| ArgumentError::NullTokenVector {
                    reason: format!("token {index} is not valid Unicode: {raw:?}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(tokens))
    }

    /// Start declaring a new argument of type `A`.
    ///
    /// The argument is registered immediately, in declaration order.
    pub fn make_argument<A: Argument>(&self) -> ArgumentBuilder<A> {
        let id = self.engine.lock().registry_mut().register(A::KIND);
        ArgumentBuilder::new(ArgumentRef::new(Arc::clone(&self.engine), id))
    }

    /// Whether no declared argument already uses `name`.
    pub fn is_name_unique(&self, name: &str) -> bool {
        self.engine.lock().registry().is_name_unique(name)
    }

    /// Parse the tokens now.
    ///
    /// Only one parse is allowed: a second call fails with
    /// [`ArgumentError::AlreadyParsed`]. After a failed parse every call
    /// returns that failure again.
    pub fn parse_arguments(&self) -> Result<()> {
        self.engine.settle(true, |_, _| ())
    }

    /// Whether a parse has completed successfully. Never triggers parsing.
    pub fn are_arguments_parsed(&self) -> bool {
        matches!(self.engine.lock().outcome, Some(Ok(_)))
    }

    /// Number of tokens attributed to options or plain slots.
    pub fn parsed_arguments_count(&self) -> Result<usize> {
        self.engine.parsed(|_, output| output.consumed)
    }

    /// Plain tokens that matched no positional argument.
    pub fn trailing_arguments(&self) -> Result<Vec<String>> {
        self.engine.parsed(|_, output| output.trailing.clone())
    }

    /// Help text for all arguments in declaration order.
    pub fn help(&self) -> String {
        self.help_with(&HelpConfig::default())
    }

    /// Help text rendered with a custom layout.
    pub fn help_with(&self, config: &HelpConfig) -> String {
        let state = self.engine.lock();
        let entries = state.registry().specs().iter().map(|spec| HelpEntry {
            names: &spec.names,
            description: spec.description.as_deref(),
        });
        help::render(entries, config)
    }
}
