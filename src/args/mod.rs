//! Argument declaration and parsing.
//!
//! Arguments move through a fixed sequence of stages:
//!
//! ```text
//! make_argument → ArgumentBuilder → typed handle → (first query) parse pass
//! ```
//!
//! The builder collects names and a description, the handle carries the
//! kind-specific configuration and the read path, and the parse pass runs
//! exactly once for the whole manager.

mod builder;
mod handle;
mod kind;
pub(crate) mod parser;
pub(crate) mod registry;
mod spec;
mod validator;

pub use builder::ArgumentBuilder;
pub(crate) use handle::ArgumentRef;
pub use handle::{Argument, FlagArgument, IntegerArgument, ParamsArgument, StringArgument};
pub use kind::{ArgumentKind, Integer, Text, ValueKind};
pub use validator::Validator;
