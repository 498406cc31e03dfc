//! Declarative command-line arguments with a one-shot parse engine.
//!
//! Arguments are declared on a [`Manager`] through an [`ArgumentBuilder`],
//! then queried through their typed handles. The first query parses the
//! whole token vector; later queries read the stored result.
//!
//! ```
//! use argdecl::{FlagArgument, Manager, StringArgument};
//!
//! let manager = Manager::new(["--format", "am:pm", "-p", "input.txt"]);
//!
//! let portability = manager
//!     .make_argument::<FlagArgument>()
//!     .add_name("p")?
//!     .add_name("portability")?
//!     .finish_general()?;
//!
//! let format = manager
//!     .make_argument::<StringArgument>()
//!     .add_name("f")?
//!     .add_name("format")?
//!     .finish_general()?
//!     .set_separator(':')?
//!     .required()?;
//!
//! let input = manager.make_argument::<StringArgument>().finish_general()?;
//!
//! assert!(portability.is_set()?);
//! assert_eq!(format.values()?, ["am", "pm"]);
//! assert_eq!(input.value(0)?, "input.txt");
//! # Ok::<(), argdecl::ArgumentError>(())
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod help;
pub mod logging;
mod manager;

pub use args::{
    Argument, ArgumentBuilder, ArgumentKind, FlagArgument, IntegerArgument, ParamsArgument,
    StringArgument, Validator,
};
pub use config::HelpConfig;
pub use error::{ArgumentError, Result};
pub use manager::Manager;
