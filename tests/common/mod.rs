//! Shared test helpers.

#![allow(dead_code)]

use argdecl::{FlagArgument, IntegerArgument, Manager, StringArgument};

/// Declare a flag answering to `names`.
pub fn flag(manager: &Manager, names: &[&str]) -> FlagArgument {
    let mut builder = manager.make_argument::<FlagArgument>();
    for name in names {
        builder.add_name(name).expect("valid flag name");
    }
    builder.finish_general().expect("fresh builder")
}

/// Declare a string option; no names makes it positional.
pub fn string_arg(manager: &Manager, names: &[&str]) -> StringArgument {
    let mut builder = manager.make_argument::<StringArgument>();
    for name in names {
        builder.add_name(name).expect("valid option name");
    }
    builder.finish_general().expect("fresh builder")
}

/// Declare an integer option; no names makes it positional.
pub fn integer_arg(manager: &Manager, names: &[&str]) -> IntegerArgument {
    let mut builder = manager.make_argument::<IntegerArgument>();
    for name in names {
        builder.add_name(name).expect("valid option name");
    }
    builder.finish_general().expect("fresh builder")
}
