//! `time-demo`: the argument surface of a `time`-like command, declared
//! with argdecl.

use std::process::ExitCode;

use argdecl::logging::init_tracing;
use argdecl::{FlagArgument, IntegerArgument, Manager, StringArgument};

const MERIDIEMS: [&str; 2] = ["am", "pm"];

struct TimeArguments {
    portability: FlagArgument,
    format: StringArgument,
    ports: IntegerArgument,
    output: StringArgument,
    command: StringArgument,
}

fn declare(manager: &Manager) -> argdecl::Result<TimeArguments> {
    let portability = manager
        .make_argument::<FlagArgument>()
        .add_name("p")?
        .add_name("portability")?
        .set_description("Use the portable output format")?
        .finish_general()?;

    let format = manager
        .make_argument::<StringArgument>()
        .add_name("f")?
        .add_name("format")?
        .set_description("Output format, ':'-separated list of am/pm")?
        .finish_general()?
        .set_separator(':')?
        .set_validator(|value: &String| MERIDIEMS.contains(&value.as_str()))?;

    let ports = manager
        .make_argument::<IntegerArgument>()
        .add_name("P")?
        .add_name("port")?
        .set_description("Available ports, ','-separated")?
        .finish_general()?
        .set_validator(|port: &i32| *port > 0)?
        .set_separator(',')?
        .required()?;

    let output = manager
        .make_argument::<StringArgument>()
        .add_name("o")?
        .add_name("output")?
        .set_description("Write the report to FILE instead of stdout")?
        .finish_general()?;

    let command = manager
        .make_argument::<StringArgument>()
        .set_description("Command to time")?
        .finish_general()?;

    Ok(TimeArguments {
        portability,
        format,
        ports,
        output,
        command,
    })
}

fn report(arguments: &TimeArguments, manager: &Manager) -> argdecl::Result<Vec<String>> {
    let ports: Vec<String> = arguments
        .ports
        .values()?
        .iter()
        .map(i32::to_string)
        .collect();

    Ok(vec![
        format!("portability: {}", arguments.portability.is_set()?),
        format!("format: {}", arguments.format.values()?.join(":")),
        format!("ports: {}", ports.join(",")),
        format!("output: {}", or_dash(arguments.output.values()?)),
        format!("command: {}", or_dash(arguments.command.values()?)),
        format!("trailing: {}", manager.trailing_arguments()?.join(" ")),
        format!("parsed: {}", manager.parsed_arguments_count()?),
    ])
}

fn or_dash(values: Vec<String>) -> String {
    values.into_iter().next().unwrap_or_else(|| "-".to_string())
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let manager = Manager::from_env()?;
    let arguments = declare(&manager)?;

    if let Err(err) = manager.parse_arguments() {
        eprintln!("Error: {}", err);
        eprint!("{}", manager.help());
        return Ok(ExitCode::from(2));
    }

    for line in report(&arguments, &manager)? {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}
