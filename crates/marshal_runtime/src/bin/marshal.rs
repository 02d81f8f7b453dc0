//! Marshal CLI entry point.

use marshal_command::DispatchConfig;
use marshal_foundation::Error;
use marshal_runtime::{Outcome, Repl, builtins, init_tracing, parse_call, render, render_error};
use std::env;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    eval: Vec<String>,
    show_help: bool,
    show_version: bool,
    strict_types: bool,
    reject_lossy: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match e.downcast_ref::<Error>() {
                Some(error) => render_error(error),
                None => format!("Error: {e}"),
            };
            eprintln!("\x1b[31m{message}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--strict" => config.strict_types = true,
            "--reject-lossy" => config.reject_lossy = true,
            "-e" | "--eval" => {
                let line = args.next().ok_or("--eval requires a call")?;
                config.eval.push(line);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("marshal {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let dispatch_config = DispatchConfig::permissive()
        .with_strict_types(config.strict_types)
        .with_reject_lossy_numbers(config.reject_lossy);
    let dispatcher = builtins::dispatcher(dispatch_config)?;

    // One-shot evaluation: print each result and exit
    if !config.eval.is_empty() {
        for line in &config.eval {
            let mut command = parse_call(line);
            let outcome = if dispatcher.dispatch(&mut command)? {
                Outcome::Returned(command.returns)
            } else {
                Outcome::NoMatch(format!("no method matches {line}"))
            };
            println!("{}", render(&outcome));
        }
        return Ok(());
    }

    let mut repl = Repl::new(dispatcher)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mMarshal\x1b[0m - Typed argument marshalling for textual method calls

\x1b[1mUSAGE:\x1b[0m
    marshal [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -e, --eval CALL     Evaluate CALL and exit (repeatable)
    --strict            Check argument kinds against definitions
    --reject-lossy      Refuse numeric arguments that do not fully parse

\x1b[1mEXAMPLES:\x1b[0m
    marshal                              Start interactive REPL
    marshal -e 'Add(1, 2.5)'             Print => Double(3.5)
    marshal --strict -e 'Len(42)'        No method matches

\x1b[1mREPL COMMANDS:\x1b[0m
    :methods             List registered definitions
    :save PATH           Persist the last command's name
    :load PATH           Restore a command name
    :quit                Exit REPL
    Ctrl+D               Exit REPL

Set RUST_LOG=marshal_command=debug to trace matching decisions."
    );
}
