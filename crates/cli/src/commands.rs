//! Clap command definition.
//!
//! The shell takes global flags plus an optional protocol command. With a
//! command it runs once and exits; without one it reads commands from the
//! terminal or from piped stdin.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("nestkv")
        .about("In-memory key/value store with nested transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: $HOME/.nestkv.toml if present)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["human", "raw"]),
        )
        .arg(
            Arg::new("human")
                .long("human")
                .help("Redis-style output (quoted values, (nil), (integer) n)")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Line-protocol output (default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-history")
                .long("no-history")
                .help("Do not read or write the REPL history file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Log filter, e.g. \"debug\" or \"nestkv_core=trace\" (default: warn)"),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .help("Run a single command and exit, e.g. `nestkv GET a`")
                .num_args(1..)
                .trailing_var_arg(true),
        )
}
