//! nestkv CLI: line-oriented shell for the nestkv store.
//!
//! Three modes:
//! - **Shell mode**: `nestkv [flags] COMMAND`: single command, exit
//! - **REPL mode**: `nestkv [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `printf 'SET a 1\nGET a\nEND\n' | nestkv`: line-by-line from stdin

mod commands;
mod config;
mod format;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use config::Config;
use format::{errors_on_stdout, format_error, format_output, OutputMode};
use state::SessionState;

/// Environment variable holding a log filter.
const LOG_ENV: &str = "NESTKV_LOG";

fn main() {
    let matches = build_cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging(matches.get_one::<String>("log").map(String::as_str), &config);

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("human") {
        OutputMode::Human
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        config.output
    };

    let mut state = SessionState::new(config.prompt.clone());

    if let Some(words) = matches.get_many::<String>("command") {
        // Shell mode: execute, format, exit
        let line = words.map(String::as_str).collect::<Vec<_>>().join(" ");
        let exit_code = run_shell_mode(&mut state, &line, output_mode);
        process::exit(exit_code);
    }

    if std::io::stdin().is_terminal() {
        let history = if matches.get_flag("no-history") {
            None
        } else {
            config.history_path()
        };
        if let Err(e) = repl::run_repl(&mut state, output_mode, history) {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn run_shell_mode(state: &mut SessionState, line: &str, mode: OutputMode) -> i32 {
    match state.execute_line(line) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            let formatted = format_error(&e, mode);
            if errors_on_stdout(mode) {
                println!("{}", formatted);
            } else {
                eprintln!("{}", formatted);
            }
            1
        }
    }
}

/// Install the stderr log subscriber.
///
/// Filter precedence: `--log`, then `NESTKV_LOG`, then the config file.
fn init_logging(flag: Option<&str>, config: &Config) {
    let directive = flag
        .map(str::to_owned)
        .or_else(|| std::env::var(LOG_ENV).ok())
        .unwrap_or_else(|| config.log.clone());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("(warning) invalid log filter '{}': {}", directive, e);
        EnvFilter::new("warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
