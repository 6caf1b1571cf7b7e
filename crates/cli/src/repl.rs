//! REPL loop with rustyline.
//!
//! Interactive mode: prompt with transaction depth, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each, no prompt.
//!
//! Both stop at `END` or end of input. Command errors are printed and the
//! loop continues.

use std::io::{self, BufRead};
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::{debug, warn};

use crate::format::{errors_on_stdout, format_error, format_output, OutputMode};
use crate::state::SessionState;

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run the interactive REPL.
pub fn run_repl(
    state: &mut SessionState,
    mode: OutputMode,
    history_path: Option<PathBuf>,
) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<KvHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(KvHelper));

    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if execute_line(state, trimmed, mode) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D: exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("(error) failed to read input: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if execute_line(state, trimmed, mode) == Flow::Exit {
            break;
        }
    }

    0
}

/// Execute one line and print its result.
pub fn execute_line(state: &mut SessionState, line: &str, mode: OutputMode) -> Flow {
    match state.execute_line(line) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            if output.is_terminate() {
                Flow::Exit
            } else {
                Flow::Continue
            }
        }
        Err(e) => {
            debug!(line, error = %e, "command rejected");
            let formatted = format_error(&e, mode);
            if errors_on_stdout(mode) {
                println!("{}", formatted);
            } else {
                eprintln!("{}", formatted);
            }
            Flow::Continue
        }
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Known command keywords for TAB completion.
const KEYWORDS: &[&str] = &[
    "SET",
    "GET",
    "UNSET",
    "NUMEQUALTO",
    "BEGIN",
    "ROLLBACK",
    "COMMIT",
    "END",
    "HELP",
];

/// Keywords matching `prefix`, case-insensitively.
fn complete_keyword(prefix: &str) -> Vec<&'static str> {
    let upper = prefix.to_ascii_uppercase();
    KEYWORDS
        .iter()
        .copied()
        .filter(|kw| kw.starts_with(&upper))
        .collect()
}

struct KvHelper;

impl Helper for KvHelper {}
impl Validator for KvHelper {}
impl Highlighter for KvHelper {}
impl Hinter for KvHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for KvHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let start = line_to_pos.len() - line_to_pos.trim_start().len();
        let word = &line_to_pos[start..];

        // Only the keyword is completed; keys and values are free-form
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = complete_keyword(word)
            .into_iter()
            .map(|kw| Pair {
                display: kw.to_string(),
                replacement: kw.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}
