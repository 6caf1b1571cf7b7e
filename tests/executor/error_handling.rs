//! Error Handling Tests
//!
//! Every error is user-visible, non-fatal, and leaves the store and the
//! transaction stack exactly as they were.

use crate::common::*;
use nestkv::Error;

#[test]
fn not_enough_arguments_names_the_command() {
    let mut executor = create_executor();
    let cases = [
        ("SET a", "SET"),
        ("GET", "GET"),
        ("UNSET", "UNSET"),
        ("NUMEQUALTO", "NUMEQUALTO"),
    ];
    for (line, command) in cases {
        match executor.execute_line(line) {
            Err(Error::NotEnoughArguments { command: c, .. }) => assert_eq!(c, command),
            other => panic!("Expected NotEnoughArguments for '{}', got {:?}", line, other),
        }
    }
}

#[test]
fn not_enough_arguments_does_not_mutate() {
    let mut executor = create_executor();
    run(&mut executor, "SET a 1");
    run(&mut executor, "BEGIN");
    let before = snapshot(&executor);

    assert!(executor.execute_line("SET a").is_err());
    assert!(executor.execute_line("UNSET").is_err());

    assert_eq!(snapshot(&executor), before);
    assert_eq!(executor.depth(), 1);
    assert!(executor.undo_log()[0].is_empty());
}

#[test]
fn rollback_and_commit_on_empty_stack_report_no_transaction() {
    let mut executor = create_executor();
    run(&mut executor, "SET a 1");
    let before = snapshot(&executor);

    assert_eq!(executor.execute_line("ROLLBACK"), Err(Error::NoTransaction));
    assert_eq!(executor.execute_line("COMMIT"), Err(Error::NoTransaction));
    assert_eq!(run_any(&mut executor, "ROLLBACK"), "NO TRANSACTION");
    assert_eq!(run_any(&mut executor, "COMMIT"), "NO TRANSACTION");

    assert_eq!(snapshot(&executor), before);
    assert!(!executor.in_transaction());
}

#[test]
fn unknown_keyword_names_the_token_and_changes_nothing() {
    let mut executor = create_executor();
    run(&mut executor, "SET a 1");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET a 2");
    let before = snapshot(&executor);

    match executor.execute_line("DELETE a") {
        Err(Error::UnknownCommand { command }) => assert_eq!(command, "DELETE"),
        other => panic!("Expected UnknownCommand, got {:?}", other),
    }
    assert!(run_any(&mut executor, "frobnicate").contains("FROBNICATE"));

    assert_eq!(snapshot(&executor), before);
    assert_eq!(executor.depth(), 1);
    assert_eq!(executor.undo_log()[0].len(), 1);

    // The block still rolls back cleanly
    run(&mut executor, "ROLLBACK");
    assert_eq!(run(&mut executor, "GET a"), "1");
}
