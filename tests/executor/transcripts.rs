//! Transcript Tests
//!
//! Whole sessions fed line by line, checking exactly what a client prints.

use crate::common::*;

#[test]
fn basic_data_commands() {
    let out = transcript(
        "SET ex 10\n\
         GET ex\n\
         UNSET ex\n\
         GET ex\n\
         END\n",
    );
    assert_eq!(out, ["10", "NULL"]);
}

#[test]
fn counting_values() {
    let out = transcript(
        "SET a 10\n\
         SET b 10\n\
         NUMEQUALTO 10\n\
         NUMEQUALTO 20\n\
         SET b 30\n\
         NUMEQUALTO 10\n\
         END\n",
    );
    assert_eq!(out, ["2", "0", "1"]);
}

#[test]
fn nested_rollbacks() {
    let out = transcript(
        "BEGIN\n\
         SET a 10\n\
         GET a\n\
         BEGIN\n\
         SET a 20\n\
         GET a\n\
         ROLLBACK\n\
         GET a\n\
         ROLLBACK\n\
         GET a\n\
         END\n",
    );
    assert_eq!(out, ["10", "20", "10", "NULL"]);
}

#[test]
fn commit_then_rollback() {
    let out = transcript(
        "BEGIN\n\
         SET a 30\n\
         BEGIN\n\
         SET a 40\n\
         COMMIT\n\
         GET a\n\
         ROLLBACK\n\
         END\n",
    );
    assert_eq!(out, ["40", "NO TRANSACTION"]);
}

#[test]
fn unset_inside_blocks() {
    let out = transcript(
        "SET a 50\n\
         BEGIN\n\
         GET a\n\
         SET a 60\n\
         BEGIN\n\
         UNSET a\n\
         GET a\n\
         ROLLBACK\n\
         GET a\n\
         COMMIT\n\
         GET a\n\
         END\n",
    );
    assert_eq!(out, ["50", "NULL", "60", "60"]);
}

#[test]
fn counts_follow_rollback() {
    let out = transcript(
        "SET a 10\n\
         BEGIN\n\
         NUMEQUALTO 10\n\
         BEGIN\n\
         UNSET a\n\
         NUMEQUALTO 10\n\
         ROLLBACK\n\
         NUMEQUALTO 10\n\
         COMMIT\n\
         END\n",
    );
    assert_eq!(out, ["1", "0", "1"]);
}

#[test]
fn input_after_end_is_ignored() {
    let out = transcript("SET a 1\nEND\nGET a\n");
    assert!(out.is_empty());
}
