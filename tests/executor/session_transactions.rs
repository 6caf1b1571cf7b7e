//! Session Transaction Tests
//!
//! Nested BEGIN / ROLLBACK / COMMIT behaviour through the executor:
//! - Rollback undoes the innermost block only, newest change first
//! - Commit closes every open block at once
//! - Mutations outside any block are permanent immediately

use crate::common::*;
use nestkv::{Error, SharedExecutor};

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn rollback_restores_pre_begin_state_for_new_key() {
    let mut executor = create_executor();
    run(&mut executor, "SET other x");
    let before = snapshot(&executor);

    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v1");
    run(&mut executor, "ROLLBACK");

    assert_eq!(snapshot(&executor), before);
}

#[test]
fn rollback_restores_pre_begin_state_for_existing_key() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v0");
    let before = snapshot(&executor);

    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v1");
    run(&mut executor, "ROLLBACK");

    assert_eq!(snapshot(&executor), before);
}

#[test]
fn rollback_undoes_interleaved_overwrites_in_reverse() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v0");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v1");
    run(&mut executor, "UNSET k");
    run(&mut executor, "SET k v2");
    run(&mut executor, "SET k v3");
    run(&mut executor, "UNSET k");
    run(&mut executor, "ROLLBACK");

    assert_eq!(run(&mut executor, "GET k"), "v0");
}

#[test]
fn nested_rollback_restores_intermediate_state() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v1");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v2");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v3");

    run(&mut executor, "ROLLBACK");
    assert_eq!(run(&mut executor, "GET k"), "v2");

    run(&mut executor, "ROLLBACK");
    assert_eq!(run(&mut executor, "GET k"), "v1");
}

#[test]
fn rollback_leaves_outer_block_open() {
    let mut executor = create_executor();
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET a 1");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET b 2");
    run(&mut executor, "ROLLBACK");

    assert_eq!(executor.depth(), 1);
    assert_eq!(run(&mut executor, "GET a"), "1");
    assert_eq!(run(&mut executor, "GET b"), "NULL");
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn commit_closes_every_nesting_level() {
    let mut executor = create_executor();
    run(&mut executor, "BEGIN");
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v");
    run(&mut executor, "COMMIT");

    assert_eq!(executor.execute_line("ROLLBACK"), Err(Error::NoTransaction));
    assert_eq!(run(&mut executor, "GET k"), "v");
}

#[test]
fn changes_after_commit_are_independent() {
    let mut executor = create_executor();
    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v1");
    run(&mut executor, "COMMIT");

    run(&mut executor, "BEGIN");
    run(&mut executor, "SET k v2");
    run(&mut executor, "ROLLBACK");
    assert_eq!(run(&mut executor, "GET k"), "v1");
}

#[test]
fn mutation_without_transaction_is_not_undoable() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v");
    assert_eq!(executor.execute_line("ROLLBACK"), Err(Error::NoTransaction));
    assert_eq!(run(&mut executor, "GET k"), "v");
}

#[test]
fn deep_nesting_unwinds_level_by_level() {
    let mut executor = create_executor();
    for level in 0..64 {
        run(&mut executor, "BEGIN");
        run(&mut executor, &format!("SET k {}", level));
    }
    assert_eq!(executor.depth(), 64);

    for level in (0..64).rev() {
        assert_eq!(run(&mut executor, "GET k"), level.to_string());
        run(&mut executor, "ROLLBACK");
    }
    assert_eq!(run(&mut executor, "GET k"), "NULL");
}

// ============================================================================
// Shared sessions
// ============================================================================

#[test]
fn shared_handle_runs_a_block_atomically() {
    let shared = SharedExecutor::new();
    shared.execute_line("SET k v0").unwrap();

    {
        let mut session = shared.lock();
        session.execute_line("BEGIN").unwrap();
        session.execute_line("SET k v1").unwrap();
        session.execute_line("ROLLBACK").unwrap();
    }

    assert_eq!(shared.execute_line("GET k").unwrap().to_string(), "v0");
}
