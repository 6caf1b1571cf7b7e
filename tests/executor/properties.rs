//! Property Tests
//!
//! Randomized sessions checked against a plain map model.

use std::collections::BTreeMap;

use crate::common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Unset(String),
    Begin,
    Rollback,
    Commit,
}

fn key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(str::to_string)
}

fn value() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["1", "2", "3"]).prop_map(str::to_string)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key(), value()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => key().prop_map(Op::Unset),
        1 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

/// Reference model: a stack of full-map snapshots taken at each BEGIN.
#[derive(Default)]
struct Model {
    current: BTreeMap<String, String>,
    saved: Vec<BTreeMap<String, String>>,
}

impl Model {
    fn apply(&mut self, op: &Op) -> Result<(), ()> {
        match op {
            Op::Set(k, v) => {
                self.current.insert(k.clone(), v.clone());
            }
            Op::Unset(k) => {
                self.current.remove(k);
            }
            Op::Begin => self.saved.push(self.current.clone()),
            Op::Rollback => self.current = self.saved.pop().ok_or(())?,
            Op::Commit => {
                if self.saved.is_empty() {
                    return Err(());
                }
                self.saved.clear();
            }
        }
        Ok(())
    }
}

fn line(op: &Op) -> String {
    match op {
        Op::Set(k, v) => format!("SET {} {}", k, v),
        Op::Unset(k) => format!("UNSET {}", k),
        Op::Begin => "BEGIN".to_string(),
        Op::Rollback => "ROLLBACK".to_string(),
        Op::Commit => "COMMIT".to_string(),
    }
}

proptest! {
    #[test]
    fn matches_snapshot_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut executor = create_executor();
        let mut model = Model::default();

        for op in &ops {
            let expected = model.apply(op);
            let actual = executor.execute_line(&line(op));
            prop_assert_eq!(expected.is_ok(), actual.is_ok(), "op: {:?}", op);
            prop_assert_eq!(executor.depth(), model.saved.len());
        }

        let expected: Vec<(String, String)> = model.current.into_iter().collect();
        prop_assert_eq!(snapshot(&executor), expected);
    }

    #[test]
    fn set_then_get_round_trips(k in "[a-zA-Z0-9_]{1,12}", v in "[a-zA-Z0-9_]{1,12}") {
        let mut executor = create_executor();
        run(&mut executor, &format!("SET {} {}", k, v));
        prop_assert_eq!(run(&mut executor, &format!("GET {}", k)), v);
    }

    #[test]
    fn begin_set_rollback_is_identity(
        seed in prop::collection::vec((key(), value()), 0..8),
        k in key(),
        v in value(),
    ) {
        let mut executor = create_executor();
        for (sk, sv) in &seed {
            run(&mut executor, &format!("SET {} {}", sk, sv));
        }
        let before = snapshot(&executor);

        run(&mut executor, "BEGIN");
        run(&mut executor, &format!("SET {} {}", k, v));
        run(&mut executor, "ROLLBACK");

        prop_assert_eq!(snapshot(&executor), before);
    }

    #[test]
    fn numequalto_matches_scan(
        seed in prop::collection::vec((key(), value()), 0..16),
        v in value(),
    ) {
        let mut executor = create_executor();
        for (sk, sv) in &seed {
            run(&mut executor, &format!("SET {} {}", sk, sv));
        }
        let expected = snapshot(&executor).iter().filter(|(_, sv)| *sv == v).count();
        prop_assert_eq!(run(&mut executor, &format!("NUMEQUALTO {}", v)), expected.to_string());
    }
}
