//! Property-based tests for planning and generation invariants

use docskel::command::Command;
use docskel::generation::Generator;
use docskel::labels::{has_label_conflict, LabelIndex};
use docskel::tree::{plan_new_directories, DirPath, Walker};
use proptest::prelude::*;
use std::collections::BTreeSet;
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["net", "if", "nic", "sys", "cpu", "tool"]).prop_map(str::to_string)
}

fn command() -> impl Strategy<Value = Command> {
    (prop::collection::vec(segment(), 1..4), segment())
        .prop_map(|(namespace, name)| Command::new(namespace, name))
}

fn existing_dirs() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::vec(prop::collection::vec(segment(), 1..3), 0..4).prop_map(|paths| {
        let mut dirs = BTreeSet::new();
        for path in paths {
            for prefix in DirPath::new(path).prefixes() {
                dirs.insert(prefix.to_string());
            }
        }
        dirs
    })
}

/// Planned directories are disjoint from existing ones and every ancestor of
/// every command namespace ends up planned or existing.
#[test]
fn test_plan_completeness_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(existing_dirs(), prop::collection::vec(command(), 0..8)),
            |(existing, commands)| {
                let planned = plan_new_directories(&existing, &commands);

                for dir in &planned {
                    prop_assert!(!existing.contains(&dir.to_string()));
                }

                for command in &commands {
                    for prefix in DirPath::new(command.namespace.clone()).prefixes() {
                        let key = prefix.to_string();
                        prop_assert!(existing.contains(&key) || planned.contains(&prefix));
                    }
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Planning is independent of command order.
#[test]
fn test_plan_order_independence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(existing_dirs(), prop::collection::vec(command(), 0..8)),
            |(existing, commands)| {
                let mut reversed = commands.clone();
                reversed.reverse();
                prop_assert_eq!(
                    plan_new_directories(&existing, &commands),
                    plan_new_directories(&existing, &reversed)
                );
                Ok(())
            },
        )
        .unwrap();
}

/// Within one run, exactly the first new directory per label is plain and
/// running the same commands again writes nothing.
#[test]
fn test_generation_conflict_and_idempotence_property() {
    let config = proptest::test_runner::Config {
        cases: 32,
        ..Default::default()
    };
    let mut runner = proptest::test_runner::TestRunner::new(config);

    runner
        .run(&prop::collection::vec(command(), 1..6), |commands| {
            let temp_dir = TempDir::new().unwrap();
            let out = temp_dir.path().join("docs");
            let templates = temp_dir.path().join("statics");

            let first = Generator::new(&out, &templates).generate(&commands);
            prop_assert!(first.is_success());

            let mut seen = BTreeSet::new();
            for dir in &first.summary.directories {
                let path = DirPath::parse(dir);
                let landing = format!("{}/category.md", dir);
                let is_conflict = first.summary.files.contains(&landing);
                prop_assert_eq!(is_conflict, !seen.insert(path.label().to_string()));
            }

            let second = Generator::new(&out, &templates).generate(&commands);
            prop_assert!(second.is_success());
            prop_assert!(second.summary.files.is_empty());
            prop_assert!(second.summary.directories.is_empty());
            Ok(())
        })
        .unwrap();
}

/// The batched label index answers like a fresh per-directory scan.
#[test]
fn test_label_index_matches_scan_property() {
    let config = proptest::test_runner::Config {
        cases: 32,
        ..Default::default()
    };
    let mut runner = proptest::test_runner::TestRunner::new(config);

    runner
        .run(
            &(prop::collection::vec(command(), 1..6), segment()),
            |(commands, probe)| {
                let temp_dir = TempDir::new().unwrap();
                let out = temp_dir.path().join("docs");
                Generator::new(&out, temp_dir.path().join("statics")).generate(&commands);

                let walker = Walker::new(out);
                let index = LabelIndex::scan(&walker);
                prop_assert_eq!(index.contains(&probe), has_label_conflict(&walker, &probe));
                Ok(())
            },
        )
        .unwrap();
}
