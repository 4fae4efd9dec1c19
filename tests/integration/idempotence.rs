//! Re-running generation against its own output.

use super::test_utils::{list_files, Fixture};
use std::collections::BTreeMap;

fn snapshot(fixture: &Fixture) -> BTreeMap<String, String> {
    list_files(&fixture.output())
        .into_iter()
        .map(|f| {
            let contents = fixture.read(&f);
            (f, contents)
        })
        .collect()
}

#[test]
fn test_rerun_writes_nothing_new() {
    let fixture = Fixture::new();
    let input = ["tool net if list", "tool net if show", "tool sys info"];

    let first = fixture.generate(&input);
    assert!(first.is_success());
    let before = snapshot(&fixture);

    let second = fixture.generate(&input);
    assert!(second.is_success());
    assert!(second.summary.files.is_empty());
    assert!(second.summary.directories.is_empty());
    assert_eq!(second.summary.total_files, 0);
    assert_eq!(second.summary.total_size, 0);

    assert_eq!(snapshot(&fixture), before);
}

#[test]
fn test_rerun_with_extra_command_only_fills_gaps() {
    let fixture = Fixture::new();
    fixture.generate(&["acli net nic list"]);
    let category_before = fixture.read("net/nic/_category_.json");

    let outcome = fixture.generate(&["acli net nic list", "acli net nic show", "acli net route add"]);
    assert_eq!(outcome.summary.directories, vec!["net/route"]);
    assert_eq!(
        outcome.summary.files,
        vec!["net/nic/show.md", "net/route/_category_.json", "net/route/add.md"]
    );
    assert_eq!(fixture.read("net/nic/_category_.json"), category_before);
}
