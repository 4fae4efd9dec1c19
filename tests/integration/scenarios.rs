//! End-to-end generation scenarios on fresh output trees.

use super::test_utils::{list_files, Fixture};
use serde_json::json;

#[test]
fn test_nested_namespace_on_empty_tree() {
    let fixture = Fixture::new();
    let outcome = fixture.generate(&["tool net if list", "tool net if show"]);

    assert!(outcome.is_success());
    assert_eq!(outcome.summary.directories, vec!["tool", "tool/net", "tool/net/if"]);
    assert_eq!(
        list_files(&fixture.output()),
        vec![
            "tool/_category_.json",
            "tool/net/_category_.json",
            "tool/net/if/_category_.json",
            "tool/net/if/list.md",
            "tool/net/if/show.md",
        ]
    );
    assert_eq!(outcome.summary.files, list_files(&fixture.output()));
    assert_eq!(outcome.summary.total_files, 5);

    for (dir, label) in [("tool", "tool"), ("tool/net", "net"), ("tool/net/if", "if")] {
        let category = fixture.read_json(&format!("{}/_category_.json", dir));
        assert_eq!(category["label"], label);
        assert_eq!(category["link"]["type"], "generated-index");
    }

    let list = fixture.read("tool/net/if/list.md");
    assert!(list.contains("\n# list\n"));
    assert!(list.contains("tool > net > if > list"));
    let show = fixture.read("tool/net/if/show.md");
    assert!(show.contains("\n# show\n"));
    assert!(show.contains("tool > net > if > show"));
}

#[test]
fn test_summary_total_size_matches_disk() {
    let fixture = Fixture::new();
    let outcome = fixture.generate(&["acli system cpu info"]);
    let on_disk: u64 = outcome
        .summary
        .files
        .iter()
        .map(|f| std::fs::metadata(fixture.output().join(f)).unwrap().len())
        .sum();
    assert_eq!(outcome.summary.total_size, on_disk);
}

#[test]
fn test_every_ancestor_gets_category_metadata() {
    let fixture = Fixture::new();
    fixture.generate(&["acli a b c d e"]);
    for dir in ["a", "a/b", "a/b/c", "a/b/c/d"] {
        assert!(fixture.output().join(dir).join("_category_.json").is_file(), "{}", dir);
    }
    assert!(fixture.output().join("a/b/c/d/e.md").is_file());
}

#[test]
fn test_category_json_format() {
    let fixture = Fixture::new();
    fixture.generate(&["acli net list"]);
    let raw = fixture.read("net/_category_.json");
    assert!(raw.starts_with("{\n    \"label\": \"net\""));
    assert_eq!(
        fixture.read_json("net/_category_.json"),
        json!({
            "label": "net",
            "position": 1,
            "link": {"type": "generated-index", "description": "net related documents"}
        })
    );
}

#[test]
fn test_existing_pages_are_never_overwritten() {
    let fixture = Fixture::new();
    std::fs::create_dir_all(fixture.output().join("net")).unwrap();
    std::fs::write(fixture.output().join("net/list.md"), "hand written").unwrap();

    let outcome = fixture.generate(&["acli net list", "acli net show"]);
    assert!(outcome.is_success());
    assert_eq!(fixture.read("net/list.md"), "hand written");
    assert_eq!(outcome.summary.files, vec!["net/show.md"]);
    // `net` already existed, so it is not new and gets no metadata
    assert!(outcome.summary.directories.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_counts_as_existing() {
    let fixture = Fixture::new();
    let shared = fixture.temp_dir.path().join("shared-net");
    std::fs::create_dir_all(&shared).unwrap();
    let hand_written = r#"{"label": "Networking (hand-written)"}"#;
    std::fs::write(shared.join("_category_.json"), hand_written).unwrap();
    std::fs::create_dir_all(fixture.output()).unwrap();
    std::os::unix::fs::symlink(&shared, fixture.output().join("net")).unwrap();

    let first = fixture.generate(&["acli net list"]);
    assert!(first.is_success());
    assert!(first.summary.directories.is_empty());
    assert_eq!(first.summary.files, vec!["net/list.md"]);
    assert_eq!(
        std::fs::read_to_string(shared.join("_category_.json")).unwrap(),
        hand_written
    );
    assert!(shared.join("list.md").is_file());

    let second = fixture.generate(&["acli net list"]);
    assert!(second.is_success());
    assert!(second.summary.directories.is_empty());
    assert!(second.summary.files.is_empty());
}

#[test]
fn test_path_like_tokens_never_escape_output_root() {
    let fixture = Fixture::new();
    let outcome = fixture.generate(&["acli .. x y", "acli a/b list", "acli ok go"]);

    assert!(outcome.is_success());
    assert_eq!(outcome.summary.directories, vec!["ok"]);
    assert_eq!(list_files(&fixture.output()), vec!["ok/_category_.json", "ok/go.md"]);
    assert!(!fixture.temp_dir.path().join("x").exists());
}
