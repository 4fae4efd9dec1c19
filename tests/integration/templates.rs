//! User templates in the template directory.

use super::test_utils::Fixture;
use serde_json::json;

#[test]
fn test_command_template_heading_and_description() {
    let fixture = Fixture::new();
    fixture.write_template(
        "command.md",
        "---\nsidebar_position: 3\n---\n\n# {command name}\n\n{}\n\n{unrelated}\n",
    );

    fixture.generate(&["acli net nic list"]);
    assert_eq!(
        fixture.read("net/nic/list.md"),
        "---\nsidebar_position: 3\n---\n\n# list\n\nnet > nic > list\n\n{unrelated}\n"
    );
}

#[test]
fn test_category_template_keeps_custom_fields() {
    let fixture = Fixture::new();
    fixture.write_template(
        "_category_.json",
        r#"{"label": "placeholder", "position": 5, "collapsed": false}"#,
    );

    fixture.generate(&["acli net list"]);
    assert_eq!(
        fixture.read_json("net/_category_.json"),
        json!({"label": "net", "position": 5, "collapsed": false})
    );
}

#[test]
fn test_conflict_templates() {
    let fixture = Fixture::new();
    fixture.existing_category("old/if", "if");
    fixture.write_template(
        "_category_conflict.json",
        r#"{"label": "", "position": 9, "link": {"type": "doc", "id": ""}}"#,
    );
    fixture.write_template("category.md", "# {label}\n\nOverview of {label}.\n");

    fixture.generate(&["acli tool if list"]);
    assert_eq!(
        fixture.read_json("tool/if/_category_.json"),
        json!({"label": "if", "position": 9, "link": {"type": "doc", "id": "tool/if/category"}})
    );
    assert_eq!(fixture.read("tool/if/category.md"), "# if\n\nOverview of if.\n");
}

#[test]
fn test_malformed_template_falls_back_to_default() {
    let fixture = Fixture::new();
    fixture.write_template("_category_.json", "{ broken");
    fixture.write_template("_category_conflict.json", "[1, 2]");
    fixture.existing_category("old/list", "nic");

    let outcome = fixture.generate(&["acli net list", "acli tool nic show"]);
    assert!(outcome.is_success());
    assert_eq!(fixture.read_json("net/_category_.json")["position"], 1);
    assert_eq!(
        fixture.read_json("tool/nic/_category_.json")["link"],
        json!({"type": "doc", "id": "tool/nic/category"})
    );
    assert!(fixture.read("net/list.md").contains("Overview: net > list"));
}
