//! CLI binary behavior: stdout result, exit codes, config layering.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary inside `cwd` with an isolated config environment.
fn docskel(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docskel"))
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join("xdg"))
        .env("HOME", cwd.join("home"))
        .env_remove("DOCSKEL_ENV")
        .env_remove("DOCSKEL_LOG")
        .env_remove("DOCSKEL_LOG_OUTPUT")
        .env_remove("DOCSKEL__GENERATION__OUTPUT_DIR")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_generate_json_prints_result_value() {
    let temp_dir = TempDir::new().unwrap();
    let output = docskel(
        temp_dir.path(),
        &[
            "--quiet",
            "generate",
            "--commands",
            r#"["acli network nic list"]"#,
            "--format",
            "json",
        ],
    );
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["directories"], serde_json::json!(["network", "network/nic"]));
    assert_eq!(value["total_files"], 3);
    assert!(temp_dir.path().join("docs/network/nic/list.md").is_file());
}

#[test]
fn test_input_error_exits_nonzero_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output = docskel(
        temp_dir.path(),
        &["--quiet", "generate", "--commands", "[]", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["error"], "Command list cannot be empty");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Command list cannot be empty"));
    assert!(!temp_dir.path().join("docs").exists());
}

#[test]
fn test_logs_stay_off_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = docskel(
        temp_dir.path(),
        &[
            "--verbose",
            "generate",
            "--commands",
            r#"["acli a b"]"#,
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());
    serde_json::from_str::<serde_json::Value>(&stdout(&output)).unwrap();
    assert!(String::from_utf8_lossy(&output.stderr).contains("Generation complete"));
}

#[test]
fn test_plan_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let output = docskel(
        temp_dir.path(),
        &["--quiet", "plan", "--commands", r#"["acli net nic list"]"#],
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("net/nic"));
    assert!(text.contains("✓ net/nic/list.md"));
    assert!(!temp_dir.path().join("docs").exists());
}

#[test]
fn test_project_config_sets_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("docskel.toml"),
        "[generation]\noutput_dir = \"site/docs\"\nprogram_name = \"mycli\"\n",
    )
    .unwrap();

    let output = docskel(
        temp_dir.path(),
        &["--quiet", "generate", "--commands", r#"["mycli tools fmt"]"#],
    );
    assert!(output.status.success());
    assert!(temp_dir.path().join("site/docs/tools/fmt.md").is_file());
    assert!(stdout(&output).contains("✓ tools/fmt.md"));
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[generation]\noutput_dir = \"from-flag\"\n").unwrap();
    fs::write(
        temp_dir.path().join("docskel.toml"),
        "[generation]\noutput_dir = \"from-project\"\n",
    )
    .unwrap();

    let output = docskel(
        temp_dir.path(),
        &[
            "--quiet",
            "--config",
            config.to_str().unwrap(),
            "config",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["generation"]["output_dir"], "from-flag");
}

#[test]
fn test_commands_file_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("commands.json"),
        r#"["acli sys cpu info", "acli sys mem info"]"#,
    )
    .unwrap();
    let output = docskel(
        temp_dir.path(),
        &[
            "--quiet",
            "generate",
            "--commands-file",
            "commands.json",
            "--output",
            "out",
        ],
    );
    assert!(output.status.success());
    assert!(temp_dir.path().join("out/sys/cpu/info.md").is_file());
    assert!(temp_dir.path().join("out/sys/mem/info.md").is_file());
}
