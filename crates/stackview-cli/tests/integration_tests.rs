//! End-to-end tests for the `stackview` binary.

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn stackview(home: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("stackview");
    cmd.env("XDG_CONFIG_HOME", home.join("xdg"))
        .env("HOME", home)
        .env_remove("STACKVIEW__WORKSPACE__WATCH")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let write = |rel: &str, body: &str| {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    };
    write(
        "src/components/Button.tsx",
        "export function Button() {\n  return <Icon name=\"ok\" />;\n}\n",
    );
    write(
        "src/hooks/useCounter.ts",
        "export function useCounter() {\n  const [n, setN] = useState(0);\n  return n;\n}\n",
    );
    write(
        "src/server/routers/post.ts",
        "export const postRouter = router({\n  list: publicProcedure.query(() => []),\n});\n",
    );
    write("node_modules/lib/index.js", "useState(1);\n");
    dir
}

// ── basics ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("inflect"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_two() {
    let home = TempDir::new().unwrap();
    stackview(home.path()).arg("explode").assert().code(2);
}

// ── inflect ──────────────────────────────────────────────────────────────────

#[test]
fn inflect_dasherize() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .args(["inflect", "dasherize", "fooBar"])
        .assert()
        .success()
        .stdout("foo-bar\n");
}

#[test]
fn inflect_joins_words() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .args(["inflect", "camelize", "hello", "world"])
        .assert()
        .success()
        .stdout("helloWorld\n");
}

#[test]
fn inflect_json_output() {
    let home = TempDir::new().unwrap();
    let out = stackview(home.path())
        .args(["--output-format", "json", "inflect", "ordinalize", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["output"], "1st");
    assert_eq!(value["inflection"], "ordinalize");
}

// ── tree ─────────────────────────────────────────────────────────────────────

#[test]
fn files_tree_as_json() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    let out = stackview(home.path())
        .args(["tree", "files", "--format", "json", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["tree"], "files");
    let labels: Vec<&str> = value["roots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["components: 1", "hooks: 1", "routers: 1"]);
    assert_eq!(
        value["roots"][0]["children"][0]["label"],
        "src/components/Button.tsx"
    );
}

#[test]
fn hooks_tree_flat_skips_excluded_dirs() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    stackview(home.path())
        .args(["tree", "hooks", "--format", "flat", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("src/hooks/useCounter.ts:2: const [n, setN] = useState(0);\n");
}

#[test]
fn components_tree_text() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    stackview(home.path())
        .args(["tree", "components", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("src/components/Button.tsx"))
        .stdout(predicate::str::contains("└── Icon  (src/components/Button.tsx:2)"));
}

#[test]
fn depth_one_shows_only_roots() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    stackview(home.path())
        .args(["tree", "routes", "--depth", "1", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("src/server/routers/post.ts\n");
}

#[test]
fn all_trees_as_json_array() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    let out = stackview(home.path())
        .args(["--output-format", "json", "tree", "all", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let trees: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tree"].as_str().unwrap())
        .collect();
    assert_eq!(trees, vec!["files", "components", "hooks", "routes"]);
}

#[test]
fn env_overrides_watch_categories() {
    let home = TempDir::new().unwrap();
    let ws = workspace();
    stackview(home.path())
        .env("STACKVIEW__WORKSPACE__WATCH", "hooks")
        .args(["tree", "files", "--format", "flat", "--root"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("src/hooks/useCounter.ts\n");
}

#[test]
fn missing_root_exits_three() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .args(["tree", "files", "--root", "/definitely/not/here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

// ── config / init ────────────────────────────────────────────────────────────

#[test]
fn config_get_known_key() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .current_dir(home.path())
        .args(["config", "get", "workspace.scan_concurrency"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn config_get_unknown_key_exits_two() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .current_dir(home.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config list"));
}

#[test]
fn broken_config_file_exits_four() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[workspace]\nscan_concurrency = 0\n").unwrap();
    stackview(home.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "list"])
        .assert()
        .code(4);
}

#[test]
fn init_local_then_force() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .current_dir(home.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let written = fs::read_to_string(home.path().join(".stackview.toml")).unwrap();
    assert!(written.contains("[workspace]"));

    stackview(home.path())
        .current_dir(home.path())
        .args(["init", "--local"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    stackview(home.path())
        .current_dir(home.path())
        .args(["init", "--local", "--force"])
        .assert()
        .success();
}

#[test]
fn local_config_is_read_from_cwd() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".stackview.toml"),
        "[output]\nformat = \"flat\"\n",
    )
    .unwrap();
    stackview(home.path())
        .current_dir(home.path())
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("flat\n");
}

// ── completions ──────────────────────────────────────────────────────────────

#[test]
fn bash_completions_mention_binary() {
    let home = TempDir::new().unwrap();
    stackview(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stackview"));
}
