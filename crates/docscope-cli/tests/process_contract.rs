use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::{env, fs};

use serde_json::Value;
use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_docscope") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "docscope.exe"
    } else {
        "docscope"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "docscope binary not found at {}",
        fallback.display()
    );
    fallback
}

fn write_corpus(root: &Path) -> PathBuf {
    fs::create_dir_all(root.join("guides")).expect("mkdir guides");
    fs::create_dir_all(root.join("pages")).expect("mkdir pages");
    fs::write(
        root.join("guides/sidechain.md"),
        "# Sidechain Compression\nKey the compressor from another track.\n",
    )
    .expect("write guide");
    fs::write(root.join("toc.md"), "# Manual\n## Dynamics\n### Sidechain\n").expect("write toc");
    fs::write(root.join("pages/dynamics.md"), "## Dynamics\nbody\n").expect("write page");
    let manifest = root.join("docscope.toml");
    fs::write(
        &manifest,
        r#"
[[source]]
category = "guides"
kind = "guide"
root = "guides"

[toc]
document = "toc.md"
pages = "pages"
"#,
    )
    .expect("write manifest");
    manifest
}

fn run(manifest: &Path, args: &[&str]) -> Output {
    Command::new(cli_bin_path())
        .arg("--manifest")
        .arg(manifest)
        .args(args)
        .env_remove("DOCSCOPE_MAX_RESULTS")
        .env_remove("DOCSCOPE_MULTI_WORD_MODE")
        .env_remove("DOCSCOPE_TOC_INCLUDE_ALL")
        .output()
        .expect("run docscope")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn search_process_contract_emits_ranked_json() {
    // Given a one-guide corpus
    // When running `docscope search sidechain`
    // Then stdout is a JSON array whose first hit is that guide.
    let temp = tempdir().expect("tempdir");
    let manifest = write_corpus(temp.path());
    let json = stdout_json(&run(&manifest, &["search", "sidechain"]));

    let hits = json.as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["type"], "guide");
    assert_eq!(hits[0]["name"], "Sidechain Compression");
    assert_eq!(hits[0]["path"], "guides/sidechain.md");
    let score = hits[0]["relevance_score"].as_f64().expect("score");
    assert!(score > 0.0 && score <= 1.0);
}

#[test]
fn toc_process_contract_honors_include_all_flag() {
    let temp = tempdir().expect("tempdir");
    let manifest = write_corpus(temp.path());

    let mapped = stdout_json(&run(&manifest, &["toc"]));
    assert_eq!(mapped[0]["title"], "Dynamics");
    assert_eq!(mapped[0]["file"], "dynamics.md");
    assert_eq!(mapped[0]["children"].as_array().map(Vec::len), Some(0));

    let full = stdout_json(&run(&manifest, &["toc", "--include-all"]));
    assert_eq!(full[0]["children"][0]["title"], "Sidechain");
    assert!(full[0]["children"][0]["file"].is_null());
}

#[test]
fn missing_manifest_process_contract_returns_non_zero() {
    // Given no manifest on disk
    // When running `docscope search gain`
    // Then the process fails, names the manifest and keeps stdout empty.
    let temp = tempdir().expect("tempdir");
    let output = run(&temp.path().join("absent.toml"), &["search", "gain"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.toml"), "stderr: {stderr}");
}

#[test]
fn tokenize_process_contract_runs_without_manifest() {
    let temp = tempdir().expect("tempdir");
    let output = run(
        &temp.path().join("absent.toml"),
        &["tokenize", "Route a Bus", "--min-length", "2"],
    );
    let json = stdout_json(&output);
    assert_eq!(json["tokens"], serde_json::json!(["route", "bus"]));
}
