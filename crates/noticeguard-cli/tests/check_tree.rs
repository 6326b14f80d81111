//! End-to-end checks against real temp trees.

use assert_cmd::Command;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Helper to get a Command for the noticeguard binary.
#[allow(deprecated)]
fn noticeguard_cmd() -> Command {
    Command::cargo_bin("noticeguard").unwrap()
}

fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

/// A hash-commented header that matches the built-in notice, plus some code.
fn valid_source() -> String {
    let body = [
        "This program is free software; you can redistribute it and/or modify",
        "it under the terms of the GNU General Public License as published by",
        "the Free Software Foundation; version 2 of the License.",
        "",
        "This program is distributed in the hope that it will be useful,",
        "but WITHOUT ANY WARRANTY; without even the implied warranty of",
        "MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the",
        "GNU General Public License for more details.",
        "",
        "You should have received a copy of the GNU General Public License",
        "along with this program; if not, write to the Free Software",
        "Foundation, Inc., 51 Franklin St, Fifth Floor, Boston, MA  02110-1301  USA",
    ];

    let mut out = String::from("# Copyright (c) 2015, Example and/or its affiliates.\n#\n");
    for line in body {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            out.push_str(&format!("# {line}\n"));
        }
    }
    out.push_str("\nprint('hello')\n");
    out
}

const LICENSE_BODY: &str = "Sample License Text\n-------------------\nRedistribution permitted.\n";
const LICENSE_SHA1: &str = "57d8a2679f8f885c51a97cc224a901f44fca610b";

const README_BODY: &str = "Docs intro.\n\nFOSS License Exception\nalpha\nbeta\ngamma\nfooter\n";
const WINDOW_SHA1: &str = "6cb493e15e2b527941e27b5a45c1d001a2ab31d7";

fn pinning_config() -> String {
    format!(
        r#"schema = "noticeguard.config.v1"

[[artifacts]]
path = "License.txt"
sha1 = "{LICENSE_SHA1}"

[[artifacts]]
path = "README.txt"
marker = "FOSS License Exception"
lines = 3
sha1 = "{WINDOW_SHA1}"
"#
    )
}

fn read_report(path: &Utf8Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read report");
    serde_json::from_str(&text).expect("parse report json")
}

#[test]
fn clean_tree_passes() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/a.py"), &valid_source());
    write_file(&root.join("src/b.py"), &valid_source());
    write_file(&root.join("License.txt"), LICENSE_BODY);
    write_file(&root.join("README.txt"), README_BODY);
    write_file(&root.join("noticeguard.toml"), &pinning_config());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .success();

    let report = read_report(&report_out);
    assert_eq!(report["schema"], "noticeguard.report.v1");
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["data"]["files_scanned"], 2);
    assert_eq!(report["data"]["artifacts_checked"], 2);
    assert_eq!(report["findings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn missing_header_fails_with_exit_code_two() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/bad.py"), "print('no header')\n");

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .code(2);

    let report = read_report(&report_out);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["data"]["counts"]["error"], 1);
    let findings = report["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["check_id"], "notice.short_license");
    assert_eq!(findings[0]["code"], "copyright_missing");
    assert_eq!(findings[0]["location"]["path"], "src/bad.py");
}

#[test]
fn edited_pinned_text_is_a_digest_mismatch() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("License.txt"), "Sample License Text, edited.\n");
    write_file(&root.join("README.txt"), README_BODY);
    write_file(&root.join("noticeguard.toml"), &pinning_config());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .code(2);

    let report = read_report(&report_out);
    let findings = report["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["check_id"], "legal.pinned_digest");
    assert_eq!(findings[0]["code"], "digest_mismatch");
    assert_eq!(findings[0]["data"]["expected"], LICENSE_SHA1);
}

#[test]
fn missing_artifact_is_reported_not_fatal() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    // README.txt absent; License.txt intact.
    write_file(&root.join("License.txt"), LICENSE_BODY);
    write_file(&root.join("noticeguard.toml"), &pinning_config());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .code(2);

    let report = read_report(&report_out);
    let findings = report["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["code"], "artifact_missing");
}

#[test]
fn warn_profile_keeps_exit_code_zero() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/bad.py"), "print('no header')\n");

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "--profile", "warn"])
        .args(["check", "--all-files", "--report-out", report_out.as_str()])
        .assert()
        .success();

    let report = read_report(&report_out);
    assert_eq!(report["verdict"], "warn");
    assert_eq!(report["findings"][0]["severity"], "warning");
}

#[test]
fn ignored_folders_and_extensions_are_skipped() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    // All of these fall under the default exclusion policy.
    write_file(&root.join("build/gen.py"), "generated, no header\n");
    write_file(&root.join("notes.md"), "just notes\n");
    write_file(&root.join(".gitignore"), "target\n");
    write_file(&root.join("src/ok.py"), &valid_source());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .success();

    let report = read_report(&report_out);
    assert_eq!(report["data"]["files_scanned"], 1);
}

#[test]
fn markdown_renders_from_written_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/bad.py"), "print('no header')\n");

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .code(2);

    noticeguard_cmd()
        .args(["md", "--report", report_out.as_str()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Verdict: **FAIL**"))
        .stdout(predicates::str::contains("copyright_missing"));
}

#[test]
fn annotations_render_from_written_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/bad.py"), "print('no header')\n");

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check", "--all-files"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .code(2);

    noticeguard_cmd()
        .args(["annotations", "--report", report_out.as_str()])
        .assert()
        .success()
        .stdout(predicates::str::contains("::error file=src/bad.py"));
}

#[test]
fn missing_root_writes_runtime_error_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_out = utf8_root(&tmp).join("report.json");

    noticeguard_cmd()
        .args(["--root", "/definitely/not/a/real/path"])
        .args(["check", "--all-files", "--report-out", report_out.as_str()])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("noticeguard error"));

    let report = read_report(&report_out);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["check_id"], "tool.runtime");
    assert_eq!(report["findings"][0]["code"], "runtime_error");
}

#[test]
fn empty_git_index_warns_and_scans_nothing() {
    if std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_err()
    {
        return; // no git on this machine
    }

    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    std::process::Command::new("git")
        .current_dir(&root)
        .args(["init", "-q"])
        .output()
        .expect("git init");
    write_file(&root.join("src/ok.py"), &valid_source());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .args(["--root", root.as_str(), "check"])
        .args(["--report-out", report_out.as_str()])
        .assert()
        .success()
        .stderr(predicates::str::contains("git index is empty"));

    let report = read_report(&report_out);
    assert_eq!(report["data"]["files_scanned"], 0);
}

#[test]
fn root_env_var_is_honored() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    write_file(&root.join("src/ok.py"), &valid_source());

    let report_out = root.join("report.json");

    noticeguard_cmd()
        .env("NOTICEGUARD_ROOT", root.as_str())
        .args(["check", "--all-files", "--report-out", report_out.as_str()])
        .assert()
        .success();

    let report = read_report(&report_out);
    assert_eq!(report["data"]["files_scanned"], 1);
}
