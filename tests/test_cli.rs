#[cfg(test)]
extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_sources(dir: &Path) {
    fs::write(dir.join("SDB.js"), "var SDB = function(){};\n").expect("Writing SDB.js failed");
    fs::write(dir.join("Character.js"), "var Character = function(){};\n")
        .expect("Writing Character.js failed");
    fs::write(dir.join("STree.js"), "var ActionTree = function(){};\n")
        .expect("Writing STree.js failed");
    fs::write(
        dir.join("StoryTree.js"),
        "var StoryTree = function(){\n\tthis.SDB = new SDB();\n};\n\nStoryTree.prototype.fail = function(){\n\talert(\"fail\");\n};\n",
    )
    .expect("Writing StoryTree.js failed");
}

#[test]
fn test_cli() {
    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.assert().failure();
}

#[test]
fn test_version() {
    let expected_version = "stbuild 0.1.0\n";
    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.arg("--version").assert().stdout(expected_version);
}

#[test]
fn test_build() {
    let temp_dir = TempDir::new().expect("Creating temp dir failed");
    write_sources(temp_dir.path());
    let output = temp_dir.path().join("build").join("StoryTree.js");
    fs::create_dir(temp_dir.path().join("build")).expect("Creating build dir failed");

    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.arg("--input-folder")
        .arg(temp_dir.path())
        .arg("--output-file")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bundled = fs::read_to_string(&output).expect("Reading output failed");
    let expected = concat!(
        "var StoryTree = function(){\n",
        "\tvar SDB = function(){};\n\n\n",
        "\tvar Character = function(){};\n\n\n",
        "\tvar ActionTree = function(){};\n\n\n",
        "\n\n",
        "\t//These are the members of StoryTree \n",
        "\tthis.SDB = new SDB();\n",
        "\t\n",
        "\tStoryTree.prototype.fail = function(){\n",
        "\t\tthrow(\"fail\");\n",
        "\t};\n",
        "\n};",
    );
    assert_eq!(bundled, expected);
}

#[test]
fn test_build_missing_source_fails() {
    let temp_dir = TempDir::new().expect("Creating temp dir failed");
    write_sources(temp_dir.path());
    fs::remove_file(temp_dir.path().join("STree.js")).expect("Removing STree.js failed");
    let output = temp_dir.path().join("out.js");

    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.arg("--input-folder")
        .arg(temp_dir.path())
        .arg("--output-file")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("STree.js"));

    assert!(!output.exists());
}

#[test]
fn test_build_requires_output_file() {
    let temp_dir = TempDir::new().expect("Creating temp dir failed");

    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.arg("--input-folder")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-file"));
}

#[test]
fn test_config() {
    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level"));
}

#[test]
fn test_completion_bash() {
    let mut cmd = Command::cargo_bin("stbuild").expect("Calling binary failed");
    cmd.args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stbuild"));
}
