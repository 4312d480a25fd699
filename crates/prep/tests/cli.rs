//! CLI integration tests for prep commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a prep command.
fn prep() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("prep").unwrap()
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Writes a content shelf with a manifest and markdown files.
fn write_fixture(root: &Path) {
    fs::write(
        root.join("prep.toml"),
        r#"
[[entry]]
locator = "languages/java/introduction.md"
category = "languages"
language = "java"
topic = "introduction"
title = "Introduction to Java"
description = "Learn the basics of Java programming"
order = 1

[[entry]]
locator = "languages/java/oops/inheritance.md"
category = "languages"
language = "java"
topic = "inheritance"
group = "OOPs"
title = "Inheritance"
order = 10

[[entry]]
locator = "dsa/linked-lists.md"
category = "dsa"
topic = "linked-lists"
title = "Linked Lists"
order = 2

[[entry]]
locator = "dsa/arrays.md"
category = "dsa"
topic = "arrays"
title = "Arrays"
order = 1
"#,
    )
    .unwrap();

    fs::create_dir_all(root.join("languages/java/oops")).unwrap();
    fs::create_dir_all(root.join("dsa")).unwrap();

    fs::write(
        root.join("languages/java/introduction.md"),
        "# Introduction\n\nWelcome to Java.\n\n## Setup\n\nInstall a JDK.\n",
    )
    .unwrap();
    fs::write(
        root.join("languages/java/oops/inheritance.md"),
        "# Inheritance\n\nExtending classes.\n",
    )
    .unwrap();
    fs::write(
        root.join("dsa/arrays.md"),
        "# Arrays\n\n## Intro\n\nFirst intro.\n\n## Intro\n\nSecond intro.\n",
    )
    .unwrap();
    fs::write(root.join("dsa/linked-lists.md"), "No headings here.\n").unwrap();
}

mod ls {
    use super::*;

    #[test]
    fn summary_lists_all_categories() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .arg("ls")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("languages"));
        assert!(stdout.contains("dsa"));
        assert!(stdout.contains("system-design"));
        assert!(stdout.contains("interview"));
        assert!(stdout.contains("java"));
    }

    #[test]
    fn category_listing_is_in_display_order() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["ls", "dsa"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        let arrays = stdout.find("arrays").unwrap();
        let linked = stdout.find("linked-lists").unwrap();
        assert!(arrays < linked, "arrays (order 1) should come first");
    }

    #[test]
    fn grouped_entries_follow_ungrouped() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["ls", "languages", "--language", "java"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        let intro = stdout.find("introduction").unwrap();
        let group = stdout.find("OOPs").unwrap();
        let inheritance = stdout.find("inheritance").unwrap();
        assert!(intro < group);
        assert!(group < inheritance);
    }

    #[test]
    fn empty_category_succeeds() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["ls", "interview"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No entries."));
    }

    #[test]
    fn unknown_category_is_usage_error() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["ls", "frontend"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown category"));
    }

    #[test]
    fn json_listing_preserves_order() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["ls", "dsa", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value =
            serde_json::from_str(&String::from_utf8(output).unwrap()).unwrap();
        let topics: Vec<&str> = value["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["topic"].as_str().unwrap())
            .collect();
        assert_eq!(topics, vec!["arrays", "linked-lists"]);
    }
}

mod show {
    use super::*;

    #[test]
    fn renders_selected_topic() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["show", "dsa", "arrays", "--plain"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("Arrays"));
        assert!(stdout.contains("First intro."));
    }

    #[test]
    fn missing_topic_defaults_to_first() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["show", "dsa", "--plain"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        // arrays has order 1, so it is the first topic in the listing.
        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("Arrays"));
    }

    #[test]
    fn unknown_topic_is_content_not_found() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["show", "dsa", "heaps"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("content not found"))
            .stderr(predicate::str::contains("prep ls dsa"));
    }

    #[test]
    fn empty_category_is_content_not_found() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["show", "interview"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("content not found"));
    }

    #[test]
    fn missing_content_file_is_load_failure() {
        let dir = temp_dir();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join("dsa/arrays.md")).unwrap();

        prep()
            .current_dir(dir.path())
            .args(["show", "dsa", "arrays"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load"));
    }

    #[test]
    fn no_manifest_fails_with_init_hint() {
        let dir = temp_dir();

        prep()
            .current_dir(dir.path())
            .args(["show", "dsa"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("prep init"));
    }

    #[test]
    fn light_theme_renders() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["show", "dsa", "arrays", "--theme", "light"])
            .assert()
            .success();
    }
}

mod toc {
    use super::*;

    #[test]
    fn prints_headings_in_document_order() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["toc", "dsa", "arrays"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Arrays"));
        assert!(lines[1].trim_start().starts_with("Intro"));
    }

    #[test]
    fn duplicate_headings_get_distinct_ids() {
        let dir = temp_dir();
        write_fixture(dir.path());

        let output = prep()
            .current_dir(dir.path())
            .args(["toc", "dsa", "arrays", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value =
            serde_json::from_str(&String::from_utf8(output).unwrap()).unwrap();
        let headings = value.as_array().unwrap();
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[1]["text"], headings[2]["text"]);
        assert_ne!(headings[1]["id"], headings[2]["id"]);

        let levels: Vec<u64> = headings
            .iter()
            .map(|h| h["level"].as_u64().unwrap())
            .collect();
        assert_eq!(levels, vec![1, 2, 2]);
    }

    #[test]
    fn document_without_headings_prints_nothing() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .args(["toc", "dsa", "linked-lists"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_manifest() {
        let dir = temp_dir();

        prep()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let manifest_path = dir.path().join("prep.toml");
        assert!(manifest_path.exists());

        let contents = fs::read_to_string(&manifest_path).unwrap();
        assert!(contents.contains("# [[entry]]"));
    }

    #[test]
    fn fails_if_manifest_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join("prep.toml"), "existing").unwrap();

        prep()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .failure();
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join("prep.toml"), "old content").unwrap();

        prep()
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join("prep.toml")).unwrap();
        assert!(contents.contains("# [[entry]]"));
    }
}

mod check {
    use super::*;

    #[test]
    fn valid_shelf_passes() {
        let dir = temp_dir();
        write_fixture(dir.path());

        prep()
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("All locators resolve."));
    }

    #[test]
    fn missing_content_fails() {
        let dir = temp_dir();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join("dsa/linked-lists.md")).unwrap();

        prep()
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("do not resolve"));
    }

    #[test]
    fn duplicate_topic_fails() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("prep.toml"),
            r#"
[[entry]]
locator = "dsa/a.md"
category = "dsa"
topic = "arrays"
title = "A"

[[entry]]
locator = "dsa/b.md"
category = "dsa"
topic = "arrays"
title = "B"
"#,
        )
        .unwrap();

        prep()
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate topic"));
    }

    #[test]
    fn no_manifest_fails_with_init_hint() {
        let dir = temp_dir();

        prep()
            .current_dir(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("prep init"));
    }
}
