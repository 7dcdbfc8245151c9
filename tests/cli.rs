use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn lexfreq() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lexfreq"))
}

fn write_utf16_le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

#[test]
fn scan_lists_txt_files_in_stable_order() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("b.txt"), "b").unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(temp.path().join("notes.md"), "skipped").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/nested.txt"), "skipped").unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("scan");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let paths: Vec<_> = items
        .iter()
        .map(|v| v.get("path").and_then(|p| p.as_str()).unwrap().to_string())
        .collect();

    assert_eq!(paths, vec!["a.txt", "b.txt"]);
}

#[test]
fn sniff_detects_utf8_and_utf16() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("a.txt"), "The cat sat.").unwrap();
    write_utf16_le(&temp.path().join("b.txt"), "Cats and dogs.");

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("sniff").arg("a.txt");
    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["meta"]["encoding"], "utf-8");

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("sniff").arg("b.txt");
    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["meta"]["encoding"], "utf-16");
}

#[test]
fn sniff_fails_on_undetectable_sample() {
    let temp = tempdir().unwrap();

    // Lone surrogates are invalid under both utf-8 and utf-16
    fs::write(temp.path().join("raw.txt"), [0x00u8, 0xD8, 0x00, 0xD8]).unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("sniff")
        .arg("raw.txt");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("could not detect"));
}

#[test]
fn ingest_emits_corpus_in_listing_order() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("a.txt"), "The cat sat.\nThe dog sat.").unwrap();
    write_utf16_le(&temp.path().join("b.txt"), "Cats and dogs.");

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("ingest");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let lines: Vec<_> = items
        .iter()
        .filter(|v| v["kind"] == "line")
        .map(|v| v["excerpt"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(lines, vec!["The cat sat.", "The dog sat.", "Cats and dogs."]);

    let files: Vec<_> = items.iter().filter(|v| v["kind"] == "file").collect();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["meta"]["encoding"], "utf-8");
    assert_eq!(files[1]["meta"]["encoding"], "utf-16");
}

#[test]
fn tokens_carries_token_lists_per_line() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("a.txt"), "The cat sat.\nThe dog sat.").unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("tokens");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["data"], serde_json::json!(["the", "cat", "sat"]));
    assert_eq!(items[1]["data"], serde_json::json!(["the", "dog", "sat"]));
}

#[test]
fn report_ranks_words_with_first_seen_tie_break() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("a.txt"), "The cat sat.\nThe dog sat.").unwrap();
    write_utf16_le(&temp.path().join("b.txt"), "Cats and dogs.");

    let mut cmd = lexfreq();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("report")
        .arg("--top")
        .arg("3");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let ranked: Vec<(String, u64)> = items
        .iter()
        .map(|v| {
            (
                v["data"]["word"].as_str().unwrap().to_string(),
                v["data"]["count"].as_u64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("the".to_string(), 2),
            ("sat".to_string(), 2),
            ("cat".to_string(), 1)
        ]
    );
}

#[test]
fn report_markdown_renders_word_table() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("a.txt"), "one one two").unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("report")
        .arg("--format")
        .arg("md");

    let assert = cmd.assert().success();
    let s = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(s.contains("## Top Words"));
    assert!(s.contains("| Rank | Word | Count |"));
    assert!(s.contains("| one |"));
}

#[test]
fn report_aborts_on_undetectable_file() {
    let temp = tempdir().unwrap();

    fs::write(temp.path().join("good.txt"), "fine text").unwrap();
    fs::write(temp.path().join("raw.txt"), [0x00u8, 0xD8, 0x00, 0xD8]).unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("report");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("raw.txt"));
}

#[test]
fn report_defaults_to_top_five() {
    let temp = tempdir().unwrap();

    fs::write(
        temp.path().join("a.txt"),
        "a a a b b b c c c d d d e e e f g h",
    )
    .unwrap();

    let mut cmd = lexfreq();
    cmd.arg("--root").arg(temp.path()).arg("report");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 5);
}
