//! End-to-end runs of the `monsterrank` binary, resolving battles from a file.
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn monsterrank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_monsterrank"))
        .args(args)
        .output()
        .expect("failed to launch monsterrank")
}

fn outcomes_file(name: &str, json: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("monsterrank-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_no_monsters_is_usage_error() {
    let out = monsterrank(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: monsterrank"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn test_single_monster_is_usage_error() {
    // The endpoint is unroutable: reaching the network would fail differently.
    let out = monsterrank(&["--endpoint", "http://127.0.0.1:9", "Kraken"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: monsterrank"), "{stderr}");
    assert!(stderr.contains("got 1"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn test_ranks_from_outcomes_file() {
    let path = outcomes_file(
        "three",
        r#"[
            {"winner": "Kraken", "loser": "Hydra"},
            {"winner": "Hydra", "loser": "Golem"},
            {"winner": "Kraken", "loser": "Golem"}
        ]"#,
    );

    let out = monsterrank(&["--outcomes", path.to_str().unwrap(), "Golem", "Hydra", "Kraken"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Winner Hydra, Loser Golem\n\
         Winner Kraken, Loser Golem\n\
         Winner Kraken, Loser Hydra\n\
         [\"Kraken\", \"Hydra\", \"Golem\"]\n"
    );
}

#[test]
fn test_missing_outcome_aborts_without_ranking() {
    let path = outcomes_file("gap", r#"[{"winner": "Kraken", "loser": "Hydra"}]"#);

    let out = monsterrank(&["--outcomes", path.to_str().unwrap(), "Kraken", "Hydra", "Golem"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Winner Kraken, Loser Hydra\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: battle Kraken vs Golem failed"), "{stderr}");
}
