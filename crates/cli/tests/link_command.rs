use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup(link_style: &str) -> (TempDir, PathBuf, PathBuf) {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    write(&vault, "People/Jo Smith.md", "---\ntags: [person]\naliases: [Jo]\n---\n");
    write(&vault, "People/Joanna.md", "---\ntags: person\n---\n");

    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[profiles.default]\nvault_root = \"{}\"\nlink_style = \"{}\"\n\n[profiles.default.daily]\nfolder = \"Daily\"\n",
            vault.display(),
            link_style
        ),
    )
    .unwrap();
    (tmp, cfg, vault)
}

fn dayl(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dayl"));
    cmd.args(["--config", cfg.to_str().unwrap(), "--today", "2024-03-14"]);
    cmd
}

#[test]
fn link_replaces_mention_with_wikilink() {
    let (_tmp, cfg, vault) = setup("wikilink");
    write(&vault, "Inbox.md", "# Inbox\nLunch with @jo\n");

    dayl(&cfg)
        .args(["link", "Inbox.md", "--line", "2", "--col", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch with [[Jo Smith|Jo]] "));

    assert_eq!(
        fs::read_to_string(vault.join("Inbox.md")).unwrap(),
        "# Inbox\nLunch with [[Jo Smith|Jo]] \n"
    );
}

#[test]
fn link_keeps_text_after_cursor() {
    let (_tmp, cfg, vault) = setup("markdown");
    let inbox = vault.join("Inbox.md");
    write(&vault, "Inbox.md", "ask @joanna about it");

    dayl(&cfg)
        .args(["link", inbox.to_str().unwrap(), "--line", "1", "--col", "11"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&inbox).unwrap(),
        "ask [Joanna](People/Joanna.md)  about it"
    );
}

#[test]
fn link_pick_creates_daily_note() {
    let (_tmp, cfg, vault) = setup("wikilink");
    write(&vault, "Inbox.md", "Follow up @tomorrow");

    dayl(&cfg)
        .args(["link", "Inbox.md", "--line", "1", "--col", "19", "--pick", "2"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(vault.join("Inbox.md")).unwrap(),
        "Follow up [[2024-03-15|Tomorrow]] "
    );
    assert!(vault.join("Daily/2024-03-15.md").is_file());
}

#[test]
fn link_dry_run_leaves_file_untouched() {
    let (_tmp, cfg, vault) = setup("wikilink");
    write(&vault, "Inbox.md", "Lunch with @jo");

    dayl(&cfg)
        .args(["link", "Inbox.md", "--line", "1", "--col", "14", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[Jo Smith|Jo]]"));

    assert_eq!(fs::read_to_string(vault.join("Inbox.md")).unwrap(), "Lunch with @jo");
}

#[test]
fn link_ignores_mentions_in_code_blocks() {
    let (_tmp, cfg, vault) = setup("wikilink");
    write(&vault, "Inbox.md", "```\n@jo\n```\n");

    dayl(&cfg)
        .args(["link", "Inbox.md", "--line", "2", "--col", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No @ mention"));

    assert_eq!(fs::read_to_string(vault.join("Inbox.md")).unwrap(), "```\n@jo\n```\n");
}
