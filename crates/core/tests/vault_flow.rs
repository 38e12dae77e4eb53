use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use daylink_core::config::ConfigLoader;
use daylink_core::host::{DailyNotes, SettingsStore};
use daylink_core::markdown::TextBuffer;
use daylink_core::mention::{SelectionDirection, SuggestionPopup};
use daylink_core::vault::Vault;
use daylink_core::{Settings, WeekStart, default_options, open_daily_note};
use tempfile::TempDir;

// Thursday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup() -> (TempDir, Vault) {
    let tmp = TempDir::new().unwrap();
    let vault_root = tmp.path().join("vault");
    write(&vault_root, "People/Jo Smith.md", "---\ntags: [person]\naliases: [Jo]\n---\n");
    write(&vault_root, "People/Joanna.md", "---\ntags: person\n---\n");
    write(&vault_root, "People/Bob.md", "---\ntags: [person]\n---\n");
    write(&vault_root, "Notes/Journal idea.md", "---\ntags: [idea]\n---\n");
    write(&vault_root, "Archive/People/Jones.md", "---\ntags: [person]\n---\n");
    write(&vault_root, "Templates/daily.md", "# {{title}}\n\nCreated for {{date:%A}}\n");

    let cfg_path = tmp.path().join("config.toml");
    let toml = format!(
        r#"
version = 1

[profiles.default]
vault_root = "{}"
excluded_folders = ["Archive", "Templates"]

[profiles.default.daily]
folder = "Daily"
template = "{{{{vault_root}}}}/Templates/daily.md"
"#,
        vault_root.display()
    );
    fs::write(&cfg_path, toml).unwrap();

    let cfg = ConfigLoader::load(Some(&cfg_path), None).unwrap();
    let vault = Vault::open(&cfg).unwrap();
    (tmp, vault)
}

fn type_into(
    popup: &mut SuggestionPopup,
    buf: &mut TextBuffer,
    vault: &Vault,
    text: &str,
) -> bool {
    let mut visible = false;
    for c in text.chars() {
        let cursor = buf.insert_at_end(c);
        visible = popup
            .on_text_change(cursor, &*buf, &*buf, &vault.index, &vault.daily, today())
            .unwrap();
    }
    visible
}

#[test]
fn mention_person_end_to_end() {
    let (_tmp, mut vault) = setup();
    let mut popup = SuggestionPopup::new(vault.person_tag.clone());
    let mut buf = TextBuffer::new("Lunch with ");

    assert!(type_into(&mut popup, &mut buf, &vault, "@jo"));

    let listing: Vec<String> = popup
        .suggestions()
        .iter()
        .map(|s| {
            let c = &s.candidate;
            format!("{} | {} | {}", c.display_name, c.alias.as_deref().unwrap_or("-"), c.path)
        })
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    Jo Smith | Jo | People/Jo Smith.md
    Joanna | - | People/Joanna.md
    ");

    let replacement = popup
        .accept(&vault.index, &mut vault.daily, &vault.links, "Inbox.md")
        .unwrap()
        .unwrap();
    replacement.apply(&mut buf);

    assert_eq!(buf.text(), "Lunch with [[Jo Smith|Jo]] ");
    assert!(!popup.is_visible());
}

#[test]
fn mention_date_creates_daily_note() {
    let (_tmp, mut vault) = setup();
    let mut popup = SuggestionPopup::new(vault.person_tag.clone());
    let mut buf = TextBuffer::new("Follow up ");

    assert!(type_into(&mut popup, &mut buf, &vault, "@tomorrow"));
    let aliases: Vec<&str> = popup
        .suggestions()
        .iter()
        .map(|s| s.candidate.alias.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(aliases, vec!["2024-03-15", "Tomorrow"]);

    popup.select_next(SelectionDirection::Next);
    let replacement = popup
        .accept(&vault.index, &mut vault.daily, &vault.links, "Inbox.md")
        .unwrap()
        .unwrap();
    replacement.apply(&mut buf);

    assert_eq!(buf.text(), "Follow up [[2024-03-15|Tomorrow]] ");
    let created = vault.root().join("Daily/2024-03-15.md");
    assert_eq!(fs::read_to_string(created).unwrap(), "# 2024-03-15\n\nCreated for Friday\n");
}

#[test]
fn mention_inside_code_is_ignored() {
    let (_tmp, vault) = setup();
    let mut popup = SuggestionPopup::new(vault.person_tag.clone());
    let mut buf = TextBuffer::new("```\n");

    assert!(!type_into(&mut popup, &mut buf, &vault, "@jo"));
    assert!(popup.suggestions().is_empty());
}

#[test]
fn goto_creates_then_finds() {
    let (_tmp, mut vault) = setup();
    let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

    assert_eq!(vault.daily.find(date).unwrap(), None);
    let created = open_daily_note(&mut vault.daily, date).unwrap();
    assert_eq!(created.path, "Daily/2024-03-18.md");

    let found = open_daily_note(&mut vault.daily, date).unwrap();
    assert_eq!(found, created);
}

#[test]
fn week_start_setting_drives_next_week() {
    let (_tmp, vault) = setup();

    let settings = vault.settings.load().unwrap();
    assert_eq!(settings.start_of_week, WeekStart::Monday);
    assert_eq!(default_options(settings.start_of_week, today())[1].iso_date(), "2024-03-18");

    vault.settings.save(&Settings { start_of_week: WeekStart::Sunday }).unwrap();
    let settings = vault.settings.load().unwrap();
    assert_eq!(default_options(settings.start_of_week, today())[1].iso_date(), "2024-03-17");
}
