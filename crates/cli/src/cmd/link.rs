//! Complete an @ mention inside a note file.
//!
//! The line under the cursor is replayed one keystroke at a time through
//! the mention popup, exactly as an editor would feed it, and the selected
//! suggestion is written back.

use chrono::NaiveDate;
use daylink_core::markdown::TextBuffer;
use daylink_core::mention::SelectionDirection;
use daylink_core::vault::{Vault, to_vault_path};
use daylink_core::{Position, SuggestionPopup};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::LinkArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, today: Option<NaiveDate>, args: LinkArgs) {
    let cfg = super::load_config(config, profile);
    let mut vault = super::open_vault(&cfg);
    let today = super::reference_date(today);

    let file = resolve_file(&vault, &args.file);
    let content = match fs::read_to_string(&file) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read {}: {e}", file.display());
            std::process::exit(1);
        }
    };
    let source_path = source_path(&vault, &file);

    let Some(row) = args.line.checked_sub(1) else {
        error!("--line is 1-based");
        std::process::exit(1);
    };
    let Some((mut buffer, typed)) = split_at_cursor(&content, row, args.col) else {
        error!("No position {}:{} in {}", args.line, args.col, file.display());
        std::process::exit(1);
    };

    let mut popup = SuggestionPopup::new(vault.person_tag.clone());
    let mut cursor = Position::new(row, 0);
    for c in typed.chars() {
        cursor = buffer.insert(cursor, c);
        if let Err(e) =
            popup.on_text_change(cursor, &buffer, &buffer, &vault.index, &vault.daily, today)
        {
            error!("Failed to compute suggestions: {e}");
            std::process::exit(1);
        }
    }

    if !popup.is_visible() {
        error!("No @ mention with suggestions at {}:{}", args.line, args.col);
        std::process::exit(1);
    }

    let count = popup.suggestions().len();
    let Some(steps) = super::pick_index(args.pick, count) else {
        error!("--pick must be between 1 and {count}");
        std::process::exit(1);
    };
    for _ in 0..steps {
        popup.select_next(SelectionDirection::Next);
    }
    if let Some(item) = popup.selected_item() {
        debug!(name = %item.candidate.display_name, "selected suggestion");
    }

    let replacement = match popup.accept(&vault.index, &mut vault.daily, &vault.links, &source_path)
    {
        Ok(Some(r)) => r,
        Ok(None) => {
            error!("Nothing selected");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to insert link: {e}");
            std::process::exit(1);
        }
    };
    replacement.apply(&mut buffer);

    let text = buffer.text();
    if args.dry_run {
        println!("{}", text.split('\n').nth(row).unwrap_or_default());
        return;
    }

    if let Err(e) = fs::write(&file, &text) {
        error!("Failed to write {}: {e}", file.display());
        std::process::exit(1);
    }
    println!("{}", text.split('\n').nth(row).unwrap_or_default());
}

fn resolve_file(vault: &Vault, file: &Path) -> PathBuf {
    if file.is_absolute() || file.exists() {
        file.to_path_buf()
    } else {
        vault.root().join(file)
    }
}

fn source_path(vault: &Vault, file: &Path) -> String {
    file.canonicalize()
        .ok()
        .and_then(|abs| abs.strip_prefix(vault.root()).ok().map(to_vault_path))
        .unwrap_or_else(|| file.display().to_string())
}

/// Split `content` at `row`/`col` into a buffer holding everything except
/// the typed part of the cursor line, plus that typed part.
fn split_at_cursor(content: &str, row: usize, col: usize) -> Option<(TextBuffer, String)> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let line = *lines.get(row)?;

    let split = match line.char_indices().nth(col) {
        Some((i, _)) => i,
        None if line.chars().count() == col => line.len(),
        None => return None,
    };
    let (typed, rest) = line.split_at(split);
    lines[row] = rest;

    Some((TextBuffer::new(&lines.join("\n")), typed.to_string()))
}
