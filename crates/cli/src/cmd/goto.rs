//! Jump to the daily note for a chosen date.

use chrono::NaiveDate;
use daylink_core::host::{DailyNotes, SettingsStore};
use daylink_core::{DateOption, date_suggestions, open_daily_note};
use dialoguer::{FuzzySelect, theme::ColorfulTheme};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::error;

use super::output::print_json;
use crate::GotoArgs;

#[derive(Serialize)]
struct GotoOutput<'a> {
    label: &'a str,
    date: String,
    path: String,
    created: bool,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, today: Option<NaiveDate>, args: GotoArgs) {
    let cfg = super::load_config(config, profile);
    let mut vault = super::open_vault(&cfg);

    let settings = match vault.settings.load() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    let query = args.query.clone().unwrap_or_default();
    let options = date_suggestions(&query, settings.start_of_week, super::reference_date(today));
    if options.is_empty() {
        error!("No date matches '{query}'");
        std::process::exit(1);
    }

    let interactive = args.query.is_none() && args.pick.is_none() && std::io::stdin().is_terminal();
    let chosen = if interactive {
        pick_interactive(&options)
    } else {
        match super::pick_index(args.pick, options.len()) {
            Some(i) => &options[i],
            None => {
                error!("--pick must be between 1 and {}", options.len());
                std::process::exit(1);
            }
        }
    };

    let existed = vault.daily.is_available() && matches!(vault.daily.find(chosen.date), Ok(Some(_)));
    let note = match open_daily_note(&mut vault.daily, chosen.date) {
        Ok(note) => note,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let absolute = vault.root().join(&note.path);

    if args.json {
        print_json(&GotoOutput {
            label: &chosen.label,
            date: chosen.iso_date(),
            path: note.path.clone(),
            created: !existed,
        });
    } else {
        println!("{}", absolute.display());
    }

    if args.open {
        super::open_in_editor(&absolute);
    }
}

fn pick_interactive(options: &[DateOption]) -> &DateOption {
    let items: Vec<String> = options.iter().map(DateOption::search_text).collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Go to date")
        .items(&items)
        .default(0)
        .interact_opt();

    match selection {
        Ok(Some(idx)) => &options[idx],
        Ok(None) => std::process::exit(0),
        Err(e) => {
            error!("Selector error: {e}");
            std::process::exit(1);
        }
    }
}
