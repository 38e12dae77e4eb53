use daylink_core::WeekStart;
use daylink_core::host::SettingsStore;
use std::path::Path;
use tracing::{error, info};

use crate::SettingsCommand;

pub fn run(config: Option<&Path>, profile: Option<&str>, command: SettingsCommand) {
    let cfg = super::load_config(config, profile);
    let vault = super::open_vault(&cfg);

    let mut settings = match vault.settings.load() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    match command {
        SettingsCommand::Show => {
            println!("settings: {}", vault.settings.path().display());
            println!("start_of_week: {}", settings.start_of_week);
        }
        SettingsCommand::WeekStart { value } => {
            let week_start: WeekStart = match value.parse() {
                Ok(w) => w,
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            };
            settings.start_of_week = week_start;
            if let Err(e) = vault.settings.save(&settings) {
                error!("Failed to save settings: {e}");
                std::process::exit(1);
            }
            info!(start_of_week = %week_start, "saved settings");
            println!("start_of_week: {week_start}");
        }
    }
}
