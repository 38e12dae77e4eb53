use chrono::NaiveDate;
use daylink_core::date_suggestions;
use daylink_core::host::SettingsStore;
use std::path::Path;
use tracing::error;

use super::output::{print_dates_table, print_json};
use crate::DatesArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, today: Option<NaiveDate>, args: DatesArgs) {
    let cfg = super::load_config(config, profile);
    let vault = super::open_vault(&cfg);

    let settings = match vault.settings.load() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    let query = args.query.unwrap_or_default();
    let options =
        date_suggestions(&query, settings.start_of_week, super::reference_date(today));

    if args.json {
        print_json(&options);
    } else {
        print_dates_table(&options);
    }
}
