use chrono::NaiveDate;
use daylink_core::rank::Suggestion;
use daylink_core::{build_candidates, rank};
use std::path::Path;
use tracing::error;

use super::output::{print_json, print_suggestions_table};
use crate::MentionArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    today: Option<NaiveDate>,
    args: MentionArgs,
) {
    let cfg = super::load_config(config, profile);
    let vault = super::open_vault(&cfg);

    let candidates = match build_candidates(
        &vault.index,
        &vault.daily,
        &args.query,
        super::reference_date(today),
        &vault.person_tag,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to collect candidates: {e}");
            std::process::exit(1);
        }
    };

    let suggestions: Vec<Suggestion> = rank(&candidates, &args.query)
        .into_iter()
        .take(args.limit)
        .map(Suggestion::from)
        .collect();

    if args.json {
        print_json(&suggestions);
    } else {
        print_suggestions_table(&suggestions);
    }
}
