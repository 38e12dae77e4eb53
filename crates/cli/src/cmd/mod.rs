pub mod dates;
pub mod doctor;
pub mod goto;
pub mod link;
pub mod mention;
pub mod output;
pub mod settings;

use chrono::{Local, NaiveDate};
use daylink_core::config::{ConfigLoader, ResolvedConfig};
use daylink_core::vault::Vault;
use std::path::Path;
use tracing::error;

use crate::logging;

/// Load the config and install logging, exiting on failure.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc.logging);
            rc
        }
        Err(e) => {
            logging::init_fallback();
            error!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

/// Open the host services for the configured vault, exiting on failure.
pub fn open_vault(cfg: &ResolvedConfig) -> Vault {
    match Vault::open(cfg) {
        Ok(vault) => vault,
        Err(e) => {
            error!("Failed to open vault: {e}");
            std::process::exit(1);
        }
    }
}

pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Open `path` in `$EDITOR`, falling back to `$VISUAL` and then vim.
pub fn open_in_editor(path: &Path) {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "vim".to_string());

    let status = std::process::Command::new(&editor).arg(path).status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => {
            error!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to open editor '{}': {}", editor, e);
            std::process::exit(1);
        }
    }
}

/// Convert a 1-based `--pick` into an index into `len` items.
pub fn pick_index(pick: Option<usize>, len: usize) -> Option<usize> {
    match pick {
        None => (len > 0).then_some(0),
        Some(n) if n >= 1 && n <= len => Some(n - 1),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_index() {
        assert_eq!(pick_index(None, 3), Some(0));
        assert_eq!(pick_index(None, 0), None);
        assert_eq!(pick_index(Some(1), 3), Some(0));
        assert_eq!(pick_index(Some(3), 3), Some(2));
        assert_eq!(pick_index(Some(4), 3), None);
        assert_eq!(pick_index(Some(0), 3), None);
    }
}
