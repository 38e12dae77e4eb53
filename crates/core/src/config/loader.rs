use std::path::{Path, PathBuf};
use std::{env, fs};

use chrono::format::{Item, StrftimeItems};
use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{
    ConfigFile, DailyConfig, LoggingConfig, Profile, ResolvedConfig, ResolvedDaily,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("invalid daily note format '{0}'")]
    BadDailyFormat(String),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `config_path` (or the default location) and resolve the active
    /// profile: `profile_override`, else the file's `profile`, else
    /// `"default"`.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::NotFound(display));
        }

        let s = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError(display.clone(), e))?;
        let cf: ConfigFile = toml::from_str(&s).map_err(|e| ConfigError::ParseError(display, e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.logging)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_root = expand_path(&prof.vault_root)?;
        let sub = |s: &str| s.replace("{{vault_root}}", &vault_root.to_string_lossy());
        let in_vault = |p: PathBuf| if p.is_absolute() { p } else { vault_root.join(p) };

        let excluded_folders = prof
            .excluded_folders
            .iter()
            .map(|f| expand_path(&sub(f)).map(in_vault))
            .collect::<Result<Vec<_>, _>>()?;

        let daily = resolve_daily(&prof.daily, &sub, &in_vault)?;

        let logging = match &log_cfg.file {
            Some(file) => LoggingConfig {
                file: Some(expand_path(&sub(&file.to_string_lossy()))?),
                ..log_cfg.clone()
            },
            None => log_cfg.clone(),
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            person_tag: prof.person_tag.trim_start_matches('#').to_string(),
            link_style: prof.link_style,
            excluded_folders,
            daily,
            logging,
            vault_root,
        })
    }
}

fn resolve_daily(
    cfg: &DailyConfig,
    sub: &dyn Fn(&str) -> String,
    in_vault: &dyn Fn(PathBuf) -> PathBuf,
) -> Result<ResolvedDaily, ConfigError> {
    let format = cfg.format.trim();
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::BadDailyFormat(cfg.format.clone()));
    }

    let template = match &cfg.template {
        Some(t) => Some(in_vault(expand_path(&sub(t))?)),
        None => None,
    };

    Ok(ResolvedDaily {
        enabled: cfg.enabled,
        folder: cfg.folder.trim_matches('/').to_string(),
        format: format.to_string(),
        template,
    })
}

/// `$XDG_CONFIG_HOME/daylink/config.toml`, else `~/.config/daylink/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("daylink").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("daylink").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
