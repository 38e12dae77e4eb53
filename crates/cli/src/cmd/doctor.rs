use daylink_core::config::{ConfigLoader, default_config_path};
use daylink_core::host::SettingsStore;
use daylink_core::vault::Vault;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL dayl doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc.logging);

    let vault = match Vault::open(&rc) {
        Ok(v) => v,
        Err(e) => {
            println!("FAIL dayl doctor");
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("OK   dayl doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("vault_root: {}", rc.vault_root.display());
    println!("person_tag: {}", rc.person_tag);
    println!("link_style: {}", rc.link_style.as_str());
    for folder in &rc.excluded_folders {
        println!("excluded: {}", folder.display());
    }
    println!("daily.enabled: {}", rc.daily.enabled);
    let folder = if rc.daily.folder.is_empty() { "/" } else { rc.daily.folder.as_str() };
    println!("daily.folder: {folder}");
    println!("daily.format: {}", rc.daily.format);
    if let Some(template) = &rc.daily.template {
        println!("daily.template: {}", template.display());
    }
    println!("settings: {}", vault.settings.path().display());
    match vault.settings.load() {
        Ok(s) => println!("start_of_week: {}", s.start_of_week),
        Err(e) => {
            println!("FAIL dayl doctor");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
