//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting leysync export defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(
    remove_manekin: Option<bool>,
    traveler_element: Option<bool>,
    min_level: Option<u32>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if remove_manekin.is_none() && traveler_element.is_none() && min_level.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, remove_manekin, traveler_element, min_level);
    config.save()?;

    println!("Export defaults updated");
    show_config(&config);

    Ok(())
}

fn apply(
    config: &mut Config,
    remove_manekin: Option<bool>,
    traveler_element: Option<bool>,
    min_level: Option<u32>,
) {
    if remove_manekin.is_some() {
        config.remove_manekin = remove_manekin;
    }
    if traveler_element.is_some() {
        config.traveler_element = traveler_element;
    }
    if min_level.is_some() {
        config.min_level = min_level;
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    let show = |v: Option<bool>| v.map_or("unset".to_string(), |b| b.to_string());

    println!("Remove Manekin:   {}", show(config.remove_manekin));
    println!("Traveler element: {}", show(config.traveler_element));
    println!(
        "Min level:        {}",
        config
            .min_level
            .map_or("unset".to_string(), |l| l.to_string())
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: leysync configure [--remove-manekin BOOL] [--traveler-element BOOL] [--min-level N]");
    println!("   or: leysync configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut config = Config {
            remove_manekin: Some(true),
            traveler_element: None,
            min_level: Some(50),
        };
        apply(&mut config, None, Some(true), Some(0));

        assert_eq!(config.remove_manekin, Some(true));
        assert_eq!(config.traveler_element, Some(true));
        assert_eq!(config.min_level, Some(0));
    }
}
