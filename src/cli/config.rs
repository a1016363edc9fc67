//! Settings CLI commands

use clap::Subcommand;

use crate::config::{SettingKey, Settings, SpendPaths};
use crate::error::SpendResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings and file locations
    Show,

    /// Change a setting (monthly_budget, currency_symbol, theme, csv_delimiter)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Restore default settings
    Reset,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &SpendPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> SpendResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Expenses file: {}", paths.expenses_file().display());
            println!();
            for key in SettingKey::all() {
                println!("{:<16} {}", key.name(), settings.get(*key));
            }
        }

        ConfigCommands::Set { key, value } => {
            let key: SettingKey = key.parse()?;
            settings.set(paths, key, &value)?;
            println!("{} = {}", key, settings.get(key));
        }

        ConfigCommands::Reset => {
            settings.reset_defaults(paths)?;
            println!("Settings restored to defaults.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::load_or_create(&paths).unwrap();

        let cmd = ConfigCommands::Set {
            key: "currency_symbol".into(),
            value: "€".into(),
        };
        handle_config_command(&paths, &mut settings, cmd).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().currency_symbol, "€");

        handle_config_command(&paths, &mut settings, ConfigCommands::Reset).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let cmd = ConfigCommands::Set {
            key: "font".into(),
            value: "mono".into(),
        };
        assert!(handle_config_command(&paths, &mut settings, cmd).is_err());
    }
}
