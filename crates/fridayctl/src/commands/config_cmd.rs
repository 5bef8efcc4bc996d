//! Config file handlers. These never touch the device.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{Config, config_path, load_config_or_default, save_config};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let config = Config {
                device: global
                    .device
                    .clone()
                    .or_else(|| Some("http://friday.local:8000".into())),
                ..Config::default()
            };
            let path = save_config(&config)?;
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let config = load_config_or_default();
            let body = toml::to_string_pretty(&config).map_err(|e| CliError::Validation {
                field: "config".into(),
                reason: e.to_string(),
            })?;
            if !global.quiet {
                println!("{body}");
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
    }
}
