use anyhow::{Context, Result};
use colored::Colorize;
use swish::config::{Config, KNOWN_KEYS, Settings, config_path};

use crate::cli::ConfigCmd;

pub async fn handle(cmd: ConfigCmd) -> Result<()> {
    let config_path = config_path().context("Could not determine config directory")?;
    let mut cfg = Config::load(&config_path)?;

    match cmd {
        ConfigCmd::List => {
            if cfg.map.is_empty() {
                println!("{}", "(no config set)".dimmed());
            } else {
                println!("{}", "Config:".cyan().bold());
                for (k, v) in &cfg.map {
                    let note = if Config::is_known(k) {
                        String::new()
                    } else {
                        " (unknown key)".dimmed().to_string()
                    };
                    println!("  {} = {}{}", k.green(), v, note);
                }
            }
        }

        ConfigCmd::Get { key } => match cfg.map.get(&key) {
            Some(val) => println!("{}", val),
            None => println!("{} key `{}` not found", "warning:".yellow().bold(), key),
        },

        ConfigCmd::Set { key, val } => {
            cfg.map.insert(key.clone(), val.clone());

            // Refuse values that would break every later command.
            Settings::try_from(&cfg).with_context(|| format!("Refusing to set `{key}`"))?;

            cfg.save(&config_path)?;
            println!("{} set `{}` = `{}`", "info:".blue().bold(), key.green(), val);
            if !Config::is_known(&key) {
                println!(
                    "{} `{}` is not used by swish (known keys: {})",
                    "warning:".yellow().bold(),
                    key,
                    KNOWN_KEYS.join(", ")
                );
            }
        }

        ConfigCmd::Unset { key } => {
            if cfg.map.remove(&key).is_some() {
                cfg.save(&config_path)?;
                println!("{} removed `{}`", "info:".blue().bold(), key.green());
            } else {
                println!("{} key `{}` not found", "warning:".yellow().bold(), key);
            }
        }
    }

    Ok(())
}
