use clap::ArgMatches;

use sat_calc::config::{Config, Strategy};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// The formula, if given as an argument.
    pub formula: Option<String>,

    /// The names of the variables, if given as an argument.
    pub variables: Option<Vec<String>>,

    /// Whether to display the truth table.
    pub table: bool,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Splits a list of variable names on whitespace and commas.
pub fn split_names(names: &str) -> Vec<String> {
    names
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
pub fn config_from_args(args: &ArgMatches) -> Result<(Config, CliConfig), ConfigError> {
    let mut cfg = Config::default();

    let cli_options = CliConfig {
        formula: args.get_one::<String>("formula").cloned(),
        variables: args
            .get_one::<String>("variables")
            .map(|names| split_names(names)),
        table: args.get_flag("table"),
    };

    if args.get_flag("allow_trailing") {
        cfg.allow_trailing.value = true;
    }

    // The remaining cases follow a common template.
    // If a value is present, may be parsed appropriately, and is valid, the config is updated.
    // Otherwise, an error is returned.
    //
    if let Some(request) = args.get_one::<String>("strategy") {
        let (min, max) = cfg.strategy.min_max();

        match request.parse::<Strategy>() {
            Ok(value) if cfg.strategy.set(value) => {
                log::info!("{} set to: {value}", cfg.strategy.name);
            }
            _ => {
                return Err(ConfigError::NonSpecific(format!(
                    "strategy requires a value between {min} and {max}"
                )));
            }
        }
    }

    if let Some(request) = args.get_one::<usize>("variable_limit") {
        let (min, max) = cfg.variable_limit.min_max();

        match cfg.variable_limit.set(*request) {
            true => log::info!("{} set to: {request}", cfg.variable_limit.name),
            false => {
                return Err(ConfigError::NonSpecific(format!(
                    "variable_limit requires a value between {min} and {max}"
                )));
            }
        }
    }

    Ok((cfg, cli_options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::cli;

    fn configs(args: &[&str]) -> Result<(Config, CliConfig), ConfigError> {
        let matches = cli().get_matches_from(args);
        config_from_args(&matches)
    }

    #[test]
    fn names() {
        assert_eq!(split_names("p q,r ,, s"), vec!["p", "q", "r", "s"]);
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn defaults() {
        let Ok((cfg, cli_options)) = configs(&["sat_calc"]) else {
            panic!("Default configuration failed");
        };

        assert!(!cfg.allow_trailing.value);
        assert_eq!(cfg.strategy.value, Strategy::Tree);
        assert!(cli_options.formula.is_none());
        assert!(cli_options.variables.is_none());
        assert!(!cli_options.table);
    }

    #[test]
    fn options() {
        let Ok((cfg, cli_options)) = configs(&[
            "sat_calc",
            "--strategy",
            "reparse",
            "--allow-trailing",
            "--variable-limit",
            "4",
            "-t",
            "-x",
            "p,q",
            "p ^ q",
        ]) else {
            panic!("Configuration failed");
        };

        assert!(cfg.allow_trailing.value);
        assert_eq!(cfg.strategy.value, Strategy::Reparse);
        assert_eq!(cfg.variable_limit.value, 4);
        assert!(cli_options.table);
        assert_eq!(cli_options.formula.as_deref(), Some("p ^ q"));
        assert_eq!(cli_options.variables, Some(vec!["p".to_string(), "q".to_string()]));
    }

    #[test]
    fn invalid_options() {
        assert!(configs(&["sat_calc", "--strategy", "guess"]).is_err());
        assert!(configs(&["sat_calc", "--variable-limit", "26"]).is_err());
    }
}
