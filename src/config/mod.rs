/*!
Configuration of a context.

All configuration for a [context](crate::context::Context) is contained in a [Config].
Each option is a [ConfigOption], which bounds the values the option may take.

```rust
# use sat_calc::config::{Config, Strategy};
let mut config = Config::default();
assert!(config.strategy.set(Strategy::Reparse));
assert!(!config.variable_limit.set(26));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod strategy;
pub use strategy::Strategy;

use crate::structures::variable::VARIABLE_MAX;

/// The default limit on the count of variables, which is every usable letter.
pub const VARIABLE_LIMIT: usize = VARIABLE_MAX;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Ignore tokens which follow a complete formula, rather than treat them as an error.
    pub allow_trailing: ConfigOption<bool>,

    /// How to evaluate a formula on each row of a truth table.
    pub strategy: ConfigOption<Strategy>,

    /// The maximum count of variables of a truth table.
    /// A table has two to the power of this many rows, and so a lower limit guards against large tables.
    pub variable_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_trailing: ConfigOption {
                name: "allow_trailing",
                min: false,
                max: true,
                value: false,
            },

            strategy: ConfigOption {
                name: "strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::Tree,
            },

            variable_limit: ConfigOption {
                name: "variable_limit",
                min: 0,
                max: VARIABLE_MAX,
                value: VARIABLE_LIMIT,
            },
        }
    }
}
