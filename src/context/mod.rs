/*!
The context of a session with the engine.

A context holds a [configuration](crate::config) and, optionally, a [callback](Context::set_callback_terminate) to end the construction of a truth table early.
Procedures which depend on configuration, such as [building a truth table](crate::procedures::classify), are methods on a context.

```rust
# use sat_calc::config::Config;
# use sat_calc::context::Context;
# use sat_calc::reports::Classification;
let mut the_context = Context::from_config(Config::default());

let classification = the_context.classify("p v ~p", &["p"]);
assert_eq!(classification, Ok(Classification::Tautology));
```
*/

mod callbacks;
pub use callbacks::CallbackTerminate;

use crate::{
    config::Config,
    structures::{formula::Formula, token::Token, variable::Variables},
    types::err::ErrorKind,
};

pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Terminates procedures, if true.
    callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            callback_terminate: None,
        }
    }

    /// Variables from a list of names, within the configured limit.
    pub fn variables<S: AsRef<str>>(&self, names: &[S]) -> Result<Variables, ErrorKind> {
        Ok(Variables::from_names(names, self.config.variable_limit.value)?)
    }

    /// The variables of some tokens, in order of first appearance and within the configured limit.
    pub fn variables_of(&self, tokens: &[Token]) -> Result<Variables, ErrorKind> {
        Ok(Variables::from_tokens(tokens, self.config.variable_limit.value)?)
    }

    /// The tree of the formula of some tokens.
    pub fn formula(&self, tokens: &[Token]) -> Result<Formula, ErrorKind> {
        Formula::from_tokens(tokens, self.config.allow_trailing.value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
