/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when examining how a formula was read and evaluated.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenization](crate::procedures::tokenize)
    pub const LEXER: &str = "lexer";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [enumeration of assignments](crate::procedures::enumerate)
    pub const ENUMERATION: &str = "enumeration";

    /// Logs related to [classification](crate::procedures::classify)
    pub const CLASSIFICATION: &str = "classification";

    /// Logs related to [declared variables](crate::structures::variable)
    pub const VARIABLES: &str = "variables";
}
