use clap::{value_parser, Arg, ArgAction, Command};

use sat_calc::config::{Strategy, VARIABLE_LIMIT};

pub fn cli() -> Command {
    Command::new("sat_calc")
        .about("Determines whether a propositional formula is satisfiable, unsatisfiable, or a tautology")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("formula")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(String))
            .help("The formula to classify. If no formula is given, a formula is requested.")
            .long_help("The formula to classify. If no formula is given, a formula is requested.

Variables are single lowercase letters, other than 'v'.
Connectives are '~' (not), '^' (and), 'v' (or), '->' (implies), and '<->' (if and only if).
For example: \"(p v ~q) ^ (q v ~r) ^ (r v ~p)\""))

        .arg(Arg::new("variables")
            .short('x')
            .long("variables")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("The variables of the formula, separated by spaces or commas.")
            .long_help("The variables of the formula, separated by spaces or commas.

The order of the variables fixes the order of the truth table.
If no variables are given, the variables of the formula are used in order of first appearance."))

        .arg(Arg::new("table")
            .short('t')
            .long("table")
            .action(ArgAction::SetTrue)
            .help("Display the truth table of the formula."))

        .arg(Arg::new("allow_trailing")
            .long("allow-trailing")
            .action(ArgAction::SetTrue)
            .help("Ignore anything which follows a complete formula, rather than reject the formula."))

        .arg(Arg::new("strategy")
            .long("strategy")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help(format!("How to evaluate the formula on each row of the truth table: 'reparse' or 'tree'.
Default: {}", Strategy::Tree)))

        .arg(Arg::new("variable_limit")
            .long("variable-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum count of variables.
Default: {VARIABLE_LIMIT}

A truth table has one row for each assignment to the variables, and so 2^n rows for n variables.")))
}
