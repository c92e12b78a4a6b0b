use sat_calc::{context::Context, reports::Classification, types::err::ErrorKind};

mod config;
mod misc;
mod parse;

use config::{config_from_args, split_names};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let (config, cli_options) = match config_from_args(&matches) {
        Ok(configs) => configs,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let interactive = cli_options.formula.is_none();
    if interactive {
        misc::welcome();
    }

    let formula = match cli_options.formula {
        Some(formula) => formula,
        None => match misc::prompt("Enter a proposition below:") {
            Ok(formula) => formula,
            Err(e) => {
                println!("Failed to read a proposition: {e}");
                std::process::exit(1);
            }
        },
    };

    let names = match cli_options.variables {
        Some(names) => Some(names),
        None if interactive => {
            match misc::prompt(
                "Enter the variables contained in your expression, separated by a space:",
            ) {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(split_names(&line)),
                Err(e) => {
                    println!("Failed to read variables: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let mut the_context = Context::from_config(config);

    let classification = match classify(&mut the_context, &formula, names, cli_options.table) {
        Ok(classification) => classification,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    };

    misc::display_classification(&classification);

    match classification.is_satisfiable() {
        true => std::process::exit(10),
        false => std::process::exit(20),
    }
}

fn classify(
    the_context: &mut Context,
    formula: &str,
    names: Option<Vec<String>>,
    show_table: bool,
) -> Result<Classification, ErrorKind> {
    let tokens = the_context.tokenize(formula)?;

    let variables = match names {
        Some(names) => the_context.variables(&names)?,
        None => the_context.variables_of(&tokens)?,
    };

    let table = the_context.truth_table_of(&tokens, &variables)?;

    if show_table {
        misc::display_table(&table);
    }

    Ok(table.classification())
}
