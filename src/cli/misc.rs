use std::io::{BufRead, Write};

use sat_calc::{reports::Classification, structures::truth_table::TruthTable};

/// Writes the message and reads a line from standard input, without the line ending.
pub fn prompt(message: &str) -> std::io::Result<String> {
    println!("{message}");
    std::io::stdout().flush()?;

    let mut buffer = String::default();
    std::io::stdin().lock().read_line(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

pub fn welcome() {
    println!("Welcome to the satisfiability calculator.");
    println!("Enter a proposition to see if and under what conditions it is satisfiable.");
    println!(
        "We support the following operators: 'v', '^', '~', '->', '<->', and letters for variables."
    );
    println!("Leave the variables empty to use those of the proposition, in order of appearance.");
}

pub fn display_table(table: &TruthTable) {
    print!("{table}");
    println!();
}

pub fn display_classification(classification: &Classification) {
    match classification {
        Classification::Unsatisfiable => println!("The statement is not satisfiable."),

        Classification::Tautology => println!("The statement is a tautology."),

        Classification::Satisfiable(witnesses) => {
            println!("The statement is satisfied under the following conditions:");
            for witness in witnesses {
                println!("{witness}");
            }
        }
    }
}
