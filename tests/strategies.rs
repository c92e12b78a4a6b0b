//! Agreement of each way of evaluating a formula, on random formulas.

use rand::{rngs::StdRng, Rng, SeedableRng};

use sat_calc::{
    config::{Config, Strategy},
    context::Context,
    evaluate,
    procedures::enumerate::enumerate,
    structures::{formula::Formula, variable::Variables},
    tokenize,
};

const NAMES: [&str; 4] = ["p", "q", "r", "s"];
const FORMULA_COUNT: usize = 200;

fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    let variable = |rng: &mut StdRng| {
        let name = NAMES[rng.random_range(0..NAMES.len())];
        Formula::Var(name.chars().next().unwrap())
    };

    if depth == 0 {
        return variable(rng);
    }

    let sub = |rng: &mut StdRng| Box::new(random_formula(rng, depth - 1));

    match rng.random_range(0..7) {
        0 => variable(rng),
        1 => Formula::Not(sub(rng)),
        2 => Formula::And(sub(rng), sub(rng)),
        3 => Formula::Or(sub(rng), sub(rng)),
        4 => Formula::Implies(sub(rng), sub(rng)),
        5 => Formula::Iff(sub(rng), sub(rng)),
        _ => Formula::Not(Box::new(Formula::Not(sub(rng)))),
    }
}

fn context(strategy: Strategy) -> Context {
    let mut config = Config::default();
    config.strategy.value = strategy;
    Context::from_config(config)
}

#[test]
fn display_reads_to_the_same_tree() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..FORMULA_COUNT {
        let formula = random_formula(&mut rng, 4);
        let displayed = format!("{formula}");
        let tokens = tokenize(&displayed).unwrap();

        assert_eq!(Formula::from_tokens(&tokens, false), Ok(formula), "{displayed}");
    }
}

#[test]
fn reparse_and_tree_agree() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut reparse = context(Strategy::Reparse);
    let mut tree = context(Strategy::Tree);

    for _ in 0..FORMULA_COUNT {
        let displayed = format!("{}", random_formula(&mut rng, 5));

        let by_reparse = reparse.truth_table(&displayed, &NAMES).unwrap();
        let by_tree = tree.truth_table(&displayed, &NAMES).unwrap();

        assert_eq!(by_reparse, by_tree, "{displayed}");
        assert_eq!(by_reparse.classification(), by_tree.classification());
    }
}

#[test]
fn single_evaluation_agrees_with_table() {
    let mut rng = StdRng::seed_from_u64(3);
    let variables = Variables::from_names(&NAMES, NAMES.len()).unwrap();
    let assignments = enumerate(&variables);
    let mut ctx = Context::default();

    for _ in 0..FORMULA_COUNT {
        let formula = random_formula(&mut rng, 3);
        let displayed = format!("{formula}");
        let tokens = tokenize(&displayed).unwrap();
        let table = ctx.truth_table_of(&tokens, &variables).unwrap();

        for (assignment, row) in assignments.iter().zip(table.rows()) {
            assert_eq!(&row.assignment, assignment);
            assert_eq!(evaluate(&tokens, assignment), Ok(row.value), "{displayed}");
            assert_eq!(formula.evaluate(assignment), Ok(row.value), "{displayed}");
        }
    }
}

#[test]
fn double_negation_is_identity() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut ctx = Context::default();

    for _ in 0..FORMULA_COUNT {
        let formula = random_formula(&mut rng, 3);
        let negated = Formula::Not(Box::new(Formula::Not(Box::new(formula.clone()))));

        let plain = ctx.truth_table(&format!("{formula}"), &NAMES).unwrap();
        let twice = ctx.truth_table(&format!("{negated}"), &NAMES).unwrap();

        assert_eq!(plain, twice);
    }
}
