use clap::Parser;
use infix_eval::{
    binding::Binding,
    engine::core::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_STACK, Evaluator, Limits},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// infix-eval evaluates an arithmetic expression with `+ - * /`, parentheses,
/// variables and constants.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `--var x=4`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_definition)]
    vars: Vec<(String, f64)>,

    /// Binds a constant, e.g. `--const pi=3.14159`. May be repeated.
    #[arg(short, long = "const", value_name = "NAME=VALUE", value_parser = parse_definition)]
    consts: Vec<(String, f64)>,

    /// Treats the expression as `name = expression` and prints every variable
    /// afterwards.
    #[arg(short, long)]
    assign: bool,

    /// Deepest accepted parenthesis nesting.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Most pending values or operators per parenthesis level.
    #[arg(long, default_value_t = DEFAULT_MAX_STACK)]
    max_stack: usize,

    expression: String,
}

/// Parses a `NAME=VALUE` command-line definition.
fn parse_definition(definition: &str) -> Result<(String, f64), String> {
    let (name, value) = definition.split_once('=')
                                  .ok_or_else(|| format!("expected NAME=VALUE, found '{definition}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

/// Logs go to stderr and are enabled with `RUST_LOG`, e.g.
/// `RUST_LOG=infix_eval=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let mut args = Args::parse();

    let evaluator = Evaluator::with_limits(Limits { max_depth: args.max_depth,
                                                    max_stack: args.max_stack, });

    let mut bindings = args.vars
                           .iter_mut()
                           .map(|(name, slot)| Binding::variable(name, slot))
                           .chain(args.consts
                                      .iter()
                                      .map(|(name, value)| Binding::constant(name, *value)))
                           .collect::<Vec<_>>();

    let result = if args.assign {
        evaluator.assign(&args.expression, &mut bindings)
    } else {
        evaluator.eval_with(&args.expression, &bindings)
    };

    match result {
        Ok(value) if args.assign => {
            for binding in &bindings {
                println!("{} = {}", binding.name(), binding.value());
            }
            tracing::debug!(value, "assignment finished");
        },
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
