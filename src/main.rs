use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use shuntcalc::{
    Calculator,
    interpreter::{
        evaluator::core::eval_postfix,
        registry::Registry,
        token::{Fixity, format_tokens},
    },
};
use tracing_subscriber::EnvFilter;

/// shuntcalc evaluates compact arithmetic expressions such as `S(p/2)+3!`.
/// Without an expression it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of decimals printed for results.
    #[arg(short, long, default_value_t = 10)]
    precision: usize,

    /// Also print the postfix (RPN) form of each expression.
    #[arg(short, long)]
    rpn: bool,

    /// Raise the log level; repeat for more detail. `RUST_LOG` overrides
    /// this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate once. Leading minus signs are accepted
    /// (`-5+3`); put `--` before expressions such as `-p` that spell a flag.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let calculator = Calculator::new();

    if let Some(expression) = &args.expression {
        if !run_once(&calculator, expression, &args) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_session(&calculator, &args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

/// Evaluates one expression and prints the outcome. Returns `false` on
/// error.
fn run_once(calculator: &Calculator, expression: &str, args: &Args) -> bool {
    let outcome = calculator.postfix(expression).and_then(|rpn| {
        if args.rpn {
            println!("RPN: {}", format_tokens(&rpn));
        }
        eval_postfix(&rpn, calculator.registry())
    });

    match outcome {
        Ok(value) => {
            println!("Result: {value:.prec$}", prec = args.precision);
            true
        },
        Err(e) => {
            println!("Error: Invalid expression. {e}");
            false
        },
    }
}

/// Runs the read loop until `exit`, `quit`, an empty line or end of input.
fn run_session(calculator: &Calculator, args: &Args) -> io::Result<()> {
    print_banner(calculator.registry());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Expression: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let expression = line.trim();

        if expression.is_empty()
           || expression.eq_ignore_ascii_case("exit")
           || expression.eq_ignore_ascii_case("quit")
        {
            break;
        }

        run_once(calculator, expression, args);
        println!();
    }

    println!("Exiting calculator. Goodbye!");
    Ok(())
}

/// Prints the supported operations, grouped by fixity.
fn print_banner(registry: &Registry) {
    let describe = |fixity: Fixity| {
        registry.iter()
                .filter(|d| d.fixity() == fixity)
                .map(|d| d.description())
                .collect::<Vec<_>>()
                .join(", ")
    };

    println!("--- shuntcalc (Infix Mode) ---");
    println!("Supported Operations:");
    println!("  Binary: {}", describe(Fixity::Infix));
    println!("          a r b = b-th root of a");
    println!("  Unary (Prefix): {} (e.g., S30)", describe(Fixity::Prefix));
    println!("  Unary (Postfix): {} (e.g., 6!)", describe(Fixity::Postfix));
    println!("  Constant: p (PI)");
    println!("\nNOTE: Use explicit multiplication (e.g., 2*(3) is correct).");
    println!("Type 'exit' or 'quit' to end.\n");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn expression_may_start_with_a_minus() {
        let args = Args::try_parse_from(["shuntcalc", "-5+3"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("-5+3"));

        let args = Args::try_parse_from(["shuntcalc", "-v", "-2^2"]).unwrap();
        assert_eq!(args.verbose, 1);
        assert_eq!(args.expression.as_deref(), Some("-2^2"));
    }

    #[test]
    fn one_shot_reports_success_and_failure() {
        let calculator = Calculator::new();
        let args = Args::try_parse_from(["shuntcalc", "--rpn"]).unwrap();

        assert!(run_once(&calculator, "2+(3)*4", &args));
        assert!(run_once(&calculator, "-5+3", &args));
        assert!(!run_once(&calculator, "1/0", &args));
        assert!(!run_once(&calculator, "(2", &args));
    }

    #[test]
    fn double_dash_separates_flag_like_expressions() {
        let args = Args::try_parse_from(["shuntcalc", "--", "-p"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("-p"));
        assert_eq!(args.precision, 10);

        let args = Args::try_parse_from(["shuntcalc", "-p", "3", "--rpn", "1+2"]).unwrap();
        assert_eq!(args.precision, 3);
        assert!(args.rpn);
        assert_eq!(args.expression.as_deref(), Some("1+2"));
    }
}
