use std::io::{self, BufRead};
use std::process;

use calculator::{
    DEFAULT_MAX_DEPTH, Error, Interpreter, Lexer, Parser, ParserConfig, format_result,
    run_self_test, tokenize,
};
use clap::{ArgAction, Parser as ClapParser};

/// Evaluates integer arithmetic expressions with + - * / ** and parentheses.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the built-in table of expressions and check their results.
    #[arg(short, long)]
    test: bool,

    /// Ignore anything left over after a complete expression.
    #[arg(long)]
    allow_trailing: bool,

    /// Maximum nesting of parentheses and unary operators.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Continue with the next expression after an error.
    #[arg(short, long)]
    keep_going: bool,

    /// Print tokens (-v) and the syntax tree (-vv) to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate. Read one per line from stdin when omitted.
    /// Flags go before the first expression; everything after it is read as
    /// an expression, so `-1+2` and `--3` need no `--`.
    #[arg(num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    expressions: Vec<String>,
}

fn evaluate(expression: &str, config: ParserConfig, verbose: u8) -> Result<f64, Error> {
    if verbose >= 1 {
        let tokens = tokenize(expression)?;
        let listing: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        eprintln!("tokens: [{}]", listing.join(", "));
    }
    if verbose >= 2 {
        let mut parser = Parser::with_config(Lexer::new(expression), config)?;
        eprintln!("ast: {}", parser.parse()?);
    }
    let parser = Parser::with_config(Lexer::new(expression), config)?;
    Interpreter::new(parser).interpret()
}

fn self_test() {
    match run_self_test() {
        Ok(count) => println!("All {} tests passed", count),
        Err(err) => {
            eprintln!("Self-test failed: {}", err);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.test {
        self_test();
        if args.expressions.is_empty() {
            return;
        }
    }

    let config = ParserConfig {
        allow_trailing: args.allow_trailing,
        max_depth: args.max_depth,
    };

    let expressions = if args.expressions.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .map(|line| {
                line.unwrap_or_else(|err| {
                    eprintln!("Error reading stdin: {}", err);
                    process::exit(1);
                })
            })
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args.expressions
    };

    let mut failed = false;
    for expression in &expressions {
        match evaluate(expression, config, args.verbose) {
            Ok(result) => println!("{} = {}", expression, format_result(result)),
            Err(err) => {
                eprintln!("{}: {}", expression, err);
                if !args.keep_going {
                    process::exit(1);
                }
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
