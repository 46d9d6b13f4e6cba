mod ast;
mod config;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod token;

pub use ast::AstNode;
pub use config::{DEFAULT_MAX_DEPTH, ParserConfig};
pub use error::{Error, EvalError, LexError, ParseError, SelfTestFailure};
pub use interpreter::Interpreter;
pub use lexer::{Lexer, tokenize};
pub use parser::Parser;
pub use token::{Token, TokenKind, TokenValue};

/// Expressions checked by `calculator -t`, with their expected values.
pub const SELF_TEST_CASES: &[(&str, f64)] = &[
    ("3 + 2 - 1", 4.0),
    ("56 / 2 - 4", 24.0),
    ("4 - 56 / 2", -24.0),
    ("2 / 20 * 2", 0.2),
    ("(2 + 3) / 2", 2.5),
    ("(3 - (2 + 3)) * 2", -4.0),
    ("(2*2) / (32 - 30) - 3", -1.0),
    ("-1+3*(-5+2)", -10.0),
    ("--3", 3.0),
    ("(5--16)*10/2", 105.0),
    ("2 ** 3 ** 2", 512.0),
    ("-2 ** 2", -4.0),
    ("2 ** -1", 0.5),
];

pub fn evaluate(expression: &str) -> Result<f64, Error> {
    evaluate_with(expression, ParserConfig::default())
}

pub fn evaluate_with(expression: &str, config: ParserConfig) -> Result<f64, Error> {
    let lexer = Lexer::new(expression);
    let parser = Parser::with_config(lexer, config)?;
    Interpreter::new(parser).interpret()
}

pub fn parse(expression: &str) -> Result<AstNode, Error> {
    let mut parser = Parser::new(Lexer::new(expression))?;
    Ok(parser.parse()?)
}

pub fn format_result(value: f64) -> String {
    format!("{}", value)
}

/// Runs [`SELF_TEST_CASES`], stopping at the first failure.
/// Returns the number of cases that passed.
pub fn run_self_test() -> Result<usize, SelfTestFailure> {
    for &(expression, expected) in SELF_TEST_CASES {
        let actual = evaluate(expression)
            .map_err(|source| SelfTestFailure::Failed { expression, source })?;
        if actual != expected {
            return Err(SelfTestFailure::Mismatch {
                expression,
                expected,
                actual,
            });
        }
    }
    Ok(SELF_TEST_CASES.len())
}
