use crate::token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Expected {expected}, found {found} at position {}", .found.pos)]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[error("Expression nested deeper than {limit} levels at position {pos}")]
    TooDeep { limit: usize, pos: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("No handler for {node} node with operator {op}")]
    NoHandler { node: &'static str, op: TokenKind },
    #[error("Division by zero")]
    DivisionByZero,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),
    #[error("Parser error: {0}")]
    Parse(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SelfTestFailure {
    #[error("{expression}: expected {expected}, got {actual}")]
    Mismatch {
        expression: &'static str,
        expected: f64,
        actual: f64,
    },
    #[error("{expression}: {source}")]
    Failed {
        expression: &'static str,
        source: Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message() {
        let err = LexError::InvalidCharacter { ch: '&', pos: 2 };
        assert_eq!(err.to_string(), "Invalid character '&' at position 2");
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: Token::eof(6),
        };
        assert_eq!(
            err.to_string(),
            "Expected RPAREN, found Token(EOF, None) at position 6"
        );
    }

    #[test]
    fn test_wrapped_error_message() {
        let err: Error = EvalError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Evaluation error: Division by zero");
    }
}
