use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Pow => "POW",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::EndOfInput => "EOF",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Number(f64),
    Text(&'static str),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// A single lexical unit. `pos` is the character offset of its first char.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub pos: usize,
}

impl Token {
    pub fn integer(value: f64, pos: usize) -> Self {
        Token {
            kind: TokenKind::Integer,
            value: Some(TokenValue::Number(value)),
            pos,
        }
    }

    pub fn symbol(kind: TokenKind, lexeme: &'static str, pos: usize) -> Self {
        Token {
            kind,
            value: Some(TokenValue::Text(lexeme)),
            pos,
        }
    }

    pub fn eof(pos: usize) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            value: None,
            pos,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Token({}, {})", self.kind, value),
            None => write!(f, "Token({}, None)", self.kind),
        }
    }
}
