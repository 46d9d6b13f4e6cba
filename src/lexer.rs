use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    finished: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            finished: false,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn integer(&mut self) -> Token {
        let start = self.pos;
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        // Digit runs beyond f64 range parse as infinity rather than failing.
        let value = result.parse().unwrap_or(f64::INFINITY);
        Token::integer(value, start)
    }

    fn symbol(&mut self, kind: TokenKind, lexeme: &'static str) -> Token {
        let start = self.pos;
        for _ in lexeme.chars() {
            self.advance();
        }
        Token::symbol(kind, lexeme, start)
    }

    /// Returns the next token, or `EndOfInput` once the text is used up.
    /// Keeps returning `EndOfInput` on further calls.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if ch.is_ascii_digit() {
                return Ok(self.integer());
            }

            let token = match ch {
                '*' if self.peek() == Some('*') => self.symbol(TokenKind::Pow, "**"),
                '*' => self.symbol(TokenKind::Mul, "*"),
                '+' => self.symbol(TokenKind::Plus, "+"),
                '-' => self.symbol(TokenKind::Minus, "-"),
                '/' => self.symbol(TokenKind::Div, "/"),
                '(' => self.symbol(TokenKind::LParen, "("),
                ')' => self.symbol(TokenKind::RParen, ")"),
                _ => return Err(LexError::InvalidCharacter { ch, pos: self.pos }),
            };
            return Ok(token);
        }

        Ok(Token::eof(self.pos))
    }
}

/// Yields every token before `EndOfInput`. Stops after the first error.
impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_integer_token() {
        let mut lexer = Lexer::new("123");
        assert_eq!(lexer.next_token().unwrap(), Token::integer(123.0, 0));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / **"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Pow,
            ]
        );
    }

    #[test]
    fn test_pow_versus_mul() {
        assert_eq!(
            kinds("2***3"),
            vec![TokenKind::Integer, TokenKind::Pow, TokenKind::Mul, TokenKind::Integer]
        );
        assert_eq!(
            kinds("2* *3"),
            vec![TokenKind::Integer, TokenKind::Mul, TokenKind::Mul, TokenKind::Integer]
        );
    }

    #[test]
    fn test_parentheses() {
        let mut lexer = Lexer::new("( )");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LParen);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RParen);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize(" 12 +(3)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![1, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sign_is_not_part_of_literal() {
        let tokens = tokenize("-7").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].number(), Some(7.0));
    }

    #[test]
    fn test_invalid_character() {
        let mut lexer = Lexer::new("3 & 2");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token(),
            Err(LexError::InvalidCharacter { ch: '&', pos: 2 })
        );
    }

    #[test]
    fn test_decimal_point_is_invalid() {
        assert!(matches!(
            tokenize("1.5"),
            Err(LexError::InvalidCharacter { ch: '.', pos: 1 })
        ));
    }

    #[test]
    fn test_integer_wider_than_u64() {
        let tokens = tokenize("1000000000000000000000000").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].number(), Some(1e24));
    }

    #[test]
    fn test_whitespace_handling() {
        let mut lexer = Lexer::new("  \t\n  123  \n ");
        assert_eq!(lexer.next_token().unwrap().number(), Some(123.0));
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap(), Token::eof(0));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("1");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap(), Token::eof(1));
        }
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("1 # 2");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_relexing_is_deterministic() {
        let text = "(5--16)*10/2 ** 3";
        assert_eq!(tokenize(text).unwrap(), tokenize(text).unwrap());
    }
}
