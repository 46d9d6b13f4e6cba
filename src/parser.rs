use crate::ast::AstNode;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Recursive-descent parser over a [`Lexer`].
///
/// ```text
/// expr    : term ((PLUS | MINUS) term)*
/// term    : factor ((MUL | DIV) factor)*
/// factor  : PLUS factor | MINUS factor | power
/// power   : primary (POW factor)?
/// primary : INTEGER | LPAREN expr RPAREN
/// ```
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Result<Self, ParseError> {
        Self::with_config(lexer, ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, config: ParserConfig) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            config,
            depth: 0,
        })
    }

    fn eat(&mut self, token_type: TokenKind) -> Result<(), ParseError> {
        if self.current_token.kind == token_type {
            self.current_token = self.lexer.next_token()?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: token_type,
                found: self.current_token,
            })
        }
    }

    /// Parses one complete expression. Unless trailing input is allowed,
    /// the expression must be followed by end of input.
    pub fn parse(&mut self) -> Result<AstNode, ParseError> {
        let node = self.expr()?;
        if !self.config.allow_trailing {
            self.eat(TokenKind::EndOfInput)?;
        }
        Ok(node)
    }

    fn expr(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.term()?;

        while matches!(self.current_token.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.current_token.kind;
            self.eat(op)?;
            node = AstNode::binary(node, op, self.term()?);
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.factor()?;

        while matches!(self.current_token.kind, TokenKind::Mul | TokenKind::Div) {
            let op = self.current_token.kind;
            self.eat(op)?;
            node = AstNode::binary(node, op, self.factor()?);
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<AstNode, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.config.max_depth,
                pos: self.current_token.pos,
            });
        }
        self.depth += 1;
        let node = self.factor_inner();
        self.depth -= 1;
        node
    }

    fn factor_inner(&mut self) -> Result<AstNode, ParseError> {
        match self.current_token.kind {
            op @ (TokenKind::Plus | TokenKind::Minus) => {
                self.eat(op)?;
                Ok(AstNode::unary(op, self.factor()?))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<AstNode, ParseError> {
        let base = self.primary()?;

        if self.current_token.kind == TokenKind::Pow {
            self.eat(TokenKind::Pow)?;
            // Right side goes back through factor: right-associative, allows `2 ** -1`.
            return Ok(AstNode::binary(base, TokenKind::Pow, self.factor()?));
        }

        Ok(base)
    }

    fn primary(&mut self) -> Result<AstNode, ParseError> {
        if self.current_token.kind == TokenKind::LParen {
            self.eat(TokenKind::LParen)?;
            let node = self.expr()?;
            self.eat(TokenKind::RParen)?;
            return Ok(node);
        }

        let token = self.current_token;
        self.eat(TokenKind::Integer)?;
        let value = token.number().ok_or(ParseError::UnexpectedToken {
            expected: TokenKind::Integer,
            found: token,
        })?;
        Ok(AstNode::num(value))
    }
}
