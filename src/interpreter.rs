use crate::ast::AstNode;
use crate::error::{Error, EvalError};
use crate::parser::Parser;
use crate::token::TokenKind;

pub struct Interpreter {
    parser: Parser,
}

impl Interpreter {
    pub fn new(parser: Parser) -> Self {
        Interpreter { parser }
    }

    /// Parses the whole expression once and evaluates it.
    pub fn interpret(mut self) -> Result<f64, Error> {
        let tree = self.parser.parse()?;
        Ok(Self::visit(&tree)?)
    }

    pub fn visit(node: &AstNode) -> Result<f64, EvalError> {
        match node {
            AstNode::Num(value) => Ok(*value),
            AstNode::UnaryOp { op, expr } => {
                let val = Self::visit(expr)?;
                match op {
                    TokenKind::Plus => Ok(val),
                    TokenKind::Minus => Ok(-val),
                    _ => Err(EvalError::NoHandler {
                        node: node.kind_name(),
                        op: *op,
                    }),
                }
            }
            AstNode::BinOp { left, op, right } => {
                let left_val = Self::visit(left)?;
                let right_val = Self::visit(right)?;
                match op {
                    TokenKind::Plus => Ok(left_val + right_val),
                    TokenKind::Minus => Ok(left_val - right_val),
                    TokenKind::Mul => Ok(left_val * right_val),
                    TokenKind::Div => {
                        if right_val == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(left_val / right_val)
                        }
                    }
                    TokenKind::Pow => {
                        if left_val == 0.0 && right_val < 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(left_val.powf(right_val))
                        }
                    }
                    _ => Err(EvalError::NoHandler {
                        node: node.kind_name(),
                        op: *op,
                    }),
                }
            }
        }
    }
}
