use std::fmt;

use crate::token::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Num(f64),
    UnaryOp {
        op: TokenKind,
        expr: Box<AstNode>,
    },
    BinOp {
        left: Box<AstNode>,
        op: TokenKind,
        right: Box<AstNode>,
    },
}

impl AstNode {
    pub fn num(value: f64) -> Self {
        AstNode::Num(value)
    }

    pub fn unary(op: TokenKind, expr: AstNode) -> Self {
        AstNode::UnaryOp {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn binary(left: AstNode, op: TokenKind, right: AstNode) -> Self {
        AstNode::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            AstNode::Num(_) => "Num",
            AstNode::UnaryOp { .. } => "UnaryOp",
            AstNode::BinOp { .. } => "BinOp",
        }
    }

    /// Height of the tree; a single number has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            AstNode::Num(_) => 1,
            AstNode::UnaryOp { expr, .. } => 1 + expr.depth(),
            AstNode::BinOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

fn op_symbol(op: TokenKind) -> &'static str {
    match op {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Mul => "*",
        TokenKind::Div => "/",
        TokenKind::Pow => "**",
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::Integer => "INTEGER",
        TokenKind::EndOfInput => "EOF",
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Num(value) => write!(f, "{}", value),
            AstNode::UnaryOp { op, expr } => write!(f, "({} {})", op_symbol(*op), expr),
            AstNode::BinOp { left, op, right } => {
                write!(f, "({} {} {})", op_symbol(*op), left, right)
            }
        }
    }
}
