//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Every node owns its children, the parser builds
//! the tree bottom-up and nothing mutates it afterwards.

use Expression::*;

use crate::{
	interpreter::value::format_number,
	scanner::{Literal as TokenLiteral, Token, TokenType},
};

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Literal(LiteralValue),
	Unary { operator: Token, right: Box<Expression> },
	Binary { left: Box<Expression>, operator: Token, right: Box<Expression> },
	Grouping(Box<Expression>),
	Conditional { condition: Box<Expression>, then_branch: Box<Expression>, else_branch: Box<Expression> },
}

impl Expression {
	pub fn unary(operator: Token, right: Box<Self>) -> Box<Self> { Box::new(Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Grouping(expr)) }

	pub fn conditional(condition: Box<Self>, then_branch: Box<Self>, else_branch: Box<Self>) -> Box<Self> {
		Box::new(Conditional { condition, then_branch, else_branch })
	}

	pub fn literal(value: LiteralValue) -> Box<Self> { Box::new(Literal(value)) }
}

/// Literal values in the AST
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
	Number(f64),
	StringLiteral(String),
	Boolean(bool),
	Nil,
}

impl TryFrom<Token> for LiteralValue {
	type Error = Token;

	/// Only `NUMBER`, `STRING`, `true`, `false` and `nil` carry a literal,
	/// anything else is handed back.
	fn try_from(token: Token) -> Result<Self, Self::Error> {
		Ok(match (token.r#type, &token.literal) {
			(TokenType::Number, Some(TokenLiteral::Number(n))) => LiteralValue::Number(*n),
			(TokenType::String, Some(TokenLiteral::String(s))) => LiteralValue::StringLiteral(s.clone()),
			(TokenType::True, _) => LiteralValue::Boolean(true),
			(TokenType::False, _) => LiteralValue::Boolean(false),
			(TokenType::Nil, _) => LiteralValue::Nil,
			_ => return Err(token),
		})
	}
}

/// Lisp-like pretty print, `(* (- 123) (group (+ 45.67 8.901)))`.
impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Grouping(expression) => write!(f, "(group {expression})"),
			Conditional { condition, then_branch, else_branch } => {
				write!(f, "(if {condition} then {then_branch} else {else_branch})")
			}
		}
	}
}

impl std::fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{}", format_number(*n)),
			LiteralValue::StringLiteral(s) => write!(f, "{s}"),
			LiteralValue::Boolean(b) => write!(f, "{b}"),
			LiteralValue::Nil => write!(f, "nil"),
		}
	}
}
