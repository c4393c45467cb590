//! Lox expression interpreter.
//!
//! The interpreter walks the abstract syntax tree (AST) produced by the parser,
//! evaluating children before their parent (post-order) and computing the
//! runtime value. It never mutates the tree, so evaluating the same tree twice
//! gives the same value.
//!
//! # Expression Types
//!
//! - **Literals**: `nil`, booleans, numbers, strings
//! - **Unary**: `-` (negation), `!` (logical NOT)
//! - **Binary**: `+`, `-`, `*`, `/`, comparisons, equality
//! - **Grouping**: Parenthesized expressions
//! - **Conditional**: `?:`, only the taken branch is evaluated
//!
//! Division follows IEEE-754: dividing by zero yields an infinity or NaN.

pub mod value;

use Expression::*;
use value::Value;

use crate::{
	error::interpreter::RuntimeError,
	parser::expression::Expression,
	scanner::{
		Token,
		TokenType::{Bang, BangEqual, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus, Slash, Star},
	},
};

const NUMBER_OPERAND: &str = "Operand must be a number.";
const PLUS_OPERANDS: &str = "Operands must be two numbers or two strings.";

/// Interpreter that evaluates Lox expressions.
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
	pub fn new() -> Self { Self }

	/// Evaluate the given expression and stringify the result for display.
	pub fn interpret(&self, expr: &Expression) -> Result<String, RuntimeError> {
		Ok(self.evaluate(expr)?.to_string())
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expr: &Expression) -> Result<Value, RuntimeError> {
		Ok(match expr {
			Literal(lit) => Value::from(lit),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				match operator.r#type {
					Bang => Value::Bool(!right_value.is_truthy()),
					Minus => Value::Num(-number_operand(operator, &right_value)?),
					_ => return Err(unknown_operator(operator)),
				}
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				binary(operator, &left_value, &right_value)?
			}
			Conditional { condition, then_branch, else_branch } => {
				if self.evaluate(condition)?.is_truthy() {
					self.evaluate(then_branch)?
				} else {
					self.evaluate(else_branch)?
				}
			}
		})
	}
}

fn binary(operator: &Token, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
	let numbers = |op: fn(f64, f64) -> Value| {
		left.numeric(right, op).ok_or_else(|| RuntimeError::new(operator, NUMBER_OPERAND))
	};
	match operator.r#type {
		Plus => left.plus(right).ok_or_else(|| RuntimeError::new(operator, PLUS_OPERANDS)),
		Minus => numbers(|l, r| Value::Num(l - r)),
		Slash => numbers(|l, r| Value::Num(l / r)),
		Star => numbers(|l, r| Value::Num(l * r)),
		Greater => numbers(|l, r| Value::Bool(l > r)),
		GreaterEqual => numbers(|l, r| Value::Bool(l >= r)),
		Less => numbers(|l, r| Value::Bool(l < r)),
		LessEqual => numbers(|l, r| Value::Bool(l <= r)),
		EqualEqual => Ok(Value::Bool(left.equals(right))),
		BangEqual => Ok(Value::Bool(!left.equals(right))),
		_ => Err(unknown_operator(operator)),
	}
}

fn number_operand(operator: &Token, value: &Value) -> Result<f64, RuntimeError> {
	match value {
		Value::Num(n) => Ok(*n),
		_ => Err(RuntimeError::new(operator, NUMBER_OPERAND)),
	}
}

// Only reachable with a hand-built tree.
fn unknown_operator(operator: &Token) -> RuntimeError {
	RuntimeError::new(operator, format!("Unknown operator '{}'.", operator.lexeme))
}
