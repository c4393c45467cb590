use std::fmt::Display;

use Value::*;

use crate::parser::expression::LiteralValue;

/// Value represents a runtime value in Lox.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Nil,
	Bool(bool),
	Num(f64),
	Str(String),
}

/// Decimal text of a number, integral values without the `.0`.
pub(crate) fn format_number(n: f64) -> String {
	let text = format!("{n:?}");
	match text.strip_suffix(".0") {
		Some(integral) => integral.to_string(),
		None => text,
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			Num(n) => write!(f, "{}", format_number(*n)),
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl From<&LiteralValue> for Value {
	fn from(literal: &LiteralValue) -> Self {
		match literal {
			LiteralValue::Nil => Nil,
			LiteralValue::Boolean(b) => Bool(*b),
			LiteralValue::Number(n) => Num(*n),
			LiteralValue::StringLiteral(s) => Str(s.clone()),
		}
	}
}

impl Value {
	/// `nil` and `false` are falsy, everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Nil => false,
			Bool(b) => *b,
			_ => true,
		}
	}

	/// Tries to add two numbers or concatenate two strings.
	pub fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Num(l), Num(r)) => Some(Num(l + r)),
			(Str(l), Str(r)) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	/// Applies `op` when both values are numbers.
	pub fn numeric<T>(&self, other: &Self, op: impl FnOnce(f64, f64) -> T) -> Option<T> {
		match (self, other) {
			(Num(l), Num(r)) => Some(op(*l, *r)),
			_ => None,
		}
	}

	/// Equality without coercion: values of different kinds are never equal.
	pub fn equals(&self, other: &Self) -> bool {
		match (self, other) {
			(Nil, Nil) => true,
			(Bool(l), Bool(r)) => l == r,
			(Num(l), Num(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify() {
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(false).to_string(), "false");
		assert_eq!(Num(3.0).to_string(), "3");
		assert_eq!(Num(-0.0).to_string(), "-0");
		assert_eq!(Num(123.456).to_string(), "123.456");
		assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
		assert_eq!(Str("hi".into()).to_string(), "hi");
	}

	#[test]
	fn stringify_non_finite() {
		assert_eq!(Num(f64::INFINITY).to_string(), "inf");
		assert_eq!(Num(f64::NEG_INFINITY).to_string(), "-inf");
		assert_eq!(Num(f64::NAN).to_string(), "NaN");
	}

	#[test]
	fn truthiness() {
		assert!(!Nil.is_truthy());
		assert!(!Bool(false).is_truthy());
		assert!(Bool(true).is_truthy());
		assert!(Num(0.0).is_truthy());
		assert!(Str(String::new()).is_truthy());
	}

	#[test]
	fn equality() {
		assert!(Nil.equals(&Nil));
		assert!(Num(1.0).equals(&Num(1.0)));
		assert!(!Num(1.0).equals(&Str("1".into())));
		assert!(!Nil.equals(&Bool(false)));
		assert!(!Num(f64::NAN).equals(&Num(f64::NAN)));
	}

	#[test]
	fn plus() {
		assert_eq!(Num(1.0).plus(&Num(2.0)), Some(Num(3.0)));
		assert_eq!(Str("a".into()).plus(&Str("b".into())), Some(Str("ab".into())));
		assert_eq!(Str("1".into()).plus(&Num(2.0)), None);
	}
}
