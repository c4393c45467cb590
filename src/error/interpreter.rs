use crate::scanner::Token;

/// An operand failed the type rule of its operator. `token` is that operator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RuntimeError {
	pub token:   Token,
	pub message: String,
}

impl RuntimeError {
	pub fn new(token: &Token, message: impl Into<String>) -> Self {
		Self { token: token.clone(), message: message.into() }
	}
}
