use crate::scanner::Token;

/// A syntax error at `token`. Unwinds the parser to the single catch point in
/// `Parser::parse`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {}: {type}", .token.line)]
pub struct ParseError {
	pub token:  Token,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(token: Token, r#type: ParseErrorType) -> Self { Self { token, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// Nothing that can start an operand.
	ExpectedExpression,
	/// A binary operator showed up where an operand should be.
	MissingLeftOperand,
	/// A required token was not there, carries the message to report.
	Expected(&'static str),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression.")
			}
			MissingLeftOperand => {
				write!(f, "Missing left-hand operand.")
			}
			Expected(message) => {
				write!(f, "{message}")
			}
		}
	}
}
