//! Where the scanner and the parser send what went wrong.
//!
//! Neither of them prints or aborts. They hand a line, a location and a
//! message to a [`Reporter`] and carry on, and whoever drives them decides
//! what to do with the collected reports afterwards.

use std::fmt::Display;

use crate::scanner::Token;

/// A sink for compile time errors.
pub trait Reporter {
	/// Record one error. `location` is empty, `" at end"` or `" at 'lexeme'"`.
	fn report(&mut self, line: usize, location: &str, message: &str);

	/// Whether anything has been reported since the last reset.
	fn had_error(&self) -> bool;

	/// Report an error that is not tied to a token.
	fn error(&mut self, line: usize, message: &str) { self.report(line, "", message) }

	/// Report an error at `token`.
	fn token_error(&mut self, token: &Token, message: &str) {
		if token.is_eof() {
			self.report(token.line, " at end", message)
		} else {
			self.report(token.line, &format!(" at '{}'", token.lexeme), message)
		}
	}
}

/// One reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub line:     usize,
	pub location: String,
	pub message:  String,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
	}
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Default)]
pub struct Diagnostics {
	reported: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self { Self::default() }

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> { self.reported.iter() }

	pub fn len(&self) -> usize { self.reported.len() }

	pub fn is_empty(&self) -> bool { self.reported.is_empty() }

	/// Forget everything, so the next REPL line starts clean.
	pub fn clear(&mut self) { self.reported.clear() }
}

impl Reporter for Diagnostics {
	fn report(&mut self, line: usize, location: &str, message: &str) {
		self.reported.push(Diagnostic { line, location: location.to_string(), message: message.to_string() });
	}

	fn had_error(&self) -> bool { !self.reported.is_empty() }
}

impl<'a> IntoIterator for &'a Diagnostics {
	type IntoIter = std::slice::Iter<'a, Diagnostic>;
	type Item = &'a Diagnostic;

	fn into_iter(self) -> Self::IntoIter { self.reported.iter() }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::TokenType;

	#[test]
	fn formats_locations() {
		let mut diagnostics = Diagnostics::new();
		assert!(!diagnostics.had_error());

		diagnostics.error(3, "Unexpected character.");
		diagnostics.token_error(&Token::new(TokenType::Star, "*", None, 1), "Missing left-hand operand.");
		diagnostics.token_error(&Token::eof(2), "Expect expression.");

		let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
		assert_eq!(lines, [
			"[line 3] Error: Unexpected character.",
			"[line 1] Error at '*': Missing left-hand operand.",
			"[line 2] Error at end: Expect expression.",
		]);
		assert!(diagnostics.had_error());
		assert_eq!(diagnostics.len(), 3);
	}

	#[test]
	fn clear_resets_signal() {
		let mut diagnostics = Diagnostics::new();
		diagnostics.error(1, "oops");
		diagnostics.clear();
		assert!(!diagnostics.had_error());
		assert!(diagnostics.is_empty());
	}
}
