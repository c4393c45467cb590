//! Represents a lexical token in the Lox language.
//!
//! Keywords are part of the shape of the language’s grammar, so the parser
//! often has code like, “If the next token is `while` then do . . . ” That
//! means the parser wants to know not just that it has a lexeme for some
//! identifier, but that it has a reserved word, and which keyword it is.
//!
//! There are lexemes for literal values, numbers and strings. Since the scanner
//! has to walk each character in the literal to correctly identify it, it also
//! converts that textual representation to the value the interpreter will use
//! later.
//!
//! We can’t easily detect a `reserved word` until we’ve reached the end of what
//! might instead be an identifier, this is `maximal munch`.
//!
//! The scanner never gives up on the whole input. Lexical errors go to a
//! [`Reporter`] and scanning continues, except for an unterminated string or
//! block comment, which swallows the rest of the source.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::{
	diagnostic::Reporter,
	error::scanner::{ScanError, ScanErrorType},
};

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the last consumed character
	cursor:      usize,
	/// Tracks what source line `cursor` is on
	line:        usize,
	/// The line the current lexeme started on
	start_line:  usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, start_line: 1 }
	}

	/// Scan all tokens from the source code. The result always ends with
	/// exactly one `Eof` token.
	pub fn scan_tokens(mut self, reporter: &mut impl Reporter) -> Vec<Token> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = index;
			self.start_line = self.line;
			match self.scan_token() {
				Ok(Some(token)) => tokens.push(token),
				Ok(None) => {}
				Err(e) => reporter.error(e.line, &e.r#type.to_string()),
			}
		}
		tokens.push(Token::eof(self.line));
		tokens
	}

	/// Scan a single lexeme. Whitespace and comments produce no token.
	fn scan_token(&mut self) -> Result<Option<Token>, ScanError> {
		let Some(next_char) = self.advance() else { return Ok(None) };
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'?' => Question,
			':' => Colon,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(None);
			} else if self.match_next('*') {
				self.block_comment()?;
				return Ok(None);
			} else { Slash },
			' ' | '\r' | '\t' => return Ok(None),
			'\n' => { self.line += 1; return Ok(None) }
			'"' => return self.string().map(Some),
			c if c.is_ascii_digit() => return self.number().map(Some),
			c if c.is_alphabetic() => self.identifier(),
			c => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(c))),
		};

		Ok(Some(self.make_token(r#type, None)))
	}

	fn make_token(&self, r#type: TokenType, literal: Option<Literal>) -> Token {
		let lexeme = &self.source[self.start..self.cursor];
		Token::new(r#type, lexeme, literal, self.start_line)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Skip a `/* ... */` comment, the opening `/*` already consumed. The first
	/// `*/` closes it, they do not nest.
	fn block_comment(&mut self) -> Result<(), ScanError> {
		while let Some(c) = self.peek() {
			if c == '*' && self.peek_second() == Some('/') {
				self.advance(); // consume '*'
				self.advance(); // consume '/'
				return Ok(());
			}
			if c == '\n' {
				self.line += 1;
			}
			self.advance();
		}
		Err(ScanError::new(self.line, ScanErrorType::UnterminatedBlockComment))
	}

	/// Scan a string literal. No escape sequences.
	fn string(&mut self) -> Result<Token, ScanError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(self.make_token(String, Some(Literal::String(value.to_string()))))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<Token, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let value: f64 = self.source[self.start..self.cursor]
			.parse()
			.map_err(|_| ScanError::new(self.line, ScanErrorType::InvalidNumber))?;
		Ok(self.make_token(Number, Some(Literal::Number(value))))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_alphanumeric()) {
			self.advance();
		}
		TokenType::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}
