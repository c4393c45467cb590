use std::fmt::Display;

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub r#type:  TokenType,
	pub lexeme:  String,
	pub literal: Option<Literal>,
	pub line:    usize,
}

impl Token {
	pub fn new(r#type: TokenType, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
		Self { r#type, lexeme: lexeme.into(), literal, line }
	}

	/// The end-of-input marker for the given line.
	pub fn eof(line: usize) -> Self { Self::new(TokenType::Eof, "", None, line) }

	pub fn is_eof(&self) -> bool { self.r#type == TokenType::Eof }
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Token({}, lexeme={:?}, literal=", self.r#type, self.lexeme)?;
		match &self.literal {
			Some(literal) => write!(f, "{literal}")?,
			None => write!(f, "nil")?,
		}
		write!(f, ", line={})", self.line)
	}
}

/// Decoded value of a `NUMBER` or `STRING` lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Number(f64),
	String(String),
}

impl Display for Literal {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal::Number(n) => write!(f, "{n}"),
			Literal::String(s) => write!(f, "{s:?}"),
		}
	}
}

/// The different types of tokens in Lox, The copying is lightweight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// Dot `.`.
	Dot,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Semicolon `;`.
	Semicolon,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Question mark `?`.
	Question,
	/// Colon `:`.
	Colon,
	/// Bang `!`.
	Bang,
	/// Bang equal `!=`.
	BangEqual,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// String literal, e.g. `"hello"`.
	String,
	/// Number literal, e.g. `123.45`.
	Number,
	/// Logical AND keyword.
	And,
	/// Class keyword.
	Class,
	/// Else keyword.
	Else,
	/// Boolean literal `false`.
	False,
	/// Function keyword.
	Fun,
	/// For loop keyword.
	For,
	/// If statement keyword.
	If,
	/// Nil literal (null equivalent).
	Nil,
	/// Logical OR keyword.
	Or,
	/// Print statement keyword.
	Print,
	/// Return statement keyword.
	Return,
	/// Super keyword (for inheritance).
	Super,
	/// This keyword (current instance reference).
	This,
	/// Boolean literal `true`.
	True,
	/// Variable declaration keyword.
	Var,
	/// While loop keyword.
	While,
	/// End of file/input.
	Eof,
}

impl TokenType {
	/// Reclassify an identifier lexeme as a keyword when it matches one exactly.
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"and" => TokenType::And,
			"class" => TokenType::Class,
			"else" => TokenType::Else,
			"false" => TokenType::False,
			"for" => TokenType::For,
			"fun" => TokenType::Fun,
			"if" => TokenType::If,
			"nil" => TokenType::Nil,
			"or" => TokenType::Or,
			"print" => TokenType::Print,
			"return" => TokenType::Return,
			"super" => TokenType::Super,
			"this" => TokenType::This,
			"true" => TokenType::True,
			"var" => TokenType::Var,
			"while" => TokenType::While,
			_ => TokenType::Identifier,
		}
	}

	/// Keywords that open a declaration or statement, used as recovery points.
	pub fn starts_statement(self) -> bool {
		matches!(
			self,
			TokenType::Class
				| TokenType::Fun
				| TokenType::Var
				| TokenType::For
				| TokenType::If
				| TokenType::While
				| TokenType::Print
				| TokenType::Return
		)
	}
}

impl Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		let name = match self {
			LeftParen => "LEFT_PAREN",
			RightParen => "RIGHT_PAREN",
			LeftBrace => "LEFT_BRACE",
			RightBrace => "RIGHT_BRACE",
			Comma => "COMMA",
			Dot => "DOT",
			Minus => "MINUS",
			Plus => "PLUS",
			Semicolon => "SEMICOLON",
			Slash => "SLASH",
			Star => "STAR",
			Question => "QUESTION",
			Colon => "COLON",
			Bang => "BANG",
			BangEqual => "BANG_EQUAL",
			Equal => "EQUAL",
			EqualEqual => "EQUAL_EQUAL",
			Greater => "GREATER",
			GreaterEqual => "GREATER_EQUAL",
			Less => "LESS",
			LessEqual => "LESS_EQUAL",
			Identifier => "IDENTIFIER",
			String => "STRING",
			Number => "NUMBER",
			And => "AND",
			Class => "CLASS",
			Else => "ELSE",
			False => "FALSE",
			Fun => "FUN",
			For => "FOR",
			If => "IF",
			Nil => "NIL",
			Or => "OR",
			Print => "PRINT",
			Return => "RETURN",
			Super => "SUPER",
			This => "THIS",
			True => "TRUE",
			Var => "VAR",
			While => "WHILE",
			Eof => "EOF",
		};
		write!(f, "{name}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_number_token() {
		let token = Token::new(TokenType::Number, "123.456", Some(Literal::Number(123.456)), 67);
		assert_eq!(token.to_string(), r#"Token(NUMBER, lexeme="123.456", literal=123.456, line=67)"#);
	}

	#[test]
	fn display_string_and_eof_tokens() {
		let token = Token::new(TokenType::String, "\"hi\"", Some(Literal::String("hi".into())), 1);
		assert_eq!(token.to_string(), r#"Token(STRING, lexeme="\"hi\"", literal="hi", line=1)"#);
		assert_eq!(Token::eof(3).to_string(), r#"Token(EOF, lexeme="", literal=nil, line=3)"#);
	}

	#[test]
	fn structural_equality() {
		let a = Token::new(TokenType::Plus, "+", None, 1);
		assert_eq!(a, a.clone());
		assert_ne!(a, Token::new(TokenType::Plus, "+", None, 2));
	}

	#[test]
	fn keywords() {
		assert_eq!(TokenType::keyword_or_identifier("while"), TokenType::While);
		assert_eq!(TokenType::keyword_or_identifier("nil"), TokenType::Nil);
		assert_eq!(TokenType::keyword_or_identifier("whiles"), TokenType::Identifier);
		assert_eq!(TokenType::keyword_or_identifier("And"), TokenType::Identifier);
		assert!(TokenType::Return.starts_statement());
		assert!(!TokenType::And.starts_statement());
	}
}
