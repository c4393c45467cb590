//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! Keywords: `CFG`(context-free grammar), `BNF`(Backus-Naur Form),
//! `EBNF`(Extended Backus-Naur Form)
//!
//! |Name|Operators|Associates
//! --|--|--
//! Conditional|?:|Right
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Expression grammar:
//!
//! ``` BNF
//! expression     → conditional ;
//! conditional    → equality ( "?" expression ":" conditional )? ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;
//! ```
//!
//! `primary` also has error productions: a binary operator where an operand
//! should start is reported as a missing left operand, its right operand is
//! parsed and thrown away, and that production yields no expression.
//!
//! Recursion depth follows the nesting depth of the input, so pathologically
//! deep nesting can overflow the stack.

pub mod expression;

use TokenType::*;

use crate::{
	diagnostic::Reporter,
	error::parser::{ParseError, ParseErrorType},
	parser::expression::{Expression, LiteralValue},
	scanner::{Token, TokenType},
};

/// `Ok(None)` means an error production fired somewhere below: the error is
/// already recorded and parsing goes on, but there is no tree to return.
type ParseResult = Result<Option<Box<Expression>>, ParseError>;

/// Recursive descent parser over a scanned token sequence.
pub struct Parser {
	/// The tokens to parse, always ending with `Eof`.
	tokens:  Vec<Token>,
	/// Index of the next token to consume.
	current: usize,
	/// Errors recorded so far, in order.
	errors:  Vec<ParseError>,
}

impl Parser {
	pub fn new(mut tokens: Vec<Token>) -> Self {
		if !tokens.last().is_some_and(Token::is_eof) {
			let line = tokens.last().map_or(1, |token| token.line);
			tokens.push(Token::eof(line));
		}
		Self { tokens, current: 0, errors: Vec::new() }
	}

	/// Parse one expression. Every syntax error goes to `reporter`; if there
	/// was any, no tree is returned.
	pub fn parse(&mut self, reporter: &mut impl Reporter) -> Option<Box<Expression>> {
		let expression = match self.expression() {
			Ok(expression) => expression,
			Err(error) => {
				self.errors.push(error);
				None
			}
		};
		for error in &self.errors {
			reporter.token_error(&error.token, &error.r#type.to_string());
		}
		if self.errors.is_empty() { expression } else { None }
	}

	/// Errors recorded by the error productions and the last failure.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	/// Parse expressions.
	pub(crate) fn expression(&mut self) -> ParseResult { self.conditional() }

	/// Parse conditional expressions, right-associative.
	fn conditional(&mut self) -> ParseResult {
		let condition = self.equality()?;
		if self.match_types(&[Question]).is_none() {
			return Ok(condition);
		}
		let then_branch = self.expression()?;
		self.consume(Colon, "Expect ':' after then branch of conditional expression.")?;
		let else_branch = self.conditional()?;
		Ok(condition
			.zip(then_branch)
			.zip(else_branch)
			.map(|((condition, then_branch), else_branch)| Expression::conditional(condition, then_branch, else_branch)))
	}

	/// Parse equality expressions.
	fn equality(&mut self) -> ParseResult { self.left_associative(&[BangEqual, EqualEqual], Self::comparison) }

	/// Parse comparison expressions.
	fn comparison(&mut self) -> ParseResult {
		self.left_associative(&[Greater, GreaterEqual, Less, LessEqual], Self::term)
	}

	/// Parse term expressions.
	fn term(&mut self) -> ParseResult { self.left_associative(&[Minus, Plus], Self::factor) }

	/// Parse factor expressions.
	fn factor(&mut self) -> ParseResult { self.left_associative(&[Slash, Star], Self::unary) }

	/// One operand, then fold `operator operand` pairs to the left.
	fn left_associative(&mut self, operators: &[TokenType], operand: fn(&mut Self) -> ParseResult) -> ParseResult {
		let mut expression = operand(self)?;
		while let Some(operator) = self.match_types(operators) {
			let right = operand(self)?;
			expression = expression.zip(right).map(|(left, right)| Expression::binary(left, operator, right));
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> ParseResult {
		if let Some(operator) = self.match_types(&[Bang, Minus]) {
			let right = self.unary()?;
			return Ok(right.map(|right| Expression::unary(operator, right)));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> ParseResult {
		match self.peek().r#type {
			False | True | Nil | Number | String => {
				let token = self.advance();
				let value = LiteralValue::try_from(token)
					.map_err(|token| ParseError::new(token, ParseErrorType::ExpectedExpression))?;
				Ok(Some(Expression::literal(value)))
			}
			LeftParen => {
				self.advance(); // consume '('
				let expression = self.expression()?;
				self.consume(RightParen, "Expect ')' after expression.")?;
				Ok(expression.map(Expression::grouping))
			}
			BangEqual | EqualEqual => self.missing_left_operand(Self::comparison),
			Greater | GreaterEqual | Less | LessEqual => self.missing_left_operand(Self::term),
			Plus => self.missing_left_operand(Self::factor),
			Slash | Star => self.missing_left_operand(Self::unary),
			_ => Err(ParseError::new(self.peek().clone(), ParseErrorType::ExpectedExpression)),
		}
	}

	/// Error production for a binary operator with no left operand. Records the
	/// error, skips the right operand at the operator's own level and yields
	/// nothing.
	fn missing_left_operand(&mut self, operand: fn(&mut Self) -> ParseResult) -> ParseResult {
		let operator = self.advance();
		self.errors.push(ParseError::new(operator, ParseErrorType::MissingLeftOperand));
		operand(self)?;
		Ok(None)
	}

	/// Consume a required token or fail with `message`.
	fn consume(&mut self, r#type: TokenType, message: &'static str) -> Result<Token, ParseError> {
		if self.check(r#type) {
			return Ok(self.advance());
		}
		Err(ParseError::new(self.peek().clone(), ParseErrorType::Expected(message)))
	}

	/// Consume the next token if it is one of `types`.
	fn match_types(&mut self, types: &[TokenType]) -> Option<Token> {
		types.iter().any(|&r#type| self.check(r#type)).then(|| self.advance())
	}

	fn check(&self, r#type: TokenType) -> bool { !self.is_at_end() && self.peek().r#type == r#type }

	/// Advance to the next token, never past `Eof`.
	fn advance(&mut self) -> Token {
		let token = self.peek().clone();
		if !self.is_at_end() {
			self.current += 1;
		}
		token
	}

	/// Peek at the current token.
	fn peek(&self) -> &Token { &self.tokens[self.current] }

	fn previous(&self) -> Option<&Token> { self.current.checked_sub(1).map(|index| &self.tokens[index]) }

	fn is_at_end(&self) -> bool { self.peek().is_eof() }

	/// Panic-mode recovery: discard tokens until just past a `;` or right
	/// before a keyword that opens a statement.
	pub fn synchronize(&mut self) {
		self.advance();
		while !self.is_at_end() {
			if self.previous().is_some_and(|token| token.r#type == Semicolon) {
				return;
			}
			if self.peek().r#type.starts_statement() {
				return;
			}
			self.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		diagnostic::Diagnostics,
		scanner::{Literal, Scanner},
	};

	fn tokens(input: &str) -> Vec<Token> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input).scan_tokens(&mut diagnostics);
		assert!(!diagnostics.had_error());
		tokens
	}

	fn parse(input: &str, equals: &str) {
		let mut diagnostics = Diagnostics::new();
		let ast = Parser::new(tokens(input)).parse(&mut diagnostics);
		assert!(!diagnostics.had_error(), "{input:?}: {diagnostics:?}");
		assert_eq!(ast.map(|ast| ast.to_string()).as_deref(), Some(equals));
	}

	fn parse_err(input: &str) -> Vec<std::string::String> {
		let mut diagnostics = Diagnostics::new();
		let ast = Parser::new(tokens(input)).parse(&mut diagnostics);
		assert!(ast.is_none(), "{input:?} should not parse");
		diagnostics.iter().map(ToString::to_string).collect()
	}

	/// Hand built tokens, every one on line 1.
	fn make_tokens(types: &[TokenType]) -> Vec<Token> {
		types
			.iter()
			.map(|&r#type| match r#type {
				String => Token::new(r#type, "\"\"", Some(Literal::String(std::string::String::new())), 1),
				Number => Token::new(r#type, "5", Some(Literal::Number(5.0)), 1),
				_ => Token::new(r#type, r#type.to_string(), None, 1),
			})
			.collect()
	}

	#[test]
	fn parse_expressions() {
		parse("3 + 4 * (-2 - 1)", "(+ 3 (* 4 (group (- (- 2) 1))))");
		parse("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse("8 + 800.3 * 123 / 65 - (2 + 3)", "(- (+ 8 (/ (* 800.3 123) 65)) (group (+ 2 3)))");
	}

	#[test]
	fn parse_left_associative() {
		parse("1 - 2 - 3", "(- (- 1 2) 3)");
		parse("8 / 4 / 2", "(/ (/ 8 4) 2)");
		parse("1 < 2 < 3", "(< (< 1 2) 3)");
		parse("1 == 2 == 3", "(== (== 1 2) 3)");
		parse("1 != 2 == 3", "(== (!= 1 2) 3)");
	}

	#[test]
	fn parse_comparison() {
		parse("1 < 2", "(< 1 2)");
		parse("1 <= 2", "(<= 1 2)");
		parse("1 > 2", "(> 1 2)");
		parse("1 >= 2", "(>= 1 2)");
	}

	#[test]
	fn parse_unary() {
		parse("-123", "(- 123)");
		parse("!true", "(! true)");
		parse("-(-123)", "(- (group (- 123)))");
		parse("!!true", "(! (! true))");
		parse("-1 + 2", "(+ (- 1) 2)");
	}

	#[test]
	fn parse_literals() {
		parse("42", "42");
		parse("3.14", "3.14");
		parse("\"hello\"", "hello");
		parse("true", "true");
		parse("false", "false");
		parse("nil", "nil");
	}

	#[test]
	fn parse_grouping() {
		parse("(1 + 2) * 3", "(* (group (+ 1 2)) 3)");
		parse("((1))", "(group (group 1))");
	}

	#[test]
	fn parse_conditional() {
		parse("1 ? 2 : 3", "(if 1 then 2 else 3)");
		parse("1 == 2 ? 3 : 4", "(if (== 1 2) then 3 else 4)");
		parse("1 ? 2 ? 3 : 4 : 5", "(if 1 then (if 2 then 3 else 4) else 5)");
		parse("(1 ? 2 : 3) + 4", "(+ (group (if 1 then 2 else 3)) 4)");
	}

	#[test]
	fn conditional_is_right_associative() {
		parse("1==1 ? 2 : false ? 3 : 4", "(if (== 1 1) then 2 else (if false then 3 else 4))");
	}

	#[test]
	fn conditional_from_tokens() {
		let mut diagnostics = Diagnostics::new();
		let ast = Parser::new(make_tokens(&[True, Question, String, Colon, String, Eof])).parse(&mut diagnostics);
		let expected = Expression::conditional(
			Expression::literal(LiteralValue::Boolean(true)),
			Expression::literal(LiteralValue::StringLiteral(std::string::String::new())),
			Expression::literal(LiteralValue::StringLiteral(std::string::String::new())),
		);
		assert_eq!(ast, Some(expected));
		assert!(!diagnostics.had_error());
	}

	#[test]
	fn conditional_missing_colon() {
		let mut parser = Parser::new(make_tokens(&[True, Question, String, String, Eof]));
		let error = parser.expression().unwrap_err();
		assert_eq!(error.r#type, ParseErrorType::Expected("Expect ':' after then branch of conditional expression."));

		assert_eq!(parse_err("true ? \"x\""), [
			"[line 1] Error at end: Expect ':' after then branch of conditional expression."
		]);
	}

	#[test]
	fn missing_left_operand() {
		assert_eq!(parse_err("* 5"), ["[line 1] Error at '*': Missing left-hand operand."]);
		assert_eq!(parse_err("1 + == 2"), ["[line 1] Error at '==': Missing left-hand operand."]);
		assert_eq!(parse_err("(> 2) + 1"), ["[line 1] Error at '>': Missing left-hand operand."]);
	}

	#[test]
	fn missing_left_operand_skips_operand_at_its_level() {
		// `== 1 < 2` discards the whole comparison, nothing else is reported
		assert_eq!(parse_err("== 1 < 2"), ["[line 1] Error at '==': Missing left-hand operand."]);
		// `+ 1 * 2` discards a factor, then `- 3` still parses
		let mut parser = Parser::new(tokens("+ 1 * 2 - 3"));
		assert_eq!(parser.expression(), Ok(None));
		assert_eq!(parser.errors().len(), 1);
		assert!(parser.is_at_end());
	}

	#[test]
	fn multiple_missing_operands_are_all_reported() {
		assert_eq!(parse_err("* 1 / 2"), [
			"[line 1] Error at '*': Missing left-hand operand.",
		]);
		assert_eq!(parse_err("(* 1) + (/ 2)"), [
			"[line 1] Error at '*': Missing left-hand operand.",
			"[line 1] Error at '/': Missing left-hand operand.",
		]);
	}

	#[test]
	fn unparsable_primary() {
		assert_eq!(parse_err(""), ["[line 1] Error at end: Expect expression."]);
		assert_eq!(parse_err("1 +"), ["[line 1] Error at end: Expect expression."]);
		assert_eq!(parse_err("(1 + 2"), ["[line 1] Error at end: Expect ')' after expression."]);
		assert_eq!(parse_err("\n\nvar"), ["[line 3] Error at 'var': Expect expression."]);
	}

	#[test]
	fn error_production_then_failure_reports_both() {
		assert_eq!(parse_err("(* 1) + )"), [
			"[line 1] Error at '*': Missing left-hand operand.",
			"[line 1] Error at ')': Expect expression.",
		]);
	}

	#[test]
	fn appends_missing_eof() {
		let mut diagnostics = Diagnostics::new();
		let ast = Parser::new(make_tokens(&[Number])).parse(&mut diagnostics);
		assert_eq!(ast.map(|ast| ast.to_string()).as_deref(), Some("5"));

		let ast = Parser::new(Vec::new()).parse(&mut diagnostics);
		assert!(ast.is_none());
		assert!(diagnostics.had_error());
	}

	#[test]
	fn synchronize_stops_after_semicolon() {
		let mut parser = Parser::new(tokens("1 + ; 2"));
		assert!(parser.expression().is_err());
		parser.synchronize();
		assert_eq!(parser.peek().r#type, Number);
		assert_eq!(parser.peek().lexeme, "2");
	}

	#[test]
	fn synchronize_stops_before_statement_keyword() {
		let mut parser = Parser::new(tokens("1 ) 2 print 3"));
		parser.synchronize();
		assert_eq!(parser.peek().r#type, Print);

		let mut parser = Parser::new(tokens("( ( ("));
		parser.synchronize();
		assert!(parser.is_at_end());
	}
}
