use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{
	LoxError,
	diagnostic::{Diagnostics, Reporter},
	interpreter::Interpreter,
	parser::{Parser, expression::Expression},
	scanner::{Scanner, Token},
};

/// Lox is the driver: it feeds source text through scanner, parser and
/// interpreter, and prints what they report.
pub struct Lox;

impl Lox {
	/// Read a script from disk.
	pub fn read_source<P: AsRef<Path>>(&self, path: P) -> Result<String, LoxError> {
		let path = path.as_ref();
		Ok(read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?)
	}

	/// Run a script and print its value.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoxError> {
		let source = self.read_source(path)?;
		println!("{}", self.run(&source)?);
		Ok(())
	}

	/// Run the REPL prompt. An empty line or end of input leaves it.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited plox repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() {
				break;
			}
			// Every line gets fresh diagnostics, one bad line does not end the session.
			match self.run(line) {
				Ok(value) => println!("{value}"),
				Err(LoxError::StaticErrors(_)) => {}
				Err(e) => eprintln!("{e}"),
			}
		}
	}

	/// Scan, parse and evaluate `source`, returning the stringified value.
	pub fn run(&self, source: &str) -> Result<String, LoxError> {
		let expression = self.parse(source)?;
		Ok(Interpreter::new().interpret(&expression)?)
	}

	/// Scan `source`. Lexical errors are printed and turn into `StaticErrors`.
	pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LoxError> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
		Self::check(&diagnostics)?;
		Ok(tokens)
	}

	/// Scan and parse `source`. Errors from both stages are printed together.
	pub fn parse(&self, source: &str) -> Result<Box<Expression>, LoxError> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
		let expression = Parser::new(tokens).parse(&mut diagnostics);
		Self::check(&diagnostics)?;
		expression.context("Parser returned no tree without reporting an error").map_err(LoxError::from)
	}
}

impl Lox {
	fn check(diagnostics: &Diagnostics) -> Result<(), LoxError> {
		if !diagnostics.had_error() {
			return Ok(());
		}
		for diagnostic in diagnostics {
			eprintln!("{diagnostic}");
		}
		Err(LoxError::StaticErrors(diagnostics.len()))
	}
}
