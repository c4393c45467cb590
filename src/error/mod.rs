pub mod interpreter;
pub mod parser;
pub mod scanner;

/// LoxError is the top-level error type for the Lox interpreter.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Failures outside the language itself, e.g. reading a script
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// Lexical and syntax errors, already reported
	#[error("Generated {0} static errors")]
	StaticErrors(usize),
	/// Runtime errors encountered during interpretation
	#[error("[line {line}] Error at '{lexeme}': {0}", line = .0.token.line, lexeme = .0.token.lexeme)]
	RuntimeError(#[from] interpreter::RuntimeError),
}

impl LoxError {
	/// Process exit status for file mode.
	pub fn exit_code(&self) -> u8 {
		match self {
			LoxError::InternalError(_) => 74,
			LoxError::StaticErrors(_) => 65,
			LoxError::RuntimeError(_) => 70,
		}
	}
}
