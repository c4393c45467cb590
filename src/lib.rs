//! # How bare text turns into a value
//!
//! User's source code: `(min + max) / 2 > 10 ? "big" : "small"`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `?`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["(", "min", "+", "max", ")", "/", "2", ">", "10", "?", "\"big\"", ":", "\"small\"", EOF]`.

//! ## Parsing
//!
//! Where our syntax gets `syntactic`. A `parser` builds a tree structure of
//! tokens -- `abstract syntax tree` or `AST`. The `parser` also reports
//! `syntax errors`.
//!
//! ``` markdown
//! ?: (Expr.Conditional)
//! ├── > (Expr.Binary)
//! │   ├── / (Expr.Binary)
//! │   │   ├── (group) (Expr.Grouping)
//! │   │   │   └── + (Expr.Binary)
//! │   │   └── 2 (Expr.Literal)
//! │   └── 10 (Expr.Literal)
//! ├── "big" (Expr.Literal)
//! └── "small" (Expr.Literal)
//! ```

//! ## Tree-walk interpreter
//!
//! Execute code right after parsing it to AST. Each node is evaluated after
//! its children, and operands are checked against the type their operator
//! needs at that moment: Lox is dynamically typed.

//! ## Errors
//!
//! Scanner and parser report through a [`Reporter`] and keep going where they
//! can; the driver decides whether anything ran. Runtime errors abort the
//! current evaluation and carry the operator token that failed. In file mode,
//! static errors exit with 65 and runtime errors with 70.

pub mod cli;
pub mod diagnostic;
mod error;
pub mod interpreter;
mod loxer;
pub mod parser;
pub mod scanner;

pub use diagnostic::{Diagnostic, Diagnostics, Reporter};
pub use error::{
	LoxError,
	interpreter::RuntimeError,
	parser::{ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType},
};
pub use interpreter::{Interpreter, value::Value};
pub use loxer::Lox;
pub use parser::{
	Parser,
	expression::{Expression, LiteralValue},
};
pub use scanner::{Literal, Scanner, Token, TokenType};
