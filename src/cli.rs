use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plox", after_long_help = "A tree-walking interpreter for Lox expressions.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Evaluate the expression in a file
	File { path: PathBuf },
	/// Input prompt
	Repl,
	/// Print the tokens scanned from a file
	Tokens { path: PathBuf },
	/// Print the syntax tree parsed from a file
	Ast { path: PathBuf },
}
