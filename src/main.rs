use std::process::ExitCode;

use palc::Parser;
use plox::{LoxError, cli::*};

fn main() -> ExitCode {
	let lox = plox::Lox;

	let result = match Cli::parse().mode {
		Mode::File { path } => lox.run_file(&path),
		Mode::Repl => {
			lox.run_prompt();
			Ok(())
		}
		Mode::Tokens { path } => lox.read_source(&path).and_then(|source| {
			lox.tokenize(&source)?.iter().for_each(|token| println!("{token}"));
			Ok(())
		}),
		Mode::Ast { path } => lox.read_source(&path).and_then(|source| {
			println!("{}", lox.parse(&source)?);
			Ok(())
		}),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			report(&e);
			ExitCode::from(e.exit_code())
		}
	}
}

fn report(error: &LoxError) {
	// Static errors were already printed one by one.
	if !matches!(error, LoxError::StaticErrors(_)) {
		eprintln!("{error}");
	}
}
