#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use objsel::doc::ParseOptions;

mod cmd;

#[derive(Parser)]
#[command(name = "objsel", about = "Read and write nested JSON values by selector")]
struct Cli {
	/// Character separating selector segments.
	#[arg(long, global = true, default_value_t = '.')]
	separator: char,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve a selector and print the value found.
	Get {
		path: PathBuf,
		selector: String,
		#[arg(long)]
		json: bool,
	},
	/// Assign a JSON value at a selector.
	Set {
		path: PathBuf,
		selector: String,
		value: String,
		/// Treat `value` as a literal string instead of JSON text.
		#[arg(long)]
		string: bool,
		#[arg(long, conflicts_with = "write")]
		json: bool,
		/// Write the updated document back to `path`.
		#[arg(long)]
		write: bool,
	},
	/// Report whether a selector reaches a non-nil value.
	Has { path: PathBuf, selector: String },
	/// Print the kind of the value a selector reaches.
	Kind { path: PathBuf, selector: String },
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> objsel::doc::Result<()> {
	let cli = Cli::parse();
	let options = ParseOptions { separator: cli.separator };

	match cli.command {
		Commands::Get { path, selector, json } => cmd::get::run(path, selector, &options, json),
		Commands::Set {
			path,
			selector,
			value,
			string,
			json,
			write,
		} => cmd::set::run(
			path,
			selector,
			value,
			&options,
			cmd::set::SetOptions { string, json, write },
		),
		Commands::Has { path, selector } => cmd::has::run(path, selector, &options),
		Commands::Kind { path, selector } => cmd::kind::run(path, selector, &options),
	}
}
