#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "shapebind", about = "Bind JSON documents to declared types by structure")]
struct Cli {
	/// Log at debug level regardless of RUST_LOG.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a decoded document tree.
	Inspect(cmd::inspect::Args),
	/// Validate a schema file and list its types.
	Schema(cmd::schema::Args),
	/// Bind a document against a schema.
	Bind(cmd::bind::Args),
	/// Bind, unbind, and re-encode a document.
	Unbind(cmd::unbind::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Inspect(args) => cmd::inspect::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Bind(args) => cmd::bind::run(args),
		Commands::Unbind(args) => cmd::unbind::run(args),
	}
}
