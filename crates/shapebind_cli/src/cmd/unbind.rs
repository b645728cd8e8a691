use std::io::Write;
use std::path::PathBuf;

use shapebind::bind::unbind_value;
use shapebind::codec::{Compression, Document};
use tracing::debug;

use crate::cmd::Result;
use crate::cmd::util::load_registry;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub schema: PathBuf,
	#[arg(long)]
	pub output: Option<PathBuf>,
	#[arg(long)]
	pub zstd: bool,
	#[arg(long)]
	pub pretty: bool,
}

/// Bind a document, unbind it again, and write the re-encoded JSON.
///
/// Keys no declared type accounts for inside bound objects are dropped along the way.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		schema,
		output,
		zstd,
		pretty,
	} = args;

	let registry = load_registry(&schema)?;
	let document = Document::open(&path)?;
	let bound = registry.bind(document.value)?;
	let plain = unbind_value(&bound)?;

	let compression = if zstd { Compression::Zstd } else { Compression::None };
	match output {
		Some(output) => {
			Document::write(&output, &plain, compression, pretty)?;
			debug!(path = %output.display(), compression = compression.as_str(), "wrote document");
			println!("wrote: {} ({})", output.display(), compression.as_str());
		}
		None => {
			let mut bytes = Document::encode(&plain, compression, pretty)?;
			if compression == Compression::None {
				bytes.push(b'\n');
			}
			std::io::stdout().lock().write_all(&bytes)?;
		}
	}

	Ok(())
}
