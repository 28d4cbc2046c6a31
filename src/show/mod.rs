mod analyze;
mod human;
mod types;

pub use analyze::{analyze_stream, bytes_to_hex};
pub use human::build_table;
pub use types::{ChunkInfo, ShowOptions, StreamInfo};

use crate::cli::pipeline::{expand_inputs, open_input};
use crate::error::Result;

pub struct Show {
	input: String,
	opts: ShowOptions,
}

impl Show {
	pub fn new(input: String, opts: ShowOptions) -> Self {
		Self { input, opts }
	}

	pub fn run(&self) -> Result<()> {
		for path in expand_inputs(&self.input)? {
			let info = self.analyze(&path)?;
			if let Some(reason) = &info.truncation {
				tracing::warn!(path = %path, reason = %reason, "chunk stream truncated");
			}
			human::render(&info);
		}
		Ok(())
	}

	pub fn analyze(&self, path: &str) -> Result<StreamInfo> {
		let input = open_input(path)?;
		Ok(analyze_stream(input, path, &self.opts))
	}
}
