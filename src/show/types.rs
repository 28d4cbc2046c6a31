#[derive(Debug, Clone)]
pub struct ShowOptions {
	pub hex_limit: usize,
}

impl Default for ShowOptions {
	fn default() -> Self {
		Self { hex_limit: 16 }
	}
}

#[derive(Debug, Clone)]
pub struct ChunkInfo {
	pub index: usize,
	pub offset: u64,
	pub tag: String,
	pub size: u32,
	pub kind: &'static str,
	pub summary: String,
}

#[derive(Debug, Clone)]
pub struct StreamInfo {
	pub path: String,
	pub chunks: Vec<ChunkInfo>,
	pub end_offset: u64,
	pub truncation: Option<String>,
}
