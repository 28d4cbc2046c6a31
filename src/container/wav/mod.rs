pub mod data;
pub mod fact;
pub mod file;
pub mod format;

pub use data::DataChunk;
pub use fact::FactChunk;
pub use file::{EncodeOptions, WaveFile};
pub use format::{FormatChunk, FormatExtension, FormatTag};

pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
}

impl WavFormat {
	pub fn new(channels: u16, sample_rate: u32, bit_depth: u16) -> Self {
		Self { channels, sample_rate, bit_depth }
	}

	pub fn bytes_per_sample(&self) -> usize {
		(self.bit_depth / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.channels as usize
	}

	pub fn byte_rate(&self) -> u64 {
		self.sample_rate as u64 * self.bytes_per_frame() as u64
	}

	pub fn is_supported(&self) -> bool {
		self.channels > 0 && self.sample_rate > 0 && SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth)
	}
}
