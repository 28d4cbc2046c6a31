use super::WavFormat;
use crate::core::chunk::checked_size;
use crate::core::{ChunkBody, FourCc};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataChunk {
	payload: Vec<u8>,
}

impl DataChunk {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_payload(payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { payload })
	}

	pub fn set_sample_buffer(&mut self, format: &WavFormat, frame_count: usize) -> Result<()> {
		let block_align = non_zero_block_align(format)?;
		let len = block_align.checked_mul(frame_count).ok_or(Error::SizeOverflow(usize::MAX))?;
		checked_size(len)?;
		self.payload.resize(len, 0);
		Ok(())
	}

	pub fn set_samples(&mut self, format: &WavFormat, samples: Vec<u8>) -> Result<()> {
		let block_align = non_zero_block_align(format)?;
		if samples.len() % block_align != 0 {
			return Err(Error::SampleBufferMismatch { len: samples.len(), block_align });
		}
		checked_size(samples.len())?;
		self.payload = samples;
		Ok(())
	}

	pub fn validate(&self, format: &WavFormat) -> Result<()> {
		let block_align = non_zero_block_align(format)?;
		if self.payload.len() % block_align != 0 {
			return Err(Error::SampleBufferMismatch { len: self.payload.len(), block_align });
		}
		Ok(())
	}

	pub fn frame_count(&self, format: &WavFormat) -> usize {
		match format.bytes_per_frame() {
			0 => 0,
			block_align => self.payload.len() / block_align,
		}
	}

	pub fn frames<'a>(&'a self, format: &WavFormat) -> impl Iterator<Item = &'a [u8]> + 'a {
		self.payload.chunks_exact(format.bytes_per_frame().max(1))
	}

	pub fn samples_mut(&mut self) -> &mut [u8] {
		&mut self.payload
	}
}

impl ChunkBody for DataChunk {
	fn id(&self) -> FourCc {
		FourCc::DATA
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}

fn non_zero_block_align(format: &WavFormat) -> Result<usize> {
	match format.bytes_per_frame() {
		0 => Err(Error::invalid_data(format!(
			"format with {} channels and {} bits has no frame size",
			format.channels, format.bit_depth
		))),
		n => Ok(n),
	}
}
