use crate::core::chunk::checked_size;
use crate::core::{ChunkBody, Field, FourCc};
use crate::error::Result;

const SAMPLE_COUNT: Field<u32> = Field::le(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactChunk {
	payload: Vec<u8>,
}

impl FactChunk {
	pub fn new(sample_count: u32) -> Self {
		Self { payload: sample_count.to_le_bytes().to_vec() }
	}

	pub fn from_payload(payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { payload })
	}

	pub fn sample_count(&self) -> Result<u32> {
		SAMPLE_COUNT.get(&self.payload)
	}

	pub fn set_sample_count(&mut self, count: u32) -> Result<()> {
		SAMPLE_COUNT.set(&mut self.payload, count)
	}
}

impl ChunkBody for FactChunk {
	fn id(&self) -> FourCc {
		FourCc::FACT
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}
