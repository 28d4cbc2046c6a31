use super::FourCc;
use crate::error::{Error, Result};

pub const HEADER_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
	pub id: FourCc,
	pub size: u32,
}

impl ChunkHeader {
	pub fn new(id: FourCc, size: u32) -> Self {
		Self { id, size }
	}

	pub fn on_disk_len(&self) -> u64 {
		HEADER_LEN as u64 + self.size as u64
	}
}

pub trait ChunkBody {
	fn id(&self) -> FourCc;

	fn payload(&self) -> &[u8];

	fn size(&self) -> u32 {
		self.payload().len() as u32
	}

	fn header(&self) -> ChunkHeader {
		ChunkHeader::new(self.id(), self.size())
	}

	fn on_disk_len(&self) -> u64 {
		self.header().on_disk_len()
	}
}

pub(crate) fn checked_size(len: usize) -> Result<u32> {
	u32::try_from(len).map_err(|_| Error::SizeOverflow(len))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
	id: FourCc,
	payload: Vec<u8>,
}

impl RawChunk {
	pub fn new(id: FourCc, payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { id, payload })
	}
}

impl ChunkBody for RawChunk {
	fn id(&self) -> FourCc {
		self.id
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}
