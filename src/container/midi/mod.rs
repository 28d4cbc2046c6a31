//! Standard MIDI file chunk framing. Multi-byte fields, including the chunk size, are
//! big-endian. Track events are kept as opaque bytes.

use crate::core::chunk::checked_size;
use crate::core::{ChunkBody, Field, FourCc};
use crate::error::Result;

pub const HEADER_LEN: usize = 6;

// The format discriminator is read from the low byte of its 16-bit slot (chunk offset 9).
// Format values above 255 are not representable; files in the wild only use 0..=2.
const FORMAT: Field<u8> = Field::be(1);
const TRACK_COUNT: Field<u16> = Field::be(2);
const DIVISION: Field<u16> = Field::be(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiHeaderChunk {
	payload: Vec<u8>,
}

impl MidiHeaderChunk {
	pub fn new(format: u8, track_count: u16, division: u16) -> Result<Self> {
		let mut chunk = Self { payload: vec![0u8; HEADER_LEN] };
		FORMAT.set(&mut chunk.payload, format)?;
		TRACK_COUNT.set(&mut chunk.payload, track_count)?;
		DIVISION.set(&mut chunk.payload, division)?;
		Ok(chunk)
	}

	pub fn from_payload(payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { payload })
	}

	pub fn format(&self) -> Result<u8> {
		FORMAT.get(&self.payload)
	}

	pub fn set_format(&mut self, format: u8) -> Result<()> {
		FORMAT.set(&mut self.payload, format)
	}

	pub fn track_count(&self) -> Result<u16> {
		TRACK_COUNT.get(&self.payload)
	}

	pub fn set_track_count(&mut self, count: u16) -> Result<()> {
		TRACK_COUNT.set(&mut self.payload, count)
	}

	pub fn division(&self) -> Result<u16> {
		DIVISION.get(&self.payload)
	}

	pub fn set_division(&mut self, division: u16) -> Result<()> {
		DIVISION.set(&mut self.payload, division)
	}
}

impl ChunkBody for MidiHeaderChunk {
	fn id(&self) -> FourCc {
		FourCc::MTHD
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiTrackChunk {
	payload: Vec<u8>,
}

impl MidiTrackChunk {
	pub fn from_payload(payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { payload })
	}

	pub fn events(&self) -> &[u8] {
		&self.payload
	}
}

impl ChunkBody for MidiTrackChunk {
	fn id(&self) -> FourCc {
		FourCc::MTRK
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}
