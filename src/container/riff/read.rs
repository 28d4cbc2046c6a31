use super::chunk::Chunk;
use super::registry::Registry;
use crate::core::{ChunkHeader, Field, FourCc, HEADER_LEN};
use crate::error::{Error, Result};
use crate::io::{MediaRead, ReadPrimitives};

const TAG: Field<FourCc> = Field::le(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
	AwaitingHeader,
	EndOfStream,
	Faulted,
}

pub struct ChunkReader<R: MediaRead> {
	reader: R,
	registry: Registry,
	state: ReaderState,
	fault: Option<Error>,
	position: u64,
}

impl<R: MediaRead> ChunkReader<R> {
	pub fn new(reader: R) -> Self {
		Self::with_registry(reader, Registry::standard())
	}

	pub fn with_registry(reader: R, registry: Registry) -> Self {
		Self { reader, registry, state: ReaderState::AwaitingHeader, fault: None, position: 0 }
	}

	pub fn state(&self) -> ReaderState {
		self.state
	}

	pub fn fault(&self) -> Option<&Error> {
		self.fault.as_ref()
	}

	pub fn take_fault(&mut self) -> Option<Error> {
		self.fault.take()
	}

	pub fn position(&self) -> u64 {
		self.position
	}

	pub fn into_inner(self) -> R {
		self.reader
	}

	fn read_chunk(&mut self) -> Result<Option<Chunk>> {
		let mut raw = [0u8; HEADER_LEN];
		let got = self.reader.read_up_to(&mut raw)?;
		if got == 0 {
			return Ok(None);
		}
		if got < HEADER_LEN {
			return Err(Error::unexpected_eof(HEADER_LEN, got));
		}

		let id = TAG.get(&raw)?;
		let schema = *self.registry.lookup(id);
		let header = ChunkHeader::new(id, schema.read_size(&raw)?);

		let len = schema.rule.payload_len(&header);
		let payload = self.reader.read_vec(len)?;
		let chunk = (schema.decode)(header, payload)?;

		self.position += (HEADER_LEN + len) as u64;
		tracing::trace!(tag = %id, size = header.size, kind = chunk.kind(), "decoded chunk");
		Ok(Some(chunk))
	}
}

impl<R: MediaRead> Iterator for ChunkReader<R> {
	type Item = Chunk;

	fn next(&mut self) -> Option<Chunk> {
		if self.state != ReaderState::AwaitingHeader {
			return None;
		}

		match self.read_chunk() {
			Ok(Some(chunk)) => Some(chunk),
			Ok(None) => {
				self.state = ReaderState::EndOfStream;
				None
			}
			Err(e) => {
				tracing::debug!(position = self.position, error = %e, "chunk stream ended early");
				self.state = ReaderState::Faulted;
				self.fault = Some(e);
				None
			}
		}
	}
}

impl<R: MediaRead> std::iter::FusedIterator for ChunkReader<R> {}
