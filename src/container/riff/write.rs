use super::chunk::{Chunk, FORM_TYPE_LEN, FormChunk};
use super::form::{Form, Node};
use crate::core::{ChunkBody, ChunkHeader, Endian, HEADER_LEN};
use crate::error::Result;
use crate::io::{MediaWrite, WritePrimitives};

pub struct RiffWriter<W: MediaWrite> {
	writer: W,
	written: u64,
}

impl<W: MediaWrite> RiffWriter<W> {
	pub fn new(writer: W) -> Self {
		Self { writer, written: 0 }
	}

	pub fn bytes_written(&self) -> u64 {
		self.written
	}

	pub fn write_form_header(&mut self, form: &FormChunk) -> Result<()> {
		self.writer.write_chunk_header(ChunkHeader::new(form.id, form.size), Endian::Little)?;
		self.writer.write_fourcc(form.form_type)?;
		self.written += (HEADER_LEN + FORM_TYPE_LEN) as u64;
		Ok(())
	}

	pub fn write_body<B: ChunkBody + ?Sized>(&mut self, body: &B, size_endian: Endian) -> Result<()> {
		let header = body.header();
		self.writer.write_chunk_header(header, size_endian)?;
		self.writer.write_all(body.payload())?;
		self.written += header.on_disk_len();
		Ok(())
	}

	pub fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
		match chunk {
			Chunk::Form(form) => self.write_form_header(form),
			Chunk::Format(c) => self.write_body(c, chunk.size_endian()),
			Chunk::Data(c) => self.write_body(c, chunk.size_endian()),
			Chunk::Fact(c) => self.write_body(c, chunk.size_endian()),
			Chunk::MidiHeader(c) => self.write_body(c, chunk.size_endian()),
			Chunk::MidiTrack(c) => self.write_body(c, chunk.size_endian()),
			Chunk::Raw(c) => self.write_body(c, chunk.size_endian()),
		}
	}

	pub fn write_form(&mut self, form: &Form) -> Result<()> {
		let size = form.size()?;
		tracing::debug!(tag = %form.id, form_type = %form.form_type, size, "writing form");
		self.write_form_header(&FormChunk::new(form.id, size, form.form_type))?;
		for child in &form.children {
			match child {
				Node::Chunk(chunk) => self.write_chunk(chunk)?,
				Node::Form(nested) => self.write_form(nested)?,
			}
		}
		Ok(())
	}

	pub fn finish(mut self) -> Result<W> {
		self.writer.flush()?;
		Ok(self.writer)
	}
}
