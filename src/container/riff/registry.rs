use super::chunk::{Chunk, FORM_TYPE_LEN, FormChunk};
use crate::container::midi::{MidiHeaderChunk, MidiTrackChunk};
use crate::container::wav::{DataChunk, FactChunk, FormatChunk};
use crate::core::{ChunkHeader, Endian, Field, FourCc, RawChunk};
use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
	FormType,
	Declared,
}

impl PayloadRule {
	pub fn payload_len(&self, header: &ChunkHeader) -> usize {
		match self {
			PayloadRule::FormType => FORM_TYPE_LEN,
			PayloadRule::Declared => header.size as usize,
		}
	}
}

pub type DecodeFn = fn(ChunkHeader, Vec<u8>) -> Result<Chunk>;

#[derive(Clone, Copy)]
pub struct Schema {
	pub rule: PayloadRule,
	pub size_endian: Endian,
	pub decode: DecodeFn,
}

impl Schema {
	pub const fn new(rule: PayloadRule, size_endian: Endian, decode: DecodeFn) -> Self {
		Self { rule, size_endian, decode }
	}

	pub const fn leaf(decode: DecodeFn) -> Self {
		Self::new(PayloadRule::Declared, Endian::Little, decode)
	}

	pub fn read_size(&self, header: &[u8; 8]) -> Result<u32> {
		match self.size_endian {
			Endian::Little => Field::<u32>::le(4).get(header),
			Endian::Big => Field::<u32>::be(4).get(header),
		}
	}
}

impl std::fmt::Debug for Schema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Schema").field("rule", &self.rule).field("size_endian", &self.size_endian).finish()
	}
}

#[derive(Debug, Clone)]
pub struct Registry {
	schemas: HashMap<FourCc, Schema>,
	fallback: Schema,
}

impl Registry {
	pub fn empty() -> Self {
		Self { schemas: HashMap::new(), fallback: Schema::leaf(decode_raw) }
	}

	pub fn standard() -> Self {
		let mut registry = Self::empty();
		let form = Schema::new(PayloadRule::FormType, Endian::Little, decode_form);
		registry.register(FourCc::RIFF, form);
		registry.register(FourCc::LIST, form);
		registry.register(FourCc::FMT, Schema::leaf(decode_format));
		registry.register(FourCc::DATA, Schema::leaf(decode_data));
		registry.register(FourCc::FACT, Schema::leaf(decode_fact));
		registry.register(FourCc::MTHD, Schema::new(PayloadRule::Declared, Endian::Big, decode_midi_header));
		registry.register(FourCc::MTRK, Schema::new(PayloadRule::Declared, Endian::Big, decode_midi_track));
		registry
	}

	pub fn register(&mut self, tag: FourCc, schema: Schema) -> Option<Schema> {
		self.schemas.insert(tag, schema)
	}

	pub fn is_registered(&self, tag: FourCc) -> bool {
		self.schemas.contains_key(&tag)
	}

	pub fn lookup(&self, tag: FourCc) -> &Schema {
		self.schemas.get(&tag).unwrap_or(&self.fallback)
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::standard()
	}
}

fn decode_form(header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	let form_type = Field::<FourCc>::le(0).get(&payload)?;
	Ok(Chunk::Form(FormChunk::new(header.id, header.size, form_type)))
}

fn decode_format(_header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	FormatChunk::from_payload(payload).map(Chunk::Format)
}

fn decode_data(_header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	DataChunk::from_payload(payload).map(Chunk::Data)
}

fn decode_fact(_header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	FactChunk::from_payload(payload).map(Chunk::Fact)
}

fn decode_midi_header(_header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	MidiHeaderChunk::from_payload(payload).map(Chunk::MidiHeader)
}

fn decode_midi_track(_header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	MidiTrackChunk::from_payload(payload).map(Chunk::MidiTrack)
}

pub fn decode_raw(header: ChunkHeader, payload: Vec<u8>) -> Result<Chunk> {
	RawChunk::new(header.id, payload).map(Chunk::Raw)
}
