use crate::container::midi::{MidiHeaderChunk, MidiTrackChunk};
use crate::container::wav::{DataChunk, FactChunk, FormatChunk};
use crate::core::{ChunkBody, ChunkHeader, Endian, FourCc, HEADER_LEN, RawChunk};

pub const FORM_TYPE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormChunk {
	pub id: FourCc,
	pub size: u32,
	pub form_type: FourCc,
}

impl FormChunk {
	pub fn new(id: FourCc, size: u32, form_type: FourCc) -> Self {
		Self { id, size, form_type }
	}

	pub fn nested_len(&self) -> u32 {
		self.size.saturating_sub(FORM_TYPE_LEN as u32)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
	Form(FormChunk),
	Format(FormatChunk),
	Data(DataChunk),
	Fact(FactChunk),
	MidiHeader(MidiHeaderChunk),
	MidiTrack(MidiTrackChunk),
	Raw(RawChunk),
}

impl Chunk {
	pub fn id(&self) -> FourCc {
		self.header().id
	}

	pub fn size(&self) -> u32 {
		self.header().size
	}

	pub fn header(&self) -> ChunkHeader {
		match self {
			Chunk::Form(form) => ChunkHeader::new(form.id, form.size),
			Chunk::Format(c) => c.header(),
			Chunk::Data(c) => c.header(),
			Chunk::Fact(c) => c.header(),
			Chunk::MidiHeader(c) => c.header(),
			Chunk::MidiTrack(c) => c.header(),
			Chunk::Raw(c) => c.header(),
		}
	}

	pub fn body(&self) -> Option<&dyn ChunkBody> {
		match self {
			Chunk::Form(_) => None,
			Chunk::Format(c) => Some(c),
			Chunk::Data(c) => Some(c),
			Chunk::Fact(c) => Some(c),
			Chunk::MidiHeader(c) => Some(c),
			Chunk::MidiTrack(c) => Some(c),
			Chunk::Raw(c) => Some(c),
		}
	}

	pub fn encoded_len(&self) -> u64 {
		match self {
			Chunk::Form(_) => (HEADER_LEN + FORM_TYPE_LEN) as u64,
			_ => self.header().on_disk_len(),
		}
	}

	pub fn size_endian(&self) -> Endian {
		match self {
			Chunk::MidiHeader(_) | Chunk::MidiTrack(_) => Endian::Big,
			_ => Endian::Little,
		}
	}

	pub fn kind(&self) -> &'static str {
		match self {
			Chunk::Form(_) => "form",
			Chunk::Format(_) => "format",
			Chunk::Data(_) => "data",
			Chunk::Fact(_) => "fact",
			Chunk::MidiHeader(_) => "midi-header",
			Chunk::MidiTrack(_) => "midi-track",
			Chunk::Raw(_) => "raw",
		}
	}
}

impl From<FormChunk> for Chunk {
	fn from(form: FormChunk) -> Self {
		Chunk::Form(form)
	}
}

impl From<FormatChunk> for Chunk {
	fn from(chunk: FormatChunk) -> Self {
		Chunk::Format(chunk)
	}
}

impl From<DataChunk> for Chunk {
	fn from(chunk: DataChunk) -> Self {
		Chunk::Data(chunk)
	}
}

impl From<FactChunk> for Chunk {
	fn from(chunk: FactChunk) -> Self {
		Chunk::Fact(chunk)
	}
}

impl From<MidiHeaderChunk> for Chunk {
	fn from(chunk: MidiHeaderChunk) -> Self {
		Chunk::MidiHeader(chunk)
	}
}

impl From<MidiTrackChunk> for Chunk {
	fn from(chunk: MidiTrackChunk) -> Self {
		Chunk::MidiTrack(chunk)
	}
}

impl From<RawChunk> for Chunk {
	fn from(chunk: RawChunk) -> Self {
		Chunk::Raw(chunk)
	}
}
