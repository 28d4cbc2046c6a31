use super::{DataChunk, FactChunk, FormatChunk, WavFormat};
use crate::codecs::PcmEncoder;
use crate::container::riff::{Chunk, ChunkReader, FORM_TYPE_LEN, Form, FormChunk, RiffWriter};
use crate::core::chunk::checked_size;
use crate::core::{ChunkBody, Endian, FourCc};
use crate::error::{Error, Result};
use crate::io::{MediaRead, MediaWrite};
use crate::source::SampleSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
	pub bit_depth: u16,
	pub extensible: bool,
	pub fact: bool,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { bit_depth: 16, extensible: false, fact: false }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFile {
	pub format: FormatChunk,
	pub fact: Option<FactChunk>,
	pub data: DataChunk,
	pub extra: Vec<Chunk>,
}

impl WaveFile {
	pub fn new(format: FormatChunk, data: DataChunk) -> Self {
		Self { format, fact: None, data, extra: Vec::new() }
	}

	pub fn encode<S: SampleSource + ?Sized>(
		source: &mut S,
		frame_count: usize,
		opts: EncodeOptions,
	) -> Result<Self> {
		let (channels, sample_rate) = (source.channels(), source.sample_rate());
		let format = if opts.extensible {
			FormatChunk::extensible(channels, sample_rate, opts.bit_depth)?
		} else {
			FormatChunk::pcm(channels, sample_rate, opts.bit_depth)?
		};

		let encoder = PcmEncoder::new(format.wav_format()?)?;
		let mut data = DataChunk::new();
		let written = encoder.encode(source, &mut data, frame_count)?;

		let mut file = Self::new(format, data);
		if opts.fact {
			file.fact = Some(FactChunk::new(checked_size(written)?));
		}
		Ok(file)
	}

	pub fn from_chunks<I: IntoIterator<Item = Chunk>>(chunks: I) -> Result<Self> {
		let mut chunks = chunks.into_iter();
		match chunks.next() {
			Some(Chunk::Form(form)) if form.id == FourCc::RIFF && form.form_type == FourCc::WAVE => {}
			Some(Chunk::Form(form)) if form.id == FourCc::RIFF => {
				return Err(Error::UnexpectedChunk { expected: FourCc::WAVE, found: form.form_type });
			}
			Some(other) => {
				return Err(Error::UnexpectedChunk { expected: FourCc::RIFF, found: other.id() });
			}
			None => return Err(Error::invalid_data("empty chunk stream")),
		}

		let mut format = None;
		let mut fact = None;
		let mut data = None;
		let mut extra = Vec::new();

		for chunk in chunks {
			match chunk {
				Chunk::Format(c) if format.is_none() => format = Some(c),
				Chunk::Fact(c) if fact.is_none() => fact = Some(c),
				Chunk::Data(c) if data.is_none() => {
					if format.is_none() {
						tracing::warn!("data chunk precedes fmt chunk");
					}
					data = Some(c);
				}
				other => extra.push(other),
			}
		}

		let format = format.ok_or_else(|| Error::invalid_data("missing fmt chunk"))?;
		let data = data.ok_or_else(|| Error::invalid_data("missing data chunk"))?;
		Ok(Self { format, fact, data, extra })
	}

	pub fn read<R: MediaRead>(reader: R) -> Result<Self> {
		let mut chunks = ChunkReader::new(reader);
		let file = Self::from_chunks(&mut chunks);
		match (file, chunks.take_fault()) {
			(Ok(file), Some(fault)) => {
				tracing::warn!(error = %fault, "wave stream truncated after data chunk");
				Ok(file)
			}
			(Ok(file), None) => Ok(file),
			(Err(_), Some(fault)) => Err(fault),
			(Err(e), None) => Err(e),
		}
	}

	pub fn wav_format(&self) -> Result<WavFormat> {
		self.format.wav_format()
	}

	pub fn frame_count(&self) -> Result<usize> {
		Ok(self.data.frame_count(&self.wav_format()?))
	}

	pub fn riff_size(&self) -> Result<u32> {
		let mut total = FORM_TYPE_LEN as u64 + self.format.on_disk_len() + self.data.on_disk_len();
		if let Some(fact) = &self.fact {
			total += fact.on_disk_len();
		}
		total += self.extra.iter().map(Chunk::encoded_len).sum::<u64>();
		let total = usize::try_from(total).map_err(|_| Error::SizeOverflow(usize::MAX))?;
		checked_size(total)
	}

	pub fn validate(&self) -> Result<()> {
		self.data.validate(&self.wav_format()?)
	}

	pub fn write<W: MediaWrite>(&self, writer: W) -> Result<W> {
		self.validate()?;
		let size = self.riff_size()?;
		tracing::debug!(size, data = self.data.size(), extra = self.extra.len(), "writing wave file");

		let mut out = RiffWriter::new(writer);
		out.write_form_header(&FormChunk::new(FourCc::RIFF, size, FourCc::WAVE))?;
		out.write_body(&self.format, Endian::Little)?;
		if let Some(fact) = &self.fact {
			out.write_body(fact, Endian::Little)?;
		}
		out.write_body(&self.data, Endian::Little)?;
		for chunk in &self.extra {
			out.write_chunk(chunk)?;
		}
		out.finish()
	}

	pub fn into_form(self) -> Result<Form> {
		self.validate()?;
		let mut form = Form::riff(FourCc::WAVE);
		form.push(self.format);
		if let Some(fact) = self.fact {
			form.push(fact);
		}
		form.push(self.data);
		for chunk in self.extra {
			form.push(chunk);
		}
		Ok(form)
	}
}
