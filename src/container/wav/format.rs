//! The `fmt ` chunk.
//!
//! Offsets below are relative to the payload, so `CHANNELS` at 2 sits at byte 10 of the chunk
//! once the 8-byte header is counted. Channels, sample rate and bit depth are the independent
//! fields; block align and average byte rate are rewritten whenever one of them changes.

use super::WavFormat;
use crate::core::chunk::checked_size;
use crate::core::{ChunkBody, Field, FourCc, Guid};
use crate::error::{Error, Result};

pub const BASE_LEN: usize = 16;
pub const EXTENSIBLE_LEN: usize = 40;
pub const EXTENSION_SIZE: u16 = 22;

const FORMAT: Field<u16> = Field::le(0);
const CHANNELS: Field<u16> = Field::le(2);
const SAMPLE_RATE: Field<u32> = Field::le(4);
const AVG_BYTES_PER_SEC: Field<u32> = Field::le(8);
const BLOCK_ALIGN: Field<u16> = Field::le(12);
const BIT_DEPTH: Field<u16> = Field::le(14);
const EXT_SIZE: Field<u16> = Field::le(16);
const VALID_BITS: Field<u16> = Field::le(18);
const CHANNEL_MASK: Field<u32> = Field::le(20);
const SUB_FORMAT: Field<Guid> = Field::le(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
	Pcm,
	IeeeFloat,
	ALaw,
	MuLaw,
	Extensible,
	Unknown(u16),
}

impl From<u16> for FormatTag {
	fn from(val: u16) -> Self {
		match val {
			0x0001 => FormatTag::Pcm,
			0x0003 => FormatTag::IeeeFloat,
			0x0006 => FormatTag::ALaw,
			0x0007 => FormatTag::MuLaw,
			0xFFFE => FormatTag::Extensible,
			other => FormatTag::Unknown(other),
		}
	}
}

impl From<FormatTag> for u16 {
	fn from(tag: FormatTag) -> Self {
		match tag {
			FormatTag::Pcm => 0x0001,
			FormatTag::IeeeFloat => 0x0003,
			FormatTag::ALaw => 0x0006,
			FormatTag::MuLaw => 0x0007,
			FormatTag::Extensible => 0xFFFE,
			FormatTag::Unknown(val) => val,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatExtension {
	pub valid_bits: u16,
	pub channel_mask: u32,
	pub sub_format: Guid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatChunk {
	payload: Vec<u8>,
}

impl FormatChunk {
	pub fn from_payload(payload: Vec<u8>) -> Result<Self> {
		checked_size(payload.len())?;
		Ok(Self { payload })
	}

	pub fn pcm(channels: u16, sample_rate: u32, bit_depth: u16) -> Result<Self> {
		let mut chunk = Self { payload: vec![0u8; BASE_LEN] };
		FORMAT.set(&mut chunk.payload, FormatTag::Pcm.into())?;
		chunk.apply(channels, sample_rate, bit_depth)?;
		Ok(chunk)
	}

	pub fn extensible(channels: u16, sample_rate: u32, bit_depth: u16) -> Result<Self> {
		let mut chunk = Self { payload: vec![0u8; EXTENSIBLE_LEN] };
		FORMAT.set(&mut chunk.payload, FormatTag::Extensible.into())?;
		chunk.apply(channels, sample_rate, bit_depth)?;
		EXT_SIZE.set(&mut chunk.payload, EXTENSION_SIZE)?;
		VALID_BITS.set(&mut chunk.payload, bit_depth)?;
		CHANNEL_MASK.set(&mut chunk.payload, default_channel_mask(channels))?;
		SUB_FORMAT.set(&mut chunk.payload, Guid::PCM)?;
		Ok(chunk)
	}

	pub fn format_code(&self) -> Result<u16> {
		FORMAT.get(&self.payload)
	}

	pub fn format_tag(&self) -> Result<FormatTag> {
		self.format_code().map(FormatTag::from)
	}

	pub fn channels(&self) -> Result<u16> {
		CHANNELS.get(&self.payload)
	}

	pub fn sample_rate(&self) -> Result<u32> {
		SAMPLE_RATE.get(&self.payload)
	}

	pub fn bit_depth(&self) -> Result<u16> {
		BIT_DEPTH.get(&self.payload)
	}

	pub fn block_align(&self) -> Result<u16> {
		BLOCK_ALIGN.get(&self.payload)
	}

	pub fn avg_bytes_per_sec(&self) -> Result<u32> {
		AVG_BYTES_PER_SEC.get(&self.payload)
	}

	pub fn set_channels(&mut self, channels: u16) -> Result<()> {
		let sample_rate = self.sample_rate()?;
		let bit_depth = self.bit_depth()?;
		self.apply(channels, sample_rate, bit_depth)
	}

	pub fn set_sample_rate(&mut self, sample_rate: u32) -> Result<()> {
		let channels = self.channels()?;
		let bit_depth = self.bit_depth()?;
		self.apply(channels, sample_rate, bit_depth)
	}

	pub fn set_bit_depth(&mut self, bit_depth: u16) -> Result<()> {
		let channels = self.channels()?;
		let sample_rate = self.sample_rate()?;
		self.apply(channels, sample_rate, bit_depth)
	}

	fn apply(&mut self, channels: u16, sample_rate: u32, bit_depth: u16) -> Result<()> {
		if !BIT_DEPTH.fits(&self.payload) {
			return Err(Error::TruncatedField { offset: 0, width: BASE_LEN, len: self.payload.len() });
		}

		let block_align = channels as u32 * (bit_depth / 8) as u32;
		let block_align = u16::try_from(block_align)
			.map_err(|_| Error::invalid_data(format!("block align {} overflows u16", block_align)))?;
		let byte_rate = sample_rate as u64 * block_align as u64;
		let byte_rate = u32::try_from(byte_rate)
			.map_err(|_| Error::invalid_data(format!("byte rate {} overflows u32", byte_rate)))?;

		CHANNELS.set(&mut self.payload, channels)?;
		SAMPLE_RATE.set(&mut self.payload, sample_rate)?;
		BIT_DEPTH.set(&mut self.payload, bit_depth)?;
		BLOCK_ALIGN.set(&mut self.payload, block_align)?;
		AVG_BYTES_PER_SEC.set(&mut self.payload, byte_rate)?;
		Ok(())
	}

	pub fn is_extensible(&self) -> bool {
		self.payload.len() > BASE_LEN && EXT_SIZE.get(&self.payload).is_ok_and(|n| n == EXTENSION_SIZE)
	}

	pub fn extension(&self) -> Result<Option<FormatExtension>> {
		if !self.is_extensible() {
			return Ok(None);
		}
		Ok(Some(FormatExtension {
			valid_bits: VALID_BITS.get(&self.payload)?,
			channel_mask: CHANNEL_MASK.get(&self.payload)?,
			sub_format: SUB_FORMAT.get(&self.payload)?,
		}))
	}

	pub fn set_valid_bits(&mut self, valid_bits: u16) -> Result<()> {
		self.require_extension()?;
		VALID_BITS.set(&mut self.payload, valid_bits)
	}

	pub fn set_channel_mask(&mut self, mask: u32) -> Result<()> {
		self.require_extension()?;
		CHANNEL_MASK.set(&mut self.payload, mask)
	}

	pub fn set_sub_format(&mut self, sub_format: Guid) -> Result<()> {
		self.require_extension()?;
		SUB_FORMAT.set(&mut self.payload, sub_format)
	}

	fn require_extension(&self) -> Result<()> {
		if self.is_extensible() {
			Ok(())
		} else {
			Err(Error::invalid_data("fmt chunk has no extensible layout"))
		}
	}

	pub fn wav_format(&self) -> Result<WavFormat> {
		match self.format_tag()? {
			FormatTag::Pcm => {}
			FormatTag::Extensible => match self.extension()? {
				Some(ext) if ext.sub_format == Guid::PCM => {}
				Some(ext) => return Err(Error::UnsupportedFormat(ext.sub_format.format_code())),
				None => return Err(Error::invalid_data("extensible format without extension")),
			},
			other => return Err(Error::UnsupportedFormat(other.into())),
		}

		let format = WavFormat::new(self.channels()?, self.sample_rate()?, self.bit_depth()?);
		if !format.is_supported() {
			return Err(Error::invalid_data(format!(
				"unsupported pcm layout: {} channels, {} Hz, {} bits",
				format.channels, format.sample_rate, format.bit_depth
			)));
		}
		Ok(format)
	}
}

impl ChunkBody for FormatChunk {
	fn id(&self) -> FourCc {
		FourCc::FMT
	}

	fn payload(&self) -> &[u8] {
		&self.payload
	}
}

fn default_channel_mask(channels: u16) -> u32 {
	match channels {
		1 => 0x4,
		2..=18 => (1u32 << channels) - 1,
		_ => 0,
	}
}
