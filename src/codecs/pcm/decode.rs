use super::{MAX_8, MAX_16, MAX_24, MAX_32, check_bit_depth};
use crate::container::WavFormat;
use crate::container::wav::DataChunk;
use crate::core::ChunkBody;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct PcmDecoder {
	format: WavFormat,
}

impl PcmDecoder {
	pub fn new(format: WavFormat) -> Result<Self> {
		check_bit_depth(format.bit_depth)?;
		Ok(Self { format })
	}

	pub(crate) fn decode_sample(&self, bytes: &[u8]) -> f32 {
		let value = match self.format.bit_depth {
			8 => (bytes[0] as i16 - 128) as f64 / MAX_8,
			16 => i16::from_le_bytes([bytes[0], bytes[1]]) as f64 / MAX_16,
			24 => {
				let raw = i32::from_le_bytes([0, bytes[0], bytes[1], bytes[2]]) >> 8;
				raw as f64 / MAX_24
			}
			_ => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64 / MAX_32,
		};
		value.clamp(-1.0, 1.0) as f32
	}

	pub fn decode(&self, data: &DataChunk) -> Result<Vec<f32>> {
		data.validate(&self.format)?;
		let width = self.format.bytes_per_sample();
		Ok(data.payload().chunks_exact(width).map(|s| self.decode_sample(s)).collect())
	}
}
