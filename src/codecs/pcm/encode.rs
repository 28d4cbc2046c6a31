use super::{MAX_8, MAX_16, MAX_24, MAX_32, check_bit_depth};
use crate::container::WavFormat;
use crate::container::wav::DataChunk;
use crate::error::{Error, Result};
use crate::source::SampleSource;

#[derive(Debug, Clone, Copy)]
pub struct PcmEncoder {
	format: WavFormat,
}

impl PcmEncoder {
	pub fn new(format: WavFormat) -> Result<Self> {
		check_bit_depth(format.bit_depth)?;
		Ok(Self { format })
	}

	pub fn format(&self) -> WavFormat {
		self.format
	}

	pub(crate) fn encode_sample(&self, sample: f32, out: &mut [u8]) {
		let s = if sample.is_nan() { 0.0 } else { sample.clamp(-1.0, 1.0) as f64 };
		match self.format.bit_depth {
			8 => out[0] = ((s * MAX_8).round() as i16 + 128) as u8,
			16 => out.copy_from_slice(&((s * MAX_16).round() as i16).to_le_bytes()),
			24 => out.copy_from_slice(&((s * MAX_24).round() as i32).to_le_bytes()[..3]),
			_ => out.copy_from_slice(&((s * MAX_32).round() as i32).to_le_bytes()),
		}
	}

	pub fn encode<S: SampleSource + ?Sized>(
		&self,
		source: &mut S,
		data: &mut DataChunk,
		frame_count: usize,
	) -> Result<usize> {
		if source.channels() != self.format.channels {
			return Err(Error::invalid_data(format!(
				"source has {} channels, format expects {}",
				source.channels(),
				self.format.channels
			)));
		}

		data.set_sample_buffer(&self.format, frame_count)?;

		let width = self.format.bytes_per_sample();
		let block_align = self.format.bytes_per_frame();
		let mut frame = vec![0f32; self.format.channels as usize];
		let mut written = 0;

		let bytes = data.samples_mut();
		while written < frame_count && source.next_frame(&mut frame) {
			let dst = &mut bytes[written * block_align..(written + 1) * block_align];
			for (sample, out) in frame.iter().zip(dst.chunks_exact_mut(width)) {
				self.encode_sample(*sample, out);
			}
			written += 1;
		}

		if written < frame_count {
			tracing::debug!(requested = frame_count, written, "sample source ran dry");
			data.set_sample_buffer(&self.format, written)?;
		}
		Ok(written)
	}
}
