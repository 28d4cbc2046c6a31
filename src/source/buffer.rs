use super::SampleSource;

#[derive(Debug, Clone)]
pub struct InterleavedSamples {
	samples: Vec<f32>,
	channels: u16,
	sample_rate: u32,
	cursor: usize,
}

impl InterleavedSamples {
	pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
		Self { samples, channels, sample_rate, cursor: 0 }
	}

	pub fn remaining_frames(&self) -> usize {
		match self.channels as usize {
			0 => 0,
			n => (self.samples.len() - self.cursor) / n,
		}
	}
}

impl SampleSource for InterleavedSamples {
	fn channels(&self) -> u16 {
		self.channels
	}

	fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	fn next_frame(&mut self, frame: &mut [f32]) -> bool {
		if self.remaining_frames() == 0 {
			return false;
		}
		let n = self.channels as usize;
		// A short frame takes the leading channels; the whole frame is still consumed.
		for (dst, src) in frame.iter_mut().zip(&self.samples[self.cursor..self.cursor + n]) {
			*dst = *src;
		}
		self.cursor += n;
		true
	}
}
