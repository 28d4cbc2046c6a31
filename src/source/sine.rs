use super::SampleSource;
use std::f64::consts::TAU;

#[derive(Debug, Clone)]
pub struct SineOscillator {
	frequency: f64,
	amplitude: f32,
	sample_rate: u32,
	channels: u16,
	phase: f64,
}

impl SineOscillator {
	pub fn new(frequency: f64, sample_rate: u32, channels: u16) -> Self {
		Self { frequency, amplitude: 1.0, sample_rate, channels, phase: 0.0 }
	}

	pub fn with_amplitude(mut self, amplitude: f32) -> Self {
		self.amplitude = amplitude.clamp(0.0, 1.0);
		self
	}
}

impl SampleSource for SineOscillator {
	fn channels(&self) -> u16 {
		self.channels
	}

	fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	fn next_frame(&mut self, frame: &mut [f32]) -> bool {
		let value = (self.phase * TAU).sin() as f32 * self.amplitude;
		frame.fill(value);

		if self.sample_rate > 0 {
			self.phase = (self.phase + self.frequency / self.sample_rate as f64).fract();
		}
		true
	}
}
