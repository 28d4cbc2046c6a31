mod buffer;
mod sine;

pub use buffer::InterleavedSamples;
pub use sine::SineOscillator;

pub trait SampleSource {
	fn channels(&self) -> u16;

	fn sample_rate(&self) -> u32;

	fn next_frame(&mut self, frame: &mut [f32]) -> bool;
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
	fn channels(&self) -> u16 {
		(**self).channels()
	}

	fn sample_rate(&self) -> u32 {
		(**self).sample_rate()
	}

	fn next_frame(&mut self, frame: &mut [f32]) -> bool {
		(**self).next_frame(frame)
	}
}
