#![allow(dead_code)]

pub fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + payload.len());
	out.extend_from_slice(tag);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}

pub fn midi_chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + payload.len());
	out.extend_from_slice(tag);
	out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
	out.extend_from_slice(payload);
	out
}

pub fn fmt_payload(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
	let block_align = channels * (bits_per_sample / 8);
	let byte_rate = sample_rate * block_align as u32;

	let mut out = Vec::with_capacity(16);
	out.extend_from_slice(&1u16.to_le_bytes());
	out.extend_from_slice(&channels.to_le_bytes());
	out.extend_from_slice(&sample_rate.to_le_bytes());
	out.extend_from_slice(&byte_rate.to_le_bytes());
	out.extend_from_slice(&block_align.to_le_bytes());
	out.extend_from_slice(&bits_per_sample.to_le_bytes());
	out
}

/// A canonical 44-byte-header WAVE file around `data`.
pub fn create_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, data: &[u8]) -> Vec<u8> {
	let fmt = chunk(b"fmt ", &fmt_payload(channels, sample_rate, bits_per_sample));
	let data = chunk(b"data", data);

	let mut wav = Vec::new();
	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&((4 + fmt.len() + data.len()) as u32).to_le_bytes());
	wav.extend_from_slice(b"WAVE");
	wav.extend_from_slice(&fmt);
	wav.extend_from_slice(&data);
	wav
}

pub fn generate_sine_wave(samples: usize, frequency: f32, sample_rate: u32) -> Vec<f32> {
	(0..samples)
		.map(|i| {
			let t = i as f32 / sample_rate as f32;
			(2.0 * std::f32::consts::PI * frequency * t).sin() * 0.5
		})
		.collect()
}
