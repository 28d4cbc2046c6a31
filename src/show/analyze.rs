use super::types::{ChunkInfo, ShowOptions, StreamInfo};
use crate::container::WavFormat;
use crate::container::riff::{Chunk, ChunkReader};
use crate::core::ChunkBody;
use crate::io::MediaRead;

pub fn analyze_stream<R: MediaRead>(reader: R, path: &str, opts: &ShowOptions) -> StreamInfo {
	let mut chunks = ChunkReader::new(reader);
	let mut infos = Vec::new();
	let mut format: Option<WavFormat> = None;

	loop {
		let offset = chunks.position();
		let Some(chunk) = chunks.next() else { break };

		if let Chunk::Format(fmt) = &chunk {
			format = fmt.wav_format().ok();
		}

		infos.push(ChunkInfo {
			index: infos.len(),
			offset,
			tag: chunk.id().to_string(),
			size: chunk.size(),
			kind: chunk.kind(),
			summary: summarize(&chunk, format.as_ref(), opts),
		});
	}

	let truncation = chunks.take_fault().map(|e| e.to_string());
	StreamInfo { path: path.to_string(), chunks: infos, end_offset: chunks.position(), truncation }
}

fn summarize(chunk: &Chunk, format: Option<&WavFormat>, opts: &ShowOptions) -> String {
	match chunk {
		Chunk::Form(form) => format!("type={} nested={}", form.form_type, form.nested_len()),
		Chunk::Format(fmt) => {
			let base = match (fmt.format_tag(), fmt.channels(), fmt.sample_rate(), fmt.bit_depth()) {
				(Ok(tag), Ok(ch), Ok(rate), Ok(bits)) => format!(
					"{:?} ch={} rate={} bits={} align={} bps={}",
					tag,
					ch,
					rate,
					bits,
					fmt.block_align().unwrap_or(0),
					fmt.avg_bytes_per_sec().unwrap_or(0)
				),
				_ => "malformed".to_string(),
			};
			match fmt.extension() {
				Ok(Some(ext)) => format!(
					"{} valid={} mask={:#x} sub={}",
					base, ext.valid_bits, ext.channel_mask, ext.sub_format
				),
				_ => base,
			}
		}
		Chunk::Data(data) => match format {
			Some(f) => format!("frames={} duration={:.3}s", data.frame_count(f), duration(data.size(), f)),
			None => format!("{} bytes", data.size()),
		},
		Chunk::Fact(fact) => match fact.sample_count() {
			Ok(n) => format!("samples={}", n),
			Err(_) => "malformed".to_string(),
		},
		Chunk::MidiHeader(hdr) => match (hdr.format(), hdr.track_count(), hdr.division()) {
			(Ok(fmt), Ok(tracks), Ok(div)) => format!("format={} tracks={} division={}", fmt, tracks, div),
			_ => "malformed".to_string(),
		},
		Chunk::MidiTrack(track) => format!("{} event bytes", track.events().len()),
		Chunk::Raw(raw) => bytes_to_hex(raw.payload(), opts.hex_limit),
	}
}

fn duration(size: u32, format: &WavFormat) -> f64 {
	match format.byte_rate() {
		0 => 0.0,
		rate => size as f64 / rate as f64,
	}
}

pub fn bytes_to_hex(bytes: &[u8], limit: usize) -> String {
	let shown = bytes.len().min(limit);
	let mut out: Vec<String> = bytes[..shown].iter().map(|b| format!("{:02x}", b)).collect();
	if bytes.len() > shown {
		out.push("..".to_string());
	}
	out.join(" ")
}
