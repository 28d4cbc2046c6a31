mod common;

use riffkit::cli::{Pipeline, TonePipeline};
use riffkit::container::wav::{EncodeOptions, WaveFile};
use riffkit::io::StdReadAdapter;
use riffkit::show::{Show, ShowOptions, analyze_stream, build_table, bytes_to_hex};

#[test]
fn test_tone_pipeline_writes_wave_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tone.wav");
	let path_str = path.to_string_lossy().to_string();

	let opts = EncodeOptions { bit_depth: 16, extensible: false, fact: true };
	let tone = TonePipeline::new(440.0, 2, 8000, 0.5, opts, path_str.clone());
	assert_eq!(tone.frame_count().unwrap(), 4000);
	tone.run().unwrap();

	let bytes = std::fs::read(&path).unwrap();
	assert_eq!(bytes.len(), 12 + (8 + 16) + (8 + 4) + (8 + 4000 * 4));

	let file = WaveFile::read(StdReadAdapter::new(std::fs::File::open(&path).unwrap())).unwrap();
	assert_eq!(file.frame_count().unwrap(), 4000);
	assert_eq!(file.fact.unwrap().sample_count().unwrap(), 4000);
}

#[test]
fn test_tone_rejects_negative_duration() {
	let tone = TonePipeline::new(440.0, 1, 8000, -1.0, EncodeOptions::default(), "unused.wav".into());
	assert!(tone.frame_count().is_err());
}

#[test]
fn test_rewrite_pipeline_normalizes_sizes() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("in.wav");
	let output = dir.path().join("out.wav");

	let mut wav = common::create_wav(1, 8000, 16, &[0u8; 10]);
	wav[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
	std::fs::write(&input, &wav).unwrap();

	let pipeline = Pipeline::new(
		input.to_string_lossy().to_string(),
		Some(output.to_string_lossy().to_string()),
	);
	pipeline.run().unwrap();

	let rewritten = std::fs::read(&output).unwrap();
	assert_eq!(rewritten, common::create_wav(1, 8000, 16, &[0u8; 10]));
}

#[test]
fn test_rewrite_requires_output() {
	let pipeline = Pipeline::new("missing.wav".to_string(), None);
	assert!(pipeline.run().is_err());
}

#[test]
fn test_show_lists_chunks() {
	let mut wav = common::create_wav(2, 44100, 16, &[0u8; 16]);
	wav.extend(common::chunk(b"junk", &[0xab; 20]));
	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&100u32.to_le_bytes());

	let info = analyze_stream(wav.as_slice(), "mem.wav", &ShowOptions { hex_limit: 4 });
	let tags: Vec<&str> = info.chunks.iter().map(|c| c.tag.as_str()).collect();
	assert_eq!(tags, vec!["RIFF", "fmt ", "data", "junk"]);
	assert_eq!(info.chunks[1].offset, 12);
	assert_eq!(info.chunks[2].summary, "frames=4 duration=0.000s");
	assert_eq!(info.chunks[3].summary, "ab ab ab ab ..");
	assert!(info.truncation.is_some());
	assert_eq!(info.end_offset as usize, wav.len() - 8);

	let rendered = build_table(&info).to_string();
	assert!(rendered.contains("junk"));
	assert!(rendered.contains("Pcm ch=2 rate=44100 bits=16 align=4 bps=176400"));
}

#[test]
fn test_show_runs_over_glob() {
	let dir = tempfile::tempdir().unwrap();
	for name in ["a.wav", "b.wav"] {
		std::fs::write(dir.path().join(name), common::create_wav(1, 8000, 8, &[128u8; 2])).unwrap();
	}

	let pattern = format!("{}/*.wav", dir.path().to_string_lossy());
	let show = Show::new(pattern, ShowOptions::default());
	show.run().unwrap();

	let info = show.analyze(&dir.path().join("a.wav").to_string_lossy()).unwrap();
	assert_eq!(info.chunks.len(), 3);
	assert!(info.truncation.is_none());
}

#[test]
fn test_hex_preview() {
	assert_eq!(bytes_to_hex(&[1, 2, 255], 8), "01 02 ff");
	assert_eq!(bytes_to_hex(&[1, 2, 255], 2), "01 02 ..");
	assert_eq!(bytes_to_hex(&[], 2), "");
}
