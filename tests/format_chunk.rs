mod common;

use riffkit::Error;
use riffkit::container::wav::{DataChunk, FactChunk, FormatChunk, FormatTag, WavFormat};
use riffkit::container::MidiHeaderChunk;
use riffkit::core::{ChunkBody, Field, FourCc, Guid};

#[test]
fn test_field_endianness() {
	let mut buf = [0u8; 8];
	Field::<u16>::le(0).set(&mut buf, 0x1234).unwrap();
	Field::<u16>::be(2).set(&mut buf, 0x1234).unwrap();
	Field::<u32>::le(4).set(&mut buf, 0xdeadbeef).unwrap();

	assert_eq!(buf, [0x34, 0x12, 0x12, 0x34, 0xef, 0xbe, 0xad, 0xde]);
	assert_eq!(Field::<u16>::be(0).get(&buf).unwrap(), 0x3412);
	assert_eq!(Field::<u64>::le(0).get(&buf).unwrap(), 0xdeadbeef_34121234);
	assert_eq!(Field::<FourCc>::le(0).get(b"WAVEfmt ").unwrap(), FourCc::WAVE);
}

#[test]
fn test_field_past_buffer_is_truncated() {
	let mut buf = [0u8; 5];
	let field = Field::<u32>::le(2);

	assert!(matches!(field.get(&buf), Err(Error::TruncatedField { offset: 2, width: 4, len: 5 })));
	assert!(field.set(&mut buf, 1).is_err());
	assert_eq!(buf, [0u8; 5]);
}

#[test]
fn test_pcm_fields_and_layout() {
	let fmt = FormatChunk::pcm(1, 8000, 16).unwrap();

	assert_eq!(fmt.size(), 16);
	assert_eq!(fmt.format_tag().unwrap(), FormatTag::Pcm);
	assert_eq!(fmt.channels().unwrap(), 1);
	assert_eq!(fmt.sample_rate().unwrap(), 8000);
	assert_eq!(fmt.bit_depth().unwrap(), 16);
	assert_eq!(fmt.block_align().unwrap(), 2);
	assert_eq!(fmt.avg_bytes_per_sec().unwrap(), 16000);
	assert!(!fmt.is_extensible());
	assert_eq!(fmt.payload(), common::fmt_payload(1, 8000, 16).as_slice());
}

#[test]
fn test_derived_fields_any_assignment_order() {
	let orders: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

	for order in orders {
		let mut fmt = FormatChunk::pcm(1, 8000, 8).unwrap();
		for step in order {
			match step {
				0 => fmt.set_channels(6).unwrap(),
				1 => fmt.set_bit_depth(24).unwrap(),
				_ => fmt.set_sample_rate(96000).unwrap(),
			}
		}

		assert_eq!(fmt.block_align().unwrap(), 6 * 3, "order {:?}", order);
		assert_eq!(fmt.avg_bytes_per_sec().unwrap(), 96000 * 18, "order {:?}", order);
	}
}

#[test]
fn test_derived_field_overflow_leaves_chunk_untouched() {
	let mut fmt = FormatChunk::pcm(2, 44100, 16).unwrap();
	let before = fmt.clone();

	assert!(fmt.set_sample_rate(u32::MAX).is_err());
	assert_eq!(fmt, before);
}

#[test]
fn test_extensible_layout() {
	let fmt = FormatChunk::extensible(2, 48000, 24).unwrap();

	assert_eq!(fmt.size(), 40);
	assert!(fmt.is_extensible());
	assert_eq!(fmt.format_tag().unwrap(), FormatTag::Extensible);
	assert_eq!(fmt.block_align().unwrap(), 6);

	let ext = fmt.extension().unwrap().unwrap();
	assert_eq!(ext.valid_bits, 24);
	assert_eq!(ext.channel_mask, 0x3);
	assert_eq!(ext.sub_format, Guid::PCM);
	assert_eq!(&fmt.payload()[16..18], &22u16.to_le_bytes());

	let format = fmt.wav_format().unwrap();
	assert_eq!(format, WavFormat::new(2, 48000, 24));
}

#[test]
fn test_extension_requires_size_22() {
	let mut payload = common::fmt_payload(1, 8000, 16);
	payload.extend_from_slice(&0u16.to_le_bytes());
	let mut fmt = FormatChunk::from_payload(payload).unwrap();

	assert!(!fmt.is_extensible());
	assert_eq!(fmt.extension().unwrap(), None);
	assert!(fmt.set_channel_mask(0x4).is_err());
	assert_eq!(fmt.size(), 18);
}

#[test]
fn test_extension_setters() {
	let mut fmt = FormatChunk::extensible(1, 44100, 32).unwrap();
	fmt.set_valid_bits(20).unwrap();
	fmt.set_channel_mask(0x4).unwrap();
	fmt.set_sub_format(Guid::IEEE_FLOAT).unwrap();

	let ext = fmt.extension().unwrap().unwrap();
	assert_eq!(ext.valid_bits, 20);
	assert_eq!(ext.channel_mask, 0x4);
	assert!(matches!(fmt.wav_format(), Err(Error::UnsupportedFormat(3))));
}

#[test]
fn test_malformed_format_only_fails_on_interpretation() {
	let mut payload = common::fmt_payload(2, 44100, 16);
	payload[0..2].copy_from_slice(&0x0055u16.to_le_bytes());
	let fmt = FormatChunk::from_payload(payload.clone()).unwrap();

	assert_eq!(fmt.format_tag().unwrap(), FormatTag::Unknown(0x55));
	assert_eq!(fmt.channels().unwrap(), 2);
	assert!(matches!(fmt.wav_format(), Err(Error::UnsupportedFormat(0x55))));
	assert_eq!(fmt.payload(), payload.as_slice());
}

#[test]
fn test_short_format_payload() {
	let fmt = FormatChunk::from_payload(vec![1, 0, 2, 0, 0x40]).unwrap();

	assert_eq!(fmt.channels().unwrap(), 2);
	assert!(matches!(fmt.sample_rate(), Err(Error::TruncatedField { offset: 4, .. })));
	assert!(fmt.clone().set_channels(1).is_err());
	assert_eq!(fmt.size(), 5);
}

#[test]
fn test_sample_buffer_sizing() {
	let format = WavFormat::new(2, 44100, 24);
	let mut data = DataChunk::new();

	data.set_sample_buffer(&format, 10).unwrap();
	assert_eq!(data.size(), 60);
	assert_eq!(data.frame_count(&format), 10);
	assert_eq!(data.frames(&format).count(), 10);

	data.set_sample_buffer(&format, 3).unwrap();
	assert_eq!(data.size(), 18);
}

#[test]
fn test_inconsistent_sample_buffer_fails_fast() {
	let format = WavFormat::new(2, 44100, 16);
	let mut data = DataChunk::new();

	let err = data.set_samples(&format, vec![0u8; 6]).unwrap_err();
	assert!(matches!(err, Error::SampleBufferMismatch { len: 6, block_align: 4 }));
	assert_eq!(data.size(), 0);

	let zero = WavFormat::new(0, 44100, 16);
	assert!(data.set_sample_buffer(&zero, 4).is_err());
}

#[test]
fn test_fact_chunk() {
	let mut fact = FactChunk::new(1234);
	assert_eq!(fact.sample_count().unwrap(), 1234);
	fact.set_sample_count(99).unwrap();
	assert_eq!(fact.payload(), &99u32.to_le_bytes());

	let short = FactChunk::from_payload(vec![1, 2]).unwrap();
	assert!(short.sample_count().is_err());
}

#[test]
fn test_midi_header_fields() {
	let mut hdr = MidiHeaderChunk::new(1, 3, 96).unwrap();
	assert_eq!(hdr.payload(), &[0x00, 0x01, 0x00, 0x03, 0x00, 0x60]);

	hdr.set_track_count(0x0102).unwrap();
	hdr.set_division(0xe728).unwrap();
	hdr.set_format(2).unwrap();
	assert_eq!(hdr.payload(), &[0x00, 0x02, 0x01, 0x02, 0xe7, 0x28]);
}
