use crate::core::FourCc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	#[error("field at offset {offset} ({width} bytes) exceeds buffer of {len} bytes")]
	TruncatedField { offset: usize, width: usize, len: usize },

	#[error("stream ended early: needed {needed} bytes, got {got}")]
	TruncatedStream { needed: usize, got: usize },

	#[error("unsupported format code {0:#06x}")]
	UnsupportedFormat(u16),

	#[error("invalid data: {0}")]
	InvalidData(String),

	#[error("sample buffer of {len} bytes is not a multiple of block align {block_align}")]
	SampleBufferMismatch { len: usize, block_align: usize },

	#[error("payload of {0} bytes does not fit a 32-bit chunk size")]
	SizeOverflow(usize),

	#[error("unexpected chunk {found}, expected {expected}")]
	UnexpectedChunk { expected: FourCc, found: FourCc },

	#[error("invalid glob pattern: {0}")]
	InvalidGlob(String),
}

impl Error {
	pub fn invalid_data<S: Into<String>>(msg: S) -> Self {
		Error::InvalidData(msg.into())
	}

	pub fn unexpected_eof(needed: usize, got: usize) -> Self {
		Error::TruncatedStream { needed, got }
	}

	pub fn is_interrupted(&self) -> bool {
		matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::Interrupted)
	}
}
