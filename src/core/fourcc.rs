use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
	pub const RIFF: FourCc = FourCc(*b"RIFF");
	pub const LIST: FourCc = FourCc(*b"LIST");
	pub const WAVE: FourCc = FourCc(*b"WAVE");
	pub const FMT: FourCc = FourCc(*b"fmt ");
	pub const DATA: FourCc = FourCc(*b"data");
	pub const FACT: FourCc = FourCc(*b"fact");
	pub const MTHD: FourCc = FourCc(*b"MThd");
	pub const MTRK: FourCc = FourCc(*b"MTrk");

	#[inline]
	pub const fn new(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}

	#[inline]
	pub const fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	pub fn is_container(&self) -> bool {
		*self == Self::RIFF || *self == Self::LIST
	}
}

impl From<[u8; 4]> for FourCc {
	fn from(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}
}

impl From<&[u8; 4]> for FourCc {
	fn from(bytes: &[u8; 4]) -> Self {
		Self(*bytes)
	}
}

impl fmt::Display for FourCc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &b in &self.0 {
			if b.is_ascii_graphic() || b == b' ' {
				write!(f, "{}", b as char)?;
			} else {
				write!(f, "\\x{:02x}", b)?;
			}
		}
		Ok(())
	}
}

impl fmt::Debug for FourCc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FourCc(\"{}\")", self)
	}
}
