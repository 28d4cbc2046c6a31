use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guid(pub [u8; 16]);

impl Guid {
	/// KSDATAFORMAT_SUBTYPE_PCM, 00000001-0000-0010-8000-00aa00389b71.
	pub const PCM: Guid = Guid([
		0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
	]);

	/// KSDATAFORMAT_SUBTYPE_IEEE_FLOAT, 00000003-0000-0010-8000-00aa00389b71.
	pub const IEEE_FLOAT: Guid = Guid([
		0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
	]);

	pub fn format_code(&self) -> u16 {
		u16::from_le_bytes([self.0[0], self.0[1]])
	}
}

impl fmt::Display for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let b = &self.0;
		let data1 = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
		let data2 = u16::from_le_bytes([b[4], b[5]]);
		let data3 = u16::from_le_bytes([b[6], b[7]]);
		write!(f, "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-", data1, data2, data3, b[8], b[9])?;
		for byte in &b[10..] {
			write!(f, "{:02x}", byte)?;
		}
		Ok(())
	}
}

impl fmt::Debug for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Guid({})", self)
	}
}
