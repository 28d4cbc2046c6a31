use super::{FourCc, Guid};
use crate::error::{Error, Result};
use std::marker::PhantomData;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
	Little,
	Big,
}

pub trait FieldValue: Sized + Copy {
	const WIDTH: usize;

	fn decode(bytes: &[u8], endian: Endian) -> Self;

	fn encode(self, bytes: &mut [u8], endian: Endian);
}

macro_rules! int_field_value {
	($($ty:ty),*) => {
		$(
			impl FieldValue for $ty {
				const WIDTH: usize = std::mem::size_of::<$ty>();

				#[inline]
				fn decode(bytes: &[u8], endian: Endian) -> Self {
					let mut raw = [0u8; std::mem::size_of::<$ty>()];
					raw.copy_from_slice(bytes);
					match endian {
						Endian::Little => <$ty>::from_le_bytes(raw),
						Endian::Big => <$ty>::from_be_bytes(raw),
					}
				}

				#[inline]
				fn encode(self, bytes: &mut [u8], endian: Endian) {
					let raw = match endian {
						Endian::Little => self.to_le_bytes(),
						Endian::Big => self.to_be_bytes(),
					};
					bytes.copy_from_slice(&raw);
				}
			}
		)*
	};
}

int_field_value!(u8, u16, u32, u64);

// Byte strings are stored in stream order regardless of endianness.
impl<const N: usize> FieldValue for [u8; N] {
	const WIDTH: usize = N;

	fn decode(bytes: &[u8], _endian: Endian) -> Self {
		let mut raw = [0u8; N];
		raw.copy_from_slice(bytes);
		raw
	}

	fn encode(self, bytes: &mut [u8], _endian: Endian) {
		bytes.copy_from_slice(&self);
	}
}

impl FieldValue for FourCc {
	const WIDTH: usize = 4;

	fn decode(bytes: &[u8], endian: Endian) -> Self {
		FourCc(<[u8; 4]>::decode(bytes, endian))
	}

	fn encode(self, bytes: &mut [u8], endian: Endian) {
		self.0.encode(bytes, endian)
	}
}

impl FieldValue for Guid {
	const WIDTH: usize = 16;

	fn decode(bytes: &[u8], endian: Endian) -> Self {
		Guid(<[u8; 16]>::decode(bytes, endian))
	}

	fn encode(self, bytes: &mut [u8], endian: Endian) {
		self.0.encode(bytes, endian)
	}
}

pub struct Field<T> {
	offset: usize,
	endian: Endian,
	_marker: PhantomData<fn() -> T>,
}

impl<T: FieldValue> Field<T> {
	pub const fn le(offset: usize) -> Self {
		Self { offset, endian: Endian::Little, _marker: PhantomData }
	}

	pub const fn be(offset: usize) -> Self {
		Self { offset, endian: Endian::Big, _marker: PhantomData }
	}

	#[inline]
	pub const fn end(&self) -> usize {
		self.offset + T::WIDTH
	}

	#[inline]
	pub fn fits(&self, buf: &[u8]) -> bool {
		self.end() <= buf.len()
	}

	pub fn get(&self, buf: &[u8]) -> Result<T> {
		let span = self.span(buf.len())?;
		Ok(T::decode(&buf[span], self.endian))
	}

	pub fn set(&self, buf: &mut [u8], value: T) -> Result<()> {
		let span = self.span(buf.len())?;
		value.encode(&mut buf[span], self.endian);
		Ok(())
	}

	fn span(&self, len: usize) -> Result<Range<usize>> {
		if self.end() > len {
			return Err(Error::TruncatedField { offset: self.offset, width: T::WIDTH, len });
		}
		Ok(self.offset..self.end())
	}
}
