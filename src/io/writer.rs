use crate::core::{ChunkHeader, Endian, FourCc};
use crate::error::{Error, Result};

pub trait MediaWrite {
	fn write(&mut self, buf: &[u8]) -> Result<usize>;

	fn flush(&mut self) -> Result<()>;
}

pub trait WritePrimitives: MediaWrite {
	fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
		while !buf.is_empty() {
			match self.write(buf) {
				Ok(0) => {
					return Err(Error::Io(std::io::Error::new(
						std::io::ErrorKind::WriteZero,
						"failed to write whole buffer",
					)));
				}
				Ok(n) => buf = &buf[n..],
				Err(e) if e.is_interrupted() => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(())
	}

	#[inline]
	fn write_fourcc(&mut self, tag: FourCc) -> Result<()> {
		self.write_all(tag.as_bytes())
	}

	#[inline]
	fn write_u32(&mut self, value: u32, endian: Endian) -> Result<()> {
		match endian {
			Endian::Little => self.write_all(&value.to_le_bytes()),
			Endian::Big => self.write_all(&value.to_be_bytes()),
		}
	}

	fn write_chunk_header(&mut self, header: ChunkHeader, endian: Endian) -> Result<()> {
		self.write_fourcc(header.id)?;
		self.write_u32(header.size, endian)
	}
}

impl<T: MediaWrite> WritePrimitives for T {}

pub struct StdWriteAdapter<W> {
	inner: W,
}

impl<W> StdWriteAdapter<W> {
	#[inline]
	pub const fn new(inner: W) -> Self {
		Self { inner }
	}

	#[inline]
	pub fn into_inner(self) -> W {
		self.inner
	}

	#[inline]
	pub const fn get_ref(&self) -> &W {
		&self.inner
	}
}

impl<W: std::io::Write> MediaWrite for StdWriteAdapter<W> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> Result<usize> {
		std::io::Write::write(&mut self.inner, buf).map_err(Error::from)
	}

	#[inline]
	fn flush(&mut self) -> Result<()> {
		std::io::Write::flush(&mut self.inner).map_err(Error::from)
	}
}

impl MediaWrite for Vec<u8> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> Result<usize> {
		self.extend_from_slice(buf);
		Ok(buf.len())
	}

	#[inline]
	fn flush(&mut self) -> Result<()> {
		Ok(())
	}
}

impl<W: MediaWrite + ?Sized> MediaWrite for &mut W {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> Result<usize> {
		(**self).write(buf)
	}

	#[inline]
	fn flush(&mut self) -> Result<()> {
		(**self).flush()
	}
}
