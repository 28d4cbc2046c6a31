use crate::error::{Error, Result};

pub const READ_STEP: usize = 64 * 1024;

pub trait MediaRead {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

pub trait ReadPrimitives: MediaRead {
	fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.is_interrupted() => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(filled)
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
		let got = self.read_up_to(buf)?;
		if got < buf.len() {
			return Err(Error::unexpected_eof(buf.len(), got));
		}
		Ok(())
	}

	fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
		let mut buf = Vec::with_capacity(len.min(READ_STEP));
		while buf.len() < len {
			let start = buf.len();
			let step = (len - start).min(READ_STEP);
			buf.resize(start + step, 0);
			let got = self.read_up_to(&mut buf[start..])?;
			if got < step {
				return Err(Error::unexpected_eof(len, start + got));
			}
		}
		Ok(buf)
	}
}

impl<T: MediaRead> ReadPrimitives for T {}

pub struct StdReadAdapter<R> {
	inner: R,
}

impl<R> StdReadAdapter<R> {
	#[inline]
	pub const fn new(inner: R) -> Self {
		Self { inner }
	}

	#[inline]
	pub fn into_inner(self) -> R {
		self.inner
	}

	#[inline]
	pub const fn get_ref(&self) -> &R {
		&self.inner
	}
}

impl<R: std::io::Read> MediaRead for StdReadAdapter<R> {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		std::io::Read::read(&mut self.inner, buf).map_err(Error::from)
	}
}

impl MediaRead for &[u8] {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		let amt = std::cmp::min(self.len(), buf.len());
		let (a, b) = self.split_at(amt);
		buf[..amt].copy_from_slice(a);
		*self = b;
		Ok(amt)
	}
}

impl<R: MediaRead + ?Sized> MediaRead for &mut R {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		(**self).read(buf)
	}
}
