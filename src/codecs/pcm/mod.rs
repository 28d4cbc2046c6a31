mod decode;
mod encode;

pub use decode::PcmDecoder;
pub use encode::PcmEncoder;

use crate::error::{Error, Result};

const MAX_8: f64 = 127.0;
const MAX_16: f64 = 32767.0;
const MAX_24: f64 = 8388607.0;
const MAX_32: f64 = 2147483647.0;

fn check_bit_depth(bit_depth: u16) -> Result<()> {
	match bit_depth {
		8 | 16 | 24 | 32 => Ok(()),
		other => Err(Error::invalid_data(format!("unsupported pcm bit depth {}", other))),
	}
}
