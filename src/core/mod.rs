pub mod chunk;
pub mod field;
pub mod fourcc;
pub mod guid;

pub use chunk::{ChunkBody, ChunkHeader, HEADER_LEN, RawChunk};
pub use field::{Endian, Field, FieldValue};
pub use fourcc::FourCc;
pub use guid::Guid;
