pub mod chunk;
pub mod form;
pub mod read;
pub mod registry;
pub mod write;

pub use chunk::{Chunk, FORM_TYPE_LEN, FormChunk};
pub use form::{Form, Node};
pub use read::{ChunkReader, ReaderState};
pub use registry::{DecodeFn, PayloadRule, Registry, Schema};
pub use write::RiffWriter;
