pub mod reader;
pub mod writer;

pub use reader::{MediaRead, ReadPrimitives, StdReadAdapter};
pub use writer::{MediaWrite, StdWriteAdapter, WritePrimitives};
