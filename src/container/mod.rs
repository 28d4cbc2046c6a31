pub mod midi;
pub mod riff;
pub mod wav;

pub use midi::{MidiHeaderChunk, MidiTrackChunk};
pub use riff::{Chunk, ChunkReader, Form, FormChunk, Node, Registry, RiffWriter};
pub use wav::{DataChunk, FactChunk, FormatChunk, FormatTag, WavFormat, WaveFile};
