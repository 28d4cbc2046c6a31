pub mod args;
pub mod pipeline;

pub use args::Args;
pub use pipeline::{BatchPipeline, Pipeline, TonePipeline, is_batch_pattern, is_directory};
