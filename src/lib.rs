pub mod cli;
pub mod codecs;
pub mod container;
pub mod core;
pub mod error;
pub mod io;
pub mod show;
pub mod source;

pub use error::{Error, Result};
