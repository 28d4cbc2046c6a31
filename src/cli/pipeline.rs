use crate::container::wav::{EncodeOptions, WaveFile};
use crate::error::{Error, Result};
use crate::io::{StdReadAdapter, StdWriteAdapter};
use crate::source::SineOscillator;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub type FileReader = StdReadAdapter<BufReader<File>>;
pub type FileWriter = StdWriteAdapter<BufWriter<File>>;

pub fn open_input(path: &str) -> Result<FileReader> {
	let file = File::open(path)?;
	Ok(StdReadAdapter::new(BufReader::new(file)))
}

pub fn create_output(path: &str) -> Result<FileWriter> {
	let file = File::create(path)?;
	Ok(StdWriteAdapter::new(BufWriter::new(file)))
}

pub struct Pipeline {
	input_path: String,
	output_path: Option<String>,
}

impl Pipeline {
	pub fn new(input_path: String, output_path: Option<String>) -> Self {
		Self { input_path, output_path }
	}

	pub fn run(&self) -> Result<()> {
		let output_path = self
			.output_path
			.as_ref()
			.ok_or_else(|| Error::invalid_data("output path required for rewriting"))?;

		let file = WaveFile::read(open_input(&self.input_path)?)?;
		tracing::info!(
			input = %self.input_path,
			frames = file.frame_count().unwrap_or(0),
			extra = file.extra.len(),
			"read wave file"
		);
		file.write(create_output(output_path)?)?;
		Ok(())
	}
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: String,
}

impl BatchPipeline {
	pub fn new(input_pattern: String, output_dir: String) -> Self {
		Self { input_pattern, output_dir }
	}

	pub fn run(&self) -> Result<()> {
		let files = expand_inputs(&self.input_pattern)?;

		if files.is_empty() {
			return Err(Error::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("no files matching pattern: {}", self.input_pattern),
			)));
		}

		std::fs::create_dir_all(&self.output_dir)?;

		for input_path in files {
			let file_name =
				Path::new(&input_path).file_name().and_then(|n| n.to_str()).unwrap_or("output.wav");
			let output_path = format!("{}/{}", self.output_dir, file_name);

			println!("Processing: {}", input_path);
			Pipeline::new(input_path.clone(), Some(output_path.clone())).run()?;
			println!("  -> {}", output_path);
		}

		Ok(())
	}
}

pub struct TonePipeline {
	frequency: f64,
	channels: u16,
	sample_rate: u32,
	duration: f64,
	opts: EncodeOptions,
	output_path: String,
}

impl TonePipeline {
	pub fn new(
		frequency: f64,
		channels: u16,
		sample_rate: u32,
		duration: f64,
		opts: EncodeOptions,
		output_path: String,
	) -> Self {
		Self { frequency, channels, sample_rate, duration, opts, output_path }
	}

	pub fn frame_count(&self) -> Result<usize> {
		if !self.duration.is_finite() || self.duration < 0.0 {
			return Err(Error::invalid_data(format!("invalid duration {}", self.duration)));
		}
		Ok((self.duration * self.sample_rate as f64).round() as usize)
	}

	pub fn run(&self) -> Result<()> {
		let frames = self.frame_count()?;
		let mut osc =
			SineOscillator::new(self.frequency, self.sample_rate, self.channels).with_amplitude(0.8);
		let file = WaveFile::encode(&mut osc, frames, self.opts)?;
		tracing::info!(output = %self.output_path, frames, hz = self.frequency, "writing tone");
		file.write(create_output(&self.output_path)?)?;
		Ok(())
	}
}

pub fn expand_inputs(pattern: &str) -> Result<Vec<String>> {
	let mut files = Vec::new();

	if is_batch_pattern(pattern) {
		for entry in glob::glob(pattern).map_err(|e| Error::InvalidGlob(e.to_string()))? {
			match entry {
				Ok(path) => {
					if path.is_file() {
						files.push(path.to_string_lossy().to_string());
					}
				}
				Err(e) => {
					tracing::warn!(error = %e, "failed to read glob entry");
				}
			}
		}
	} else {
		files.push(pattern.to_string());
	}

	Ok(files)
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}
