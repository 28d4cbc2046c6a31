use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "riffkit")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input file or glob pattern")]
	pub input: Option<String>,

	#[arg(short, long, value_name = "FILE", help = "Output file or directory")]
	pub output: Option<String>,

	#[arg(long, help = "List the chunks of each input")]
	pub show: bool,

	#[arg(long, value_name = "HZ", help = "Generate a sine tone instead of reading an input")]
	pub tone: Option<f64>,

	#[arg(long, default_value_t = 1, help = "Channels of the generated tone")]
	pub channels: u16,

	#[arg(long, default_value_t = 44100, help = "Sample rate of the generated tone")]
	pub rate: u32,

	#[arg(long, default_value_t = 16, help = "Bit depth of the generated tone (8, 16, 24, 32)")]
	pub bit_depth: u16,

	#[arg(long, default_value_t = 1.0, help = "Length of the generated tone in seconds")]
	pub duration: f64,

	#[arg(long, help = "Write the WAVE_FORMAT_EXTENSIBLE fmt layout")]
	pub extensible: bool,

	#[arg(long, help = "Write a fact chunk with the sample count")]
	pub fact: bool,

	#[arg(long, default_value_t = 16, help = "Bytes of unknown chunks to print with --show")]
	pub hex_limit: usize,

	#[arg(short, long, help = "Enable debug logging")]
	pub verbose: bool,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}
}
