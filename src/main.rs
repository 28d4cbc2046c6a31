use riffkit::cli::{Args, BatchPipeline, Pipeline, TonePipeline, is_batch_pattern, is_directory};
use riffkit::container::wav::EncodeOptions;
use riffkit::show::{Show, ShowOptions};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: &Args) -> riffkit::Result<()> {
	if let Some(frequency) = args.tone {
		let output = args.output.clone().unwrap_or_else(|| "tone.wav".to_string());
		let opts =
			EncodeOptions { bit_depth: args.bit_depth, extensible: args.extensible, fact: args.fact };
		return TonePipeline::new(frequency, args.channels, args.rate, args.duration, opts, output)
			.run();
	}

	let input = args
		.input
		.clone()
		.ok_or_else(|| riffkit::Error::invalid_data("--input is required unless --tone is given"))?;

	if args.show {
		let show = Show::new(input, ShowOptions { hex_limit: args.hex_limit });
		show.run()
	} else if is_batch_pattern(&input) {
		let output_dir = args.output.clone().unwrap_or_else(|| "out".to_string());
		BatchPipeline::new(input, output_dir).run()
	} else if let Some(output_dir) = args.output.clone().filter(|o| is_directory(o)) {
		BatchPipeline::new(input, output_dir).run()
	} else {
		Pipeline::new(input, args.output.clone()).run()
	}
}

fn main() {
	let args = Args::parse();
	init_logging(args.verbose);

	match run(&args) {
		Ok(()) => {
			if !args.show {
				if let Some(output) = &args.output {
					match &args.input {
						Some(input) => println!("ok: {} -> {}", input, output),
						None => println!("ok: {}", output),
					}
				}
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
