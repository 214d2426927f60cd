//! `mp3hash`, hash the music of MP3 files ignoring their ID3 tags
//!
//! ```text
//! $ mp3hash song.mp3 song-retagged.mp3
//! 2fd4e1c67a2d28fced849ee1bb76e7391b93eb12 song.mp3
//! 2fd4e1c67a2d28fced849ee1bb76e7391b93eb12 song-retagged.mp3
//! ```

use mp3hash::config::HashOptions;
use mp3hash::hash::algorithm::Algorithm;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use log::LevelFilter;

/// Exit code for invalid command line arguments
const EINVAL: u8 = 22;
/// Exit code for an unknown algorithm
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
	name = "mp3hash",
	version,
	about = "Hash the music of MP3 files, ignoring their ID3 tags",
	override_usage = "mp3hash [OPTIONS] FILE [FILE ..]"
)]
struct Cli {
	/// Hash algorithm to use. See --list-algorithms
	#[arg(short, long, default_value = "sha1")]
	algorithm: String,

	/// List available algorithms
	#[arg(short, long)]
	list_algorithms: bool,

	/// Print only hash information, no filename
	#[arg(short = 'q', long = "hash")]
	hash_only: bool,

	/// Max number of bytes of music to hash
	#[arg(short, long = "maxbytes", allow_negative_numbers = true)]
	max_bytes: Option<i64>,

	/// Redirect output to a file
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Increase logging verbosity (-v for info, -vv for debug)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,

	/// Files to hash
	files: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};

	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();
}

fn usage_error(message: &str) -> ExitCode {
	eprintln!("{}", Cli::command().render_usage());
	eprintln!("\n{message}");
	ExitCode::from(EINVAL)
}

fn open_output(output: Option<&Path>) -> std::io::Result<Box<dyn Write>> {
	match output {
		Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
		None => Ok(Box::new(std::io::stdout().lock())),
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.files.is_empty() && !cli.list_algorithms {
		return usage_error("Insufficient arguments");
	}

	let mut options = HashOptions::new();
	if let Some(max_bytes) = cli.max_bytes {
		match options.max_bytes_checked(max_bytes) {
			Ok(checked) => options = checked,
			Err(_) => {
				return usage_error("Invalid value for --maxbytes it should be a positive integer");
			},
		}
	}

	if cli.list_algorithms {
		for algorithm in Algorithm::ALL {
			println!("{algorithm}");
		}
		return ExitCode::SUCCESS;
	}

	let Some(algorithm) = Algorithm::from_name(&cli.algorithm) else {
		let available = Algorithm::ALL.map(Algorithm::name).join(", ");
		eprintln!(
			"Unknown '{}' algorithm. Available options are: {available}",
			cli.algorithm
		);
		return ExitCode::from(EXIT_USAGE);
	};

	let mut out = match open_output(cli.output.as_deref()) {
		Ok(out) => out,
		Err(err) => {
			// `output` is always set here, stdout can't fail to open
			let path = cli.output.as_deref().unwrap_or(Path::new("-"));
			eprintln!("Couldn't open {}: {err}", path.display());
			return ExitCode::FAILURE;
		},
	};

	let options = options.algorithm(algorithm);

	for path in &cli.files {
		if !path.is_file() {
			eprintln!(
				"File at '{}' does not exist or it is not a regular file",
				path.display()
			);
			return ExitCode::FAILURE;
		}

		let digest = match mp3hash::mp3hash(path, options) {
			Ok(digest) => digest,
			Err(err) => {
				log::error!("While hashing {}: {err}", path.display());
				return ExitCode::FAILURE;
			},
		};

		let written = if cli.hash_only {
			writeln!(out, "{digest}")
		} else {
			let name = path.file_name().unwrap_or(path.as_os_str());
			writeln!(out, "{digest} {}", name.to_string_lossy())
		};

		if let Err(err) = written {
			eprintln!("Couldn't write output: {err}");
			return ExitCode::FAILURE;
		}
	}

	if let Err(err) = out.flush() {
		eprintln!("Couldn't write output: {err}");
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}
