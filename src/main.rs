mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use cli::{CliArgs, CliError, Pair};
use graphproc::{Signal, TraceConfig, YRange};
use npyout::OutArray;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = CliArgs::parse();

	match convert(&cli) {
		Ok(out) => {
			println!("Saved graph as numpy array to {}", out.display());
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("ERROR: {}", e);
			ExitCode::FAILURE
		}
	}
}

/// Trace the sketch and write the array. Nothing is written unless the whole
/// graph was extracted.
fn convert(cli: &CliArgs) -> Result<PathBuf, CliError> {
	let Pair(min, max) = cli.yrange;
	let config = TraceConfig {
		color: cli.color,
		range: YRange::new(min, max)?,
		edge: cli.edge.into(),
	};
	log::info!(
		"tracing {} for {} on {min},{max} using the {} edge",
		cli.path,
		config.color,
		cli.edge
	);

	let signal = graphproc::trace_file(&cli.path, &config)?;

	if cli.print {
		print_signal(&signal);
	}

	let out = cli.output_path();
	write(&signal, &out)?;

	Ok(std::fs::canonicalize(&out).unwrap_or(out))
}

fn write(signal: &Signal, out: &Path) -> Result<(), CliError> {
	if let Some(dir) = out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir).map_err(|source| CliError::OutDirError {
			path: dir.to_owned(),
			source,
		})?;
	}

	OutArray::new(signal.to_nan_vec()).npy(out)?;
	Ok(())
}

fn print_signal(signal: &Signal) {
	for value in signal.values() {
		match value {
			Some(v) => println!("{}", v),
			None => println!("nan"),
		}
	}
}
