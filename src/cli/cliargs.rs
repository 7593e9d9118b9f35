use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::Parser;
use graphproc::Color;

use super::{EdgeArg, Pair};

/// Sketch2Graph: A simple tool to convert a sketch of a graph into a graph.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
	/// Path to the image file
	#[arg(short, long)]
	pub path: Utf8PathBuf,

	/// Color of the graph in hex or RGB format (e.g. #ffffff or 255,255,255)
	#[arg(short, long, default_value = "#000000")]
	pub color: Color,

	/// Range of the y-axis in the format min,max (e.g. -2.75,12.6)
	#[arg(
		short = 'y',
		long = "yrange",
		value_name = "MIN,MAX",
		default_value = "0,1",
		allow_hyphen_values = true
	)]
	pub yrange: Pair<f64>,

	/// Path to the output numpy file.
	/// Defaults to the input's file name, without extension, in the current directory
	#[arg(short, long)]
	pub output: Option<Utf8PathBuf>,

	/// Which edge of the graph to use if the line is thicker than one pixel
	#[arg(short, long, value_enum, default_value_t = EdgeArg::Top)]
	pub edge: EdgeArg,

	/// Also print the graph to stdout, one value per line
	#[arg(long)]
	pub print: bool,
}

impl CliArgs {
	/// Where the array gets written. Always ends in `.npy`.
	pub fn output_path(&self) -> PathBuf {
		let out = match self.output.as_deref() {
			Some(out) => out.to_owned(),
			None => Utf8PathBuf::from(self.path.file_stem().unwrap_or("graph")),
		};

		npyout::with_npy_extension(out)
	}
}
