//! Pull a one-dimensional signal out of a drawing of a line graph.
//!
//! Every column of the image is searched for pixels of the graph color. A
//! stroke is usually thicker than one pixel, so each column is reduced to the
//! top or bottom edge of the stroke ([Edge]). Columns without a match stay
//! missing. The resulting row positions are then rescaled onto the y-axis
//! range the drawing represents.

mod color;
mod extract;
mod grid;
mod normalize;
mod signal;

use std::path::Path;

pub use color::{parse_color, Color, ColorSpec};
pub use extract::{extract, Edge};
pub use grid::{IndexMatrix, Mask, PixelGrid};
pub use normalize::{normalize, YRange};
pub use signal::Signal;

/// Everything needed to turn a [PixelGrid] into a [Signal].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TraceConfig {
	/// Color of the graph's stroke
	pub color: Color,
	/// Values of the lowest and highest point of the y-axis
	pub range: YRange,
	/// Which edge of a thick stroke represents the column
	pub edge: Edge,
}

/// Extract the graph from an already decoded image and rescale it onto the
/// configured y-axis.
pub fn trace(grid: &PixelGrid, config: &TraceConfig) -> Result<Signal, Error> {
	let signal = extract(grid, config.color, config.edge)?;
	normalize(&signal, config.range.min, config.range.max)
}

/// Decode the image at `path` and [trace] it.
pub fn trace_file<P: AsRef<Path>>(path: P, config: &TraceConfig) -> Result<Signal, Error> {
	let grid = PixelGrid::open(path)?;
	trace(&grid, config)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(
		"invalid color format \"{0}\". Please use hex or RGB. \
		In case of RGB, please use R,G,B (e.g. 255,0,211)"
	)]
	InvalidColorFormat(String),
	#[error("failed to decode image: {source}")]
	Decode {
		#[from]
		source: image::ImageError,
	},
	#[error("image is empty ({width}x{height}), there is no graph to extract")]
	InvalidImage { width: usize, height: usize },
	#[error("no pixel in the image matches the graph color")]
	EmptySignal,
	#[error("invalid y-range {min},{max}: both bounds have to be finite and the minimum less than the maximum")]
	InvalidRange { min: f64, max: f64 },
}
