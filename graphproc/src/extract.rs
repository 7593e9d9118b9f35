use crate::{Color, Error, IndexMatrix, Mask, PixelGrid, Signal};

/// Which edge of a stroke that is more than one pixel thick to use as the
/// column's value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Edge {
	/// The highest matching pixel in a column
	#[default]
	Top,
	/// The lowest matching pixel in a column
	Bottom,
}

/// Find the graph in every column of `grid`.
///
/// The value of a column is the height, in pixels above the bottom row, of the
/// chosen [Edge] of the stroke. Columns without a pixel of `color` are missing.
pub fn extract(grid: &PixelGrid, color: Color, edge: Edge) -> Result<Signal, Error> {
	if grid.width() == 0 || grid.height() == 0 {
		return Err(Error::InvalidImage {
			width: grid.width(),
			height: grid.height(),
		});
	}

	let mask = Mask::matching(grid, color);
	let index = IndexMatrix::new(grid.width(), grid.height());

	let values: Vec<Option<f64>> = (0..grid.width())
		.map(|col| {
			let hits = (0..grid.height())
				.filter(|&row| mask.get(col, row))
				.map(|row| index.get(col, row));

			let value = match edge {
				Edge::Top => hits.max(),
				Edge::Bottom => hits.min(),
			};
			value.map(|v| v as f64)
		})
		.collect();

	let signal = Signal::from(values);
	log::debug!(
		"{} pixels of {color} in {} of {} columns",
		mask.count(),
		signal.len() - signal.missing_count(),
		signal.len()
	);

	Ok(signal)
}
