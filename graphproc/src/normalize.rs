use crate::{Error, Signal};

/// The values of the lowest and highest point of a graph's y-axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct YRange {
	pub min: f64,
	pub max: f64,
}

impl YRange {
	pub fn new(min: f64, max: f64) -> Result<Self, Error> {
		check_range(min, max)?;
		Ok(Self { min, max })
	}
}

impl Default for YRange {
	fn default() -> Self {
		Self { min: 0.0, max: 1.0 }
	}
}

// Infinite bounds would turn present values into NaN
fn check_range(min: f64, max: f64) -> Result<(), Error> {
	if min.is_finite() && max.is_finite() && min < max {
		Ok(())
	} else {
		Err(Error::InvalidRange { min, max })
	}
}

/// Rescale `signal` so its smallest value becomes `y_min` and its largest
/// becomes `y_max`. Missing columns stay missing.
///
/// If every present value is the same there is nothing to scale against and
/// the signal is returned as it is.
pub fn normalize(signal: &Signal, y_min: f64, y_max: f64) -> Result<Signal, Error> {
	check_range(y_min, y_max)?;

	let (data_min, data_max) = signal.data_range().ok_or(Error::EmptySignal)?;

	if data_min == data_max {
		log::info!("every column is at {data_min}, not rescaling a flat line");
		return Ok(signal.clone());
	}

	if (data_min, data_max) == (y_min, y_max) {
		return Ok(signal.clone());
	}

	let span = data_max - data_min;
	Ok(signal.map_present(|v| {
		let t = (v - data_min) / span;
		(1.0 - t) * y_min + t * y_max
	}))
}
