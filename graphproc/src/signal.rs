/// One value per image column. `None` marks a column where the graph's color
/// was never found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signal {
	values: Vec<Option<f64>>,
}

impl Signal {
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn values(&self) -> &[Option<f64>] {
		&self.values
	}

	pub fn get(&self, col: usize) -> Option<f64> {
		self.values.get(col).copied().flatten()
	}

	/// Columns that have a value, with their index
	pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
		self.values
			.iter()
			.enumerate()
			.filter_map(|(col, v)| v.map(|v| (col, v)))
	}

	pub fn missing_count(&self) -> usize {
		self.values.iter().filter(|v| v.is_none()).count()
	}

	/// Smallest and largest present value, or `None` if every column is
	/// missing.
	pub fn data_range(&self) -> Option<(f64, f64)> {
		self.present().fold(None, |range, (_, v)| match range {
			None => Some((v, v)),
			Some((min, max)) => Some((v.min(min), v.max(max))),
		})
	}

	/// The values with missing columns as NaN, the way numpy stores them.
	pub fn to_nan_vec(&self) -> Vec<f64> {
		self.values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
	}

	pub(crate) fn map_present<F: Fn(f64) -> f64>(&self, f: F) -> Signal {
		Signal {
			values: self.values.iter().map(|v| v.map(&f)).collect(),
		}
	}
}

impl From<Vec<Option<f64>>> for Signal {
	fn from(values: Vec<Option<f64>>) -> Self {
		Self { values }
	}
}
