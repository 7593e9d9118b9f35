use std::path::{Path, PathBuf};

const MAGIC: &[u8] = b"\x93NUMPY";
// The header is padded so the data starts on this boundary
const ALIGN: usize = 64;

/// A one dimensional array of doubles on its way to disk.
pub struct OutArray {
	data: Vec<f64>,
}

impl OutArray {
	pub fn new(data: Vec<f64>) -> Self {
		Self { data }
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The array in NumPy's `.npy` format, version 1.0. Little-endian
	/// float64, C order.
	pub fn to_npy_bytes(&self) -> Vec<u8> {
		let mut header = format!(
			"{{'descr': '<f8', 'fortran_order': False, 'shape': ({},), }}",
			self.data.len()
		);

		// magic, two version bytes, two length bytes, header, newline
		let unpadded = MAGIC.len() + 4 + header.len() + 1;
		let padding = (ALIGN - unpadded % ALIGN) % ALIGN;
		header.extend(std::iter::repeat(' ').take(padding));
		header.push('\n');

		let mut bytes = Vec::with_capacity(MAGIC.len() + 4 + header.len() + self.data.len() * 8);
		bytes.extend_from_slice(MAGIC);
		bytes.extend_from_slice(&[1, 0]);
		bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
		bytes.extend_from_slice(header.as_bytes());
		for value in &self.data {
			bytes.extend_from_slice(&value.to_le_bytes());
		}

		bytes
	}

	/// Write the array as a `.npy` file. The whole file is encoded before
	/// anything touches the disk.
	pub fn npy<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
		let path = path.as_ref();
		let bytes = self.to_npy_bytes();

		std::fs::write(path, &bytes).map_err(|source| Error::Io {
			path: path.to_owned(),
			source,
		})?;
		log::debug!("wrote {} values ({} bytes) to {}", self.len(), bytes.len(), path.display());

		Ok(())
	}
}

/// Append `.npy` unless the path already ends with it.
pub fn with_npy_extension<P: AsRef<Path>>(path: P) -> PathBuf {
	let path = path.as_ref();

	match path.extension() {
		Some(ext) if ext == "npy" => path.to_owned(),
		_ => {
			let mut os = path.as_os_str().to_owned();
			os.push(".npy");
			PathBuf::from(os)
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to write {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
}
