use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::{Color, Error};

/// A decoded image. Samples are stored row-major with row 0 at the top of the
/// image and `channels` interleaved samples per pixel.
#[derive(Clone, Debug)]
pub struct PixelGrid {
	width: usize,
	height: usize,
	channels: usize,
	data: Vec<u8>,
}

impl PixelGrid {
	/// Returns `None` if `data` is not `width * height * channels` long or if
	/// there are no channels.
	pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Option<Self> {
		if channels == 0 || data.len() != width * height * channels {
			return None;
		}

		Some(Self {
			width,
			height,
			channels,
			data,
		})
	}

	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let img = image::open(path.as_ref())?;
		log::debug!(
			"decoded {} as {}x{} {:?}",
			path.as_ref().display(),
			img.width(),
			img.height(),
			img.color()
		);

		Ok(img.into())
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn channels(&self) -> usize {
		self.channels
	}

	pub fn data(&self) -> &[u8] {
		&self.data
	}
}

impl From<DynamicImage> for PixelGrid {
	fn from(img: DynamicImage) -> Self {
		let (width, height) = img.dimensions();
		let (channels, data) = match img {
			DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
			DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
			DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
			DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
			other => {
				// 16-bit and float images get compared in 8-bit
				log::debug!("converting {:?} to 8-bit RGBA", other.color());
				(4, other.into_rgba8().into_raw())
			}
		};

		Self {
			width: width as usize,
			height: height as usize,
			channels,
			data,
		}
	}
}

/// Which pixels of a [PixelGrid] are the graph's color.
#[derive(Clone, Debug)]
pub struct Mask {
	width: usize,
	height: usize,
	data: Vec<bool>,
}

impl Mask {
	pub fn matching(grid: &PixelGrid, color: Color) -> Self {
		let data = grid
			.data()
			.chunks_exact(grid.channels())
			.map(|pixel| color.matches(pixel))
			.collect();

		Self {
			width: grid.width,
			height: grid.height,
			data,
		}
	}

	pub fn get(&self, col: usize, row: usize) -> bool {
		self.data[row * self.width + col]
	}

	/// Number of matching pixels
	pub fn count(&self) -> usize {
		self.data.iter().filter(|m| **m).count()
	}
}

/// Row positions measured from the bottom of the image. The bottom row is 0
/// and the top row is `height - 1`, which is the way a graph's y-axis runs.
///
/// Only depends on the dimensions so nothing is stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexMatrix {
	width: usize,
	height: usize,
}

impl IndexMatrix {
	pub fn new(width: usize, height: usize) -> Self {
		Self { width, height }
	}

	pub fn get(&self, col: usize, row: usize) -> usize {
		debug_assert!(col < self.width && row < self.height);
		self.height - 1 - row
	}
}

#[cfg(test)]
mod grid_tests {
	use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

	use super::*;

	#[test]
	fn from_raw_checks_length() {
		assert!(PixelGrid::from_raw(2, 2, 3, vec![0; 12]).is_some());
		assert!(PixelGrid::from_raw(2, 2, 3, vec![0; 11]).is_none());
		assert!(PixelGrid::from_raw(2, 2, 0, vec![]).is_none());
		assert!(PixelGrid::from_raw(0, 0, 3, vec![]).is_some());
	}

	#[test]
	fn keeps_native_channels() {
		let gray = PixelGrid::from(DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([7]))));
		assert_eq!((gray.width(), gray.height(), gray.channels()), (3, 2, 1));

		let rgb = PixelGrid::from(DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))));
		assert_eq!(rgb.channels(), 3);
		assert_eq!(&rgb.data()[15..18], &[1, 2, 3]);

		let rgba = PixelGrid::from(DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]))));
		assert_eq!(rgba.data(), &[1, 2, 3, 4]);
	}

	#[test]
	fn wide_images_become_rgba8() {
		let img = DynamicImage::new_rgb16(2, 2);
		let grid = PixelGrid::from(img);
		assert_eq!(grid.channels(), 4);
		assert_eq!(grid.data().len(), 16);
	}

	#[test]
	fn mask_marks_matching_pixels() {
		let mut img = RgbImage::from_pixel(3, 2, Rgb([255, 255, 255]));
		img.put_pixel(1, 0, Rgb([0, 0, 0]));
		img.put_pixel(2, 1, Rgb([0, 0, 0]));
		img.put_pixel(0, 1, Rgb([0, 0, 1]));
		let grid = PixelGrid::from(DynamicImage::ImageRgb8(img));

		let mask = Mask::matching(&grid, Color::BLACK);
		assert_eq!(mask.count(), 2);
		assert!(mask.get(1, 0));
		assert!(mask.get(2, 1));
		assert!(!mask.get(0, 1));
	}

	#[test]
	fn index_counts_from_bottom() {
		let index = IndexMatrix::new(4, 10);
		assert_eq!(index.get(0, 0), 9);
		assert_eq!(index.get(3, 2), 7);
		assert_eq!(index.get(1, 9), 0);
	}
}
