use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An 8-bit sRGB color. The graph's stroke is found by comparing pixels
/// against one of these.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color::new(0, 0, 0);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Exact comparison against a pixel's samples. Gray pixels (one or two
	/// channels) match when the gray level equals every component. Anything
	/// past the third channel, like alpha, is ignored.
	pub fn matches(&self, pixel: &[u8]) -> bool {
		match pixel {
			[gray] | [gray, _] => *gray == self.r && *gray == self.g && *gray == self.b,
			[r, g, b, ..] => *r == self.r && *g == self.g && *b == self.b,
			[] => false,
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl FromStr for Color {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_color(&s.parse()?)
	}
}

/// A color as the user wrote it, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
	/// `#RRGGBB`
	Hex(String),
	/// Red, green, blue
	Triple(i64, i64, i64),
}

impl FromStr for ColorSpec {
	type Err = Error;

	/// Anything with a comma is an `R,G,B` triple, everything else is left for
	/// [parse_color] to check as hex.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if !s.contains(',') {
			return Ok(ColorSpec::Hex(s.to_owned()));
		}

		let components = s
			.split(',')
			.map(|c| c.trim().parse::<i64>())
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| Error::InvalidColorFormat(s.to_owned()))?;

		match components[..] {
			[r, g, b] => Ok(ColorSpec::Triple(r, g, b)),
			_ => Err(Error::InvalidColorFormat(s.to_owned())),
		}
	}
}

/// Validate a [ColorSpec] into a [Color]. There is no fuzzy matching: a hex
/// string is exactly `#` and six hex digits, a triple is exactly three
/// components in 0 through 255.
pub fn parse_color(spec: &ColorSpec) -> Result<Color, Error> {
	match spec {
		ColorSpec::Hex(hex) => parse_hex(hex).ok_or_else(|| Error::InvalidColorFormat(hex.clone())),
		ColorSpec::Triple(r, g, b) => {
			let component = |c: i64| u8::try_from(c).ok();

			match (component(*r), component(*g), component(*b)) {
				(Some(r), Some(g), Some(b)) => Ok(Color::new(r, g, b)),
				_ => Err(Error::InvalidColorFormat(format!("{r},{g},{b}"))),
			}
		}
	}
}

fn parse_hex(hex: &str) -> Option<Color> {
	let digits = hex.strip_prefix('#')?;

	// from_str_radix would accept a leading '+', so check the digits ourselves
	if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return None;
	}

	let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
	Some(Color::new(pair(0)?, pair(2)?, pair(4)?))
}
