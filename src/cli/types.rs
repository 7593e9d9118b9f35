use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use clap::ValueEnum;
use graphproc::Edge;

/// Two values separated by a comma, like `-2.75,12.6`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pair<T>(pub T, pub T);

impl FromStr for Pair<f64> {
	type Err = ParsePairError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let values: Vec<&str> = s.split(',').map(|s| s.trim()).collect();

		if values.len() < 2 {
			return Err(ParsePairError::TooLittleValues(values.len()));
		} else if values.len() > 2 {
			return Err(ParsePairError::TooManyValues(values.len()));
		}

		Ok(Pair(values[0].parse()?, values[1].parse()?))
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePairError {
	#[error("expected two values, but only saw {0}")]
	TooLittleValues(usize),
	#[error("only expected two values, but saw {0}")]
	TooManyValues(usize),
	#[error("failed to parse a value: {0}")]
	ValueParseError(String),
}

impl From<ParseFloatError> for ParsePairError {
	fn from(frm: ParseFloatError) -> Self {
		ParsePairError::ValueParseError(frm.to_string())
	}
}

/// [Edge] as a command line value
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
	Top,
	Bottom,
}

impl From<EdgeArg> for Edge {
	fn from(arg: EdgeArg) -> Edge {
		match arg {
			EdgeArg::Top => Edge::Top,
			EdgeArg::Bottom => Edge::Bottom,
		}
	}
}

impl fmt::Display for EdgeArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EdgeArg::Top => write!(f, "top"),
			EdgeArg::Bottom => write!(f, "bottom"),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn pair() {
		assert_eq!("0,1".parse::<Pair<f64>>(), Ok(Pair(0.0, 1.0)));
		assert_eq!("-2.75, 12.6".parse::<Pair<f64>>(), Ok(Pair(-2.75, 12.6)));
	}

	#[test]
	fn pair_errors() {
		assert_eq!("1".parse::<Pair<f64>>(), Err(ParsePairError::TooLittleValues(1)));
		assert_eq!("1,2,3".parse::<Pair<f64>>(), Err(ParsePairError::TooManyValues(3)));
		assert!(matches!(
			"1,two".parse::<Pair<f64>>(),
			Err(ParsePairError::ValueParseError(_))
		));
	}
}
