use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use log::{debug, info};

use crate::dataset;
use crate::error::{Error, Result};

/// Where a token came from, for error reporting.
pub struct Location<'a> {
	pub path: &'a Path,
	pub line: usize,
}

impl Location<'_> {
	pub fn parse_error(&self, token: &str, expected: &'static str) -> Error {
		Error::Parse {
			path: self.path.to_path_buf(),
			line: self.line,
			token: token.to_string(),
			expected,
		}
	}
}

/// Calls `f` with the whitespace separated tokens of every non-blank line
/// after the header. Returns the header line.
fn read_lines<F>(path: &Path, mut f: F) -> Result<String>
where
	F: FnMut(&Location, Vec<&str>) -> Result<()>,
{
	let io_error = |source| Error::Io { path: path.to_path_buf(), source };

	let file = fs::File::open(path).map_err(io_error)?;
	let mut lines = io::BufReader::new(file).lines();

	let header = match lines.next() {
		Some(line) => line.map_err(io_error)?,
		None => return Err(Error::MissingHeader { path: path.to_path_buf() }),
	};

	for (i, line) in lines.enumerate() {
		let line = line.map_err(io_error)?;
		let tokens = line.split_whitespace().collect::<Vec<_>>();

		if tokens.is_empty() {
			continue;
		}

		// Header is line 1.
		f(&Location { path, line: i + 2 }, tokens)?;
	}

	Ok(header)
}

fn parse_attributes(at: &Location, tokens: &[&str]) -> Result<Vec<f64>> {
	tokens
		.iter()
		.map(|token| token.parse::<f64>().map_err(|_| at.parse_error(token, "a number")))
		.collect()
}

fn add_row<L>(builder: &mut dataset::Builder<L>, at: &Location, x: &[f64], y: L) -> Result<()> {
	builder.add(x, y).map_err(|expected| Error::AttributeCount {
		path: at.path.to_path_buf(),
		line: at.line,
		expected,
		found: x.len(),
	})
}

fn finish<L>(path: &Path, builder: dataset::Builder<L>) -> Result<dataset::Builder<L>> {
	if builder.rows_len() == 0 {
		return Err(Error::EmptyDataset);
	}

	debug!("Read {} rows from {:?}", builder.rows_len(), path);

	Ok(builder)
}

/// Reads numeric attribute rows whose last token is a numeric label.
pub fn read_numeric(path: impl AsRef<Path>) -> Result<dataset::Builder<f64>> {
	read_labelled(path, |at, token| token.parse::<f64>().map_err(|_| at.parse_error(token, "a numeric label")))
}

/// Reads numeric attribute rows whose last token is a label parsed by `label`.
pub fn read_labelled<L, F>(path: impl AsRef<Path>, mut label: F) -> Result<dataset::Builder<L>>
where
	F: FnMut(&Location, &str) -> Result<L>,
{
	let path = path.as_ref();
	info!("Reading dataset {:?}", path);

	let mut builder = dataset::Builder::new();

	read_lines(path, |at, tokens| {
		let (y, x) = tokens.split_last().ok_or_else(|| at.parse_error("", "a label"))?;
		let x = parse_attributes(at, x)?;
		let y = label(at, *y)?;

		add_row(&mut builder, at, &x, y)
	})?;

	finish(path, builder)
}

/// Reads rows of `category true false ...` under a `Class name name ...`
/// header. Attributes are stored as `1.0` for true and `0.0` for false.
pub fn read_boolean(path: impl AsRef<Path>) -> Result<(Vec<String>, dataset::Builder<String>)> {
	let path = path.as_ref();
	info!("Reading dataset {:?}", path);

	let mut builder = dataset::Builder::new();

	let header = read_lines(path, |at, tokens| {
		let (y, x) = tokens.split_first().ok_or_else(|| at.parse_error("", "a category"))?;
		let x = x
			.iter()
			.map(|token| parse_bool(token).ok_or_else(|| at.parse_error(token, "true or false")))
			.collect::<Result<Vec<_>>>()?;

		add_row(&mut builder, at, &x, y.to_string())
	})?;

	let names = header.split_whitespace().skip(1).map(String::from).collect::<Vec<_>>();

	if let Some(found) = builder.features_len() {
		if found != names.len() {
			return Err(Error::AttributeCount {
				path: path.to_path_buf(),
				line: 1,
				expected: found,
				found: names.len(),
			});
		}
	}

	Ok((names, finish(path, builder)?))
}

fn parse_bool(token: &str) -> Option<f64> {
	if token.eq_ignore_ascii_case("true") {
		Some(1.0)
	} else if token.eq_ignore_ascii_case("false") {
		Some(0.0)
	} else {
		None
	}
}
