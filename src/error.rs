use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("{0}")]
	Usage(&'static str),

	#[error("cannot read {path:?}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot write report: {0}")]
	Output(#[from] std::io::Error),

	#[error("{path:?} has no header line")]
	MissingHeader { path: PathBuf },

	#[error("{path:?} line {line}: cannot parse {token:?} as {expected}")]
	Parse { path: PathBuf, line: usize, token: String, expected: &'static str },

	#[error("{path:?} line {line}: expected {expected} attributes, found {found}")]
	AttributeCount { path: PathBuf, line: usize, expected: usize, found: usize },

	#[error("{path:?} line {line}: unknown class symbol {symbol:?}")]
	UnknownClass { path: PathBuf, line: usize, symbol: String },

	#[error("cannot pool datasets with {expected} and {found} attributes")]
	Incompatible { expected: usize, found: usize },

	#[error("dataset is empty")]
	EmptyDataset,

	#[error("cannot cross validate {rows} rows with {folds} folds (need 2 <= folds <= rows)")]
	InvalidFolds { folds: usize, rows: usize },

	#[error("neighbour count must be at least 1")]
	InvalidNeighbours,

	#[error("attribute {column} has zero range in the training data")]
	ZeroRange { column: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
