use crate::classifier::Classifier;
use crate::error::{Error, Result};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// A view over the rows of a [`Builder`]. Views are cheap to split and
/// recombine since they only hold row indices into the shared storage.
#[derive(Clone, Debug)]
pub struct Dataset<'a, L> {
	columns: &'a [Vec<f64>],
	targets: &'a [L],

	index: Vec<usize>,
}

impl<'a, 'b, L> Dataset<'a, L> {
	/// Number of rows classified correctly by `classifier`.
	pub fn correct<C>(&self, classifier: &C) -> usize
	where
		C: Classifier<L> + Sync,
		L: PartialEq + Send + Sync,
	{
		self.rows()
			.zip(self.targets())
			.collect::<Vec<_>>()
			.into_par_iter()
			.filter(|(x, y)| classifier.matches(&classifier.predict(x), y))
			.count()
	}

	/// Fraction of rows classified correctly, `0.0` for an empty view.
	pub fn evaluate<C>(&self, classifier: &C) -> f64
	where
		C: Classifier<L> + Sync,
		L: PartialEq + Send + Sync,
	{
		if self.is_empty() {
			return 0.0;
		}

		self.correct(classifier) as f64 / self.rows_len() as f64
	}

	pub fn classify<C>(&self, classifier: &C) -> Vec<L>
	where
		C: Classifier<L> + Sync,
		L: Send,
	{
		self.rows()
			.collect::<Vec<_>>()
			.into_par_iter()
			.map(|x| classifier.predict(&x))
			.collect()
	}

	/// Splits in the stored order: the first `round(n * train_rate)` rows
	/// train, the rest test. Halves round to even.
	pub fn train_test_split(self, train_rate: f64) -> (Self, Self) {
		let train_num = (self.rows_len() as f64 * train_rate).round_ties_even() as usize;
		let train_num = std::cmp::min(train_num, self.rows_len());

		let mut train = self;
		let mut test = train.empty();
		test.index = train.index.split_off(train_num);

		(train, test)
	}

	/// Partitions the view by striding: fold `i` holds every `n`-th row
	/// starting at row `i`.
	pub fn folds(&self, n: usize) -> Vec<Self> {
		(0..n)
			.map(|i| Self {
				columns: self.columns,
				targets: self.targets,
				index: self.index.iter().skip(i).step_by(n.max(1)).copied().collect(),
			})
			.collect()
	}

	/// Splits the rows on whether `f` holds for their value in `column`,
	/// matching rows first.
	pub fn partition<F>(&self, column: usize, f: F) -> (Self, Self)
	where
		F: Fn(f64) -> bool,
	{
		let values = &self.columns[column];
		let (left, right) = self.indices().partition(|&i| f(values[i]));

		(
			Self { index: left, ..self.empty() },
			Self { index: right, ..self.empty() },
		)
	}

	/// A view over the same storage without any rows.
	pub fn empty(&self) -> Self {
		Self {
			columns: self.columns,
			targets: self.targets,
			index: Vec::new(),
		}
	}

	pub fn extend(&mut self, other: &Self) {
		self.index.extend_from_slice(&other.index);
	}

	/// `max - min` of every attribute over the rows of this view.
	pub fn ranges(&self) -> Vec<f64> {
		(0..self.features_len())
			.map(|column| {
				let (min, max) = self.column(column).fold(
					(f64::INFINITY, f64::NEG_INFINITY),
					|(min, max), x| (min.min(x), max.max(x)),
				);

				if min > max { 0.0 } else { max - min }
			})
			.collect()
	}

	fn indices(&'b self) -> impl 'b + Iterator<Item = usize> + Clone {
		self.index.iter().copied()
	}

	pub fn targets(&'b self) -> impl 'b + Iterator<Item = &'a L> {
		let targets = self.targets;

		self.indices().map(move |i| &targets[i])
	}

	pub fn column(&'b self, column: usize) -> impl 'b + Iterator<Item = f64> {
		let column = &self.columns[column];

		self.indices().map(move |i| column[i])
	}

	pub fn features_len(&self) -> usize {
		self.columns.len()
	}

	pub fn rows_len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn rows(&'b self) -> impl 'b + Iterator<Item = Vec<f64>> {
		self.indices().map(move |i| self.row(i))
	}

	fn row(&self, i: usize) -> Vec<f64> {
		self.columns.iter().map(|column| column[i]).collect()
	}
}

/// Columnar storage for attribute rows and their labels.
#[derive(Clone, Debug)]
pub struct Builder<L> {
	columns: Vec<Vec<f64>>,
	targets: Vec<L>,
}

impl<L> Default for Builder<L> {
	fn default() -> Self {
		Self::new()
	}
}

impl<L> Builder<L> {
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			targets: Vec::new(),
		}
	}

	pub fn build(&self) -> Dataset<'_, L> {
		Dataset {
			columns: &self.columns,
			targets: &self.targets,

			index: (0..self.targets.len()).collect(),
		}
	}

	/// Attribute count fixed by the first row, `None` while empty.
	pub fn features_len(&self) -> Option<usize> {
		if self.targets.is_empty() {
			None
		} else {
			Some(self.columns.len())
		}
	}

	pub fn rows_len(&self) -> usize {
		self.targets.len()
	}

	/// Adds a row. On a width mismatch the row is dropped and the expected
	/// width is returned.
	pub fn add(&mut self, x: &[f64], y: L) -> std::result::Result<(), usize> {
		match self.features_len() {
			None => self.columns = vec![Vec::new(); x.len()],
			Some(expected) if expected != x.len() => return Err(expected),
			Some(_) => {}
		}

		for (column, value) in self.columns.iter_mut().zip(x) {
			column.push(*value);
		}

		self.targets.push(y);

		Ok(())
	}

	/// Appends every row of `other`.
	pub fn append(&mut self, other: &Builder<L>) -> Result<()>
	where
		L: Clone,
	{
		if let (Some(expected), Some(found)) = (self.features_len(), other.features_len()) {
			if expected != found {
				return Err(Error::Incompatible { expected, found });
			}
		}

		if self.targets.is_empty() {
			self.columns = vec![Vec::new(); other.columns.len()];
		}

		for (column, values) in self.columns.iter_mut().zip(&other.columns) {
			column.extend_from_slice(values);
		}

		self.targets.extend_from_slice(&other.targets);

		Ok(())
	}
}
